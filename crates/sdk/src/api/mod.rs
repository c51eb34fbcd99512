pub mod blocking;
mod http;
mod response;
mod types;

pub use http::ApiClient;
pub use types::{
    ApiResult, ApiSdkError, BasicAuth, ClientConfig, ClientConfigBuilder, QueryParams, QueryValue,
};
