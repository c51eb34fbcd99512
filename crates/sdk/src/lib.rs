//! A small JSON REST client.
//!
//! [`ApiClient`] sends GET and POST requests to `<base_url>/<endpoint>` with a
//! fixed set of JSON headers, an optional bearer token and optional basic
//! authentication. Responses with a status outside `200..300` are returned as
//! [`ApiSdkError::ApiError`]; everything else is decoded as JSON.
//!
//! ```no_run
//! use api_client::{ApiClient, QueryParams};
//!
//! # async fn run() -> api_client::ApiResult<()> {
//! let client = ApiClient::new("https://api.example.com/v1", Some("your_api_key".into()), None);
//! let items = client.get("items", Some(&QueryParams::new().with("q", "x"))).await?;
//! println!("{}", items);
//! # Ok(())
//! # }
//! ```

mod api;

pub use api::{
    ApiClient, ApiResult, ApiSdkError, BasicAuth, ClientConfig, ClientConfigBuilder, QueryParams,
    QueryValue, blocking,
};
pub use serde_json::Value;
