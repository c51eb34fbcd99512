//! A blocking variant of [`ApiClient`](crate::ApiClient).
//!
//! Each call blocks the current thread until the server answers or the
//! transport fails. Do not create or use this client from inside an async
//! runtime; use the async client there instead.

use hyper::ext::ReasonPhrase;
use reqwest::{
    Method,
    blocking::{Client, RequestBuilder},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::debug;

use crate::api::{
    response::{decode_response, reason_phrase},
    types::{ApiResult, BasicAuth, ClientConfig, QueryParams},
};

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        auth: Option<BasicAuth>,
    ) -> Self {
        Self::with_config(ClientConfig::new(base_url, api_key, auth))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self { client: Client::new(), config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn build_request(&self, method: Method, endpoint: &str) -> ApiResult<RequestBuilder> {
        let url = self.config.endpoint_url(endpoint);
        let headers = self.config.header_map()?;

        debug!("Sending {} {}", method, url);

        Ok(self.client.request(method, &url).headers(headers))
    }

    fn send<T>(&self, request: RequestBuilder) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let response = request.send()?;
        let status = response.status();
        debug!("{} responded with {}", response.url(), status);

        let reason = reason_phrase(status, response.extensions().get::<ReasonPhrase>());
        let body = response.text()?;
        decode_response(status, reason, body)
    }

    pub fn get(&self, endpoint: &str, params: Option<&QueryParams>) -> ApiResult<Value> {
        self.get_as(endpoint, params)
    }

    pub fn get_as<T>(&self, endpoint: &str, params: Option<&QueryParams>) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let mut request = self.build_request(Method::GET, endpoint)?;
        if let Some(params) = params {
            request = request.query(params);
        }

        self.send(request)
    }

    pub fn post(&self, endpoint: &str, data: Option<&Value>) -> ApiResult<Value> {
        self.post_as(endpoint, data)
    }

    pub fn post_as<T, B>(&self, endpoint: &str, data: Option<&B>) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut request = self.build_request(Method::POST, endpoint)?;
        if let Some(body) = data {
            request = request.json(body);
        }

        self.send(request)
    }
}
