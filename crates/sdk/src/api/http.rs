use hyper::ext::ReasonPhrase;
use reqwest::{Client, Method, RequestBuilder};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::debug;

use crate::api::{
    response::{decode_response, reason_phrase},
    types::{ApiResult, BasicAuth, ClientConfig, QueryParams},
};

/// Async JSON REST client.
///
/// Every request carries the headers and basic-auth credentials fixed in its
/// [`ClientConfig`]. Cloning is cheap and clones share the connection pool.
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

    async fn send<T>(&self, request: RequestBuilder) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await?;
        let status = response.status();
        debug!("{} responded with {}", response.url(), status);

        let reason = reason_phrase(status, response.extensions().get::<ReasonPhrase>());
        let body = response.text().await?;
        decode_response(status, reason, body)
    }

    /// Send a GET request to `<base_url>/<endpoint>`.
    pub async fn get(&self, endpoint: &str, params: Option<&QueryParams>) -> ApiResult<Value> {
        self.get_as(endpoint, params).await
    }

    /// Send a GET request and deserialize the JSON response into `T`.
    pub async fn get_as<T>(&self, endpoint: &str, params: Option<&QueryParams>) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let mut request = self.build_request(Method::GET, endpoint)?;
        if let Some(params) = params {
            request = request.query(params);
        }

        self.send(request).await
    }

    /// Send a POST request with an optional JSON body to `<base_url>/<endpoint>`.
    pub async fn post(&self, endpoint: &str, data: Option<&Value>) -> ApiResult<Value> {
        self.post_as(endpoint, data).await
    }

    /// Send a POST request and deserialize the JSON response into `T`.
    pub async fn post_as<T, B>(&self, endpoint: &str, data: Option<&B>) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut request = self.build_request(Method::POST, endpoint)?;
        if let Some(body) = data {
            request = request.json(body);
        }

        self.send(request).await
    }
}
