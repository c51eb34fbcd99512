use std::fmt;

use base64::{Engine as _, engine::general_purpose};
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use thiserror::Error;

const JSON_MEDIA_TYPE: &str = "application/json";
const CONTENT_TYPE: &str = "Content-Type";
const ACCEPT: &str = "Accept";
const AUTHORIZATION: &str = "Authorization";

/// Username/password pair sent as HTTP basic authentication on every request.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

impl<U: Into<String>, P: Into<String>> From<(U, P)> for BasicAuth {
    fn from((username, password): (U, P)) -> Self {
        Self::new(username, password)
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Immutable connection settings shared by every request a client makes.
///
/// The header set is assembled once when the config is built and is never
/// mutated afterwards. Nothing here is validated up front: a malformed base
/// URL or an API key that is not a legal header value only fails once a
/// request is attempted.
#[derive(Clone)]
pub struct ClientConfig {
    base_url: String,
    headers: Vec<(String, String)>,
    credentials: Option<BasicAuth>,
}

impl ClientConfig {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        auth: Option<BasicAuth>,
    ) -> Self {
        let mut builder = Self::builder(base_url);
        if let Some(api_key) = api_key {
            builder = builder.api_key(api_key);
        }
        if let Some(auth) = auth {
            builder = builder.credentials(auth);
        }
        builder.build()
    }

    pub fn builder(base_url: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder { base_url: base_url.into(), api_key: None, credentials: None }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers in the order they are sent.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn credentials(&self) -> Option<&BasicAuth> {
        self.credentials.as_ref()
    }

    /// Joins the base URL and endpoint with a single `/`. Neither side is
    /// trimmed, so the caller controls the exact shape of the URL.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    pub(crate) fn header_map(&self) -> ApiResult<HeaderMap> {
        let mut headers = HeaderMap::with_capacity(self.headers.len());

        for (name, value) in &self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ApiSdkError::InvalidHeader(name.clone()))?;
            let mut header_value = HeaderValue::from_str(value)
                .map_err(|_| ApiSdkError::InvalidHeader(name.clone()))?;
            if header_name == header::AUTHORIZATION {
                header_value.set_sensitive(true);
            }
            headers.insert(header_name, header_value);
        }

        // Basic credentials replace a bearer token when both are configured.
        if let Some(credentials) = &self.credentials {
            let encoded = general_purpose::STANDARD
                .encode(format!("{}:{}", credentials.username, credentials.password));
            let mut value = HeaderValue::from_str(&format!("Basic {}", encoded))
                .map_err(|_| ApiSdkError::InvalidHeader(AUTHORIZATION.to_string()))?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        Ok(headers)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(name, value)| {
                if name.eq_ignore_ascii_case(AUTHORIZATION) {
                    (name.as_str(), "<redacted>")
                } else {
                    (name.as_str(), value.as_str())
                }
            })
            .collect();

        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("headers", &headers)
            .field("credentials", &self.credentials)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    base_url: String,
    api_key: Option<String>,
    credentials: Option<BasicAuth>,
}

impl ClientConfigBuilder {
    /// Sends `Authorization: Bearer <api_key>`. An empty key is ignored.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn basic_auth(self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials(BasicAuth::new(username, password))
    }

    pub fn credentials(mut self, credentials: BasicAuth) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn build(self) -> ClientConfig {
        let mut headers = vec![
            (CONTENT_TYPE.to_string(), JSON_MEDIA_TYPE.to_string()),
            (ACCEPT.to_string(), JSON_MEDIA_TYPE.to_string()),
        ];

        if let Some(api_key) = self.api_key.filter(|key| !key.is_empty()) {
            headers.push((AUTHORIZATION.to_string(), format!("Bearer {}", api_key)));
        }

        ClientConfig { base_url: self.base_url, headers, credentials: self.credentials }
    }
}

/// A single query string value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Integer(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Integer(value.into())
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Integer(value.into())
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

/// Ordered query parameters for a GET request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, QueryValue)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        self.0.push((key.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<QueryValue>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect())
    }
}

#[derive(Error, Debug)]
pub enum ApiSdkError {
    #[error("API call failed: {status} {reason} - {body}")]
    ApiError { status: u16, reason: String, body: String },

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid header value for '{0}'")]
    InvalidHeader(String),
}

impl ApiSdkError {
    /// Status code of a rejected response, if that is what this error is.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiSdkError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiSdkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers_are_json() {
        let config = ClientConfig::new("https://api.example.com/v1", None, None);

        assert_eq!(config.header("Content-Type"), Some("application/json"));
        assert_eq!(config.header("accept"), Some("application/json"));
        assert_eq!(config.headers().len(), 2);
    }

    #[test]
    fn test_api_key_adds_bearer_header() {
        let config = ClientConfig::new("https://api.example.com", Some("abc".to_string()), None);

        assert_eq!(config.header("Authorization"), Some("Bearer abc"));
    }

    #[test]
    fn test_no_api_key_means_no_authorization_header() {
        let config = ClientConfig::builder("https://api.example.com").basic_auth("u", "p").build();

        assert_eq!(config.header("Authorization"), None);
        assert_eq!(config.credentials(), Some(&BasicAuth::new("u", "p")));
    }

    #[test]
    fn test_empty_api_key_is_ignored() {
        let config = ClientConfig::builder("https://api.example.com").api_key("").build();

        assert_eq!(config.header("Authorization"), None);
    }

    #[test]
    fn test_endpoint_url_joins_literally() {
        let config = ClientConfig::new("https://api.example.com/v1", None, None);
        assert_eq!(config.endpoint_url("items"), "https://api.example.com/v1/items");

        let trailing = ClientConfig::new("https://api.example.com/v1/", None, None);
        assert_eq!(trailing.endpoint_url("/items"), "https://api.example.com/v1//items");
    }

    #[test]
    fn test_invalid_api_key_fails_only_when_headers_are_built() {
        let config =
            ClientConfig::new("https://api.example.com", Some("bad\nkey".to_string()), None);

        match config.header_map() {
            Err(ApiSdkError::InvalidHeader(name)) => assert_eq!(name, "Authorization"),
            other => panic!("expected invalid header error, got {:?}", other),
        }
    }

    #[test]
    fn test_basic_auth_is_encoded_into_authorization() {
        let config = ClientConfig::new("https://api.example.com", None, Some(("u", "p").into()));
        let headers = config.header_map().unwrap();

        assert_eq!(headers.get("authorization").unwrap(), "Basic dTpw");
        assert_eq!(headers.get("content-type").unwrap(), "application/json");
    }

    #[test]
    fn test_basic_auth_replaces_bearer_token() {
        let config = ClientConfig::builder("https://api.example.com")
            .api_key("abc")
            .basic_auth("u", "p")
            .build();
        let headers = config.header_map().unwrap();

        assert_eq!(headers.get_all("authorization").iter().count(), 1);
        assert_eq!(headers.get("authorization").unwrap(), "Basic dTpw");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = ClientConfig::builder("https://api.example.com")
            .api_key("secret-key")
            .basic_auth("admin", "hunter2")
            .build();

        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret-key"));
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("admin"));
    }

    #[test]
    fn test_query_params_keep_insertion_order() {
        let params = QueryParams::new().with("b", "x").with("a", 2).with("c", 1.5);
        let keys: Vec<&str> = params.iter().map(|(key, _)| key).collect();

        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_error_message_embeds_status_reason_and_body() {
        let error = ApiSdkError::ApiError {
            status: 404,
            reason: "Not Found".to_string(),
            body: "{\"detail\":\"missing\"}".to_string(),
        };

        assert_eq!(error.to_string(), "API call failed: 404 Not Found - {\"detail\":\"missing\"}");
        assert_eq!(error.status(), Some(404));
    }
}
