use thiserror::Error;

/// Top-level CLI error
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("{0}")]
    Api(#[from] api_client::ApiSdkError),
}

#[cfg(test)]
mod tests {
    use api_client::ApiSdkError;

    use super::*;

    #[test]
    fn test_api_error_message_is_shown_once_and_verbatim() {
        let error = CliError::from(ApiSdkError::ApiError {
            status: 404,
            reason: "Gone Fishing".to_string(),
            body: r#"{"detail":"away"}"#.to_string(),
        });

        let message = error.to_string();
        assert_eq!(message, r#"API call failed: 404 Gone Fishing - {"detail":"away"}"#);
        assert_eq!(message.matches("detail").count(), 1);
    }

    #[test]
    fn test_config_error_message() {
        let error = CliError::Config("no base URL given".to_string());
        assert_eq!(error.to_string(), "Configuration error: no base URL given");
    }
}
