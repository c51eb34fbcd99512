use api_client::ClientConfig;

use crate::{cli_interface::ConnectionArgs, error::CliError};

pub const BASE_URL_ENV: &str = "API_CLIENT_BASE_URL";
pub const API_KEY_ENV: &str = "API_CLIENT_API_KEY";
pub const USERNAME_ENV: &str = "API_CLIENT_USERNAME";
pub const PASSWORD_ENV: &str = "API_CLIENT_PASSWORD";

/// Loads a `.env` file from the working directory if there is one.
pub fn load_env() {
    dotenvy::dotenv().ok();
}

/// Builds the client configuration from command line options, falling back to
/// the values `lookup` returns for the matching environment variables.
pub fn resolve_client_config<F>(args: &ConnectionArgs, lookup: F) -> Result<ClientConfig, CliError>
where
    F: Fn(&str) -> Option<String>,
{
    let resolve = |flag: &Option<String>, env: &str| flag.clone().or_else(|| lookup(env));

    let base_url = resolve(&args.base_url, BASE_URL_ENV).ok_or_else(|| {
        CliError::Config(format!("no base URL given, pass --base-url or set {}", BASE_URL_ENV))
    })?;

    let mut builder = ClientConfig::builder(base_url);

    if let Some(api_key) = resolve(&args.api_key, API_KEY_ENV) {
        builder = builder.api_key(api_key);
    }

    match (resolve(&args.username, USERNAME_ENV), resolve(&args.password, PASSWORD_ENV)) {
        (Some(username), Some(password)) => builder = builder.basic_auth(username, password),
        (None, None) => {}
        _ => {
            return Err(CliError::Config(
                "basic authentication needs both a username and a password".to_string(),
            ));
        }
    }

    Ok(builder.build())
}
