use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Log every request and response status
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where and how to connect. Each option falls back to its environment variable.
#[derive(Args, Debug, Default)]
pub struct ConnectionArgs {
    /// Base URL of the API, e.g. https://api.example.com/v1 (API_CLIENT_BASE_URL)
    #[clap(long, global = true)]
    pub base_url: Option<String>,

    /// API key sent as a bearer token (API_CLIENT_API_KEY)
    #[clap(long, global = true)]
    pub api_key: Option<String>,

    /// Username for basic authentication (API_CLIENT_USERNAME)
    #[clap(long, global = true)]
    pub username: Option<String>,

    /// Password for basic authentication (API_CLIENT_PASSWORD)
    #[clap(long, global = true)]
    pub password: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send a GET request and print the JSON response
    Get {
        /// Endpoint appended to the base URL
        endpoint: String,

        /// Query parameter as key=value, can be repeated
        #[clap(long = "query", short = 'q', value_parser = parse_query_pair)]
        query: Vec<(String, String)>,
    },
    /// Send a POST request and print the JSON response
    Post {
        /// Endpoint appended to the base URL
        endpoint: String,

        /// JSON request body
        #[clap(long, short)]
        data: Option<String>,
    },
    /// Run an example GET and POST against `endpoint`
    Demo,
}

fn parse_query_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("invalid query parameter '{}': expected key=value", raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_pair() {
        assert_eq!(parse_query_pair("q=x"), Ok(("q".to_string(), "x".to_string())));
        assert_eq!(parse_query_pair("filter=a=b"), Ok(("filter".to_string(), "a=b".to_string())));
        assert_eq!(parse_query_pair("empty="), Ok(("empty".to_string(), String::new())));
        assert!(parse_query_pair("novalue").is_err());
        assert!(parse_query_pair("=x").is_err());
    }

    #[test]
    fn test_get_collects_repeated_query_flags() {
        let cli = Cli::try_parse_from([
            "apiclient",
            "--base-url",
            "https://api.example.com/v1",
            "get",
            "items",
            "-q",
            "q=x",
            "--query",
            "page=2",
        ])
        .unwrap();

        assert_eq!(cli.connection.base_url.as_deref(), Some("https://api.example.com/v1"));
        match cli.command {
            Commands::Get { endpoint, query } => {
                assert_eq!(endpoint, "items");
                assert_eq!(
                    query,
                    vec![("q".to_string(), "x".to_string()), ("page".to_string(), "2".to_string())]
                );
            }
            _ => panic!("expected get command"),
        }
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "apiclient",
            "post",
            "items",
            "--data",
            r#"{"name":"n"}"#,
            "--username",
            "u",
            "--password",
            "p",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.connection.username.as_deref(), Some("u"));
        assert_eq!(cli.connection.password.as_deref(), Some("p"));
        match cli.command {
            Commands::Post { endpoint, data } => {
                assert_eq!(endpoint, "items");
                assert_eq!(data.as_deref(), Some(r#"{"name":"n"}"#));
            }
            _ => panic!("expected post command"),
        }
    }

    #[test]
    fn test_rejects_malformed_query() {
        assert!(Cli::try_parse_from(["apiclient", "get", "items", "-q", "broken"]).is_err());
    }
}
