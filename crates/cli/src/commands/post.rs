use api_client::{ApiClient, Value};

use crate::{console::print_json, error::CliError};

pub async fn handle_post(
    client: &ApiClient,
    endpoint: &str,
    data: &Option<String>,
) -> Result<(), CliError> {
    let body = parse_body(data)?;

    let response = client.post(endpoint, body.as_ref()).await?;
    print_json(None, &response);

    Ok(())
}

fn parse_body(data: &Option<String>) -> Result<Option<Value>, CliError> {
    match data {
        Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
        None => Ok(None),
    }
}
