use api_client::{ApiClient, QueryParams};

use crate::{console::print_json, error::CliError};

pub async fn handle_get(
    client: &ApiClient,
    endpoint: &str,
    query: &[(String, String)],
) -> Result<(), CliError> {
    let params: QueryParams =
        query.iter().map(|(key, value)| (key.as_str(), value.as_str())).collect();
    let params = if params.is_empty() { None } else { Some(&params) };

    let response = client.get(endpoint, params).await?;
    print_json(None, &response);

    Ok(())
}
