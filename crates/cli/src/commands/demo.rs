use api_client::{ApiClient, QueryParams};
use serde_json::json;
use tracing::info;

use crate::console::{print_error_message, print_json, print_success_message};

/// Issues one example GET and one example POST against `endpoint`. A failed
/// call is reported and the demo carries on.
pub async fn handle_demo(client: &ApiClient) {
    info!("Running demo against {}", client.config().base_url());

    let params = QueryParams::new().with("param1", "value1");
    match client.get("endpoint", Some(&params)).await {
        Ok(response) => print_json(Some("GET Response:"), &response),
        Err(e) => print_error_message(&format!("Error: {}", e)),
    }

    let data = json!({ "key": "value" });
    match client.post("endpoint", Some(&data)).await {
        Ok(response) => print_json(Some("POST Response:"), &response),
        Err(e) => print_error_message(&format!("Error: {}", e)),
    }

    print_success_message("Demo finished");
}
