use api_client::{ApiClient, QueryParams, Value};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Bearer token authentication
    let client = ApiClient::new(
        "https://api.example.com/v1",
        Some("your_api_key_here".to_string()),
        None,
    );

    let params = QueryParams::new().with("param1", "value1");
    match client.get("endpoint", Some(&params)).await {
        Ok(response) => println!("✅ GET Response: {}", response),
        Err(e) => println!("❌ Error: {}", e),
    }

    // Basic authentication
    let client = ApiClient::new(
        "https://api.example.com/v1",
        None,
        Some(("admin", "your_password").into()),
    );

    let data: Value = serde_json::json!({ "key": "value" });
    match client.post("endpoint", Some(&data)).await {
        Ok(response) => println!("✅ POST Response: {}", response),
        Err(e) => println!("❌ Error: {}", e),
    }

    Ok(())
}
