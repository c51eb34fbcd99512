use api_client::Value;
use colored::Colorize;

pub fn print_error_message(error_message: &str) {
    eprintln!("{}", error_message.red());
}

pub fn print_success_message(success_message: &str) {
    println!("{}", success_message.green());
}

/// Pretty-prints a JSON response, falling back to compact output.
pub fn print_json(label: Option<&str>, value: &Value) {
    let rendered = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());

    match label {
        Some(label) => println!("{} {}", label.bold(), rendered),
        None => println!("{}", rendered),
    }
}
