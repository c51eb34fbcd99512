use std::env;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::format::{Format, Writer},
};

/// Timestamps log lines as "DD Month - HH:MM:SS.microseconds".
struct CustomTimer;

impl tracing_subscriber::fmt::time::FormatTime for CustomTimer {
    fn format_time(&self, writer: &mut Writer<'_>) -> std::fmt::Result {
        let now = chrono::Local::now();
        write!(writer, "{} - {}", now.format("%d %B"), now.format("%H:%M:%S%.6f"))
    }
}

/// `RUST_LOG` directives win outright when present; otherwise `log_level`
/// applies to everything.
fn build_filter(directives: Option<&str>, log_level: LevelFilter) -> EnvFilter {
    match directives.filter(|directives| !directives.trim().is_empty()) {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::new(log_level.to_string()),
    }
}

/// Sets up the global logger with the specified log level.
///
/// Log lines go to stderr so that JSON printed on stdout stays pipeable.
/// If a global logger is already set, this function silently does nothing.
pub fn setup_logger(log_level: LevelFilter) {
    let directives = env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(directives.as_deref(), log_level);

    let format = Format::default().with_timer(CustomTimer).with_level(true).with_target(false);

    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .event_format(format)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn setup_info_logger() {
    setup_logger(LevelFilter::INFO);
}
