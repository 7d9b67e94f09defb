// ABOUTME: Tracing subscriber setup for the shipui binary
// ABOUTME: Honours RUST_LOG and LOG_FORMAT=json, always writing to stderr

use shipui_config::constants::{LOG_FORMAT, RUST_LOG};
use tracing_subscriber::EnvFilter;

/// Filter used when RUST_LOG is unset; keeps the terminal quiet by default
pub const DEFAULT_LOG_FILTER: &str = "shipui=warn";

pub fn init_tracing() {
    let env_filter = std::env::var(RUST_LOG)
        .ok()
        .and_then(|v| EnvFilter::try_new(v).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));
    let json_logs = std::env::var(LOG_FORMAT)
        .map(|v| v == "json")
        .unwrap_or(false);

    // Generated code goes to stdout, so logs must not
    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
