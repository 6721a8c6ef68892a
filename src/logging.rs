//! Log level handling for the activity log
//!
//! Event severities follow the usual `RUST_LOG` conventions so the display
//! filter can be tuned without rebuilding.

use crate::api::error::ApiError;
use std::env;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    // Handle common RUST_LOG formats, including module-specific directives
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info, // Default to info if parsing fails
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

pub fn should_log_with_env(event_level: LogLevel) -> bool {
    let threshold = get_rust_log_level();
    should_log(event_level, threshold)
}

/// Map an API error to the severity its event should carry.
pub fn classify_api_error(error: &ApiError) -> LogLevel {
    match error {
        // Non-critical: temporary server issues
        ApiError::Http { status, .. } if *status == 429 => LogLevel::Debug,
        ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

        // Critical: auth failures
        ApiError::Http { status, .. } if *status == 401 => LogLevel::Error,
        ApiError::Http { status, .. } if *status == 403 => LogLevel::Error,

        // The backend explicitly rejected the request
        ApiError::Backend(_) => LogLevel::Error,

        // Network issues - usually temporary
        _ => LogLevel::Warn,
    }
}
