//! Configuration module for environment variable parsing.

use std::env;
use std::str::FromStr;
use tracing::warn;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Teams incoming-webhook URL; deliveries fail while this is unset.
    ///
    /// Read once at startup. Changing `TEAMS_WEBHOOK_URL` on a running
    /// process has no effect until restart.
    pub teams_webhook_url: Option<String>,

    /// Port for the web server to listen on
    pub port: u16,

    /// Route the Chromatic webhook is mounted on
    pub webhook_path: String,

    /// Outbound request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            teams_webhook_url: parse_optional("TEAMS_WEBHOOK_URL"),

            port: parse_or("PORT", 3000),

            webhook_path: parse_path("WEBHOOK_PATH", "/api/chromatic"),

            request_timeout_ms: parse_or("REQUEST_TIMEOUT_MS", 10_000),
        }
    }
}

/// Read a variable, treating blank values as unset.
fn parse_optional(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse a variable, falling back to `default` when unset or invalid.
fn parse_or<T: FromStr>(name: &str, default: T) -> T {
    match parse_optional(name) {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(env_var = name, value = %raw, "Invalid value, using default");
            default
        }),
    }
}

/// Parse a route path; it must start with `/`.
fn parse_path(name: &str, default: &str) -> String {
    match parse_optional(name) {
        Some(path) if path.starts_with('/') => path,
        Some(path) => {
            warn!(env_var = name, value = %path, "Path must start with '/', using default");
            default.to_string()
        }
        None => default.to_string(),
    }
}
