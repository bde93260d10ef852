//! Environment-based configuration loading.
//!
//! The endpoint runs in serverless-style environments where configuration
//! arrives through environment variables. This module reads them on top
//! of [`LookupConfig::default`] with warnings for invalid values.

use crate::types::LookupConfig;
use std::env;
use std::time::Duration;

/// Per-source timeout bounds, seconds. Anything above 30s would blow
/// typical gateway deadlines anyway.
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 30;

/// Load lookup configuration from environment variables.
///
/// Recognized variables:
/// - `DE_TIMEOUT` — per-source timeout in seconds (1-30)
/// - `DE_SYSTEM_WHOIS` — enable the system `whois` fallback source
///   ("true"/"1"/"yes"/"on" or "false"/"0"/"no"/"off")
/// - `DE_USER_AGENT` — User-Agent header sent to hosted APIs
///
/// Invalid values are logged and ignored, keeping the default.
pub fn load_env_config() -> LookupConfig {
    let mut config = LookupConfig::default();

    if let Ok(val) = env::var("DE_TIMEOUT") {
        match parse_timeout_secs(&val) {
            Some(secs) => config.source_timeout = Duration::from_secs(secs),
            None => tracing::warn!(
                value = %val,
                "Invalid DE_TIMEOUT, must be {}-{} seconds",
                MIN_TIMEOUT_SECS,
                MAX_TIMEOUT_SECS
            ),
        }
    }

    if let Ok(val) = env::var("DE_SYSTEM_WHOIS") {
        match parse_bool(&val) {
            Some(enabled) => config.enable_system_whois = enabled,
            None => tracing::warn!(value = %val, "Invalid DE_SYSTEM_WHOIS, expected a boolean"),
        }
    }

    if let Ok(val) = env::var("DE_USER_AGENT") {
        let trimmed = val.trim();
        if !trimmed.is_empty() {
            config.user_agent = trimmed.to_string();
        }
    }

    config
}

fn parse_timeout_secs(val: &str) -> Option<u64> {
    val.trim()
        .parse::<u64>()
        .ok()
        .filter(|s| (MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(s))
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
