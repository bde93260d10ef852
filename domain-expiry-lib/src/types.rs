//! Core data types for WHOIS expiry lookups.
//!
//! This module defines the main data structures used throughout the library:
//! the normalized lookup record and the configuration options.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Normalized result of a WHOIS expiry lookup.
///
/// Dates are kept as opaque strings exactly as the registry emitted them.
/// Registries disagree wildly on date formats ("2025-01-01T00:00:00Z",
/// "2026. 03. 15.", "15-Mar-2026"), so no normalization is attempted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhoisRecord {
    /// The domain name that was looked up (e.g., "example.com")
    pub domain: String,

    /// When the domain registration expires, if the source reported it
    pub expiry_date: Option<String>,

    /// When the domain was first registered
    pub creation_date: Option<String>,

    /// The registrar that manages this domain
    pub registrar: Option<String>,

    /// Registration status of the domain
    pub status: DomainStatus,
}

impl WhoisRecord {
    /// Build a record from parsed fields for a registered domain.
    pub fn registered(
        domain: &str,
        expiry_date: Option<String>,
        creation_date: Option<String>,
        registrar: Option<String>,
    ) -> Self {
        Self {
            domain: domain.to_string(),
            expiry_date,
            creation_date,
            registrar,
            status: DomainStatus::Registered,
        }
    }

    /// Whether this record settles the lookup.
    ///
    /// A source succeeds only if it produced a non-null expiry date;
    /// anything less is inconclusive and the orchestrator falls through
    /// to the next source.
    pub fn is_conclusive(&self) -> bool {
        self.expiry_date.is_some()
    }
}

/// Registration status of a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainStatus {
    /// Domain has an active registration
    #[serde(rename = "registered")]
    Registered,

    /// Domain is not registered
    #[serde(rename = "available")]
    Available,
}

impl std::fmt::Display for DomainStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainStatus::Registered => write!(f, "registered"),
            DomainStatus::Available => write!(f, "available"),
        }
    }
}

/// Configuration options for expiry lookups.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Timeout applied to each individual source attempt.
    /// Default: 10 seconds. A timed-out source falls through, it never
    /// aborts the whole lookup.
    pub source_timeout: Duration,

    /// Whether to append the system `whois` command as a last-resort
    /// source. Default: false (the binary is rarely present on
    /// serverless images).
    pub enable_system_whois: bool,

    /// User-Agent header sent to hosted WHOIS APIs.
    pub user_agent: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            source_timeout: Duration::from_secs(10),
            enable_system_whois: false,
            user_agent: format!("domain-expiry/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl LookupConfig {
    /// Set the per-source timeout.
    pub fn with_source_timeout(mut self, timeout: Duration) -> Self {
        self.source_timeout = timeout;
        self
    }

    /// Enable or disable the system `whois` fallback source.
    pub fn with_system_whois(mut self, enabled: bool) -> Self {
        self.enable_system_whois = enabled;
        self
    }

    /// Set the User-Agent sent to hosted APIs.
    pub fn with_user_agent<U: Into<String>>(mut self, user_agent: U) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
