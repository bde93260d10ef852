//! Error handling for expiry lookup operations.
//!
//! This module defines a comprehensive error type that covers all the different
//! ways a lookup can fail, from network issues to invalid input.

use std::fmt;

/// Main error type for expiry lookup operations.
///
/// This enum covers all possible failure modes in the lookup process,
/// providing detailed context for debugging and user-friendly error messages.
#[derive(Debug, Clone)]
pub enum DomainExpiryError {
    /// Invalid domain name format
    InvalidDomain { domain: String, reason: String },

    /// Network-related errors (connection, DNS, TLS, etc.)
    NetworkError {
        message: String,
        source: Option<String>,
    },

    /// A single data source failed for this domain
    SourceError {
        source: String,
        domain: String,
        message: String,
    },

    /// Response body could not be parsed
    ParseError { message: String },

    /// Every source failed or returned inconclusive data
    NoData { domain: String },

    /// Timeout errors when operations take too long
    Timeout {
        operation: String,
        duration: std::time::Duration,
    },

    /// Configuration errors (invalid settings, etc.)
    ConfigError { message: String },

    /// Generic internal errors that don't fit other categories
    Internal { message: String },
}

impl DomainExpiryError {
    /// Create a new invalid domain error.
    pub fn invalid_domain<D: Into<String>, R: Into<String>>(domain: D, reason: R) -> Self {
        Self::InvalidDomain {
            domain: domain.into(),
            reason: reason.into(),
        }
    }

    /// Create a new network error.
    pub fn network<M: Into<String>>(message: M) -> Self {
        Self::NetworkError {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new network error with source information.
    pub fn network_with_source<M: Into<String>, S: Into<String>>(message: M, source: S) -> Self {
        Self::NetworkError {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a new source error.
    pub fn source<S: Into<String>, D: Into<String>, M: Into<String>>(
        source: S,
        domain: D,
        message: M,
    ) -> Self {
        Self::SourceError {
            source: source.into(),
            domain: domain.into(),
            message: message.into(),
        }
    }

    /// Create a new parse error.
    pub fn parse<M: Into<String>>(message: M) -> Self {
        Self::ParseError {
            message: message.into(),
        }
    }

    /// Create a new no-data error.
    pub fn no_data<D: Into<String>>(domain: D) -> Self {
        Self::NoData {
            domain: domain.into(),
        }
    }

    /// Create a new timeout error.
    pub fn timeout<O: Into<String>>(operation: O, duration: std::time::Duration) -> Self {
        Self::Timeout {
            operation: operation.into(),
            duration,
        }
    }

    /// Create a new configuration error.
    pub fn config<M: Into<String>>(message: M) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a new internal error.
    pub fn internal<M: Into<String>>(message: M) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Check if this error is recoverable within a lookup.
    ///
    /// Recoverable errors are swallowed by the orchestrator and trigger
    /// fallthrough to the next source. Terminal errors (bad input,
    /// exhausted sources, broken configuration) surface to the caller.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. }
                | Self::SourceError { .. }
                | Self::ParseError { .. }
                | Self::Timeout { .. }
        )
    }
}

impl fmt::Display for DomainExpiryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDomain { domain, reason } => {
                write!(f, "Invalid domain '{}': {}", domain, reason)
            }
            Self::NetworkError { message, source } => {
                if let Some(source) = source {
                    write!(f, "Network error: {} (source: {})", message, source)
                } else {
                    write!(f, "Network error: {}", message)
                }
            }
            Self::SourceError {
                source,
                domain,
                message,
            } => {
                write!(f, "Source '{}' failed for '{}': {}", source, domain, message)
            }
            Self::ParseError { message } => {
                write!(f, "Parse error: {}", message)
            }
            Self::NoData { domain } => {
                write!(f, "No WHOIS data found for '{}'", domain)
            }
            Self::Timeout {
                operation,
                duration,
            } => {
                write!(f, "Timeout after {:?} during: {}", duration, operation)
            }
            Self::ConfigError { message } => {
                write!(f, "Configuration error: {}", message)
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for DomainExpiryError {}

// Implement From conversions for common error types
impl From<reqwest::Error> for DomainExpiryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::timeout("HTTP request", std::time::Duration::from_secs(10))
        } else if err.is_connect() {
            Self::network_with_source("Connection failed", err.to_string())
        } else {
            Self::network_with_source("HTTP request failed", err.to_string())
        }
    }
}

impl From<serde_json::Error> for DomainExpiryError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError {
            message: format!("JSON parsing failed: {}", err),
        }
    }
}

impl From<std::io::Error> for DomainExpiryError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal {
            message: format!("I/O error: {}", err),
        }
    }
}
