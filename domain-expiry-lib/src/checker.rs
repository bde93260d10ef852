//! Main expiry checker implementation.
//!
//! This module provides the primary `ExpiryChecker` struct that orchestrates
//! the lookup across an ordered list of WHOIS data sources.

use crate::error::DomainExpiryError;
use crate::sources::{
    hosted::build_http_client, HackerTargetSource, SystemWhoisSource, WhoisSource, WhoisVuSource,
};
use crate::types::{LookupConfig, WhoisRecord};
use crate::utils::validate_domain;

/// Orchestrates expiry lookups across multiple WHOIS data sources.
///
/// Sources are tried strictly in order; the first one that returns a
/// record with a non-null expiry date wins. A source failure (network
/// error, bad response, timeout) or an inconclusive record is logged
/// and the next source is tried. Only when every source is exhausted
/// does the lookup fail with [`DomainExpiryError::NoData`].
///
/// # Example
///
/// ```rust,no_run
/// use domain_expiry_lib::ExpiryChecker;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let checker = ExpiryChecker::new();
///     let record = checker.lookup("example.com").await?;
///     println!("{} expires {:?}", record.domain, record.expiry_date);
///     Ok(())
/// }
/// ```
pub struct ExpiryChecker {
    /// Configuration settings for this checker instance
    config: LookupConfig,
    /// Data sources in priority order
    sources: Vec<Box<dyn WhoisSource>>,
}

impl ExpiryChecker {
    /// Create a new checker with default configuration.
    ///
    /// Default source order: whois.vu, then hackertarget. The system
    /// `whois` fallback is off unless enabled via configuration.
    pub fn new() -> Self {
        Self::with_config(LookupConfig::default()).expect("Failed to create default HTTP client")
    }

    /// Create a new checker with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the shared HTTP client cannot be constructed.
    pub fn with_config(config: LookupConfig) -> Result<Self, DomainExpiryError> {
        let http_client = build_http_client(config.source_timeout, &config.user_agent)?;

        let mut sources: Vec<Box<dyn WhoisSource>> = vec![
            Box::new(WhoisVuSource::new(http_client.clone())),
            Box::new(HackerTargetSource::new(http_client)),
        ];
        if config.enable_system_whois {
            sources.push(Box::new(SystemWhoisSource::new()));
        }

        Ok(Self { config, sources })
    }

    /// Create a checker with an explicit source list.
    ///
    /// Primarily for tests and embedders that bring their own sources.
    pub fn with_sources(config: LookupConfig, sources: Vec<Box<dyn WhoisSource>>) -> Self {
        Self { config, sources }
    }

    /// Look up expiry data for a single domain.
    ///
    /// The lookup process:
    /// 1. Validates the domain syntax
    /// 2. Tries each source in order, bounded by the per-source timeout
    /// 3. Returns the first conclusive record
    ///
    /// # Errors
    ///
    /// Returns `DomainExpiryError::InvalidDomain` for malformed input and
    /// `DomainExpiryError::NoData` when every source failed or returned
    /// an inconclusive record.
    pub async fn lookup(&self, domain: &str) -> Result<WhoisRecord, DomainExpiryError> {
        validate_domain(domain)?;
        let domain = domain.trim();

        for source in &self.sources {
            let attempt =
                tokio::time::timeout(self.config.source_timeout, source.lookup(domain)).await;

            match attempt {
                Ok(Ok(record)) if record.is_conclusive() => {
                    tracing::info!(
                        domain = %domain,
                        source = source.name(),
                        expiry = record.expiry_date.as_deref().unwrap_or(""),
                        "Lookup resolved"
                    );
                    return Ok(record);
                }
                Ok(Ok(_)) => {
                    tracing::debug!(
                        domain = %domain,
                        source = source.name(),
                        "Source returned no expiry date, trying next"
                    );
                }
                Ok(Err(e)) => {
                    tracing::debug!(
                        domain = %domain,
                        source = source.name(),
                        error = %e,
                        "Source failed, trying next"
                    );
                }
                Err(_) => {
                    tracing::debug!(
                        domain = %domain,
                        source = source.name(),
                        timeout = ?self.config.source_timeout,
                        "Source timed out, trying next"
                    );
                }
            }
        }

        Err(DomainExpiryError::no_data(domain))
    }

    /// Get the current configuration for this checker.
    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Names of the configured sources, in priority order.
    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.name()).collect()
    }
}

impl Default for ExpiryChecker {
    fn default() -> Self {
        Self::new()
    }
}
