//! Hosted WHOIS API sources.
//!
//! These sources query public HTTP APIs that proxy WHOIS for us, which is
//! the only practical option in environments without outbound port-43
//! access. Both return free-text WHOIS output (one wrapped in JSON, one
//! bare) that goes through the shared parser.

use crate::error::DomainExpiryError;
use crate::parser::parse_whois_text;
use crate::types::WhoisRecord;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use super::WhoisSource;

/// Build the shared HTTP client for hosted sources.
///
/// The reqwest timeout is set slightly above the per-source timeout; the
/// orchestrator's `tokio::time::timeout` is the authoritative bound.
pub(crate) fn build_http_client(
    timeout: Duration,
    user_agent: &str,
) -> Result<reqwest::Client, DomainExpiryError> {
    reqwest::Client::builder()
        .timeout(timeout + Duration::from_secs(2))
        .user_agent(user_agent)
        .build()
        .map_err(|e| {
            DomainExpiryError::network_with_source("Failed to create HTTP client", e.to_string())
        })
}

/// Source backed by the whois.vu JSON API.
///
/// `https://api.whois.vu/?q=<domain>` answers with a JSON envelope whose
/// `whois` field carries the raw WHOIS text of the authoritative server.
#[derive(Clone)]
pub struct WhoisVuSource {
    http_client: reqwest::Client,
    base_url: String,
}

/// Subset of the whois.vu response we care about.
#[derive(Debug, Deserialize)]
struct WhoisVuResponse {
    /// Raw WHOIS text, absent when the API has nothing for the domain
    whois: Option<String>,
}

impl WhoisVuSource {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            base_url: "https://api.whois.vu/".to_string(),
        }
    }

    /// Point the source at a different endpoint, e.g. a local mock.
    pub fn with_base_url(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl WhoisSource for WhoisVuSource {
    fn name(&self) -> &'static str {
        "whois.vu"
    }

    async fn lookup(&self, domain: &str) -> Result<WhoisRecord, DomainExpiryError> {
        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[("q", domain)])
            .send()
            .await
            .map_err(|e| DomainExpiryError::source(self.name(), domain, format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(DomainExpiryError::source(
                self.name(),
                domain,
                format!("unexpected HTTP status: {}", response.status()),
            ));
        }

        let body: WhoisVuResponse = response
            .json()
            .await
            .map_err(|e| DomainExpiryError::parse(format!("whois.vu JSON: {}", e)))?;

        let raw = body.whois.unwrap_or_default();
        let fields = parse_whois_text(&raw);

        Ok(WhoisRecord::registered(
            domain,
            fields.expiry_date,
            fields.creation_date,
            fields.registrar,
        ))
    }
}

/// Source backed by the HackerTarget WHOIS API.
///
/// `https://api.hackertarget.com/whois/?q=<domain>` answers with bare
/// WHOIS text. API-level failures come back as a 200 with an `error ...`
/// or `API count exceeded` body, so the body itself is inspected too.
#[derive(Clone)]
pub struct HackerTargetSource {
    http_client: reqwest::Client,
    base_url: String,
}

impl HackerTargetSource {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            base_url: "https://api.hackertarget.com/whois/".to_string(),
        }
    }

    /// Point the source at a different endpoint, e.g. a local mock.
    pub fn with_base_url(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Detect HackerTarget's in-band error bodies.
    fn is_api_error(body: &str) -> bool {
        let trimmed = body.trim_start().to_lowercase();
        trimmed.starts_with("error") || trimmed.starts_with("api count exceeded")
    }
}

#[async_trait]
impl WhoisSource for HackerTargetSource {
    fn name(&self) -> &'static str {
        "hackertarget"
    }

    async fn lookup(&self, domain: &str) -> Result<WhoisRecord, DomainExpiryError> {
        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[("q", domain)])
            .send()
            .await
            .map_err(|e| DomainExpiryError::source(self.name(), domain, format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(DomainExpiryError::source(
                self.name(),
                domain,
                format!("unexpected HTTP status: {}", response.status()),
            ));
        }

        let raw = response
            .text()
            .await
            .map_err(|e| DomainExpiryError::parse(format!("hackertarget body: {}", e)))?;

        if Self::is_api_error(&raw) {
            return Err(DomainExpiryError::source(
                self.name(),
                domain,
                raw.trim().to_string(),
            ));
        }

        let fields = parse_whois_text(&raw);

        Ok(WhoisRecord::registered(
            domain,
            fields.expiry_date,
            fields.creation_date,
            fields.registrar,
        ))
    }
}
