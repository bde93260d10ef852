//! WHOIS protocol lookup via the system `whois` command.
//!
//! Last-resort source for environments that ship the classic `whois`
//! binary. It talks the real protocol (port 43, IANA referrals) so it
//! covers TLDs the hosted APIs do not, but it is disabled by default
//! since serverless images rarely include the tool.

use crate::error::DomainExpiryError;
use crate::parser::parse_whois_text;
use crate::types::WhoisRecord;
use async_trait::async_trait;
use tokio::process::Command;

use super::WhoisSource;

/// Source that shells out to the system's `whois` command.
#[derive(Clone, Default)]
pub struct SystemWhoisSource;

impl SystemWhoisSource {
    pub fn new() -> Self {
        Self
    }

    /// Run `whois <domain>` and return its stdout.
    ///
    /// The output is captured lossily; some registries still emit
    /// legacy encodings and a replacement character in a comment line
    /// is harmless.
    async fn execute_whois(&self, domain: &str) -> Result<String, DomainExpiryError> {
        let output = Command::new("whois").arg(domain).output().await.map_err(|e| {
            DomainExpiryError::source(
                "system-whois",
                domain,
                format!(
                    "Failed to execute whois command: {}. Make sure 'whois' is installed.",
                    e
                ),
            )
        })?;

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl WhoisSource for SystemWhoisSource {
    fn name(&self) -> &'static str {
        "system-whois"
    }

    async fn lookup(&self, domain: &str) -> Result<WhoisRecord, DomainExpiryError> {
        let raw = self.execute_whois(domain).await?;
        let fields = parse_whois_text(&raw);

        // "No match" style responses simply parse to empty fields and
        // surface as an inconclusive record, which the orchestrator
        // treats as fallthrough.
        Ok(WhoisRecord::registered(
            domain,
            fields.expiry_date,
            fields.creation_date,
            fields.registrar,
        ))
    }
}

/// Check if the system has a working whois command.
///
/// Useful for deciding whether to enable [`SystemWhoisSource`] at startup.
pub async fn is_whois_available() -> bool {
    match Command::new("whois").arg("--version").output().await {
        Ok(output) => output.status.success(),
        Err(_) => false,
    }
}
