//! WHOIS data source implementations.
//!
//! Each source knows how to fetch raw registration data for a domain from
//! one provider. The orchestrator treats them uniformly through the
//! [`WhoisSource`] trait and tries them in priority order.

use crate::error::DomainExpiryError;
use crate::types::WhoisRecord;
use async_trait::async_trait;

/// Hosted WHOIS API sources
pub mod hosted;

/// Local lookup via the system `whois` command
pub mod system;

pub use hosted::{HackerTargetSource, WhoisVuSource};
pub use system::{is_whois_available, SystemWhoisSource};

/// A single WHOIS data source strategy.
///
/// Implementations fetch registration data for a domain and normalize it
/// into a [`WhoisRecord`]. Returning `Ok` with a record that lacks an
/// expiry date is legal — the orchestrator treats it as inconclusive and
/// falls through to the next source.
#[async_trait]
pub trait WhoisSource: Send + Sync {
    /// Short name of this source, used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Look up registration data for a domain.
    async fn lookup(&self, domain: &str) -> Result<WhoisRecord, DomainExpiryError>;
}
