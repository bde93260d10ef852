//! # Domain Expiry Library
//!
//! A small, robust library for looking up domain expiry data across multiple
//! WHOIS sources with a registry-tolerant free-text parser.
//!
//! The lookup tries a prioritized list of data sources (hosted WHOIS APIs,
//! optionally the system `whois` command) and stops at the first one that
//! yields a record with a non-null expiry date. Raw WHOIS text from any
//! source goes through a single keyword-table parser that handles the
//! label variants of heterogeneous registries, including Korean national
//! registry field names.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use domain_expiry_lib::ExpiryChecker;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let checker = ExpiryChecker::new();
//!     let record = checker.lookup("example.com").await?;
//!
//!     println!("{} expires: {:?}", record.domain, record.expiry_date);
//!     Ok(())
//! }
//! ```

// Re-export main public API types and functions
pub use checker::ExpiryChecker;
pub use config::load_env_config;
pub use error::DomainExpiryError;
pub use parser::{parse_whois_text, ParsedFields};
pub use sources::{
    is_whois_available, HackerTargetSource, SystemWhoisSource, WhoisSource, WhoisVuSource,
};
pub use types::{DomainStatus, LookupConfig, WhoisRecord};
pub use utils::validate_domain;

mod checker;
mod config;
mod error;
mod parser;
mod sources;
mod types;
mod utils;

// Type alias for convenience
pub type Result<T> = std::result::Result<T, DomainExpiryError>;

// Library version metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
