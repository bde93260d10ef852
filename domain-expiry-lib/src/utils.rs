//! Utility functions for domain validation.
//!
//! This module contains the syntactic domain check applied before any
//! source is contacted. It is deliberately basic — registries apply the
//! authoritative rules during lookup.

use crate::error::DomainExpiryError;

/// Validate a domain name format.
///
/// Accepts fully qualified domain names: alphanumeric labels (interior
/// hyphens allowed) separated by dots, with a TLD of at least 2
/// characters. Anything else is rejected before a single network call
/// is made.
///
/// # Returns
///
/// `Ok(())` if valid, `Err(DomainExpiryError::InvalidDomain)` if not.
pub fn validate_domain(domain: &str) -> Result<(), DomainExpiryError> {
    let domain = domain.trim();

    if domain.is_empty() {
        return Err(DomainExpiryError::invalid_domain(
            domain,
            "Domain name cannot be empty",
        ));
    }

    if domain.len() > 253 {
        return Err(DomainExpiryError::invalid_domain(
            domain,
            "Domain name exceeds 253 characters",
        ));
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return Err(DomainExpiryError::invalid_domain(
            domain,
            "Domain must contain at least one dot",
        ));
    }

    for label in &labels {
        if label.is_empty() || label.len() > 63 {
            return Err(DomainExpiryError::invalid_domain(
                domain,
                "Each label must be 1-63 characters",
            ));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(DomainExpiryError::invalid_domain(
                domain,
                "Labels cannot start or end with a hyphen",
            ));
        }
        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(DomainExpiryError::invalid_domain(
                domain,
                "Labels may only contain letters, digits, and hyphens",
            ));
        }
    }

    // TLD must be at least 2 chars and not purely numeric
    let tld = labels[labels.len() - 1];
    if tld.len() < 2 {
        return Err(DomainExpiryError::invalid_domain(
            domain,
            "TLD must be at least 2 characters",
        ));
    }
    if tld.chars().all(|c| c.is_ascii_digit()) {
        return Err(DomainExpiryError::invalid_domain(
            domain,
            "TLD cannot be numeric",
        ));
    }

    Ok(())
}
