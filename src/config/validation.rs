//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Value shape checks (app root is absolute, header names non-empty)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: HelperConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::HelperConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("paths.app_root must be empty or start with '/', got {0:?}")]
    RelativeAppRoot(String),

    #[error("client_ip.forwarded_headers[{0}] is empty")]
    EmptyHeaderName(usize),

    #[error("client_ip.remote_addr_variable must not be empty")]
    EmptyRemoteAddrVariable,
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &HelperConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let app_root = &config.paths.app_root;
    if !app_root.is_empty() && !app_root.starts_with('/') {
        errors.push(ValidationError::RelativeAppRoot(config.paths.app_root.clone()));
    }

    if let Some(headers) = &config.client_ip.forwarded_headers {
        for (i, header) in headers.iter().enumerate() {
            if header.trim().is_empty() {
                errors.push(ValidationError::EmptyHeaderName(i));
            }
        }
    }

    if config.client_ip.remote_addr_variable.trim().is_empty() {
        errors.push(ValidationError::EmptyRemoteAddrVariable);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
