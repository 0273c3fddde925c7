//! # Error Handling Module
//!
//! ## Purpose
//! Centralized error handling for the legal reference search engine. The
//! runtime query surface never fails — lookups return `Option`, searches
//! return (possibly empty) vectors — so the taxonomy here covers the one
//! place errors can occur: catalog construction.
//!
//! ## Input/Output Specification
//! - **Input**: Error conditions detected while validating catalog entries
//! - **Output**: Structured error types with field-level context
//! - **Error Categories**: Validation, Catalog
//!
//! ## Key Features
//! - Structured variants with detailed context
//! - Error category accessor for logging and metrics

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors raised while building and validating the static catalogs
#[derive(Debug, Error)]
pub enum SearchError {
    /// A catalog entry is missing a required field or carries a malformed value
    #[error("Validation failed for field '{field}': {reason}")]
    ValidationFailed { field: String, reason: String },

    /// Two norm entries share the same catalog key
    #[error("Duplicate norm key in catalog: '{key}'")]
    DuplicateKey { key: String },

    /// Two case entries share the same docket number
    #[error("Duplicate docket number in catalog: '{docket}'")]
    DuplicateDocket { docket: String },

    /// A decision date does not parse as DD-MM-YYYY
    #[error("Invalid date format: '{value}' (expected DD-MM-YYYY)")]
    InvalidDateFormat { value: String },
}

impl SearchError {
    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            SearchError::ValidationFailed { .. } | SearchError::InvalidDateFormat { .. } => {
                "validation"
            }
            SearchError::DuplicateKey { .. } | SearchError::DuplicateDocket { .. } => "catalog",
        }
    }
}

/// Helper macro for field-level validation failures
#[macro_export]
macro_rules! validation_error {
    ($field:expr, $reason:expr) => {
        $crate::errors::SearchError::ValidationFailed {
            field: $field.to_string(),
            reason: $reason.to_string(),
        }
    };
}
