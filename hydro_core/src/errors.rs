//! # Error Types
//!
//! Structured error types for hydro_core. Variants carry enough context
//! to understand and fix issues programmatically, and serialize cleanly
//! to JSON for API consumers.
//!
//! ## Example
//!
//! ```rust
//! use hydro_core::errors::{HydroError, HydroResult};
//!
//! fn validate_density(density: f64) -> HydroResult<()> {
//!     if density <= 0.0 {
//!         return Err(HydroError::invalid_input(
//!             "density",
//!             density.to_string(),
//!             "Fluid density must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for hydro_core operations
pub type HydroResult<T> = Result<T, HydroError>;

/// Structured error type for hydrostatic computations.
///
/// A `Geometry` error aborts the whole batch before any per-draft work
/// starts; an `InvalidDraft` only drops the offending draft. Numerical
/// hiccups (non-convergence) are never surfaced here - they degrade
/// gracefully inside the pipeline.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum HydroError {
    /// The offset table cannot produce a usable hull
    #[error("Geometry error: {reason}")]
    Geometry { reason: String },

    /// A requested draft is not positive
    #[error("Invalid draft: {draft} - drafts must be positive")]
    InvalidDraft { draft: f64 },

    /// An input value is invalid (out of range, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl HydroError {
    /// Create a Geometry error
    pub fn geometry(reason: impl Into<String>) -> Self {
        HydroError::Geometry {
            reason: reason.into(),
        }
    }

    /// Create an InvalidDraft error
    pub fn invalid_draft(draft: f64) -> Self {
        HydroError::InvalidDraft { draft }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        HydroError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            HydroError::Geometry { .. } => "GEOMETRY_ERROR",
            HydroError::InvalidDraft { .. } => "INVALID_DRAFT",
            HydroError::InvalidInput { .. } => "INVALID_INPUT",
            HydroError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = HydroError::geometry("fewer than 2 usable stations");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: HydroError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            HydroError::invalid_draft(-1.0).error_code(),
            "INVALID_DRAFT"
        );
        assert_eq!(
            HydroError::geometry("no keel").error_code(),
            "GEOMETRY_ERROR"
        );
    }

    #[test]
    fn test_display_messages() {
        let error = HydroError::invalid_input("density", "-1", "Fluid density must be positive");
        assert!(error.to_string().contains("density"));
    }
}
