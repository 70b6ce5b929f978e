//! Endpoint validation for the route form.

use thiserror::Error;

/// Why a pair of endpoint names cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter both a start and an end system")]
    RequiredBothEndpoints,
    #[error("Start and end system must be different")]
    SameEndpoint,
}

/// Check the two user-entered endpoint names before any request is made.
///
/// Emptiness is checked before equality, so two empty strings report
/// `RequiredBothEndpoints`. Comparison is case-sensitive exact match.
pub fn validate_endpoints(start: &str, end: &str) -> Result<(), ValidationError> {
    if start.is_empty() || end.is_empty() {
        return Err(ValidationError::RequiredBothEndpoints);
    }
    if start == end {
        return Err(ValidationError::SameEndpoint);
    }
    Ok(())
}
