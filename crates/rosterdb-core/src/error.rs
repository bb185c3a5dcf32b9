//! Form-level validation errors.

use thiserror::Error;

/// Validation failures surfaced to the presentation layer.
///
/// Constraint rejections inside the registry are not errors; they are
/// variants of [`MutationOutcome`](crate::MutationOutcome). This type covers
/// only the field checks in [`validate`](crate::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was empty or whitespace-only.
    #[error("{field} is required")]
    Required {
        /// Name of the offending field.
        field: &'static str,
    },

    /// An email address did not match the expected shape.
    #[error("invalid email address: {value}")]
    InvalidEmail {
        /// The rejected value.
        value: String,
    },
}
