//! Error types for the strict validator calls

use thiserror::Error;

/// Errors raised by direct validator calls
///
/// The batch dispatcher never lets these escape for a single rule; it turns
/// them into negative outcomes. Only [`ValidationError::NotASequence`] can
/// surface from a batch call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be a {expected}, got {found}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("rules must be an array of rule objects, got {found}")]
    NotASequence { found: &'static str },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ValidationError {
    pub(crate) fn type_mismatch(
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            field,
            expected,
            found,
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
