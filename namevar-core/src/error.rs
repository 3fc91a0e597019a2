//! Error types for name parsing (made by FontLab https://www.fontlab.com/)

use thiserror::Error;

/// Errors raised before any variant generation takes place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The canonical name has no tokens to work with.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl NameError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
