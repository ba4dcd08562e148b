//! Error types for view parameters

use thiserror::Error;

/// View parameter errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// A filter or sort key outside the fixed set
    #[error("Unknown {kind}: {value:?} (expected one of {expected})")]
    UnknownKey {
        /// Which parameter was being parsed
        kind: &'static str,
        /// The rejected input
        value: String,
        /// Accepted keys, comma separated
        expected: &'static str,
    },
}

impl ViewError {
    pub(crate) fn unknown(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self::UnknownKey {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}

/// Result type for view operations
pub type Result<T> = std::result::Result<T, ViewError>;
