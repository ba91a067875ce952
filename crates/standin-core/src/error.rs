//! Error types for the value model.

use thiserror::Error;

use crate::category::TypeCategory;

/// Errors from constructing or exporting values.
#[derive(Debug, Error)]
pub enum ValueError {
    /// Pattern source text failed to compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The value holds something JSON cannot represent.
    #[error("{0} values have no JSON representation")]
    Unrepresentable(TypeCategory),

    /// JSON numbers must be finite.
    #[error("non-finite number {0} has no JSON representation")]
    NonFiniteNumber(f64),
}
