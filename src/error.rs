//! Error types for sybil.

use thiserror::Error;

/// Validation failures surfaced by the composer and the identifier check.
///
/// Translation itself never fails: statements that match no rewrite trigger
/// pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SybilError {
    /// A caller-supplied column or table name failed the identifier grammar.
    /// Fails closed: no SQL containing the rejected name is ever emitted.
    #[error("invalid SQL identifier: '{0}'")]
    InvalidIdentifier(String),

    /// An order specification was not `column` or `column ASC|DESC`.
    #[error("invalid order specification: '{0}'")]
    InvalidOrderSpec(String),

    /// Count-query derivation found no FROM keyword in the base statement.
    #[error("base query must contain a FROM clause")]
    MissingFromClause,
}

/// Result type alias for sybil operations.
pub type SybilResult<T> = Result<T, SybilError>;
