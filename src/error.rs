//! Error types for the illustration pipeline and the data-fetch seam.

use thiserror::Error;

use crate::model::OutPoint;

/// Errors raised while turning transaction data into a scene.
#[derive(Debug, Error)]
pub enum IllustrationError {
    /// A cell capacity is not a decimal or `0x`-prefixed hex integer.
    #[error("invalid capacity {value:?}: expected a decimal or 0x-prefixed hex integer")]
    InvalidCapacity { value: String },

    /// A string is not a formatted capacity label.
    #[error("invalid capacity label {0:?}")]
    InvalidLabel(String),

    #[error("invalid render config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Errors raised by a [`crate::resolve::TransactionSource`] or while
/// resolving a transaction's inputs.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("transaction {0} not found")]
    NotFound(String),

    /// The referenced transaction exists but has fewer outputs than the index.
    #[error("output {out_point} does not exist")]
    MissingOutput { out_point: OutPoint },

    #[error("failed to resolve {} input(s) of transaction {tx_hash}", .failures.len())]
    UnresolvedInputs {
        tx_hash: String,
        failures: Vec<InputFailure>,
    },

    #[error("transaction source failed: {0}")]
    Source(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// One input whose referenced output could not be looked up.
#[derive(Debug, Error)]
#[error("input #{index} ({previous_output}): {reason}")]
pub struct InputFailure {
    /// Position of the input in the transaction.
    pub index: usize,
    pub previous_output: OutPoint,
    #[source]
    pub reason: Box<ResolveError>,
}

pub type Result<T> = std::result::Result<T, IllustrationError>;
