//! Error taxonomy for digest computation

#[cfg(not(feature = "std"))]
use alloc::string::String;

use thiserror::Error;

use crate::algorithm::Algorithm;

/// Errors raised while building a registry or computing a digest
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input too short to read the first selector from; nothing was hashed
    #[error("input is {len} bytes, at least {min} are required to select the first algorithm")]
    InvalidInputLength { len: usize, min: usize },

    /// A primitive could not complete; the whole digest is abandoned
    #[error("{algorithm} failed in round {round}: {source}")]
    PrimitiveFailure {
        algorithm: Algorithm,
        round: usize,
        #[source]
        source: PrimitiveError,
    },

    /// Registry was built without an implementation for this selector
    #[error("no primitive registered for {0} (selector {sel})", sel = .0.selector())]
    MissingPrimitive(Algorithm),

    /// Name or number that does not match any of the sixteen algorithms
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Failure reported by a single hash primitive
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct PrimitiveError {
    reason: String,
}

impl PrimitiveError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Result type for digest operations
pub type Result<T> = core::result::Result<T, Error>;
