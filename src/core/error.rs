//! Crate-wide error type.

use thiserror::Error;

/// Errors raised by the game core and the console glue.
///
/// `InvalidInput` never escapes a re-prompt loop; `InvalidConfiguration`
/// is fatal before any game state exists; `InvalidArgument` marks a broken
/// scoring contract and is fatal wherever it surfaces.
#[derive(Debug, Error)]
pub enum PigError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid input: {0:?}")]
    InvalidInput(String),

    #[error("input closed while waiting for a response")]
    InputClosed,

    #[error("match is already over")]
    MatchOver,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode event: {0}")]
    EventLog(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type PigResult<T> = Result<T, PigError>;
