//! Drill errors.

use thiserror::Error;

/// Errors raised while preparing or running a drill.
#[derive(Debug, Error)]
pub enum DrillError {
    #[error("Unknown drill: {0} (run `dsa list` for the available drills)")]
    UnknownDrill(String),

    #[error("Invalid element {token:?}: {source}")]
    InvalidElement {
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Rotation offset must not be negative, got {0}")]
    NegativeOffset(i64),

    #[error("Drill {0} needs a rotation offset (--offset)")]
    MissingOffset(&'static str),
}

/// Result type for drill operations.
pub type DrillResult<T> = Result<T, DrillError>;
