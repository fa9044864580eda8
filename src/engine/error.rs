//! Error taxonomy for the engine adapter.
//!
//! Every variant except export failures (which live in `io`) is
//! absorbed inside the adapter: `analyze` converts them into degraded
//! results instead of raising. The `Display` text of a variant is
//! exactly what lands in the result's warnings.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// No binding strategy produced a usable analysis entry point.
    #[error("engine unavailable: {cause}")]
    Unavailable { cause: String },

    /// A bound call failed: spawn error, non-zero exit, timeout.
    #[error("engine invocation failed: {cause}")]
    Invocation { cause: String },

    /// The engine responded, but the response is missing required
    /// structure.
    #[error("malformed engine output: {cause}")]
    MalformedOutput { cause: String },

    /// Input exceeded the configured size bound; the engine is never
    /// invoked for such input.
    #[error("source of {actual} characters exceeds the configured limit of {limit} characters")]
    InputTooLarge { actual: usize, limit: usize },

    /// Empty or whitespace-only input; the engine is never invoked.
    #[error("no code provided for analysis")]
    EmptyInput,
}

impl EngineError {
    pub fn unavailable(cause: impl Into<String>) -> Self {
        Self::Unavailable { cause: cause.into() }
    }

    pub fn invocation(cause: impl Into<String>) -> Self {
        Self::Invocation { cause: cause.into() }
    }

    pub fn malformed(cause: impl Into<String>) -> Self {
        Self::MalformedOutput { cause: cause.into() }
    }
}
