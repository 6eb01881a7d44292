//! Error types for the core module.

use crate::core::generator::GenerationError;

/// Core error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The prompt was empty or whitespace-only.
    #[error("empty prompt")]
    EmptyPrompt,

    /// A generation request is already outstanding.
    #[error("a generation is already in progress")]
    GenerationInFlight,

    /// The generation backend failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// Platform share was unavailable or rejected.
    #[error("share failed: {0}")]
    Share(String),

    /// Clipboard write failed.
    #[error("clipboard error: {0}")]
    Clipboard(String),

    /// A tab identifier outside the known set of views.
    #[error("unknown view: {0}")]
    UnknownView(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
