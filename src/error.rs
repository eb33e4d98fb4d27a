//! Error types for the layout engine boundary.
//!
//! Layout analysis itself never fails: ambiguous geometry degrades to a
//! coarser classification. Errors only arise when checking caller input or
//! configuration, and when loading words from JSON.

/// Result type alias for layout engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur at the layout engine boundary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A word violates the engine's input invariants
    #[error("Invalid input: word {index}: {reason}")]
    InvalidInput {
        /// Position of the offending word in the caller's collection
        index: usize,
        /// What is wrong with it
        reason: String,
    },

    /// A tuning constant is out of range
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
