//! CLI error types
//!
//! Wraps the library-layer errors in a single binary-boundary type so every
//! command handler returns the same `Result`.

use thiserror::Error;

/// Errors surfaced by the CLI.
#[derive(Error, Debug)]
pub enum CliError {
    /// Decoder kernel error.
    #[error("Decode error: {0}")]
    Decode(#[from] decoder_core::DecodeError),

    /// Entropy acquisition error.
    #[error("Entropy error: {0}")]
    Entropy(#[from] adapter_entropy::EntropyError),

    /// Word/domain table error.
    #[error("Lexicon error: {0}")]
    Lexicon(#[from] adapter_lexicon::LexiconError),

    /// A path argument pointed at a file that does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// A command-line argument combination the parser cannot reject itself.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Underlying I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialisation failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
