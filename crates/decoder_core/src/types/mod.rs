//! Shared value types for the decoder kernel.

mod error;

pub use error::DecodeError;

/// Convenience result alias for decoder operations.
pub type Result<T> = std::result::Result<T, DecodeError>;
