//! Error types for structured error handling.
//!
//! This module provides `DecodeError`, the single error type of the decoder
//! kernel. Every failure mode is detected before an index is produced; the
//! decoder never returns a partially computed or silently clamped result.

use thiserror::Error;

/// Categorised decoder errors.
///
/// Two broad families, matching the decoder's failure semantics:
/// - bounds errors: a bit index past the end of the buffer;
/// - configuration errors: stage/bit-count mismatches, empty stages,
///   probabilities outside the open interval (0, 1), zero-sized output
///   ranges, and buffer splits that do not divide evenly.
///
/// # Examples
/// ```
/// use decoder_core::types::DecodeError;
///
/// let err = DecodeError::EmptyStage { stage: 3 };
/// assert_eq!(format!("{}", err), "Stage 3 received no bits");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// Bit index past the end of the buffer.
    #[error("Bit index {index} out of range for buffer of {len} bits")]
    BitIndexOutOfRange {
        /// The requested bit position.
        index: usize,
        /// Total number of bits in the buffer.
        len: usize,
    },

    /// Stage count of zero makes the split undefined.
    #[error("Stage count must be at least 1")]
    ZeroStages,

    /// Parity split always produces exactly two stages.
    #[error("Parity split requires a stage count of 2, got {got}")]
    ParityStageCount {
        /// The configured stage count.
        got: usize,
    },

    /// A stage ended up with no bits assigned to it.
    #[error("Stage {stage} received no bits")]
    EmptyStage {
        /// Index of the empty stage.
        stage: usize,
    },

    /// More set bits than bits in the stage; the walk model is undefined.
    #[error("Stage has {ones} set bits but only {n} bits in total")]
    OnesExceedBits {
        /// Number of bits in the stage.
        n: usize,
        /// Number of set bits reported for the stage.
        ones: usize,
    },

    /// A composed probability left the open interval (0, 1).
    #[error("Probability {p} for stage {stage} outside open interval (0, 1)")]
    ProbabilityOutOfRange {
        /// Index of the offending stage.
        stage: usize,
        /// The probability value.
        p: f64,
    },

    /// Direct scaling against an empty output range.
    #[error("Output range size must be at least 1")]
    ZeroRange,

    /// Coarse/fine composition with a zero per-level modulus.
    #[error("Coarse/fine modulus must be at least 1")]
    ZeroModulus,

    /// Mixed-radix composition with radix zero or one.
    #[error("Mixed-radix composition requires a radix of at least 2, got {got}")]
    InvalidRadix {
        /// The configured radix.
        got: u64,
    },

    /// Mixed-radix composition against an empty target resolution.
    #[error("Target resolution must be at least 1")]
    ZeroResolution,

    /// `radix^num_stages` does not fit the composer's integer arithmetic.
    #[error("Radix {radix} to the power {stages} overflows the composer")]
    RadixOverflow {
        /// The configured radix.
        radix: u64,
        /// The configured stage count.
        stages: usize,
    },

    /// Composer was handed a different number of probabilities than stages.
    #[error("Expected {expected} stage probabilities, got {got}")]
    StageCountMismatch {
        /// Stage count from the configuration.
        expected: usize,
        /// Number of probabilities supplied.
        got: usize,
    },

    /// The buffer cannot be divided into the requested independent slices.
    #[error("Buffer of {len} bytes does not divide into {count} non-empty slices")]
    BufferSplitMismatch {
        /// Buffer length in bytes.
        len: usize,
        /// Requested number of independent indices.
        count: usize,
    },
}
