//! Decode configuration.
//!
//! The original system carried several near-identical service variants that
//! differed only in stage count, radix, resolution, and modulus. Here those
//! differences are plain configuration values on [`DecodeConfig`], consumed
//! by a single decoder.

use crate::cdf::CdfVariant;
use crate::stage::{ScanBound, SplitPolicy};
use crate::types::{DecodeError, Result};

/// Which composition strategy turns stage probabilities into an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionMode {
    /// Single-stage direct scaling onto `[0, range_size)`.
    Direct {
        /// Size of the output range.
        range_size: u64,
    },
    /// Two-level coarse/fine composition with per-level modulus `mm`,
    /// yielding an index in `[0, mm²)`.
    CoarseFine {
        /// Per-level modulus.
        mm: u64,
    },
    /// N-stage base-`radix` composition interpolated onto `[0, resolution)`.
    MixedRadix {
        /// Positional radix for the stage digits.
        radix: u64,
        /// Target table size.
        resolution: u64,
    },
}

/// Full configuration for one decode call.
///
/// # Examples
/// ```
/// use decoder_core::config::DecodeConfig;
///
/// let config = DecodeConfig::mixed_radix(10, 9, 3_401_286_407);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Number of independent stages the buffer is split into.
    pub num_stages: usize,
    /// Assignment rule from bit position to stage.
    pub policy: SplitPolicy,
    /// How far the splitter scans into the buffer.
    pub bound: ScanBound,
    /// Which CDF approximation maps z-scores to probabilities.
    pub variant: CdfVariant,
    /// Composition strategy and its parameters.
    pub mode: CompositionMode,
}

impl DecodeConfig {
    /// Single-stage direct scaling onto `[0, range_size)`.
    pub fn direct(range_size: u64) -> Self {
        Self {
            num_stages: 1,
            policy: SplitPolicy::RoundRobin,
            bound: ScanBound::default(),
            variant: CdfVariant::default(),
            mode: CompositionMode::Direct { range_size },
        }
    }

    /// Coarse/fine composition over the two parity sub-streams.
    pub fn coarse_fine(mm: u64) -> Self {
        Self {
            num_stages: 2,
            policy: SplitPolicy::Parity,
            bound: ScanBound::default(),
            variant: CdfVariant::default(),
            mode: CompositionMode::CoarseFine { mm },
        }
    }

    /// N-stage mixed-radix composition onto an arbitrary resolution.
    pub fn mixed_radix(num_stages: usize, radix: u64, resolution: u64) -> Self {
        Self {
            num_stages,
            policy: SplitPolicy::RoundRobin,
            bound: ScanBound::default(),
            variant: CdfVariant::default(),
            mode: CompositionMode::MixedRadix { radix, resolution },
        }
    }

    /// Select the CDF approximation.
    pub fn with_variant(mut self, variant: CdfVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Select the scan bound.
    pub fn with_bound(mut self, bound: ScanBound) -> Self {
        self.bound = bound;
        self
    }

    /// Check the configuration for internal consistency.
    ///
    /// # Errors
    /// - [`DecodeError::ZeroStages`] for a zero stage count.
    /// - [`DecodeError::StageCountMismatch`] when the mode expects a
    ///   different stage count (direct: 1, coarse/fine: 2).
    /// - [`DecodeError::ParityStageCount`] for a parity split that is not
    ///   two stages.
    /// - [`DecodeError::ZeroRange`], [`DecodeError::ZeroModulus`],
    ///   [`DecodeError::InvalidRadix`], [`DecodeError::ZeroResolution`] for
    ///   degenerate mode parameters.
    pub fn validate(&self) -> Result<()> {
        if self.num_stages == 0 {
            return Err(DecodeError::ZeroStages);
        }
        if self.policy == SplitPolicy::Parity && self.num_stages != 2 {
            return Err(DecodeError::ParityStageCount {
                got: self.num_stages,
            });
        }
        match self.mode {
            CompositionMode::Direct { range_size } => {
                if self.num_stages != 1 {
                    return Err(DecodeError::StageCountMismatch {
                        expected: 1,
                        got: self.num_stages,
                    });
                }
                if range_size == 0 {
                    return Err(DecodeError::ZeroRange);
                }
            }
            CompositionMode::CoarseFine { mm } => {
                if self.num_stages != 2 {
                    return Err(DecodeError::StageCountMismatch {
                        expected: 2,
                        got: self.num_stages,
                    });
                }
                if mm == 0 {
                    return Err(DecodeError::ZeroModulus);
                }
            }
            CompositionMode::MixedRadix { radix, resolution } => {
                if radix < 2 {
                    return Err(DecodeError::InvalidRadix { got: radix });
                }
                if resolution == 0 {
                    return Err(DecodeError::ZeroResolution);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_constructor_validates() {
        assert!(DecodeConfig::direct(1024).validate().is_ok());
    }

    #[test]
    fn test_coarse_fine_constructor_validates() {
        let config = DecodeConfig::coarse_fine(32);
        assert_eq!(config.num_stages, 2);
        assert_eq!(config.policy, SplitPolicy::Parity);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_mixed_radix_constructor_validates() {
        assert!(DecodeConfig::mixed_radix(10, 9, 3_401_286_407)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_direct_with_extra_stages_rejected() {
        let mut config = DecodeConfig::direct(1024);
        config.num_stages = 3;
        assert_eq!(
            config.validate().unwrap_err(),
            DecodeError::StageCountMismatch {
                expected: 1,
                got: 3
            }
        );
    }

    #[test]
    fn test_degenerate_parameters_rejected() {
        assert_eq!(
            DecodeConfig::direct(0).validate().unwrap_err(),
            DecodeError::ZeroRange
        );
        assert_eq!(
            DecodeConfig::coarse_fine(0).validate().unwrap_err(),
            DecodeError::ZeroModulus
        );
        assert_eq!(
            DecodeConfig::mixed_radix(4, 1, 100).validate().unwrap_err(),
            DecodeError::InvalidRadix { got: 1 }
        );
        assert_eq!(
            DecodeConfig::mixed_radix(4, 9, 0).validate().unwrap_err(),
            DecodeError::ZeroResolution
        );
    }

    #[test]
    fn test_builder_style_overrides() {
        let config = DecodeConfig::direct(1024)
            .with_variant(CdfVariant::ErfPolynomial)
            .with_bound(ScanBound::TruncateLast);
        assert_eq!(config.variant, CdfVariant::ErfPolynomial);
        assert_eq!(config.bound, ScanBound::TruncateLast);
    }
}
