//! Stage splitting: partitioning a bit sequence into independent walks.
//!
//! Each stage is an independent subset of the entropy buffer, treated
//! downstream as its own random walk. Assignment is a pure function of the
//! bit position, so a split is fully determined by the buffer, the stage
//! count, the policy, and the scan bound.

use crate::bits::BitBuffer;
use crate::types::{DecodeError, Result};

/// Deterministic assignment rule from bit position to stage id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitPolicy {
    /// `stage = i mod num_stages`; stage sizes differ by at most one.
    #[default]
    RoundRobin,
    /// `stage = i mod 2`; exactly two stages (coarse/fine variant).
    Parity,
}

/// How far the splitter scans into the buffer.
///
/// The original system's multi-stage scans stopped one bit short of the
/// buffer end. Rather than silently reproducing that bound, it is an
/// explicit configuration choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanBound {
    /// Scan every bit of the buffer.
    #[default]
    Full,
    /// Scan `len - 1` bits, matching the historical loop bound.
    TruncateLast,
}

impl ScanBound {
    /// Number of bits scanned for a buffer of `len` bits.
    #[inline]
    pub fn scanned_bits(self, len: usize) -> usize {
        match self {
            ScanBound::Full => len,
            ScanBound::TruncateLast => len.saturating_sub(1),
        }
    }
}

/// Per-stage bit statistics, recomputed on every decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageStat {
    /// Number of bits assigned to this stage.
    pub n: usize,
    /// Number of set bits among them.
    pub ones: usize,
}

/// Partition the scanned bit positions into `num_stages` groups.
///
/// Round-robin cycles `0, 1, ..., num_stages - 1` across successive bit
/// positions, so every stage receives either `floor(len / num_stages)` or
/// `ceil(len / num_stages)` bits. Parity ignores stage counts other than 2
/// and alternates even/odd positions.
///
/// # Errors
/// - [`DecodeError::ZeroStages`] if `num_stages == 0`.
/// - [`DecodeError::ParityStageCount`] if `policy` is parity and
///   `num_stages != 2`.
/// - [`DecodeError::EmptyStage`] if any stage ends up with no bits; the
///   caller must size the buffer for the stage count it asks for.
pub fn split(
    bits: &BitBuffer,
    num_stages: usize,
    policy: SplitPolicy,
    bound: ScanBound,
) -> Result<Vec<StageStat>> {
    if num_stages == 0 {
        return Err(DecodeError::ZeroStages);
    }
    if policy == SplitPolicy::Parity && num_stages != 2 {
        return Err(DecodeError::ParityStageCount { got: num_stages });
    }

    let scanned = bound.scanned_bits(bits.len());
    let mut stats = vec![StageStat { n: 0, ones: 0 }; num_stages];

    for i in 0..scanned {
        let stage = match policy {
            SplitPolicy::RoundRobin => i % num_stages,
            SplitPolicy::Parity => i % 2,
        };
        stats[stage].n += 1;
        if bits.bit(i)? {
            stats[stage].ones += 1;
        }
    }

    if let Some(stage) = stats.iter().position(|s| s.n == 0) {
        return Err(DecodeError::EmptyStage { stage });
    }

    Ok(stats)
}
