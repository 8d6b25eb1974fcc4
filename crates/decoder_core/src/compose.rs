//! Index composition: turning uniform variates into bounded integers.
//!
//! Three strategies, selected by caller intent rather than type-level
//! polymorphism:
//! - direct scaling of a single probability onto an output range;
//! - coarse/fine two-level composition in base `mm`;
//! - N-stage mixed-radix composition with interpolation onto an arbitrary
//!   target resolution.
//!
//! All entry points validate every probability against the open interval
//! (0, 1) before producing anything; an out-of-range probability means a
//! degenerate stage upstream and is a configuration error, never something
//! to clamp silently.

use crate::types::{DecodeError, Result};

/// Raw and interpolated result of a mixed-radix composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixedRadixIndex {
    /// Positional base-`radix` number over all stage digits, in
    /// `[0, radix^num_stages)`.
    pub raw: u64,
    /// `raw` rescaled onto the target resolution, in `[0, resolution)`.
    pub index: u64,
}

/// Reject probabilities outside the open interval (0, 1).
#[inline]
fn check_probability(p: f64, stage: usize) -> Result<()> {
    if !(p > 0.0 && p < 1.0) {
        return Err(DecodeError::ProbabilityOutOfRange { stage, p });
    }
    Ok(())
}

/// Direct scaling of one probability onto `[0, range_size)`.
///
/// Computes `round(range_size · p)`. A probability close enough to 1 can
/// round to `range_size` itself, one past the intended bound; that single
/// boundary case is clamped to `range_size − 1` so the result always lies
/// in `[0, range_size)`.
///
/// # Errors
/// - [`DecodeError::ZeroRange`] if `range_size == 0`.
/// - [`DecodeError::ProbabilityOutOfRange`] if `p` is outside (0, 1).
///
/// # Examples
/// ```
/// use decoder_core::compose::direct_index;
///
/// // The 65536-bit reference walk: p ≈ 0.9479 over a 1024-word range.
/// let index = direct_index(0.9479, 1024).unwrap();
/// assert!((index as i64 - 970).abs() <= 1);
/// ```
pub fn direct_index(p: f64, range_size: u64) -> Result<u64> {
    if range_size == 0 {
        return Err(DecodeError::ZeroRange);
    }
    check_probability(p, 0)?;

    let index = (range_size as f64 * p).round() as u64;
    Ok(index.min(range_size - 1))
}

/// Coarse/fine two-level composition in base `mm`.
///
/// Treats `p_coarse` as the high-order digit and `p_fine` as the low-order
/// digit: `index = mm·floor(mm·p_coarse) + floor(mm·p_fine)`, an index in
/// `[0, mm²)`. The two probabilities come from the two interleaved parity
/// sub-streams of one buffer.
///
/// # Errors
/// - [`DecodeError::ZeroModulus`] if `mm == 0`.
/// - [`DecodeError::ProbabilityOutOfRange`] if either probability is
///   outside (0, 1); stage 0 is coarse, stage 1 fine.
///
/// # Examples
/// ```
/// use decoder_core::compose::coarse_fine_index;
///
/// let index = coarse_fine_index(0.5, 0.5, 32).unwrap();
/// assert_eq!(index, 528);
/// ```
pub fn coarse_fine_index(p_coarse: f64, p_fine: f64, mm: u64) -> Result<u64> {
    if mm == 0 {
        return Err(DecodeError::ZeroModulus);
    }
    check_probability(p_coarse, 0)?;
    check_probability(p_fine, 1)?;

    let high = (mm as f64 * p_coarse).floor() as u64;
    let low = (mm as f64 * p_fine).floor() as u64;
    Ok(mm * high + low)
}

/// N-stage mixed-radix composition with resolution interpolation.
///
/// Each probability becomes a base-`radix` digit `floor(radix·p[k])`, with
/// stage 0 the most significant. The positional number `raw` ranges over
/// `[0, radix^S)`; interpolation `floor(resolution · raw / radix^S)` then
/// addresses an arbitrary table size, at the cost of slight non-uniformity
/// when the resolution is not an exact multiple of `radix^S` (accepted, not
/// corrected).
///
/// Intermediate arithmetic is `u128`, so `resolution · raw` cannot overflow
/// for any capacity that itself fits 64 bits.
///
/// # Errors
/// - [`DecodeError::InvalidRadix`] if `radix < 2`.
/// - [`DecodeError::ZeroResolution`] if `resolution == 0`.
/// - [`DecodeError::StageCountMismatch`] if `ps` is empty.
/// - [`DecodeError::RadixOverflow`] if `radix^ps.len()` exceeds 2⁶⁴.
/// - [`DecodeError::ProbabilityOutOfRange`] if any probability is outside
///   (0, 1).
pub fn mixed_radix_index(ps: &[f64], radix: u64, resolution: u64) -> Result<MixedRadixIndex> {
    if radix < 2 {
        return Err(DecodeError::InvalidRadix { got: radix });
    }
    if resolution == 0 {
        return Err(DecodeError::ZeroResolution);
    }
    if ps.is_empty() {
        return Err(DecodeError::StageCountMismatch {
            expected: 1,
            got: 0,
        });
    }

    let stages = ps.len();
    let capacity: u128 = (radix as u128)
        .checked_pow(stages as u32)
        .filter(|&c| c <= (1u128 << 64))
        .ok_or(DecodeError::RadixOverflow { radix, stages })?;

    // Horner accumulation: stage 0 ends up most significant.
    let mut raw: u128 = 0;
    for (stage, &p) in ps.iter().enumerate() {
        check_probability(p, stage)?;
        let digit = (radix as f64 * p).floor() as u128;
        raw = raw * radix as u128 + digit;
    }

    let index = (resolution as u128 * raw / capacity) as u64;
    Ok(MixedRadixIndex {
        raw: raw as u64,
        index,
    })
}
