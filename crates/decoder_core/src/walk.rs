//! Random-walk evaluation and z-score normalisation.
//!
//! Each stage of `n` bits is modelled as a symmetric ±1 random walk: every
//! set bit is a +1 step, every clear bit a −1 step. The terminal coordinate
//! is `ct = 2·ones − n`, and under the fair-coin null hypothesis its
//! standard deviation is `sqrt(n)`, giving the z-score `ct / sqrt(n)`.

use crate::stage::StageStat;
use crate::types::{DecodeError, Result};

/// One stage's journey through the pipeline: terminal coordinate, z-score,
/// and the uniform variate produced by the CDF approximator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkResult {
    /// Terminal coordinate of the ±1 walk.
    pub ct: i64,
    /// Terminal coordinate normalised by `sqrt(n)`.
    pub z: f64,
    /// Approximate `Φ(z)`, a uniform-like variate in (0, 1).
    pub p: f64,
}

/// Terminal coordinate `2·ones − n` of an `n`-step ±1 walk.
///
/// The result lies in `[−n, n]` and has the same parity as `n`; that is a
/// natural consequence of the walk model, not something enforced here.
///
/// # Errors
/// [`DecodeError::OnesExceedBits`] if `ones > n`; the walk is undefined.
#[inline]
pub fn terminal_coordinate(n: usize, ones: usize) -> Result<i64> {
    if ones > n {
        return Err(DecodeError::OnesExceedBits { n, ones });
    }
    Ok(2 * ones as i64 - n as i64)
}

/// Z-score `ct / sqrt(n)` of a terminal coordinate.
///
/// # Errors
/// [`DecodeError::EmptyStage`] if `n == 0`; a zero-bit stage has no walk and
/// the division must fail explicitly rather than propagate NaN or infinity.
#[inline]
pub fn z_score(ct: i64, n: usize) -> Result<f64> {
    if n == 0 {
        return Err(DecodeError::EmptyStage { stage: 0 });
    }
    Ok(ct as f64 / (n as f64).sqrt())
}

/// Terminal coordinate and z-score for one stage in a single call.
#[inline]
pub fn evaluate_stage(stat: StageStat) -> Result<(i64, f64)> {
    let ct = terminal_coordinate(stat.n, stat.ones)?;
    let z = z_score(ct, stat.n)?;
    Ok((ct, z))
}
