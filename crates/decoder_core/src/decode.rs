//! Decoder façade: one entropy buffer in, one or more indices out.
//!
//! The pipeline is pure and single-threaded: every step is a total or
//! explicitly failing function of its inputs, so concurrent decode calls
//! need no coordination. Acquisition of the byte buffer (and any retry or
//! timeout policy) belongs entirely to the caller.

use crate::bits::BitBuffer;
use crate::cdf::norm_cdf;
use crate::compose::{coarse_fine_index, direct_index, mixed_radix_index};
use crate::config::{CompositionMode, DecodeConfig};
use crate::stage::split;
use crate::types::{DecodeError, Result};
use crate::walk::{evaluate_stage, WalkResult};

/// Run the statistical pipeline up to the composer: one [`WalkResult`] per
/// stage, in stage order.
///
/// Exposed separately so callers can inspect the intermediate terminal
/// coordinates, z-scores, and probabilities of a decode.
pub fn stage_walks(bytes: &[u8], config: &DecodeConfig) -> Result<Vec<WalkResult>> {
    config.validate()?;

    let bits = BitBuffer::from_bytes(bytes.to_vec());
    let stats = split(&bits, config.num_stages, config.policy, config.bound)?;

    let mut walks = Vec::with_capacity(stats.len());
    for stat in stats {
        let (ct, z) = evaluate_stage(stat)?;
        let p = norm_cdf(z, config.variant);
        walks.push(WalkResult { ct, z, p });
    }
    Ok(walks)
}

/// Decode one integer index from an entropy buffer.
///
/// # Errors
/// Any configuration error from [`DecodeConfig::validate`], the stage
/// splitter, or the composer; the decoder never substitutes a default
/// index.
///
/// # Examples
/// ```
/// use decoder_core::config::DecodeConfig;
/// use decoder_core::decode::decode;
///
/// let entropy = vec![0b0101_1010; 64];
/// let index = decode(&entropy, &DecodeConfig::direct(1024)).unwrap();
/// assert!(index < 1024);
/// ```
pub fn decode(bytes: &[u8], config: &DecodeConfig) -> Result<u64> {
    let walks = stage_walks(bytes, config)?;
    let ps: Vec<f64> = walks.iter().map(|w| w.p).collect();

    match config.mode {
        CompositionMode::Direct { range_size } => direct_index(ps[0], range_size),
        CompositionMode::CoarseFine { mm } => coarse_fine_index(ps[0], ps[1], mm),
        CompositionMode::MixedRadix { radix, resolution } => {
            Ok(mixed_radix_index(&ps, radix, resolution)?.index)
        }
    }
}

/// Decode `count` independent indices from one entropy draw.
///
/// The buffer is divided into `count` equal contiguous slices, each decoded
/// on its own; the caller sizes the buffer, so a remainder is a
/// configuration error rather than silently dropped bytes.
///
/// # Errors
/// [`DecodeError::BufferSplitMismatch`] if `count == 0` or `bytes.len()` is
/// not a positive multiple of `count`, plus anything [`decode`] returns.
pub fn decode_many(bytes: &[u8], config: &DecodeConfig, count: usize) -> Result<Vec<u64>> {
    if count == 0 || bytes.len() % count != 0 || bytes.len() / count == 0 {
        return Err(DecodeError::BufferSplitMismatch {
            len: bytes.len(),
            count,
        });
    }

    let chunk = bytes.len() / count;
    bytes
        .chunks_exact(chunk)
        .map(|slice| decode(slice, config))
        .collect()
}
