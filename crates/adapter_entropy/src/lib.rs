//! # adapter_entropy: Entropy Source Adapters
//!
//! ## Layer A (Adapter) Role
//!
//! The decoder kernel consumes an already-complete byte buffer; acquiring
//! that buffer is this layer's job. The contract is deliberately narrow:
//! a source either returns the exact number of bytes requested or fails
//! explicitly, before any decoding begins. Retry, backoff, and timeout
//! policy live with the source implementation, never in the kernel.
//!
//! Two implementations are provided:
//! - [`FixedSource`]: hands out one caller-supplied buffer, then reports
//!   exhaustion. Models a hardware draw that has already happened.
//! - [`PseudoSource`]: a seeded deterministic generator for offline testing
//!   when no hardware source is reachable.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use thiserror::Error;
use tracing::debug;

/// Errors from entropy acquisition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntropyError {
    /// The source cannot supply the requested number of bytes.
    #[error("Entropy source exhausted: requested {requested} bytes, {available} available")]
    Exhausted {
        /// Bytes requested by the caller.
        requested: usize,
        /// Bytes the source could still supply.
        available: usize,
    },

    /// Acquisition from the underlying device failed.
    #[error("Acquisition failed on device {device}: {reason}")]
    Acquisition {
        /// Identifier of the device or endpoint.
        device: String,
        /// Human-readable failure description.
        reason: String,
    },
}

/// A supplier of raw random bytes.
///
/// `fetch` returns exactly `len` bytes or an error; partial buffers are
/// never returned.
pub trait EntropySource {
    /// Fetch exactly `len` bytes of entropy.
    fn fetch(&mut self, len: usize) -> Result<Vec<u8>, EntropyError>;

    /// Identifier of the underlying device, used in logs and errors.
    fn device_id(&self) -> &str;
}

/// One-shot source over a buffer acquired elsewhere.
///
/// Draws consume the buffer front to back; asking for more than remains is
/// an explicit [`EntropyError::Exhausted`], matching the decoder's contract
/// that a buffer is complete or the acquisition has failed.
///
/// # Examples
/// ```
/// use adapter_entropy::{EntropySource, FixedSource};
///
/// let mut source = FixedSource::new("QWR4E004", vec![1, 2, 3, 4]);
/// assert_eq!(source.fetch(3).unwrap(), vec![1, 2, 3]);
/// assert!(source.fetch(2).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct FixedSource {
    device: String,
    buffer: Vec<u8>,
    offset: usize,
}

impl FixedSource {
    /// Wrap an already-acquired buffer.
    pub fn new(device: impl Into<String>, buffer: Vec<u8>) -> Self {
        Self {
            device: device.into(),
            buffer,
            offset: 0,
        }
    }

    /// Bytes still available to fetch.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.offset
    }
}

impl EntropySource for FixedSource {
    fn fetch(&mut self, len: usize) -> Result<Vec<u8>, EntropyError> {
        if len > self.remaining() {
            return Err(EntropyError::Exhausted {
                requested: len,
                available: self.remaining(),
            });
        }
        let bytes = self.buffer[self.offset..self.offset + len].to_vec();
        self.offset += len;
        debug!(device = %self.device, len, "fetched fixed entropy");
        Ok(bytes)
    }

    fn device_id(&self) -> &str {
        &self.device
    }
}

/// Seeded pseudo-random fallback source for offline testing.
///
/// The same seed always produces the same byte stream, so decodes driven by
/// this source are reproducible end to end.
///
/// # Examples
/// ```
/// use adapter_entropy::{EntropySource, PseudoSource};
///
/// let mut a = PseudoSource::from_seed(42);
/// let mut b = PseudoSource::from_seed(42);
/// assert_eq!(a.fetch(16).unwrap(), b.fetch(16).unwrap());
/// ```
pub struct PseudoSource {
    inner: StdRng,
    seed: u64,
}

impl PseudoSource {
    /// Create a source initialised with the given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed used for initialisation.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl EntropySource for PseudoSource {
    fn fetch(&mut self, len: usize) -> Result<Vec<u8>, EntropyError> {
        let mut bytes = vec![0u8; len];
        self.inner.fill_bytes(&mut bytes);
        debug!(seed = self.seed, len, "generated pseudo entropy");
        Ok(bytes)
    }

    fn device_id(&self) -> &str {
        "pseudo"
    }
}
