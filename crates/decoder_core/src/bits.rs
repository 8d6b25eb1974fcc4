//! Bit-level view over a raw entropy buffer.
//!
//! [`BitBuffer`] wraps an externally acquired byte buffer as an immutable,
//! indexable bit sequence. Bit order is big-endian within each byte (most
//! significant bit first), consistent across all callers.

use crate::types::{DecodeError, Result};

/// Immutable ordered sequence of bits over an owned byte buffer.
///
/// Created fresh per decode call; the length is fixed at construction and
/// out-of-range access fails with [`DecodeError::BitIndexOutOfRange`].
///
/// # Examples
/// ```
/// use decoder_core::bits::BitBuffer;
///
/// let bits = BitBuffer::from_bytes(vec![0b1010_0000]);
/// assert_eq!(bits.len(), 8);
/// assert!(bits.bit(0).unwrap());
/// assert!(!bits.bit(1).unwrap());
/// assert_eq!(bits.count_ones(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitBuffer {
    bytes: Vec<u8>,
}

impl BitBuffer {
    /// Wrap a byte buffer as a bit sequence of `8 * bytes.len()` bits.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Number of bits in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Whether the buffer holds no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Bit at position `i`, most significant bit of each byte first.
    ///
    /// # Errors
    /// [`DecodeError::BitIndexOutOfRange`] if `i >= self.len()`.
    #[inline]
    pub fn bit(&self, i: usize) -> Result<bool> {
        if i >= self.len() {
            return Err(DecodeError::BitIndexOutOfRange {
                index: i,
                len: self.len(),
            });
        }
        let byte = self.bytes[i / 8];
        let shift = 7 - (i % 8);
        Ok((byte >> shift) & 1 == 1)
    }

    /// Population count over the whole buffer.
    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Borrow the underlying bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
