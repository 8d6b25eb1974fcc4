//! # decoder_core: Entropy-to-Index Decoder Kernel
//!
//! ## Layer D (Kernel) Role
//!
//! decoder_core converts a buffer of physically sourced random bits into one
//! or more bounded integer indices, used downstream to pick words or records
//! from fixed-size tables. The pipeline:
//!
//! 1. [`bits::BitBuffer`] — indexable bit view over the raw bytes
//! 2. [`stage::split`] — deterministic partition into independent stages
//! 3. [`walk`] — per-stage ±1 random-walk terminal coordinate and z-score
//! 4. [`cdf`] — normal CDF approximation, z-score to uniform variate
//! 5. [`compose`] — direct, coarse/fine, or mixed-radix index composition
//! 6. [`decode`] — the parameterised façade tying the steps together
//!
//! ## Zero Dependency Principle
//!
//! The kernel depends on no other workspace crates and keeps external
//! dependencies minimal:
//! - num-traits: generic numeric computation for the CDF approximations
//! - thiserror: structured error types
//!
//! ## Purity
//!
//! Every operation is a total or explicitly failing function of its inputs:
//! no I/O, no shared mutable state, no retries. Concurrent decode calls need
//! no coordination; each call owns its buffer and produces fresh values.
//!
//! ## Usage Example
//!
//! ```rust
//! use decoder_core::config::DecodeConfig;
//! use decoder_core::decode::decode;
//!
//! // 8192 bytes of entropy, one 65536-bit walk, 1024-word output range.
//! let entropy = vec![0b0101_1010u8; 8192];
//! let index = decode(&entropy, &DecodeConfig::direct(1024)).unwrap();
//! assert!(index < 1024);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod bits;
pub mod cdf;
pub mod compose;
pub mod config;
pub mod decode;
pub mod stage;
pub mod types;
pub mod walk;

pub use config::{CompositionMode, DecodeConfig};
pub use decode::{decode, decode_many, stage_walks};
pub use types::{DecodeError, Result};
