//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod decode;
pub mod words;

use adapter_entropy::{EntropySource, FixedSource, PseudoSource};

use crate::{CliError, EntropyArgs, Result};

/// Resolve the entropy arguments to a concrete byte buffer.
///
/// Hex and file sources hand over their whole buffer; the pseudo fallback
/// draws `args.bytes` from the seeded generator.
pub(crate) fn acquire_entropy(args: &EntropyArgs) -> Result<Vec<u8>> {
    if let Some(hex) = &args.hex {
        let bytes = parse_hex(hex)?;
        let len = bytes.len();
        let mut source = FixedSource::new("hex", bytes);
        return Ok(source.fetch(len)?);
    }
    if let Some(path) = &args.file {
        if !std::path::Path::new(path).exists() {
            return Err(CliError::FileNotFound(path.clone()));
        }
        let bytes = std::fs::read(path)?;
        let len = bytes.len();
        let mut source = FixedSource::new(path.as_str(), bytes);
        return Ok(source.fetch(len)?);
    }
    if let Some(seed) = args.pseudo_seed {
        let mut source = PseudoSource::from_seed(seed);
        return Ok(source.fetch(args.bytes)?);
    }
    Err(CliError::InvalidArgument(
        "no entropy source given: use --hex, --file, or --pseudo-seed".to_string(),
    ))
}

/// Decode a hex string (optionally `0x`-prefixed) into bytes.
pub(crate) fn parse_hex(hex: &str) -> Result<Vec<u8>> {
    let trimmed = hex.trim().trim_start_matches("0x");
    if trimmed.len() % 2 != 0 {
        return Err(CliError::InvalidArgument(format!(
            "hex string has odd length {}",
            trimmed.len()
        )));
    }
    (0..trimmed.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&trimmed[i..i + 2], 16).map_err(|_| {
                CliError::InvalidArgument(format!("invalid hex at offset {}: {}", i, trimmed))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("deadBEEF").unwrap(), vec![0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(parse_hex("0x00ff").unwrap(), vec![0x00, 0xFF]);
        assert!(parse_hex("abc").is_err());
        assert!(parse_hex("zz").is_err());
    }

    #[test]
    fn test_acquire_entropy_from_hex() {
        let args = EntropyArgs {
            hex: Some("a5a5a5a5".to_string()),
            file: None,
            pseudo_seed: None,
            bytes: 8192,
        };
        assert_eq!(acquire_entropy(&args).unwrap(), vec![0xA5; 4]);
    }

    #[test]
    fn test_acquire_entropy_requires_a_source() {
        let args = EntropyArgs {
            hex: None,
            file: None,
            pseudo_seed: None,
            bytes: 8192,
        };
        assert!(matches!(
            acquire_entropy(&args),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_acquire_entropy_pseudo_is_reproducible() {
        let args = EntropyArgs {
            hex: None,
            file: None,
            pseudo_seed: Some(42),
            bytes: 64,
        };
        assert_eq!(acquire_entropy(&args).unwrap(), acquire_entropy(&args).unwrap());
    }
}
