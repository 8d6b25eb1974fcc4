//! Words command implementation
//!
//! Decodes a sequence of indices and resolves each against a fixed-order
//! word list, one independent entropy slice per word.

use tracing::info;

use adapter_lexicon::WordTable;
use decoder_core::cdf::CdfVariant;
use decoder_core::config::DecodeConfig;
use decoder_core::decode::decode_many;

use crate::{CliError, EntropyArgs, Result};

/// Run the words command
pub fn run(
    entropy: &EntropyArgs,
    wordlist: &str,
    count: usize,
    stages: usize,
    radix: u64,
    variant: CdfVariant,
) -> Result<()> {
    if !std::path::Path::new(wordlist).exists() {
        return Err(CliError::FileNotFound(wordlist.to_string()));
    }
    let table = WordTable::from_path(wordlist)?;
    if table.is_empty() {
        return Err(CliError::InvalidArgument(format!(
            "word list {} is empty",
            wordlist
        )));
    }

    // The word table is the target resolution: every index the composer can
    // produce maps to exactly one word.
    let config =
        DecodeConfig::mixed_radix(stages, radix, table.len() as u64).with_variant(variant);
    config.validate()?;

    let bytes = super::acquire_entropy(entropy)?;
    info!(
        bytes = bytes.len(),
        words = count,
        table = table.len(),
        "picking words"
    );

    let indices = decode_many(&bytes, &config, count)?;
    for index in indices {
        println!("{}", table.word_at(index)?);
    }

    Ok(())
}
