//! Decode command implementation
//!
//! Runs the full pipeline from an entropy buffer to one or more indices.

use serde::Serialize;
use tracing::info;

use decoder_core::cdf::CdfVariant;
use decoder_core::config::{CompositionMode, DecodeConfig};
use decoder_core::decode::{decode, stage_walks};
use decoder_core::stage::ScanBound;

use crate::{CliError, EntropyArgs, Result};

/// Per-stage detail included in JSON output.
#[derive(Serialize)]
struct StageReport {
    ct: i64,
    z: f64,
    p: f64,
}

/// Full decode report for JSON output.
#[derive(Serialize)]
struct DecodeReport {
    indices: Vec<u64>,
    stages: Vec<Vec<StageReport>>,
}

/// Build a composition mode from the mutually exclusive mode flags.
fn resolve_mode(
    range: Option<u64>,
    mm: Option<u64>,
    mixed: Option<(u64, u64)>,
) -> Result<CompositionMode> {
    match (range, mm, mixed) {
        (Some(range_size), None, None) => Ok(CompositionMode::Direct { range_size }),
        (None, Some(mm), None) => Ok(CompositionMode::CoarseFine { mm }),
        (None, None, Some((radix, resolution))) => {
            Ok(CompositionMode::MixedRadix { radix, resolution })
        }
        _ => Err(CliError::InvalidArgument(
            "select exactly one mode: --range, --mm, or --radix with --resolution".to_string(),
        )),
    }
}

/// Run the decode command
#[allow(clippy::too_many_arguments)]
pub fn run(
    entropy: &EntropyArgs,
    range: Option<u64>,
    mm: Option<u64>,
    mixed: Option<(u64, u64)>,
    stages: Option<usize>,
    variant: CdfVariant,
    scan: ScanBound,
    count: usize,
    json: bool,
) -> Result<()> {
    let mode = resolve_mode(range, mm, mixed)?;

    // Direct and coarse/fine modes fix their own stage counts (1 and 2);
    // accepting --stages there would silently drop it.
    if stages.is_some() && !matches!(mode, CompositionMode::MixedRadix { .. }) {
        return Err(CliError::InvalidArgument(
            "--stages applies only to mixed-radix mode (--radix/--resolution)".to_string(),
        ));
    }

    let config = match mode {
        CompositionMode::Direct { range_size } => DecodeConfig::direct(range_size),
        CompositionMode::CoarseFine { mm } => DecodeConfig::coarse_fine(mm),
        CompositionMode::MixedRadix { radix, resolution } => {
            DecodeConfig::mixed_radix(stages.unwrap_or(10), radix, resolution)
        }
    }
    .with_variant(variant)
    .with_bound(scan);
    config.validate()?;

    let bytes = super::acquire_entropy(entropy)?;
    info!(
        bytes = bytes.len(),
        stages = config.num_stages,
        count,
        "decoding"
    );

    if count == 0 || bytes.len() % count != 0 || bytes.len() / count == 0 {
        return Err(CliError::InvalidArgument(format!(
            "{} bytes cannot be split into {} non-empty equal draws",
            bytes.len(),
            count
        )));
    }
    let chunk = bytes.len() / count;

    let mut indices = Vec::with_capacity(count);
    let mut stage_reports = Vec::with_capacity(count);
    for slice in bytes.chunks_exact(chunk) {
        indices.push(decode(slice, &config)?);
        if json {
            let walks = stage_walks(slice, &config)?;
            stage_reports.push(
                walks
                    .iter()
                    .map(|w| StageReport {
                        ct: w.ct,
                        z: w.z,
                        p: w.p,
                    })
                    .collect(),
            );
        }
    }

    if json {
        let report = DecodeReport {
            indices,
            stages: stage_reports,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for index in indices {
            println!("{}", index);
        }
    }

    info!(policy = ?config.policy, "decode complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_mode_direct() {
        let mode = resolve_mode(Some(1024), None, None).unwrap();
        assert_eq!(mode, CompositionMode::Direct { range_size: 1024 });
    }

    #[test]
    fn test_resolve_mode_mixed() {
        let mode = resolve_mode(None, None, Some((9, 3_401_286_407))).unwrap();
        assert_eq!(
            mode,
            CompositionMode::MixedRadix {
                radix: 9,
                resolution: 3_401_286_407
            }
        );
    }

    #[test]
    fn test_resolve_mode_rejects_ambiguity() {
        assert!(resolve_mode(Some(10), Some(32), None).is_err());
        assert!(resolve_mode(None, None, None).is_err());
    }

    fn hex_args(hex: &str) -> EntropyArgs {
        EntropyArgs {
            hex: Some(hex.to_string()),
            file: None,
            pseudo_seed: None,
            bytes: 8192,
        }
    }

    #[test]
    fn test_empty_buffer_is_an_error_not_a_panic() {
        let result = run(
            &hex_args(""),
            Some(1024),
            None,
            None,
            None,
            CdfVariant::Rational,
            ScanBound::Full,
            1,
            false,
        );
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_stages_rejected_outside_mixed_radix() {
        for (range, mm) in [(Some(1024), None), (None, Some(32))] {
            let result = run(
                &hex_args(&"a5".repeat(256)),
                range,
                mm,
                None,
                Some(4),
                CdfVariant::Rational,
                ScanBound::Full,
                1,
                false,
            );
            assert!(matches!(result, Err(CliError::InvalidArgument(_))));
        }
    }
}
