//! Check command implementation
//!
//! Runs the decoder's reference scenarios as a quick self-test, so a
//! deployment can verify the numeric pipeline before trusting its indices.

use tracing::info;

use decoder_core::cdf::{norm_cdf_erf, norm_cdf_rational};
use decoder_core::compose::{coarse_fine_index, mixed_radix_index};
use decoder_core::walk::{terminal_coordinate, z_score};

use crate::{CliError, Result};

fn expect(condition: bool, what: &str) -> Result<()> {
    if condition {
        info!("ok: {}", what);
        Ok(())
    } else {
        Err(CliError::InvalidArgument(format!(
            "self-test failed: {}",
            what
        )))
    }
}

/// Run the check command
pub fn run() -> Result<()> {
    // CDF variants agree at the origin and across the working domain.
    expect(
        (norm_cdf_rational(0.0_f64) - 0.5).abs() < 1e-7
            && (norm_cdf_erf(0.0_f64) - 0.5).abs() < 1e-7,
        "Phi(0) = 0.5 for both variants",
    )?;
    let mut max_gap = 0.0f64;
    for i in -600..=600 {
        let z = i as f64 * 0.01;
        max_gap = max_gap.max((norm_cdf_rational(z) - norm_cdf_erf(z)).abs());
    }
    expect(max_gap < 1e-6, "variant agreement within 1e-6 on |z| <= 6")?;

    // The 65536-bit reference walk.
    let ct = terminal_coordinate(65536, 32976)?;
    let z = z_score(ct, 65536)?;
    expect(ct == 416 && (z - 1.625).abs() < 1e-12, "reference walk")?;

    // Composer reference values.
    let cf = coarse_fine_index(0.5, 0.5, 32)?;
    expect(cf == 528, "coarse/fine reference index")?;
    let mr = mixed_radix_index(&[0.5; 10], 9, 3_401_286_407)?;
    expect(
        mr.raw == (9u64.pow(10) - 1) / 2,
        "mixed-radix reference raw index",
    )?;

    println!("all checks passed");
    Ok(())
}
