//! Entrodex CLI - Command Line Operations for the Entropy-to-Index Decoder
//!
//! This is the operational entry point for the entrodex decoder library.
//!
//! # Commands
//!
//! - `entrodex decode` - Decode one or more integer indices from entropy
//! - `entrodex words --wordlist <file>` - Pick words from a fixed word list
//! - `entrodex check` - Run the built-in pipeline self-test
//!
//! # Architecture
//!
//! As part of the **S**ervice layer in the A-D-S architecture, this crate
//! wires the adapter layer (entropy sources, lexicon tables) to the decoder
//! kernel behind a unified command-line interface.

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use decoder_core::cdf::CdfVariant;
use decoder_core::stage::ScanBound;

mod commands;
mod error;

pub use error::{CliError, Result};

/// Entrodex entropy-to-index decoder CLI
#[derive(Parser)]
#[command(name = "entrodex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Where the entropy bytes come from.
#[derive(Args)]
pub struct EntropyArgs {
    /// Hex-encoded entropy bytes
    #[arg(long, group = "entropy")]
    pub hex: Option<String>,

    /// Read entropy bytes from a file
    #[arg(long, group = "entropy")]
    pub file: Option<String>,

    /// Generate pseudo-random fallback entropy from this seed
    #[arg(long, group = "entropy")]
    pub pseudo_seed: Option<u64>,

    /// Number of bytes to draw when using --pseudo-seed
    #[arg(long, default_value = "8192")]
    pub bytes: usize,
}

/// CDF approximation selection.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum VariantArg {
    /// Rational c1..c7 approximation
    #[default]
    Rational,
    /// Abramowitz-Stegun 7.1.26 erf polynomial
    Erf,
}

impl From<VariantArg> for CdfVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Rational => CdfVariant::Rational,
            VariantArg::Erf => CdfVariant::ErfPolynomial,
        }
    }
}

/// Scan-bound selection.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum ScanArg {
    /// Scan every bit of the buffer
    #[default]
    Full,
    /// Stop one bit short, matching the historical behaviour
    TruncateLast,
}

impl From<ScanArg> for ScanBound {
    fn from(arg: ScanArg) -> Self {
        match arg {
            ScanArg::Full => ScanBound::Full,
            ScanArg::TruncateLast => ScanBound::TruncateLast,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Decode one or more integer indices from an entropy buffer
    Decode {
        #[command(flatten)]
        entropy: EntropyArgs,

        /// Direct scaling: size of the output range
        #[arg(long, group = "mode")]
        range: Option<u64>,

        /// Coarse/fine composition: per-level modulus
        #[arg(long, group = "mode")]
        mm: Option<u64>,

        /// Mixed-radix composition: positional radix
        #[arg(long, requires = "resolution")]
        radix: Option<u64>,

        /// Mixed-radix composition: target resolution
        #[arg(long, requires = "radix", group = "mode")]
        resolution: Option<u64>,

        /// Number of stages (mixed-radix mode only, default 10)
        #[arg(long)]
        stages: Option<usize>,

        /// CDF approximation to use
        #[arg(long, value_enum, default_value = "rational")]
        variant: VariantArg,

        /// How far to scan into the buffer
        #[arg(long, value_enum, default_value = "full")]
        scan: ScanArg,

        /// Number of independent indices to decode from the buffer
        #[arg(long, default_value = "1")]
        count: usize,

        /// Emit the result, including per-stage statistics, as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decode indices and look them up in a fixed-order word list
    Words {
        #[command(flatten)]
        entropy: EntropyArgs,

        /// Path to the word list, one word per line
        #[arg(long)]
        wordlist: String,

        /// Number of words to pick
        #[arg(long, default_value = "3")]
        count: usize,

        /// Number of stages per word
        #[arg(long, default_value = "10")]
        stages: usize,

        /// Positional radix for the stage digits
        #[arg(long, default_value = "9")]
        radix: u64,

        /// CDF approximation to use
        #[arg(long, value_enum, default_value = "rational")]
        variant: VariantArg,
    },

    /// Run the built-in pipeline self-test
    Check,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Decode {
            entropy,
            range,
            mm,
            radix,
            resolution,
            stages,
            variant,
            scan,
            count,
            json,
        } => commands::decode::run(
            &entropy,
            range,
            mm,
            radix.zip(resolution),
            stages,
            variant.into(),
            scan.into(),
            count,
            json,
        ),
        Commands::Words {
            entropy,
            wordlist,
            count,
            stages,
            radix,
            variant,
        } => commands::words::run(&entropy, &wordlist, count, stages, radix, variant.into()),
        Commands::Check => commands::check::run(),
    }
}
