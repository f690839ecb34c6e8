pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod extractor;

use anyhow::{Result, anyhow};
use clap::Parser;
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::fmt;

pub use crate::{
    config::ExtractConfig,
    engine::{Engine, EngineKind},
    error::{ErrorKind, ExtractError},
    extractor::{ExtractionResult, Page, Pages, extract, extract_to, output_path_for},
};

use crate::cli::Cli;

/// Parse the command line and run one extraction.
///
/// Extraction failures are reported on stderr and are not returned, so the
/// process still exits 0. Only logging setup errors are returned here.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let max = match cli.global.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    fmt()
        .with_max_level(max)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {e}"))?;

    let config = ExtractConfig::from(&cli);
    if let Err(e) = extract(&config) {
        debug!(kind = ?e.kind(), path = %config.pdf_path.display(), "extraction failed");
        eprintln!("Error: {e}");
    }
    Ok(())
}
