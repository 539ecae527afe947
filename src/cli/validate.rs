use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use socatmeta::cdiac::CdiacReader;
use socatmeta::validator::validate_metadata;

use super::config::Config;

/// Check the metadata in a CDIAC document
pub fn run(input: PathBuf, config: Option<PathBuf>) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    info!("SOCAT Metadata Validator");
    info!("File: {}", input.display());

    let config = Config::load(config.as_deref())?;
    let mut reader = CdiacReader::open(&input)
        .with_context(|| format!("Failed to read CDIAC document {}", input.display()))?;
    config.apply_to(reader.classifier_mut())?;

    let report = validate_metadata(
        &reader.create_socat_metadata(),
        input.display().to_string(),
        None,
    );
    println!("{}", report.format_colored());

    // Exit with error code if validation failed
    if report.has_failures() {
        std::process::exit(1);
    }

    Ok(())
}
