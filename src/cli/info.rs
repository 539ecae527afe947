use anyhow::{Context, Result};
use std::path::PathBuf;

use socatmeta::cdiac::CdiacReader;
use socatmeta::metadata::{Datestamp, SocatMetadata};

fn date_or_unset(date: &Datestamp) -> String {
    date.date_string().unwrap_or_else(|_| "<unset>".to_string())
}

fn print_summary(metadata: &SocatMetadata) {
    let misc = &metadata.misc_info;
    let platform = &metadata.platform;
    let coverage = &metadata.coverage;

    println!("Dataset:");
    println!("  Expocode: {}", misc.dataset_id());
    println!("  Cruise: {}", misc.dataset_name());
    println!(
        "  Dates: {} to {}",
        date_or_unset(misc.start_datestamp()),
        date_or_unset(misc.end_datestamp())
    );
    println!();

    println!("Platform:");
    println!("  Name: {}", platform.platform_name());
    println!("  ID: {}", platform.platform_id());
    println!("  Type: {}", platform.platform_type().as_str());
    println!();

    println!("Coverage:");
    println!(
        "  Longitude: {} to {}",
        coverage.western_longitude().as_one_string(),
        coverage.eastern_longitude().as_one_string()
    );
    println!(
        "  Latitude: {} to {}",
        coverage.southern_latitude().as_one_string(),
        coverage.northern_latitude().as_one_string()
    );
    println!();

    println!("Investigators:");
    for pi in &metadata.investigators {
        println!("  {}", pi.person().full_name());
    }
    println!();

    println!("Instruments:");
    for inst in &metadata.instruments {
        println!("  {} ({:?})", inst.name(), inst.kind());
    }
    println!();

    println!("Variables:");
    for (i, var) in metadata.variables.iter().enumerate() {
        println!(
            "  {:3}. {} [{}] ({:?})",
            i + 1,
            var.core().col_name(),
            var.var_unit(),
            var.kind()
        );
    }
}

/// Display the metadata read from a CDIAC document
pub fn run(input: PathBuf, json: bool) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("File does not exist: {}", input.display());
    }

    let reader = CdiacReader::open(&input)
        .with_context(|| format!("Failed to read CDIAC document {}", input.display()))?;
    let metadata = reader.create_socat_metadata();

    if json {
        println!("{}", metadata.to_json()?);
        return Ok(());
    }

    println!("SOCAT Metadata Information");
    println!("==========================");
    println!("File: {}", input.display());
    println!();
    print_summary(&metadata);

    Ok(())
}
