//! # socatmeta
//!
//! A command-line tool for SOCAT cruise metadata.
//!
//! ## Usage
//!
//! ```bash
//! # Translate a CDIAC document into an OCADS document
//! socatmeta convert 33RO20150114.xml
//!
//! # Guess the types of data columns
//! socatmeta classify "xCO2 Water (ppm)" "SST (C)"
//! socatmeta classify --header 33RO20150114.tsv
//!
//! # Check for missing or invalid fields
//! socatmeta validate 33RO20150114.xml
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    cli::init_logging(cli.verbosity());

    cli::dispatch(cli)
}
