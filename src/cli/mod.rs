use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod classify;
mod config;
mod convert;
mod info;
mod validate;

/// socatmeta - SOCAT cruise metadata translator
#[derive(Parser)]
#[command(name = "socatmeta")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a CDIAC metadata document into an OCADS document
    Convert {
        /// Input CDIAC XML file path
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output OCADS XML file path (defaults to <INPUT stem>.ocads.xml)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Also write the metadata as JSON next to the output
        #[arg(long)]
        json: bool,

        /// Replace existing output files
        #[arg(short, long)]
        force: bool,
    },

    /// Print the variable type guessed for data column names
    Classify {
        /// Column names to classify
        #[arg(value_name = "NAMES")]
        names: Vec<String>,

        /// Classify the header row of a CSV or TSV data file
        #[arg(long, value_name = "FILE")]
        header: Option<PathBuf>,

        /// Load column associations from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Check the metadata in a CDIAC document for missing or invalid fields
    Validate {
        /// Input CDIAC XML file path
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Load column associations from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Display the metadata read from a CDIAC document
    Info {
        /// Input CDIAC XML file path
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Print the whole metadata model as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Convert {
            input,
            output,
            config,
            json,
            force,
        } => convert::run(input, output, config, json, force),
        Commands::Classify {
            names,
            header,
            config,
        } => classify::run(names, header, config),
        Commands::Validate { input, config } => validate::run(input, config),
        Commands::Info { input, json } => info::run(input, json),
    }
}
