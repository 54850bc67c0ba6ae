//! Faultline CLI
//!
//! Command-line tools for reading delimited files through a fault-tolerant
//! pipeline.
//!
//! # Commands
//!
//! - `parse` - Decode a file against a schema and report bad rows
//! - `version` - Show version information

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Faultline command-line tools.
#[derive(Parser)]
#[command(name = "faultline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a delimited file and report rows that fail to decode
    Parse {
        /// Input file
        file: PathBuf,

        /// Column description, e.g. "name:text,age:int?"
        #[arg(short, long)]
        schema: String,

        /// Field delimiter (use "\t" for tab)
        #[arg(short, long, default_value = "\\t")]
        delimiter: String,

        /// The file has no header line
        #[arg(long)]
        no_header: bool,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Only print the failure log
        #[arg(long)]
        failures_only: bool,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Parse {
            file,
            schema,
            delimiter,
            no_header,
            format,
            failures_only,
        } => {
            let options = commands::parse::ParseOptions {
                schema,
                delimiter: commands::parse::parse_delimiter(&delimiter)?,
                has_header: !no_header,
                failures_only,
            };
            commands::parse::run(&file, &options, &format)?;
        }
        Commands::Version => {
            println!("Faultline CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("Faultline Core v{}", faultline_core::VERSION);
        }
    }

    Ok(())
}
