//! # fdareg CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fdareg_cli::countries::{run_countries, CountriesArgs};
use fdareg_cli::lookup::{run_lookup, LookupArgs};
use fdareg_cli::EXIT_INVALID_INPUT;

/// Find FDA-registered medical device manufacturers by country and
/// product code, using the public openFDA API.
#[derive(Parser, Debug)]
#[command(name = "fdareg", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up manufacturers registered in a country for a product code.
    Lookup(LookupArgs),

    /// List the country names accepted by `lookup`.
    Countries(CountriesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "fdareg starting");

    let result = match cli.command {
        Commands::Lookup(args) => run_lookup(&args, cli.config.as_deref()),
        Commands::Countries(args) => run_countries(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_INVALID_INPUT)
        }
    }
}
