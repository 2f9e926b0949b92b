//! # Lookup Subcommand
//!
//! `fdareg lookup --country <NAME> --product-code <CODE>` runs a registry
//! lookup and prints the manufacturers found.
//!
//! Notices go to stderr, results to stdout. The exit code tells a calling
//! script which of the three outcomes happened without parsing output.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use fdareg_client::{OpenFdaClient, OpenFdaConfig, OutcomeStatus, RegistryLookup, Strategy};

use crate::render;
use crate::settings::{self, ConnectionArgs};
use crate::{OutputFormat, EXIT_FOUND, EXIT_INVALID_INPUT, EXIT_NO_RESULTS};

/// Arguments for the `fdareg lookup` subcommand.
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Country name, alias, or ISO code (e.g. "Germany", "DE", "DEU").
    #[arg(long)]
    pub country: String,

    /// FDA product classification code (e.g. FOZ).
    #[arg(long)]
    pub product_code: String,

    /// How registrations are fetched and filtered.
    #[arg(long, value_enum, default_value_t = StrategyArg::TwoStage)]
    pub strategy: StrategyArg,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

/// Command-line names for [`Strategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// One registration search filtered by country on the server.
    ServerSide,
    /// One registration search per product, filtered locally.
    ClientSide,
    /// Device search for labelers, then one registration search per labeler.
    TwoStage,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::ServerSide => Strategy::ServerSide,
            StrategyArg::ClientSide => Strategy::ClientSide,
            StrategyArg::TwoStage => Strategy::TwoStage,
        }
    }
}

/// Execute the lookup subcommand.
pub fn run_lookup(args: &LookupArgs, config_path: Option<&Path>) -> Result<u8> {
    let config = settings::resolve(config_path, &args.connection)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    // Unlocked handles: worker threads log to stderr while this blocks.
    runtime.block_on(execute(
        args,
        config,
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    ))
}

/// Run the lookup and write its output.
///
/// Returns the exit code. Invalid input is reported on `err` and mapped to
/// [`EXIT_INVALID_INPUT`] rather than returned as an error.
pub async fn execute<O: Write, E: Write>(
    args: &LookupArgs,
    config: OpenFdaConfig,
    out: &mut O,
    err: &mut E,
) -> Result<u8> {
    let client = OpenFdaClient::new(config).context("failed to build HTTP client")?;
    let lookup = RegistryLookup::new(client);

    let outcome = match lookup
        .run(&args.country, &args.product_code, args.strategy.into())
        .await
    {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::warn!("lookup rejected: {e}");
            writeln!(err, "error: {e}")?;
            return Ok(EXIT_INVALID_INPUT);
        }
    };

    for notice in &outcome.notices {
        writeln!(err, "{}", render::notice_line(notice))?;
    }

    match args.format {
        OutputFormat::Table => {
            writeln!(out, "{}", outcome.summary())?;
            if outcome.status() == OutcomeStatus::Found {
                writeln!(out)?;
                write!(out, "{}", render::table(&outcome.records))?;
            }
        }
        OutputFormat::Json => {
            let json = render::json_report(&outcome).context("failed to serialize report")?;
            writeln!(out, "{json}")?;
        }
    }

    Ok(match outcome.status() {
        OutcomeStatus::Found => EXIT_FOUND,
        OutcomeStatus::NoLabelers | OutcomeStatus::NoManufacturers => EXIT_NO_RESULTS,
    })
}
