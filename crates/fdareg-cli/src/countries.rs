//! # Countries Subcommand
//!
//! Lists the country names `lookup --country` accepts, sorted the same way
//! as the country selector.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use fdareg_core::{countries, CountryReference, COUNTRY_TABLE_VERSION};

use crate::{OutputFormat, EXIT_FOUND, EXIT_NO_RESULTS};

/// Arguments for the `fdareg countries` subcommand.
#[derive(Args, Debug)]
pub struct CountriesArgs {
    /// Only show countries whose name or any code contains this text
    /// (case-insensitive).
    #[arg(long)]
    pub filter: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Execute the countries subcommand.
pub fn run_countries(args: &CountriesArgs) -> Result<u8> {
    list(args, &mut std::io::stdout())
}

/// Table rows matching `filter`, in display-name order.
pub fn matching(filter: Option<&str>) -> Vec<&'static CountryReference> {
    let needle = filter.map(|f| f.trim().to_lowercase());
    let mut rows: Vec<&'static CountryReference> = countries()
        .iter()
        .filter(|country| match &needle {
            None => true,
            Some(needle) => [country.name, country.iso_code, country.alpha3, country.numeric]
                .iter()
                .any(|field| field.to_lowercase().contains(needle.as_str())),
        })
        .collect();
    rows.sort_unstable_by_key(|country| country.name);
    rows
}

fn list<W: Write>(args: &CountriesArgs, out: &mut W) -> Result<u8> {
    let rows = matching(args.filter.as_deref());
    tracing::debug!(table = COUNTRY_TABLE_VERSION, matched = rows.len(), "listing countries");

    match args.format {
        OutputFormat::Table => {
            for country in &rows {
                writeln!(out, "{}  {}  {}", country.iso_code, country.alpha3, country.name)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
        }
    }

    Ok(if rows.is_empty() { EXIT_NO_RESULTS } else { EXIT_FOUND })
}
