//! # fdareg-cli -- Command-line interface for fdareg
//!
//! Provides the `fdareg` binary:
//!
//! ```bash
//! fdareg lookup --country "United States" --product-code FOZ
//! fdareg lookup --country DE --product-code LLZ --strategy client-side --format json
//! fdareg countries --filter korea
//! ```
//!
//! Argument parsing lives in `main.rs`. Each subcommand module exposes a
//! `run_*` handler returning the process exit code.
//!
//! | Exit code | Meaning |
//! |-----------|---------|
//! | 0 | manufacturers found (or, for `countries`, the list printed) |
//! | 1 | the lookup completed with no results |
//! | 2 | invalid input or configuration |

pub mod countries;
pub mod lookup;
pub mod render;
pub mod settings;

use clap::ValueEnum;

pub const EXIT_FOUND: u8 = 0;
pub const EXIT_NO_RESULTS: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 2;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table.
    #[default]
    Table,
    /// Pretty-printed JSON document.
    Json,
}
