//! # Output rendering
//!
//! Text table and JSON report for lookup results. Notices are rendered
//! separately so the caller can send them to stderr.

use chrono::{DateTime, Utc};
use serde::Serialize;

use fdareg_client::{LookupOutcome, Notice, OutcomeStatus};
use fdareg_core::RegistrationRecord;

const HEADERS: [&str; 3] = ["Manufacturer", "FEI Number", "Address"];

/// Render records as an aligned three-column table.
pub fn table(records: &[RegistrationRecord]) -> String {
    let rows: Vec<[&str; 3]> = records
        .iter()
        .map(|r| [r.manufacturer_name.as_str(), r.fei_number.as_str(), r.address.as_str()])
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS, &widths);
    push_row(&mut out, &widths.map(|w| "-".repeat(w)), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S; 3], widths: &[usize; 3]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell.as_ref()))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// One line per notice, prefixed with its level.
pub fn notice_line(notice: &Notice) -> String {
    format!("{}: {}", notice.level, notice.message)
}

/// JSON document written by `lookup --format json`.
#[derive(Debug, Serialize)]
pub struct LookupReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub status: OutcomeStatus,
    pub summary: String,
    #[serde(flatten)]
    pub outcome: &'a LookupOutcome,
}

impl<'a> LookupReport<'a> {
    pub fn new(outcome: &'a LookupOutcome, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            status: outcome.status(),
            summary: outcome.summary(),
            outcome,
        }
    }
}

/// Render the JSON report for `outcome`, stamped with the current time.
pub fn json_report(outcome: &LookupOutcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&LookupReport::new(outcome, Utc::now()))
}
