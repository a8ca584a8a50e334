//! Simulation of the downstream import filter
//!
//! Reproduces the pipeline's inclusion rule verbatim so the probe can
//! predict how many rows an import run will keep, and attribute the rest.
//! A row is kept when it has a plausible date OR a description OR a
//! non-zero amount.

use serde::Serialize;

use super::{amounts, AMOUNT_COLUMN, DATE_COLUMN, DESCRIPTION_COLUMNS};
use crate::model::{Row, Table};

/// Predicted fate of every data row under the import filter
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportSimulation {
    /// Rows the pipeline would keep
    pub processed: usize,
    /// Skipped rows whose date cell is empty or has no / or . in it
    pub skipped_no_date: usize,
    /// Skipped rows with a plausible date but nothing else
    pub skipped_no_data: usize,
    /// Rows too short to even look at (fewer than 2 cells)
    pub skipped_other: usize,
}

impl ImportSimulation {
    /// Total rows the pipeline would drop
    pub fn skipped(&self) -> usize {
        self.skipped_no_date + self.skipped_no_data + self.skipped_other
    }

    /// Whether the import run is predicted to lose rows
    pub fn drops_rows(&self) -> bool {
        self.skipped() > 0
    }
}

/// The pipeline's date plausibility check: non-empty and separator-bearing
fn has_plausible_date(row: &Row) -> bool {
    let date = row.get(DATE_COLUMN);
    !date.is_empty() && (date.contains('/') || date.contains('.'))
}

/// Description lookup with the pipeline's fallback: column 1, then column 6
fn description(row: &Row) -> &str {
    let primary = row.get(DESCRIPTION_COLUMNS[0]);
    if !primary.is_empty() {
        primary
    } else {
        row.get(DESCRIPTION_COLUMNS[1])
    }
}

/// Run the inclusion filter over every data row
pub fn simulate(table: &Table) -> ImportSimulation {
    let mut sim = ImportSimulation::default();

    for row in table.data_rows() {
        if row.column_count() < 2 {
            sim.skipped_other += 1;
            continue;
        }

        let has_date = has_plausible_date(row);
        let has_description = !description(row).is_empty();
        let has_amount = !amounts::is_empty_or_zero(row.get(AMOUNT_COLUMN));

        if has_date || has_description || has_amount {
            sim.processed += 1;
        } else if !has_date {
            sim.skipped_no_date += 1;
        } else {
            sim.skipped_no_data += 1;
        }
    }

    sim
}
