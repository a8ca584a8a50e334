//! Sparseness histogram over all data rows

use serde::Serialize;

use crate::model::Table;

/// Rows with this many non-empty cells or fewer count as mostly empty
const MOSTLY_EMPTY_MAX: usize = 2;

/// Result of the completeness pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompletenessReport {
    /// Rows where every cell is empty
    pub completely_empty: usize,
    /// Rows with at most two non-empty cells
    pub mostly_empty: usize,
    /// Everything else
    pub substantial: usize,
}

/// Bucket every data row by how many of its cells hold content
pub fn analyze(table: &Table) -> CompletenessReport {
    let mut report = CompletenessReport::default();

    for row in table.data_rows() {
        match row.non_empty_cells() {
            0 => report.completely_empty += 1,
            n if n <= MOSTLY_EMPTY_MAX => report.mostly_empty += 1,
            _ => report.substantial += 1,
        }
    }

    report
}
