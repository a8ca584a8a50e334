//! Counting passes over the parsed export
//!
//! Each pass is independent and reads the same in-memory table. The column
//! indices below describe the one export layout this tool understands; they
//! are constants, not configuration.

pub mod amounts;
pub mod comparison;
pub mod completeness;
pub mod dates;
pub mod descriptions;
pub mod pipeline;
pub mod structure;

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::Table;

pub use amounts::AmountReport;
pub use comparison::ConvertedComparison;
pub use completeness::CompletenessReport;
pub use dates::DateReport;
pub use descriptions::DescriptionReport;
pub use pipeline::ImportSimulation;
pub use structure::StructureReport;

/// Transaction date column
pub const DATE_COLUMN: usize = 0;
/// Amount column ("Betrag")
pub const AMOUNT_COLUMN: usize = 4;
/// Columns that may carry the transaction description, in fallback order
pub const DESCRIPTION_COLUMNS: [usize; 3] = [1, 6, 7];

/// The aggregate result of all passes
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub total_rows: usize,
    pub data_rows: usize,
    pub structure: StructureReport,
    pub dates: DateReport,
    pub amounts: AmountReport,
    pub descriptions: DescriptionReport,
    pub completeness: CompletenessReport,
    pub simulation: ImportSimulation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted: Option<ConvertedComparison>,
}

impl AnalysisReport {
    /// The small mapping the original debugging session keyed off
    pub fn summary(&self) -> Summary {
        Summary {
            total_rows: self.total_rows,
            data_rows: self.data_rows,
            date_formats: self.dates.formats.clone(),
            processing_estimate: self.simulation.processed,
        }
    }
}

/// Headline numbers: how big the file is, what its dates look like, and how
/// many rows the import pipeline would keep
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    pub total_rows: usize,
    pub data_rows: usize,
    pub date_formats: IndexMap<String, usize>,
    pub processing_estimate: usize,
}

impl Summary {
    /// The result reported when analysis fails outright
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Run every pass over the table
pub fn analyze(table: &Table) -> AnalysisReport {
    AnalysisReport {
        total_rows: table.total_rows(),
        data_rows: table.data_row_count(),
        structure: structure::inspect(table),
        dates: dates::analyze(table),
        amounts: amounts::analyze(table),
        descriptions: descriptions::analyze(table),
        completeness: completeness::analyze(table),
        simulation: pipeline::simulate(table),
        converted: None,
    }
}
