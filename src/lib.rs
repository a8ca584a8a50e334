//! csvprobe - structural diagnostics for credit-card CSV exports
//!
//! Fetches one CSV export, splits it with the same naive quote-aware logic
//! the import pipeline uses, and runs a handful of counting passes to show
//! why the pipeline might be dropping rows.

pub mod analysis;
pub mod config;
pub mod model;
pub mod parser;
pub mod probe;
pub mod report;
pub mod source;

pub use analysis::{analyze, AnalysisReport, Summary};
pub use config::Config;
pub use model::Table;
pub use probe::{probe_summary, run_probe};
pub use source::Source;
