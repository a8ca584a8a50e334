//! Rendering the diagnostic report

mod json;
mod terminal;

use anyhow::Result;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::analysis::AnalysisReport;
use crate::config::OutputFormat;
use crate::source::Source;

pub use json::JsonReport;
pub use terminal::TerminalReport;

/// Trait for report formatters
pub trait ReportFormatter {
    /// Render the analysis report to a writer
    fn render(
        &self,
        report: &AnalysisReport,
        source: &Source,
        writer: &mut dyn WriteColor,
    ) -> Result<()>;
}

/// Factory for creating report formatters
pub struct ReportFactory;

impl ReportFactory {
    /// Create a formatter for the given output format
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Terminal => Box::new(TerminalReport::new()),
            OutputFormat::Json => Box::new(JsonReport::new()),
        }
    }
}

/// Render the report to stdout
pub fn render_to_stdout(
    report: &AnalysisReport,
    source: &Source,
    format: OutputFormat,
) -> Result<()> {
    let formatter = ReportFactory::create(format);
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    formatter.render(report, source, &mut stdout)
}
