//! JSON report output

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use termcolor::WriteColor;

use crate::analysis::{AnalysisReport, Summary};
use crate::source::Source;

use super::ReportFormatter;

/// JSON report formatter
pub struct JsonReport {
    pretty: bool,
}

impl JsonReport {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable wrapper adding the source and the summary mapping
#[derive(Serialize)]
struct JsonDocument<'a> {
    source: String,
    #[serde(flatten)]
    report: &'a AnalysisReport,
    summary: Summary,
}

impl ReportFormatter for JsonReport {
    fn render(
        &self,
        report: &AnalysisReport,
        source: &Source,
        writer: &mut dyn WriteColor,
    ) -> Result<()> {
        let document = JsonDocument {
            source: source.to_string(),
            report,
            summary: report.summary(),
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &document)?;
        } else {
            serde_json::to_writer(&mut *writer, &document)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::parser::parse_table;
    use termcolor::NoColor;

    #[test]
    fn test_render_is_valid_json() {
        let report = analyze(&parse_table(
            "Datum,B,C,D,Betrag\n01/07/2025,Coffee,x,y,\"4,50\"\n",
        ));
        let source = Source::parse("export.csv").unwrap();
        let mut buf = NoColor::new(Vec::new());
        JsonReport::compact()
            .render(&report, &source, &mut buf)
            .unwrap();

        let value: serde_json::Value =
            serde_json::from_slice(&buf.into_inner()).unwrap();
        assert_eq!(value["source"], "export.csv");
        assert_eq!(value["total_rows"], 2);
        assert_eq!(value["summary"]["processing_estimate"], 1);
        assert_eq!(value["dates"]["formats"]["2/2/4"], 1);
        assert!(value.get("converted").is_none());
    }
}
