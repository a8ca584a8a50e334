//! Human-readable terminal report

use std::io::Write;

use anyhow::Result;
use termcolor::{Color, ColorSpec, WriteColor};

use crate::analysis::{
    amounts, descriptions, AnalysisReport, ConvertedComparison, AMOUNT_COLUMN, DATE_COLUMN,
};
use crate::source::Source;

use super::ReportFormatter;

/// Terminal report with sectioned output
pub struct TerminalReport;

impl TerminalReport {
    pub fn new() -> Self {
        Self
    }

    fn write_banner(&self, writer: &mut dyn WriteColor, source: &Source) -> Result<()> {
        writeln!(
            writer,
            "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━"
        )?;
        writeln!(writer, " csvprobe: {}", source)?;
        writeln!(
            writer,
            "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━"
        )?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_section(&self, writer: &mut dyn WriteColor, title: &str) -> Result<()> {
        writer.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(writer, "{}:", title)?;
        writer.reset()?;
        Ok(())
    }

    fn write_structure(&self, report: &AnalysisReport, writer: &mut dyn WriteColor) -> Result<()> {
        self.write_section(writer, "Structure")?;
        writeln!(
            writer,
            "  Total rows: {} ({} data rows after the header)",
            report.total_rows, report.data_rows
        )?;
        writeln!(writer)?;

        let structure = &report.structure;
        writeln!(writer, "  Header columns ({}):", structure.header.len())?;
        let mut header_table = vec![vec!["#".to_string(), "name".to_string()]];
        for (i, name) in structure.header.iter().enumerate() {
            header_table.push(vec![i.to_string(), name.clone()]);
        }
        write_indented(writer, &build_table(&header_table))?;
        writeln!(writer)?;

        writeln!(writer, "  First {} data rows:", structure.previews.len())?;
        for preview in &structure.previews {
            writeln!(
                writer,
                "    line {}: {} columns",
                preview.source_line, preview.column_count
            )?;
            for (i, cell) in preview.cells.iter().enumerate() {
                writeln!(writer, "      [{}] {:?}", i, cell)?;
            }
        }
        writeln!(writer)?;

        if structure.short_rows.is_empty() {
            writeln!(writer, "  Short rows (< 5 columns): none")?;
        } else {
            writeln!(
                writer,
                "  Short rows (< 5 columns): {}",
                structure.short_rows.len()
            )?;
            for short in &structure.short_rows {
                writeln!(
                    writer,
                    "    line {}: {} columns - {:?}",
                    short.source_line, short.column_count, short.content
                )?;
            }
        }
        writeln!(writer)?;
        Ok(())
    }

    fn write_dates(&self, report: &AnalysisReport, writer: &mut dyn WriteColor) -> Result<()> {
        let date_report = &report.dates;
        self.write_section(
            writer,
            &format!("Date formats (column {}, all data rows)", DATE_COLUMN),
        )?;
        writeln!(writer, "  Empty: {}", date_report.empty)?;
        writeln!(writer, "  Recognized (slash/dot): {}", date_report.recognized)?;
        writeln!(writer, "  Unrecognized: {}", date_report.unrecognized)?;
        writeln!(writer, "  Parse as calendar dates: {}", date_report.calendar_valid)?;
        if !date_report.formats.is_empty() {
            writeln!(writer, "  Distribution:")?;
            for (signature, count) in &date_report.formats {
                writeln!(writer, "    {}: {} occurrences", signature, count)?;
            }
        }
        writeln!(writer)?;
        Ok(())
    }

    fn write_amounts(&self, report: &AnalysisReport, writer: &mut dyn WriteColor) -> Result<()> {
        let amount_report = &report.amounts;
        self.write_section(
            writer,
            &format!(
                "Amounts (column {}, first {} data rows)",
                AMOUNT_COLUMN,
                amounts::SAMPLE_LINES - 1
            ),
        )?;
        writeln!(writer, "  Empty or zero: {}", amount_report.empty_or_zero)?;
        writeln!(writer, "  Valid: {}", amount_report.valid)?;
        writeln!(writer, "  Negative: {}", amount_report.negative)?;
        writeln!(writer, "  Positive: {}", amount_report.positive)?;
        if !amount_report.samples.is_empty() {
            writeln!(writer, "  Samples: {}", amount_report.samples.join(", "))?;
        }
        writeln!(writer)?;
        Ok(())
    }

    fn write_descriptions(
        &self,
        report: &AnalysisReport,
        writer: &mut dyn WriteColor,
    ) -> Result<()> {
        self.write_section(
            writer,
            &format!(
                "Description columns (first {} data rows)",
                descriptions::SAMPLE_LINES - 1
            ),
        )?;
        for fill in &report.descriptions.columns {
            writeln!(
                writer,
                "  Column {}: {} non-empty, samples: [{}]",
                fill.column,
                fill.non_empty,
                fill.samples.join(", ")
            )?;
        }
        writeln!(writer)?;
        Ok(())
    }

    fn write_completeness(
        &self,
        report: &AnalysisReport,
        writer: &mut dyn WriteColor,
    ) -> Result<()> {
        let completeness = &report.completeness;
        self.write_section(writer, "Row completeness")?;
        writeln!(
            writer,
            "  Completely empty rows: {}",
            completeness.completely_empty
        )?;
        writeln!(
            writer,
            "  Mostly empty rows (<= 2 cells): {}",
            completeness.mostly_empty
        )?;
        writeln!(
            writer,
            "  Rows with substantial data: {}",
            completeness.substantial
        )?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_simulation(&self, report: &AnalysisReport, writer: &mut dyn WriteColor) -> Result<()> {
        let sim = &report.simulation;
        self.write_section(writer, "Import simulation")?;
        writeln!(writer, "  Would process: {}", sim.processed)?;
        writeln!(writer, "  Would skip (no date): {}", sim.skipped_no_date)?;
        writeln!(writer, "  Would skip (no data): {}", sim.skipped_no_data)?;
        writeln!(writer, "  Would skip (other): {}", sim.skipped_other)?;
        if sim.drops_rows() {
            writer.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
            writeln!(
                writer,
                "  The pipeline is predicted to drop {} of {} data rows.",
                sim.skipped(),
                report.data_rows
            )?;
            writer.reset()?;
        }
        writeln!(writer)?;
        Ok(())
    }

    fn write_converted(
        &self,
        comparison: &ConvertedComparison,
        writer: &mut dyn WriteColor,
    ) -> Result<()> {
        self.write_section(writer, "Converted output")?;
        writeln!(writer, "  Total rows: {}", comparison.total_rows)?;
        writeln!(writer, "  Data rows: {}", comparison.data_rows)?;
        writeln!(writer, "  Missing vs. input: {}", comparison.missing_rows)?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_summary(&self, report: &AnalysisReport, writer: &mut dyn WriteColor) -> Result<()> {
        let summary = report.summary();
        self.write_section(writer, "Summary")?;
        writeln!(writer, "  total_rows: {}", summary.total_rows)?;
        writeln!(writer, "  data_rows: {}", summary.data_rows)?;
        writeln!(
            writer,
            "  processing_estimate: {}",
            summary.processing_estimate
        )?;
        Ok(())
    }
}

impl Default for TerminalReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TerminalReport {
    fn render(
        &self,
        report: &AnalysisReport,
        source: &Source,
        writer: &mut dyn WriteColor,
    ) -> Result<()> {
        self.write_banner(writer, source)?;
        self.write_structure(report, writer)?;
        self.write_dates(report, writer)?;
        self.write_amounts(report, writer)?;
        self.write_descriptions(report, writer)?;
        self.write_completeness(report, writer)?;
        self.write_simulation(report, writer)?;
        if let Some(comparison) = &report.converted {
            self.write_converted(comparison, writer)?;
        }
        self.write_summary(report, writer)?;
        Ok(())
    }
}

fn write_indented(writer: &mut dyn WriteColor, block: &str) -> Result<()> {
    for line in block.lines() {
        writeln!(writer, "  {}", line)?;
    }
    Ok(())
}

/// Build a box-drawn table; the first row is the header
fn build_table(data: &[Vec<String>]) -> String {
    if data.is_empty() || data[0].is_empty() {
        return String::new();
    }

    let col_count = data[0].len();

    let mut col_widths: Vec<usize> = vec![0; col_count];
    for row in data {
        for (i, cell) in row.iter().enumerate() {
            if i < col_widths.len() {
                col_widths[i] = col_widths[i].max(cell.len());
            }
        }
    }

    let border = |left: char, mid: char, right: char| {
        let mut line = String::new();
        line.push(left);
        for (i, width) in col_widths.iter().enumerate() {
            line.push_str(&"─".repeat(*width + 2));
            line.push(if i < col_widths.len() - 1 { mid } else { right });
        }
        line.push('\n');
        line
    };

    let mut output = String::new();
    output.push_str(&border('┌', '┬', '┐'));

    for (row_idx, row) in data.iter().enumerate() {
        output.push('│');
        for (i, cell) in row.iter().enumerate() {
            let width = col_widths.get(i).copied().unwrap_or(0);
            output.push_str(&format!(" {:width$} │", cell, width = width));
        }
        output.push('\n');

        if row_idx == 0 {
            output.push_str(&border('├', '┼', '┤'));
        }
    }

    output.push_str(&border('└', '┴', '┘'));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::parser::parse_table;
    use termcolor::NoColor;

    #[test]
    fn test_render_contains_sections() {
        let report = analyze(&parse_table(
            "Datum,Beschreibung,C,D,Betrag\n01/07/2025,Coffee,x,y,\"4,50\"\n,,,,\n",
        ));
        let source = Source::parse("export.csv").unwrap();
        let mut buf = NoColor::new(Vec::new());
        TerminalReport::new()
            .render(&report, &source, &mut buf)
            .unwrap();

        let out = String::from_utf8(buf.into_inner()).unwrap();
        assert!(out.contains("csvprobe: export.csv"));
        assert!(out.contains("Header columns (5):"));
        assert!(out.contains("2/2/4: 1 occurrences"));
        assert!(out.contains("Would process: 1"));
        assert!(out.contains("predicted to drop 1 of 2 data rows"));
        assert!(out.contains("processing_estimate: 1"));
    }

    #[test]
    fn test_build_table_alignment() {
        let table = build_table(&[
            vec!["#".to_string(), "name".to_string()],
            vec!["0".to_string(), "Datum".to_string()],
        ]);
        assert!(table.starts_with('┌'));
        assert!(table.contains("│ 0 │ Datum │"));
    }
}
