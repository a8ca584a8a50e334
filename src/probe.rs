//! One-shot probe entry points

use anyhow::{Context, Result};

use crate::analysis::{analyze, comparison, AnalysisReport, Summary};
use crate::config::Config;
use crate::parser::parse_table;
use crate::source::Source;

/// Fetch every configured source, parse, and run all passes
pub fn run_probe(config: &Config) -> Result<AnalysisReport> {
    let source = Source::parse(&config.input)?;
    let text = source
        .fetch()
        .with_context(|| format!("Failed to fetch input: {}", source))?;
    let table = parse_table(&text);

    let mut report = analyze(&table);

    if let Some(converted) = &config.converted {
        let converted_source = Source::parse(converted)?;
        let converted_text = converted_source
            .fetch()
            .with_context(|| format!("Failed to fetch converted output: {}", converted_source))?;
        report.converted = Some(comparison::compare(&table, &parse_table(&converted_text)));
    }

    Ok(report)
}

/// [`run_probe`] with the top-level catch of the original debugging
/// session: any failure is logged to stderr and an empty summary comes
/// back. No retries, no partial results.
pub fn probe_summary(config: &Config) -> Summary {
    match run_probe(config) {
        Ok(report) => report.summary(),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            Summary::empty()
        }
    }
}
