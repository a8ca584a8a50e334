//! Date-format histogram over the date column
//!
//! The import pipeline only understands slash- and dot-separated dates, so
//! the histogram keys on the component-width signature of those two shapes
//! ("2/2/4", "1.2.4", ...). Anything else lands in `unrecognized`, which is
//! usually where the dropped rows hide.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

use super::DATE_COLUMN;
use crate::model::Table;

/// Formats a recognized signature might actually parse as
const CALENDAR_FORMATS: [&str; 3] = ["%d/%m/%Y", "%d.%m.%Y", "%Y-%m-%d"];

/// Result of the date pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct DateReport {
    /// Date cells with no content
    pub empty: usize,
    /// Cells matching a three-part slash or dot shape
    pub recognized: usize,
    /// Non-empty cells matching neither shape (ISO dates included)
    pub unrecognized: usize,
    /// Non-empty cells that parse as a real calendar date
    pub calendar_valid: usize,
    /// Signature -> occurrence count, in first-seen order
    pub formats: IndexMap<String, usize>,
}

/// Component-width signature of a slash- or dot-separated date.
///
/// `"01/07/2025"` -> `"2/2/4"`, `"1.7.2025"` -> `"1.1.4"`. Returns `None`
/// for anything that does not split into exactly three parts on the first
/// separator found.
pub fn format_signature(date: &str) -> Option<String> {
    let sep = if date.contains('/') {
        '/'
    } else if date.contains('.') {
        '.'
    } else {
        return None;
    };

    let parts: Vec<&str> = date.split(sep).collect();
    if parts.len() != 3 {
        return None;
    }

    Some(format!(
        "{}{sep}{}{sep}{}",
        parts[0].len(),
        parts[1].len(),
        parts[2].len()
    ))
}

fn is_calendar_date(date: &str) -> bool {
    CALENDAR_FORMATS
        .iter()
        .any(|fmt| NaiveDate::parse_from_str(date, fmt).is_ok())
}

/// Build the date-format histogram over every data row.
///
/// This pass is uncapped; the summary's `date_formats` mapping accounts
/// for the whole file.
pub fn analyze(table: &Table) -> DateReport {
    let mut report = DateReport::default();

    for row in table.data_rows() {
        let date = row.get(DATE_COLUMN);

        if date.is_empty() {
            report.empty += 1;
            continue;
        }

        match format_signature(date) {
            Some(signature) => {
                *report.formats.entry(signature).or_insert(0) += 1;
                report.recognized += 1;
            }
            None => report.unrecognized += 1,
        }

        if is_calendar_date(date) {
            report.calendar_valid += 1;
        }
    }

    report
}
