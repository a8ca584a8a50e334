//! Amount-sign histogram over the amount column
//!
//! Amounts are German-formatted ("1.234,56"), so no numeric parsing is
//! attempted; the pass only classifies sign and emptiness, which is all the
//! import filter looks at.

use serde::Serialize;

use super::AMOUNT_COLUMN;
use crate::model::Table;

/// Size of the sampling window, counted in file lines including the header,
/// so the pass covers the first [`SAMPLE_LINES`]` - 1` data rows
pub const SAMPLE_LINES: usize = 50;
/// How many raw values to keep for the report
const MAX_SAMPLES: usize = 10;

/// True when the import filter would treat the cell as carrying no amount
pub fn is_empty_or_zero(amount: &str) -> bool {
    matches!(amount, "" | "0" | "0,00")
}

/// Negative by the pipeline's rule: a minus anywhere, or accounting parens
pub fn is_negative(amount: &str) -> bool {
    amount.contains('-') || amount.starts_with('(')
}

/// Result of the amount pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct AmountReport {
    pub empty_or_zero: usize,
    pub valid: usize,
    pub negative: usize,
    pub positive: usize,
    /// First few raw values, unparsed
    pub samples: Vec<String>,
}

/// Classify the amount column over the sampling window.
///
/// Rows too short to have an amount column at all are counted in neither
/// bucket; the structure pass reports those separately.
pub fn analyze(table: &Table) -> AmountReport {
    let mut report = AmountReport::default();

    for row in table.data_rows().iter().take(SAMPLE_LINES - 1) {
        if row.column_count() <= AMOUNT_COLUMN {
            continue;
        }
        let amount = row.get(AMOUNT_COLUMN);

        if is_empty_or_zero(amount) {
            report.empty_or_zero += 1;
            continue;
        }

        report.valid += 1;
        if report.samples.len() < MAX_SAMPLES {
            report.samples.push(amount.to_string());
        }

        if is_negative(amount) {
            report.negative += 1;
        } else {
            report.positive += 1;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_table;

    #[test]
    fn test_empty_or_zero_values() {
        assert!(is_empty_or_zero(""));
        assert!(is_empty_or_zero("0"));
        assert!(is_empty_or_zero("0,00"));
        assert!(!is_empty_or_zero("0.00"));
        assert!(!is_empty_or_zero("12,50"));
    }

    #[test]
    fn test_negative_detection() {
        assert!(is_negative("-12,50"));
        assert!(is_negative("(12,50)"));
        assert!(is_negative("12,50-"));
        assert!(!is_negative("12,50"));
    }

    #[test]
    fn test_analyze_counts_and_samples() {
        let report = analyze(&parse_table(
            "a,b,c,d,Betrag\n\
             1,,,,\"12,50\"\n\
             2,,,,\"-3,99\"\n\
             3,,,,0\n\
             4,,,,\"0,00\"\n\
             5,,,,\n",
        ));
        assert_eq!(report.valid, 2);
        assert_eq!(report.positive, 1);
        assert_eq!(report.negative, 1);
        assert_eq!(report.empty_or_zero, 3);
        assert_eq!(report.samples, vec!["12,50", "-3,99"]);
    }

    #[test]
    fn test_short_rows_counted_in_neither_bucket() {
        let report = analyze(&parse_table("a,b,c,d,e\nonly,two\n1,,,,\"5,00\"\n"));
        assert_eq!(report.empty_or_zero, 0);
        assert_eq!(report.valid, 1);
    }

    #[test]
    fn test_window_is_header_inclusive() {
        // 50 lines including the header, so only 49 data rows are sampled.
        let text = format!("a,b,c,d,Betrag\n{}", "1,,,,\"1,00\"\n".repeat(60));
        let report = analyze(&parse_table(&text));
        assert_eq!(report.valid, 49);
    }
}
