//! Fill rates of the candidate description columns
//!
//! The export spreads the transaction description across three columns; the
//! import pipeline reads column 1 and falls back to column 6. This pass
//! shows which of the candidates actually carry text.

use serde::Serialize;

use super::DESCRIPTION_COLUMNS;
use crate::model::Table;

/// Size of the sampling window, counted in file lines including the header,
/// so the pass covers the first [`SAMPLE_LINES`]` - 1` data rows
pub const SAMPLE_LINES: usize = 20;
/// How many sample values to keep per column
const MAX_SAMPLES: usize = 5;

/// Fill rate of one candidate column
#[derive(Debug, Clone, Serialize)]
pub struct ColumnFill {
    pub column: usize,
    pub non_empty: usize,
    pub samples: Vec<String>,
}

/// Result of the description pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct DescriptionReport {
    pub columns: Vec<ColumnFill>,
}

/// Sample the description columns over the sampling window
pub fn analyze(table: &Table) -> DescriptionReport {
    let columns = DESCRIPTION_COLUMNS
        .iter()
        .map(|&column| {
            let mut fill = ColumnFill {
                column,
                non_empty: 0,
                samples: Vec::new(),
            };

            for row in table.data_rows().iter().take(SAMPLE_LINES - 1) {
                let value = row.get(column);
                if value.is_empty() {
                    continue;
                }
                fill.non_empty += 1;
                if fill.samples.len() < MAX_SAMPLES {
                    fill.samples.push(value.to_string());
                }
            }

            fill
        })
        .collect();

    DescriptionReport { columns }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_table;

    #[test]
    fn test_analyze_per_column_fill() {
        let report = analyze(&parse_table(
            "h0,h1,h2,h3,h4,h5,h6,h7\n\
             x,Coffee,,,,,REWE SAGT DANKE,\n\
             x,,,,,,EDEKA,extra\n\
             x,Rent,,,,,,\n",
        ));
        assert_eq!(report.columns.len(), 3);

        let col1 = &report.columns[0];
        assert_eq!(col1.column, 1);
        assert_eq!(col1.non_empty, 2);
        assert_eq!(col1.samples, vec!["Coffee", "Rent"]);

        let col6 = &report.columns[1];
        assert_eq!(col6.non_empty, 2);
        assert_eq!(col6.samples, vec!["REWE SAGT DANKE", "EDEKA"]);

        let col7 = &report.columns[2];
        assert_eq!(col7.non_empty, 1);
    }

    #[test]
    fn test_window_is_header_inclusive() {
        // 20 lines including the header, so only 19 data rows are sampled.
        let text = format!("h0,h1\n{}", "x,desc\n".repeat(30));
        let report = analyze(&parse_table(&text));
        assert_eq!(report.columns[0].non_empty, 19);
    }
}
