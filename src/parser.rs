//! Quote-aware comma splitting for the export
//!
//! Deliberately not an RFC-4180 parser: splitting toggles an in-quotes flag
//! on every double quote, with no escaped-quote handling and no support for
//! newlines inside quoted fields. This mirrors what the import pipeline
//! itself does, which is exactly the behavior being diagnosed.

use crate::model::{Row, Table};

/// Split one line on commas, honoring (unescaped) double quotes.
///
/// Quote characters are consumed by the split and do not appear in the
/// output cells. Every cell is trimmed.
pub fn split_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                cells.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    cells.push(current.trim().to_string());

    cells
}

/// Parse raw CSV text into a table, dropping blank lines.
///
/// Line numbers are preserved from the original text so diagnostics can
/// point back into the downloaded file.
pub fn parse_table(text: &str) -> Table {
    let rows = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| Row::new(split_line(line), i + 1))
        .collect();

    Table::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_line() {
        assert_eq!(split_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_quoted_comma() {
        assert_eq!(split_line(r#"a,"b,c",d"#), vec!["a", "b,c", "d"]);
    }

    #[test]
    fn test_split_trims_cells() {
        assert_eq!(split_line(" a , b "), vec!["a", "b"]);
    }

    #[test]
    fn test_split_empty_cells() {
        assert_eq!(split_line(",,"), vec!["", "", ""]);
        assert_eq!(split_line(""), vec![""]);
    }

    #[test]
    fn test_split_unclosed_quote_swallows_commas() {
        // No error recovery: the rest of the line becomes one cell.
        assert_eq!(split_line(r#"a,"b,c"#), vec!["a", "b,c"]);
    }

    #[test]
    fn test_split_strips_carriage_return() {
        assert_eq!(split_line("a,b\r"), vec!["a", "b"]);
    }

    #[test]
    fn test_parse_table_skips_blank_lines() {
        let table = parse_table("h1,h2\n\na,b\n   \nc,d\n");
        assert_eq!(table.total_rows(), 3);
        assert_eq!(table.data_row_count(), 2);
        // Line numbers refer to the original text, not the filtered rows.
        assert_eq!(table.data_rows()[0].source_line, 3);
        assert_eq!(table.data_rows()[1].source_line, 5);
    }

    #[test]
    fn test_parse_table_empty_input() {
        let table = parse_table("");
        assert_eq!(table.total_rows(), 0);
        assert!(table.header().is_none());
        assert!(table.data_rows().is_empty());
    }
}
