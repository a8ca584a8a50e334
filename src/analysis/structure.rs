//! Header inspection and row-shape preview

use serde::Serialize;

use crate::model::Table;

/// How many data rows to preview in full
pub const PREVIEW_ROWS: usize = 5;
/// How many leading cells of each previewed row to keep
const PREVIEW_CELLS: usize = 10;
/// Rows narrower than this cannot hold date + amount and are flagged
const MIN_EXPECTED_COLUMNS: usize = 5;

/// One previewed data row
#[derive(Debug, Clone, Serialize)]
pub struct RowPreview {
    pub source_line: usize,
    pub column_count: usize,
    /// First few cells, for eyeballing which column holds what
    pub cells: Vec<String>,
}

/// A data row too narrow to be a transaction
#[derive(Debug, Clone, Serialize)]
pub struct ShortRow {
    pub source_line: usize,
    pub column_count: usize,
    pub content: String,
}

/// Result of the structure pass
#[derive(Debug, Clone, Serialize)]
pub struct StructureReport {
    /// Header cell values, in column order
    pub header: Vec<String>,
    pub previews: Vec<RowPreview>,
    pub short_rows: Vec<ShortRow>,
}

/// Inspect the header and the shape of the first rows.
///
/// The short-row scan covers every data row; the cell preview only the
/// first [`PREVIEW_ROWS`].
pub fn inspect(table: &Table) -> StructureReport {
    let header = table
        .header()
        .map(|row| row.cells.clone())
        .unwrap_or_default();

    let previews = table
        .data_rows()
        .iter()
        .take(PREVIEW_ROWS)
        .map(|row| RowPreview {
            source_line: row.source_line,
            column_count: row.column_count(),
            cells: row.cells.iter().take(PREVIEW_CELLS).cloned().collect(),
        })
        .collect();

    let short_rows = table
        .data_rows()
        .iter()
        .filter(|row| row.column_count() < MIN_EXPECTED_COLUMNS)
        .map(|row| ShortRow {
            source_line: row.source_line,
            column_count: row.column_count(),
            content: row.cells.join(","),
        })
        .collect();

    StructureReport {
        header,
        previews,
        short_rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_table;

    #[test]
    fn test_inspect_header_and_previews() {
        let report = inspect(&parse_table(
            "Datum,Beschreibung,C,D,Betrag\n01/07/2025,Coffee,x,y,\"4,50\"\n02/07/2025,Rent,x,y,\"900,00\"\n",
        ));
        assert_eq!(report.header.len(), 5);
        assert_eq!(report.header[0], "Datum");
        assert_eq!(report.previews.len(), 2);
        assert_eq!(report.previews[0].source_line, 2);
        assert_eq!(report.previews[0].column_count, 5);
        assert!(report.short_rows.is_empty());
    }

    #[test]
    fn test_inspect_flags_short_rows() {
        let report = inspect(&parse_table("a,b,c,d,e\n1,2,3,4,5\nonly,two\n"));
        assert_eq!(report.short_rows.len(), 1);
        assert_eq!(report.short_rows[0].source_line, 3);
        assert_eq!(report.short_rows[0].column_count, 2);
        assert_eq!(report.short_rows[0].content, "only,two");
    }

    #[test]
    fn test_inspect_empty_table() {
        let report = inspect(&parse_table(""));
        assert!(report.header.is_empty());
        assert!(report.previews.is_empty());
    }
}
