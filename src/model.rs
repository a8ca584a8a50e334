//! Row and table structures for the probed export

/// A parsed CSV row: trimmed cell strings in column order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Cell values in column order
    pub cells: Vec<String>,
    /// Original line number in the fetched file (1-indexed)
    pub source_line: usize,
}

impl Row {
    /// Create a new row
    pub fn new(cells: Vec<String>, source_line: usize) -> Self {
        Self { cells, source_line }
    }

    /// Get a cell by column index, or "" if the row is too short
    pub fn get(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or("")
    }

    /// Number of cells in this row
    pub fn column_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of cells holding any non-whitespace content
    pub fn non_empty_cells(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

/// A parsed table; row 0 is treated as the header
#[derive(Debug, Default)]
pub struct Table {
    /// All rows, in file order
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a table from parsed rows
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// The header row, if the file had any content
    pub fn header(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// All rows after the header
    pub fn data_rows(&self) -> &[Row] {
        if self.rows.is_empty() {
            &[]
        } else {
            &self.rows[1..]
        }
    }

    /// Total row count, header included
    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    /// Row count excluding the header
    pub fn data_row_count(&self) -> usize {
        self.data_rows().len()
    }
}
