//! Row-count comparison against the pipeline's converted output

use serde::Serialize;

use crate::model::Table;

/// How the converted output stacks up against the input export
#[derive(Debug, Clone, Serialize)]
pub struct ConvertedComparison {
    pub total_rows: usize,
    pub data_rows: usize,
    /// Input data rows minus output data rows; negative means the pipeline
    /// somehow produced extra rows
    pub missing_rows: i64,
}

/// Compare data-row counts between the input and its converted output
pub fn compare(input: &Table, converted: &Table) -> ConvertedComparison {
    ConvertedComparison {
        total_rows: converted.total_rows(),
        data_rows: converted.data_row_count(),
        missing_rows: input.data_row_count() as i64 - converted.data_row_count() as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_table;

    #[test]
    fn test_compare_counts_missing_rows() {
        let input = parse_table("h\n1\n2\n3\n4\n");
        let converted = parse_table("h\n1\n2\n");
        let cmp = compare(&input, &converted);
        assert_eq!(cmp.total_rows, 3);
        assert_eq!(cmp.data_rows, 2);
        assert_eq!(cmp.missing_rows, 2);
    }

    #[test]
    fn test_compare_extra_rows_go_negative() {
        let input = parse_table("h\n1\n");
        let converted = parse_table("h\n1\n2\n");
        assert_eq!(compare(&input, &converted).missing_rows, -1);
    }
}
