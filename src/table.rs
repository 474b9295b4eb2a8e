//! In-memory CSV table with explicit column type inference.
//!
//! The destination schema is derived from the data itself: each column gets
//! the narrowest SQL type that holds every non-null value in it. Inference
//! is a plain function over the column's values so the edge cases (empty
//! columns, mixed numeric/string data) are unit-testable in isolation.

use std::path::Path;

use crate::error::Result;

/// SQL type chosen for a CSV column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    BigInt,
    Double,
    Text,
}

impl ColumnType {
    pub fn sql_name(self) -> &'static str {
        match self {
            ColumnType::BigInt => "BIGINT",
            ColumnType::Double => "DOUBLE PRECISION",
            ColumnType::Text => "TEXT",
        }
    }
}

/// Infer the narrowest type that holds every non-null value.
///
/// A column whose values all parse as `i64` is `BigInt`; failing that,
/// one whose values all parse as `f64` is `Double`; anything else is
/// `Text`. A column with no non-null values is `Text`.
pub fn infer_column_type<'a, I>(values: I) -> ColumnType
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut saw_value = false;
    let mut all_int = true;
    let mut all_float = true;

    for value in values.into_iter().flatten() {
        saw_value = true;
        let value = value.trim();
        if all_int && value.parse::<i64>().is_err() {
            all_int = false;
        }
        if all_float && value.parse::<f64>().is_err() {
            all_float = false;
        }
        if !all_float {
            break;
        }
    }

    if !saw_value {
        ColumnType::Text
    } else if all_int {
        ColumnType::BigInt
    } else if all_float {
        ColumnType::Double
    } else {
        ColumnType::Text
    }
}

/// A fully materialized CSV file: header row plus data rows in file order.
///
/// Empty cells are `None` so they land as SQL NULLs.
#[derive(Debug)]
pub struct CsvTable {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl CsvTable {
    /// Read the whole file. Malformed CSV (including ragged rows) is an
    /// error.
    pub fn from_path(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let row = record
                .iter()
                .map(|field| {
                    let field = field.trim();
                    if field.is_empty() {
                        None
                    } else {
                        Some(field.to_string())
                    }
                })
                .collect();
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of a named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Inferred type for every column, in header order.
    pub fn column_types(&self) -> Vec<ColumnType> {
        (0..self.headers.len())
            .map(|i| {
                infer_column_type(self.rows.iter().map(|row| row.get(i).and_then(|v| v.as_deref())))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn table_from(content: &str) -> CsvTable {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        CsvTable::from_path(file.path()).unwrap()
    }

    #[test]
    fn test_infer_all_integers() {
        let values = ["1", "42", "-7"].map(Some);
        assert_eq!(infer_column_type(values), ColumnType::BigInt);
    }

    #[test]
    fn test_infer_mixed_int_and_float() {
        let values = ["1", "2.5"].map(Some);
        assert_eq!(infer_column_type(values), ColumnType::Double);
    }

    #[test]
    fn test_infer_mixed_numeric_and_string() {
        let values = ["1", "2.5", "n/a"].map(Some);
        assert_eq!(infer_column_type(values), ColumnType::Text);
    }

    #[test]
    fn test_infer_empty_column_is_text() {
        assert_eq!(infer_column_type([None, None]), ColumnType::Text);
    }

    #[test]
    fn test_infer_nulls_do_not_widen() {
        let values = [Some("1"), None, Some("2")];
        assert_eq!(infer_column_type(values), ColumnType::BigInt);
    }

    #[test]
    fn test_infer_i64_overflow_falls_back_to_double() {
        // Larger than i64::MAX but still a valid f64.
        let values = [Some("99999999999999999999")];
        assert_eq!(infer_column_type(values), ColumnType::Double);
    }

    #[test]
    fn test_from_path_reads_headers_and_rows() {
        let table = table_from("id,budget,original_title\n1,100,Alpha\n2,200,Beta\n");
        assert_eq!(table.headers(), ["id", "budget", "original_title"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[0][2].as_deref(), Some("Alpha"));
    }

    #[test]
    fn test_from_path_empty_cells_are_null() {
        let table = table_from("id,homepage\n1,\n2,http://example.com\n");
        assert_eq!(table.rows()[0][1], None);
        assert_eq!(table.rows()[1][1].as_deref(), Some("http://example.com"));
    }

    #[test]
    fn test_from_path_rejects_ragged_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"id,budget\n1,100,extra\n").unwrap();
        assert!(CsvTable::from_path(file.path()).is_err());
    }

    #[test]
    fn test_column_index() {
        let table = table_from("id,budget\n1,100\n");
        assert_eq!(table.column_index("budget"), Some(1));
        assert_eq!(table.column_index("missing"), None);
    }

    #[test]
    fn test_column_types_per_column() {
        let table = table_from("id,vote_average,tagline\n1,7.5,Great\n2,8.0,\n");
        assert_eq!(
            table.column_types(),
            vec![ColumnType::BigInt, ColumnType::Double, ColumnType::Text]
        );
    }
}
