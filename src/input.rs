//! Input readers for batch processing
//!
//! Thin adapters that turn line-delimited text or CSV files into the plain
//! string sequences the batch processor consumes. Values are trimmed and
//! blank entries are skipped, so padding and empty rows in source files
//! never reach the cryptographic layer.

use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use serde::Serialize;

use crate::error::{SealboxError, SealboxResult};

/// Values selected from one column, keyed by the column's name
#[derive(Debug, Clone, Serialize)]
pub struct ColumnData {
    pub name: String,
    pub values: Vec<String>,
}

/// Read non-blank lines from a text file, trimmed
pub fn read_text_lines(path: &Path) -> SealboxResult<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Read a single column from a headerless CSV file
///
/// Rows missing the column, and blank cells, are skipped.
pub fn read_csv_column(path: &Path, column_index: usize) -> SealboxResult<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut values = Vec::new();
    for record in reader.records() {
        let record = record?;
        let value = record.get(column_index).unwrap_or("").trim();
        if !value.is_empty() {
            values.push(value.to_string());
        }
    }
    Ok(values)
}

/// Read one or more named columns from a CSV file with a header row
///
/// Column names must match the header exactly after trimming; an unknown
/// name fails with the available headers listed. Blank cells are skipped per
/// column, matching the line reader's blank handling.
pub fn read_csv_columns(path: &Path, names: &[String]) -> SealboxResult<Vec<ColumnData>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let header_list: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut indices = Vec::with_capacity(names.len());
    for name in names {
        let index = header_list
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| SealboxError::ColumnNotFound {
                name: name.clone(),
                available: header_list.join(", "),
            })?;
        indices.push(index);
    }

    let mut columns: Vec<ColumnData> = names
        .iter()
        .map(|name| ColumnData {
            name: name.clone(),
            values: Vec::new(),
        })
        .collect();

    for record in reader.records() {
        let record = record?;
        for (slot, &index) in indices.iter().enumerate() {
            let value = record.get(index).unwrap_or("").trim();
            if !value.is_empty() {
                columns[slot].values.push(value.to_string());
            }
        }
    }

    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_read_text_lines_trims_and_skips_blanks() {
        let file = temp_file("alpha\n  beta  \n\n   \ngamma\n");
        let lines = read_text_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_read_csv_first_column() {
        let file = temp_file("a1,b1\na2,b2\n,b3\na4\n");
        let values = read_csv_column(file.path(), 0).unwrap();
        assert_eq!(values, vec!["a1", "a2", "a4"]);
    }

    #[test]
    fn test_read_csv_second_column_skips_short_rows() {
        let file = temp_file("a1,b1\na2\na3,b3\n");
        let values = read_csv_column(file.path(), 1).unwrap();
        assert_eq!(values, vec!["b1", "b3"]);
    }

    #[test]
    fn test_read_named_column() {
        let file = temp_file("email,token\nalice@example.com,t1\nbob@example.com,t2\n");
        let columns = read_csv_columns(file.path(), &["token".to_string()]).unwrap();
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].name, "token");
        assert_eq!(columns[0].values, vec!["t1", "t2"]);
    }

    #[test]
    fn test_read_multiple_named_columns() {
        let file = temp_file("email,name,token\na@x.com,Alice,t1\nb@x.com,Bob,t2\n");
        let names = vec!["email".to_string(), "token".to_string()];
        let columns = read_csv_columns(file.path(), &names).unwrap();

        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].values, vec!["a@x.com", "b@x.com"]);
        assert_eq!(columns[1].values, vec!["t1", "t2"]);
    }

    #[test]
    fn test_unknown_column_lists_available_headers() {
        let file = temp_file("email,token\na@x.com,t1\n");
        let result = read_csv_columns(file.path(), &["missing".to_string()]);
        match result {
            Err(SealboxError::ColumnNotFound { name, available }) => {
                assert_eq!(name, "missing");
                assert_eq!(available, "email, token");
            }
            other => panic!("expected ColumnNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_cells_skipped_per_column() {
        let file = temp_file("email,token\na@x.com,\nb@x.com,t2\n");
        let names = vec!["email".to_string(), "token".to_string()];
        let columns = read_csv_columns(file.path(), &names).unwrap();
        assert_eq!(columns[0].values.len(), 2);
        assert_eq!(columns[1].values, vec!["t2"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = read_text_lines(Path::new("/nonexistent/input.txt"));
        assert!(matches!(result, Err(SealboxError::Io(_))));
    }
}
