//! Result writers for batch output
//!
//! Mirrors the input adapters: one value per line for plain runs, a header
//! row plus aligned rows for column runs, or a JSON object keyed by column
//! name. Writers are generic over `io::Write` so they work against files
//! and in-memory buffers alike.

use std::io::Write;

use csv::WriterBuilder;
use serde_json::{Map, Value};

use crate::error::{SealboxError, SealboxResult};
use crate::input::ColumnData;

/// Write one value per line
pub fn write_lines<W: Write>(writer: &mut W, values: &[String]) -> SealboxResult<()> {
    for value in values {
        writeln!(writer, "{}", value)?;
    }
    Ok(())
}

/// Write columns as CSV: a header row, then rows assembled across columns
///
/// Columns may have different lengths after blank-cell skipping; shorter
/// columns are padded with empty cells so every row has one field per
/// column.
pub fn write_csv_columns<W: Write>(writer: &mut W, columns: &[ColumnData]) -> SealboxResult<()> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);

    let headers: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
    csv_writer.write_record(&headers)?;

    let row_count = columns.iter().map(|c| c.values.len()).max().unwrap_or(0);
    for row in 0..row_count {
        let record: Vec<&str> = columns
            .iter()
            .map(|c| c.values.get(row).map(String::as_str).unwrap_or(""))
            .collect();
        csv_writer.write_record(&record)?;
    }

    csv_writer
        .flush()
        .map_err(|e| SealboxError::Csv(e.to_string()))?;
    Ok(())
}

/// Write columns as a JSON object mapping column names to result arrays
pub fn write_json<W: Write>(writer: &mut W, columns: &[ColumnData]) -> SealboxResult<()> {
    let mut object = Map::new();
    for column in columns {
        let values: Vec<Value> = column
            .values
            .iter()
            .map(|v| Value::String(v.clone()))
            .collect();
        object.insert(column.name.clone(), Value::Array(values));
    }

    serde_json::to_writer_pretty(&mut *writer, &Value::Object(object))?;
    writeln!(writer)?;
    Ok(())
}
