//! CSV and JSON writers for the computed tables.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::IoError;

/// Writes one CSV row per serialized record; the header comes from the
/// field names of `T`.
pub fn write_csv_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), IoError> {
    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    info!(path = %path.display(), n_rows = rows.len(), "table written");
    Ok(())
}

/// Writes a CSV table with an explicit header, for tables whose columns are
/// only known at run time.
pub fn write_csv_records(
    path: &Path,
    header: &[String],
    records: &[Vec<String>],
) -> Result<(), IoError> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(header)?;
    for record in records {
        wtr.write_record(record)?;
    }
    wtr.flush()?;
    info!(path = %path.display(), n_rows = records.len(), "table written");
    Ok(())
}

/// Writes `value` as pretty-printed JSON.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), IoError> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, value)?;
    info!(path = %path.display(), "json written");
    Ok(())
}

/// Formats an optional number as a CSV field; `None` is the empty field.
pub fn format_opt(v: Option<f64>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}
