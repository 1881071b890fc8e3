use std::path::Path;

use crate::error::RegisterError;
use crate::model::record::Record;

/// Writes a snapshot of the register to `path` as a CSV report: one header
/// row of column labels, then one row per record in register order, using
/// the same two-decimal display formatting as the grid.
///
/// Returns the number of data rows written. Never mutates the register; IO
/// failures surface as `Export` with the underlying cause.
pub fn write_csv_report(
    records: &[Record],
    labels: &[&str],
    path: &Path,
) -> Result<usize, RegisterError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| RegisterError::Export(format!("{}: {e}", path.display())))?;

    writer
        .write_record(labels)
        .map_err(|e| RegisterError::Export(e.to_string()))?;
    for record in records {
        writer
            .write_record(record.display_values())
            .map_err(|e| RegisterError::Export(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| RegisterError::Export(e.to_string()))?;
    Ok(records.len())
}
