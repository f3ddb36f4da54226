// Homestead Explorer - core/export.rs
//
// CSV export of the object ids selected for outreach in one tract.
// Core layer: writes to any Write trait object.

use crate::core::geojson::value_as_text;
use crate::util::error::ExportError;
use serde_json::Value;
use std::io::Write;
use std::path::Path;

/// Default export file name for a tract and threshold, e.g.
/// `tract_42101000100_0.7.csv`.
pub fn default_file_name(geoid: &str, threshold: f64) -> String {
    format!("tract_{geoid}_{threshold}.csv")
}

/// Export object ids as a single-column CSV with an `objectid` header.
///
/// Ids that are not strings or numbers are written as empty cells.
pub fn export_object_ids<W: Write>(
    ids: &[Value],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["objectid"])
        .map_err(|e| ExportError::Csv {
            path: export_path.to_path_buf(),
            source: e,
        })?;

    for id in ids {
        let cell = value_as_text(id).unwrap_or_default();
        csv_writer.write_record([&cell]).map_err(|e| ExportError::Csv {
            path: export_path.to_path_buf(),
            source: e,
        })?;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(ids.len())
}
