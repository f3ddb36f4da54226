// Homestead Explorer - platform/fs.rs
//
// GeoJSON and CSV file access for the companion tools.

use crate::util::error::{ExplorerError, ExportError, GeoJsonError, Result};
use serde_json::Value;
use std::path::Path;

/// Read and validate a FeatureCollection from disk.
pub fn load_collection(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|source| ExplorerError::Io {
        path: path.to_path_buf(),
        operation: "read",
        source,
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|source| GeoJsonError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let Some(count) = crate::core::geojson::features(&value).map(Vec::len) else {
        return Err(GeoJsonError::NotAFeatureCollection {
            path: path.to_path_buf(),
        }
        .into());
    };

    tracing::debug!(path = %path.display(), features = count, "Collection loaded");
    Ok(value)
}

/// Write a collection as two-space-indented JSON. Non-ASCII text is written
/// as UTF-8 rather than escaped.
pub fn save_collection(path: &Path, collection: &Value) -> Result<()> {
    let mut body = serde_json::to_string_pretty(collection)
        .map_err(|source| GeoJsonError::Serialize { source })?;
    body.push('\n');

    std::fs::write(path, body).map_err(|source| ExplorerError::Io {
        path: path.to_path_buf(),
        operation: "write",
        source,
    })?;

    tracing::debug!(path = %path.display(), "Collection saved");
    Ok(())
}

/// Create `path` and write the selected object ids to it as CSV.
/// Returns the number of ids written.
pub fn export_object_ids(path: &Path, ids: &[Value]) -> Result<usize> {
    let file = std::fs::File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let count = crate::core::export::export_object_ids(ids, std::io::BufWriter::new(file), path)?;

    tracing::info!(path = %path.display(), ids = count, "Object ids exported");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_load_rejects_non_collection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("point.geojson");
        std::fs::write(&path, r#"{"type":"Feature","properties":{}}"#).unwrap();
        let err = load_collection(&path).unwrap_err();
        assert!(matches!(
            err,
            ExplorerError::GeoJson(GeoJsonError::NotAFeatureCollection { .. })
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_collection(&dir.path().join("absent.geojson")).unwrap_err();
        assert!(matches!(err, ExplorerError::Io { operation: "read", .. }));
    }

    #[test]
    fn test_save_keeps_unicode_unescaped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.geojson");
        let fc = json!({ "type": "FeatureCollection", "features": [
            { "properties": { "dominant_language": "Español" } }
        ]});
        save_collection(&path, &fc).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Español"));
        assert!(written.contains("\n  \"type\""));
        assert_eq!(load_collection(&path).unwrap(), fc);
    }

    #[test]
    fn test_export_into_missing_directory_is_export_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("ids.csv");
        let err = export_object_ids(&path, &[json!(1)]).unwrap_err();
        assert!(matches!(err, ExplorerError::Export(ExportError::Io { .. })));
        assert!(err.to_string().contains("ids.csv"));
    }
}
