// Homestead Explorer - tests/e2e_tools.rs
//
// End-to-end tests for the tract data tools: real files on disk via
// tempfile, real TOML keep lists, real JSON round trips.

use homestead_explorer::core::export::default_file_name;
use homestead_explorer::core::geojson::{count_missing, reduce_properties};
use homestead_explorer::core::outreach::{select_eligible, OutreachEstimate};
use homestead_explorer::platform::{config, fs};
use homestead_explorer::util::error::{ConfigError, ExplorerError, ExportError, GeoJsonError};
use serde_json::json;
use std::path::{Path, PathBuf};

// =============================================================================
// Helpers
// =============================================================================

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn tract_collection() -> serde_json::Value {
    json!({
        "type": "FeatureCollection",
        "name": "property_without_exemption",
        "features": [
            {
                "type": "Feature",
                "properties": {
                    "objectid": 101, "GEOID": "42101000100", "_pred1": 0.91,
                    "owner_1": "RIVERA MARIA", "X_pred_1": 0.91, "market_value": 210000
                },
                "geometry": { "type": "Point", "coordinates": [-75.15, 39.95] }
            },
            {
                "type": "Feature",
                "properties": {
                    "objectid": 102, "GEOID": "42101000100", "_pred1": 0.55,
                    "owner_1": "", "X_pred_1": 0.55, "market_value": 185000
                },
                "geometry": { "type": "Point", "coordinates": [-75.16, 39.95] }
            },
            {
                "type": "Feature",
                "properties": {
                    "objectid": 103, "GEOID": "42101000200", "_pred1": 0.88,
                    "owner_1": null, "X_pred_1": 0.88, "market_value": 99000
                },
                "geometry": { "type": "Point", "coordinates": [-75.17, 39.96] }
            }
        ]
    })
}

// =============================================================================
// Reduce
// =============================================================================

#[test]
fn e2e_reduce_with_default_keep_list() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "in.geojson", &tract_collection().to_string());
    let output = dir.path().join("out.geojson");

    let keep = config::load_keep_list(None).unwrap();
    let mut fc = fs::load_collection(&input).unwrap();
    let stats = reduce_properties(&mut fc, &keep);
    fs::save_collection(&output, &fc).unwrap();

    assert_eq!(stats.features, 3);
    // objectid, _pred1, market_value removed from each feature.
    assert_eq!(stats.properties_removed, 9);

    let reread = fs::load_collection(&output).unwrap();
    let props = &reread["features"][0]["properties"];
    assert_eq!(
        props,
        &json!({ "GEOID": "42101000100", "owner_1": "RIVERA MARIA", "X_pred_1": 0.91 })
    );
    assert_eq!(reread["name"], "property_without_exemption");
    assert!(reread["features"][2]["geometry"].is_object());
}

#[test]
fn e2e_reduce_with_keep_list_file() {
    let dir = tempfile::tempdir().unwrap();
    let keep_path = write(dir.path(), "keep.toml", "fields = [\"objectid\", \"GEOID\"]\n");
    let keep = config::load_keep_list(Some(&keep_path)).unwrap();

    let mut fc = tract_collection();
    reduce_properties(&mut fc, &keep);
    assert_eq!(
        fc["features"][1]["properties"],
        json!({ "objectid": 102, "GEOID": "42101000100" })
    );
}

#[test]
fn e2e_empty_keep_list_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let keep_path = write(dir.path(), "keep.toml", "fields = []\n");
    let err = config::load_keep_list(Some(&keep_path)).unwrap_err();
    assert!(matches!(
        err,
        ExplorerError::Config(ConfigError::EmptyKeepList { .. })
    ));
}

#[test]
fn e2e_invalid_json_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "broken.geojson", "{ \"features\": [ ");
    let err = fs::load_collection(&input).unwrap_err();
    assert!(matches!(
        err,
        ExplorerError::GeoJson(GeoJsonError::Parse { .. })
    ));
    assert!(err.to_string().contains("broken.geojson"));
}

// =============================================================================
// Missing-field audit and outreach
// =============================================================================

#[test]
fn e2e_missing_owner_count() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "in.geojson", &tract_collection().to_string());
    let fc = fs::load_collection(&input).unwrap();
    assert_eq!(count_missing(&fc, "owner_1"), 2);
    assert_eq!(count_missing(&fc, "GEOID"), 0);
}

#[test]
fn e2e_outreach_for_tract() {
    let fc = tract_collection();

    let ids = select_eligible(&fc, "42101000100", 0.7);
    assert_eq!(ids, vec![json!(101)]);

    let lowered = select_eligible(&fc, "42101000100", 0.5);
    assert_eq!(lowered.len(), 2);

    let est = OutreachEstimate::for_properties(lowered.len());
    assert!((est.door_knocking_cost - (32_000.0 + 7.0) * 1.1).abs() < 1e-6);
    assert!((est.total_benefits - 2.0 * 0.1 * 1399.0 * 3.0).abs() < 1e-6);
}

// =============================================================================
// Export
// =============================================================================

#[test]
fn e2e_export_selected_ids_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let ids = select_eligible(&tract_collection(), "42101000100", 0.5);
    let path = dir.path().join(default_file_name("42101000100", 0.5));

    let count = fs::export_object_ids(&path, &ids).unwrap();
    assert_eq!(count, 2);
    assert!(path.ends_with("tract_42101000100_0.5.csv"));

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
    assert_eq!(headers, vec!["objectid"]);
    let rows: Vec<String> = reader
        .records()
        .map(|r| r.unwrap()[0].to_string())
        .collect();
    assert_eq!(rows, vec!["101", "102"]);
}

#[test]
fn e2e_export_to_unwritable_path_reports_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("ids.csv");
    let err = fs::export_object_ids(&path, &[json!(101)]).unwrap_err();
    assert!(matches!(
        err,
        ExplorerError::Export(ExportError::Io { .. })
    ));
    assert!(err.to_string().contains("ids.csv"));
}
