// Homestead Explorer - core/geojson.rs
//
// In-memory transforms over tract FeatureCollections.
// Documents are kept as `serde_json::Value` so geometry and unknown members
// pass through untouched. File access lives in platform::fs.

use serde_json::Value;
use std::collections::HashSet;

/// Outcome of a property reduction pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReduceStats {
    pub features: usize,
    pub properties_removed: usize,
}

/// The `features` array of a collection, if present.
pub fn features(collection: &Value) -> Option<&Vec<Value>> {
    collection.get("features").and_then(Value::as_array)
}

/// Keep only the property keys listed in `keep` on every feature.
///
/// Features without a `properties` object are skipped. Key order of the
/// survivors is preserved.
pub fn reduce_properties<S: AsRef<str>>(collection: &mut Value, keep: &[S]) -> ReduceStats {
    let keep: HashSet<&str> = keep.iter().map(AsRef::as_ref).collect();
    let mut stats = ReduceStats::default();

    let Some(features) = collection.get_mut("features").and_then(Value::as_array_mut) else {
        return stats;
    };

    for feature in features {
        stats.features += 1;
        if let Some(props) = feature.get_mut("properties").and_then(Value::as_object_mut) {
            let before = props.len();
            props.retain(|key, _| keep.contains(key.as_str()));
            stats.properties_removed += before - props.len();
        }
    }

    tracing::debug!(
        features = stats.features,
        removed = stats.properties_removed,
        "Properties reduced"
    );
    stats
}

/// Count features whose `field` is absent, null, or blank.
pub fn count_missing(collection: &Value, field: &str) -> usize {
    features(collection)
        .map(|features| {
            features
                .iter()
                .filter(|f| match f.get("properties").and_then(|p| p.get(field)) {
                    None | Some(Value::Null) => true,
                    Some(Value::String(s)) => s.trim().is_empty(),
                    Some(_) => false,
                })
                .count()
        })
        .unwrap_or(0)
}

/// Largest float that still holds every integer exactly (2^53).
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

/// Render a property value as plain text for identifier comparison.
/// Strings are unquoted. Whole-valued floats such as `42101000100.0` print
/// without the fraction so they compare equal to their integer form.
pub fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_EXACT_FLOAT => {
                Some(format!("{f:.0}"))
            }
            _ => Some(n.to_string()),
        },
        _ => None,
    }
}

/// Whether a feature's `properties` belong to census tract `geoid`.
pub fn in_tract(properties: &Value, geoid: &str) -> bool {
    properties
        .get(crate::util::constants::GEOID_FIELD)
        .and_then(value_as_text)
        .is_some_and(|id| id == geoid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": { "type": "Point", "coordinates": [-75.16, 39.95] },
                    "properties": { "GEOID": "42101000100", "owner_1": "SMITH", "junk": 1 }
                },
                {
                    "type": "Feature",
                    "geometry": null,
                    "properties": { "GEOID": "42101000200", "owner_1": "   ", "extra": true }
                },
                { "type": "Feature", "geometry": null }
            ]
        })
    }

    #[test]
    fn test_reduce_keeps_only_listed_keys() {
        let mut fc = sample();
        let stats = reduce_properties(&mut fc, &["GEOID", "owner_1"]);
        assert_eq!(stats.features, 3);
        assert_eq!(stats.properties_removed, 2);
        let first = &features(&fc).unwrap()[0]["properties"];
        assert_eq!(first, &json!({ "GEOID": "42101000100", "owner_1": "SMITH" }));
        assert!(fc["features"][0]["geometry"].is_object());
    }

    #[test]
    fn test_reduce_without_features_is_noop() {
        let mut doc = json!({ "type": "Feature" });
        assert_eq!(reduce_properties(&mut doc, &["GEOID"]), ReduceStats::default());
    }

    #[test]
    fn test_count_missing_treats_blank_and_absent_as_missing() {
        let fc = sample();
        // Blank string plus the feature without properties.
        assert_eq!(count_missing(&fc, "owner_1"), 2);
        assert_eq!(count_missing(&fc, "GEOID"), 1);
        assert_eq!(count_missing(&json!({}), "owner_1"), 0);
    }

    #[test]
    fn test_value_as_text() {
        assert_eq!(value_as_text(&json!("0101")), Some("0101".to_string()));
        assert_eq!(value_as_text(&json!(42101000100u64)), Some("42101000100".to_string()));
        assert_eq!(value_as_text(&json!(42101000100.0)), Some("42101000100".to_string()));
        assert_eq!(value_as_text(&json!(0.75)), Some("0.75".to_string()));
        assert_eq!(value_as_text(&json!(null)), None);
    }

    #[test]
    fn test_in_tract_matches_float_geoid() {
        assert!(in_tract(&json!({ "GEOID": 42101000100.0 }), "42101000100"));
        assert!(!in_tract(&json!({ "GEOID": "42101000200" }), "42101000100"));
        assert!(!in_tract(&json!({}), "42101000100"));
    }
}
