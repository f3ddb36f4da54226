// Homestead Explorer - core/tract.rs
//
// Census tract characteristics shown alongside an outreach estimate.
// Tract-level values are repeated on every property feature, so the first
// feature in the tract is read.

use crate::core::geojson::{features, in_tract};
use serde_json::Value;

pub const OWNER_OCCUPANCY_FIELD: &str = "ownr_c_";
pub const LIMITED_ENGLISH_FIELD: &str = "lmtd_n1";
pub const MEDIAN_INCOME_FIELD: &str = "mdn_ncm_1";
pub const POPULATION_DENSITY_FIELD: &str = "pp_dnst";

/// Shown for a characteristic that is missing or not numeric.
pub const NOT_AVAILABLE: &str = "n/a";

#[derive(Debug, Clone, PartialEq)]
pub struct TractCharacteristics {
    pub geoid: String,
    /// Percent of owner-occupied units.
    pub owner_occupancy_rate: Option<f64>,
    /// Percent of households with limited English.
    pub limited_english_rate: Option<f64>,
    /// USD.
    pub median_income: Option<f64>,
    /// People per square mile.
    pub population_density: Option<f64>,
}

impl TractCharacteristics {
    /// Read the characteristics of tract `geoid`, or `None` when no feature
    /// belongs to it.
    pub fn from_collection(collection: &Value, geoid: &str) -> Option<Self> {
        let props = features(collection)?
            .iter()
            .filter_map(|f| f.get("properties"))
            .find(|p| in_tract(p, geoid))?;

        let number = |field: &str| props.get(field).and_then(Value::as_f64);

        Some(Self {
            geoid: geoid.to_string(),
            owner_occupancy_rate: number(OWNER_OCCUPANCY_FIELD),
            limited_english_rate: number(LIMITED_ENGLISH_FIELD),
            median_income: number(MEDIAN_INCOME_FIELD),
            population_density: number(POPULATION_DENSITY_FIELD),
        })
    }

    /// Label and formatted value for each characteristic, in display order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let fmt = |value: Option<f64>, render: fn(f64) -> String| {
            value.map_or_else(|| NOT_AVAILABLE.to_string(), render)
        };
        vec![
            (
                "Owner Occupancy Rate",
                fmt(self.owner_occupancy_rate, |v| format!("{v:.2}%")),
            ),
            (
                "Limited English Rate",
                fmt(self.limited_english_rate, |v| format!("{v:.2}%")),
            ),
            ("Median Income", fmt(self.median_income, |v| format!("${v:.2}"))),
            (
                "Population Density",
                fmt(self.population_density, |v| format!("{v:.2} people/sq mi")),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn collection() -> Value {
        json!({
            "type": "FeatureCollection",
            "features": [
                { "properties": { "GEOID": "42101000200", "ownr_c_": 10.0 } },
                { "properties": {
                    "GEOID": "42101000100", "ownr_c_": 61.234, "lmtd_n1": 4.5,
                    "mdn_ncm_1": 52000, "pp_dnst": 18250.5
                } },
                { "properties": { "GEOID": "42101000100", "ownr_c_": 99.0 } }
            ]
        })
    }

    #[test]
    fn test_reads_first_matching_feature() {
        let tract = TractCharacteristics::from_collection(&collection(), "42101000100").unwrap();
        assert_eq!(tract.owner_occupancy_rate, Some(61.234));
        assert_eq!(tract.median_income, Some(52000.0));
    }

    #[test]
    fn test_rows_formatted_to_two_decimals() {
        let tract = TractCharacteristics::from_collection(&collection(), "42101000100").unwrap();
        let rows = tract.rows();
        assert_eq!(
            rows,
            vec![
                ("Owner Occupancy Rate", "61.23%".to_string()),
                ("Limited English Rate", "4.50%".to_string()),
                ("Median Income", "$52000.00".to_string()),
                ("Population Density", "18250.50 people/sq mi".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_and_non_numeric_fields_are_not_available() {
        let fc = json!({ "features": [
            { "properties": { "GEOID": "1", "ownr_c_": "high", "pp_dnst": null } }
        ]});
        let tract = TractCharacteristics::from_collection(&fc, "1").unwrap();
        assert!(tract.rows().iter().all(|(_, v)| v == NOT_AVAILABLE));
    }

    #[test]
    fn test_unknown_tract() {
        assert!(TractCharacteristics::from_collection(&collection(), "999").is_none());
    }
}
