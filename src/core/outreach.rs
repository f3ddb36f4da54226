// Homestead Explorer - core/outreach.rs
//
// Outreach campaign estimator for a single census tract.
// Costs and benefits are linear in the number of properties the eligibility
// model flags at or above the chosen threshold.

use crate::core::geojson::{features, in_tract};
use crate::util::constants as c;
use serde_json::Value;

/// Cost and benefit figures for one tract, in USD.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutreachEstimate {
    pub properties: usize,
    pub door_knocking_cost: f64,
    pub direct_mailing_cost: f64,
    pub direct_savings: f64,
    pub indirect_benefits: f64,
    pub total_benefits: f64,
}

impl OutreachEstimate {
    pub fn for_properties(properties: usize) -> Self {
        let n = properties as f64;
        let door_knocking_cost =
            (c::DOOR_KNOCKING_BASE_COST + c::DOOR_KNOCKING_PER_PROPERTY * n) * c::OUTREACH_OVERHEAD;
        let direct_mailing_cost = (c::DIRECT_MAILING_BASE_COST
            + c::DIRECT_MAILING_PER_PROPERTY * n)
            * c::OUTREACH_OVERHEAD;
        let direct_savings = n * c::POST_OUTREACH_UPTAKE * c::ANNUAL_EXEMPTION_SAVING;
        let indirect_benefits = direct_savings * c::INDIRECT_BENEFIT_MULTIPLIER;

        Self {
            properties,
            door_knocking_cost,
            direct_mailing_cost,
            direct_savings,
            indirect_benefits,
            total_benefits: direct_savings + indirect_benefits,
        }
    }

    /// Uptake assumption the benefit figures rest on, e.g. "10%".
    pub fn uptake_note() -> String {
        format!("{:.0}%", c::POST_OUTREACH_UPTAKE * 100.0)
    }
}

/// Whether `threshold` lies inside the model's supported range.
pub fn threshold_in_range(threshold: f64) -> bool {
    (c::THRESHOLD_MIN..=c::THRESHOLD_MAX).contains(&threshold)
}

/// Object ids of the properties in tract `geoid` whose predicted
/// eligibility is at least `threshold`.
///
/// Features with a missing or non-numeric prediction are never selected.
/// Features that match but lack an object id are still counted; their id
/// is recorded as `Value::Null`.
pub fn select_eligible(collection: &Value, geoid: &str, threshold: f64) -> Vec<Value> {
    let Some(features) = features(collection) else {
        return Vec::new();
    };

    features
        .iter()
        .filter_map(|f| f.get("properties"))
        .filter(|p| in_tract(p, geoid))
        .filter(|p| {
            p.get(c::PREDICTION_FIELD)
                .and_then(Value::as_f64)
                .is_some_and(|score| score >= threshold)
        })
        .map(|p| p.get(c::OBJECT_ID_FIELD).cloned().unwrap_or(Value::Null))
        .collect()
}

/// Format a dollar amount with thousands separators and two decimals.
pub fn format_usd(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    // Amounts that round to zero print unsigned.
    let negative = amount < 0.0 && cents > 0;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${grouped}.{frac:02}", if negative { "-" } else { "" })
}
