// Homestead Explorer - core/model.rs
//
// Domain vocabulary shared by the scene builders and the UI.
// Filter values live in widget state only; `FilterSelection` is a snapshot
// shape and nothing in the GUI reads it back.

use crate::util::constants::{VALUE_INITIAL, VALUE_MAX, VALUE_MIN};
use std::fmt;

/// Time window offered by the Time Period selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimePeriod {
    #[default]
    Last2Years,
    Last5Years,
    AllTime,
}

impl TimePeriod {
    /// All periods, in display order.
    pub fn all() -> &'static [TimePeriod] {
        &[Self::Last2Years, Self::Last5Years, Self::AllTime]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Last2Years => "Last 2 Years",
            Self::Last5Years => "Last 5 Years",
            Self::AllTime => "All Time",
        }
    }

    /// Reverse lookup from a display label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.label() == label)
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Snapshot of every sidebar control.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub residential_only: bool,
    pub owner_occupied: bool,
    pub no_rental_license: bool,
    pub min_value: f64,
    pub max_value: f64,
    pub high_poverty: bool,
    pub limited_english: bool,
    pub time_period: TimePeriod,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            residential_only: false,
            owner_occupied: false,
            no_rental_license: false,
            min_value: VALUE_MIN,
            max_value: VALUE_INITIAL,
            high_poverty: false,
            limited_english: false,
            time_period: TimePeriod::default(),
        }
    }
}

impl FilterSelection {
    /// The full value domain of the range slider.
    pub fn value_domain() -> (f64, f64) {
        (VALUE_MIN, VALUE_MAX)
    }
}

/// An sRGB colour, independent of any rendering library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lower-case `#rrggbb` form, used in log fields.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Brand palette.
pub mod palette {
    use super::Rgb;

    pub const PAGE_BACKGROUND: Rgb = Rgb::new(0xf5, 0xf5, 0xf5);
    pub const HEADER_RED: Rgb = Rgb::new(0xe4, 0x25, 0x24);
    pub const SIDEBAR_WHITE: Rgb = Rgb::WHITE;
    pub const MAP_MINT: Rgb = Rgb::new(0xe3, 0xf9, 0xf7);
    pub const CHART_SALMON: Rgb = Rgb::new(0xf4, 0xaa, 0x9e);
    pub const TABLE_TEAL: Rgb = Rgb::new(0x00, 0xad, 0xa9);
}
