// Homestead Explorer - core/scene.rs
//
// Declarative scene graph for the explorer window.
// Pure data: no egui types, no callbacks. Interactive nodes own their widget
// state so the renderer can bind to it, but no node carries a handler.

use crate::core::model::{FilterSelection, Rgb, TimePeriod};

/// Width and height in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// Root of the scene: the top-level window and its three regions.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneRoot {
    pub title: String,
    pub size: Size,
    pub background: Rgb,
    pub header: Header,
    pub sidebar: Sidebar,
    pub content: ContentGrid,
}

// =============================================================================
// Header
// =============================================================================

/// Horizontal title bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub title: String,
    pub title_size: f32,
    pub background: Rgb,
    pub text_colour: Rgb,
    pub padding: f32,
    pub spacing: f32,
    pub corner_radius: f32,
    pub buttons: Vec<ActionButton>,
    pub button_spacing: f32,
}

/// A header button. Buttons are presentational: clicking one does nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionButton {
    pub label: String,
    pub background: Rgb,
    pub text_colour: Rgb,
    /// (vertical, horizontal)
    pub padding: (f32, f32),
}

// =============================================================================
// Sidebar
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Sidebar {
    pub width: f32,
    pub background: Rgb,
    pub padding: f32,
    pub spacing: f32,
    pub corner_radius: f32,
    pub groups: Vec<FilterGroup>,
}

/// A bold-titled stack of controls.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterGroup {
    pub title: String,
    pub spacing: f32,
    pub controls: Vec<Control>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    Checkbox(Checkbox),
    Slider(RangeSlider),
    /// A row of static labels, e.g. slider endpoints.
    Labels(Vec<String>),
    Select(Select),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Checkbox {
    pub label: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeSlider {
    pub min: f64,
    pub max: f64,
    pub value: f64,
    pub major_tick_unit: f64,
    pub show_ticks: bool,
    pub show_tick_labels: bool,
}

impl RangeSlider {
    /// Tick positions from `min` to `max` inclusive.
    pub fn ticks(&self) -> Vec<f64> {
        if self.major_tick_unit <= 0.0 || self.max < self.min {
            return Vec::new();
        }
        let steps = ((self.max - self.min) / self.major_tick_unit).floor() as usize;
        (0..=steps)
            .map(|i| self.min + i as f64 * self.major_tick_unit)
            .collect()
    }
}

/// Single-select drop-down.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub options: Vec<String>,
    pub selected: usize,
}

impl Select {
    pub fn selected_label(&self) -> Option<&str> {
        self.options.get(self.selected).map(String::as_str)
    }
}

// =============================================================================
// Main content
// =============================================================================

/// Grid of placeholder panels.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentGrid {
    pub columns: usize,
    pub h_gap: f32,
    pub v_gap: f32,
    pub padding: f32,
    pub panels: Vec<Panel>,
}

impl ContentGrid {
    /// Panels grouped by row, each row sorted by column.
    pub fn rows(&self) -> Vec<Vec<&Panel>> {
        let row_count = self.panels.iter().map(|p| p.cell.row + 1).max().unwrap_or(0);
        (0..row_count)
            .map(|row| {
                let mut cells: Vec<&Panel> =
                    self.panels.iter().filter(|p| p.cell.row == row).collect();
                cells.sort_by_key(|p| p.cell.column);
                cells
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Map,
    Chart,
    Table,
}

/// Grid placement of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub row: usize,
    pub column: usize,
    pub column_span: usize,
}

/// Solid-colour box with a centred title, standing in for a visualisation.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub kind: PanelKind,
    pub title: String,
    pub title_size: f32,
    pub background: Rgb,
    pub text_colour: Rgb,
    pub height: f32,
    pub corner_radius: f32,
    pub cell: GridCell,
}

// =============================================================================
// Queries
// =============================================================================

impl Sidebar {
    pub fn group(&self, title: &str) -> Option<&FilterGroup> {
        self.groups.iter().find(|g| g.title == title)
    }
}

impl FilterGroup {
    pub fn checkboxes(&self) -> impl Iterator<Item = &Checkbox> {
        self.controls.iter().filter_map(|c| match c {
            Control::Checkbox(cb) => Some(cb),
            _ => None,
        })
    }

    pub fn slider(&self) -> Option<&RangeSlider> {
        self.controls.iter().find_map(|c| match c {
            Control::Slider(s) => Some(s),
            _ => None,
        })
    }

    pub fn select(&self) -> Option<&Select> {
        self.controls.iter().find_map(|c| match c {
            Control::Select(s) => Some(s),
            _ => None,
        })
    }

    fn is_checked(&self, label: &str) -> bool {
        self.checkboxes().any(|cb| cb.label == label && cb.checked)
    }
}

impl SceneRoot {
    /// Read the current widget state into a `FilterSelection`.
    ///
    /// Missing controls fall back to the defaults.
    pub fn filter_selection(&self) -> FilterSelection {
        let mut sel = FilterSelection::default();
        for group in &self.sidebar.groups {
            sel.residential_only |= group.is_checked("Residential Only");
            sel.owner_occupied |= group.is_checked("Owner Occupied");
            sel.no_rental_license |= group.is_checked("No Rental License");
            sel.high_poverty |= group.is_checked("High Poverty Areas");
            sel.limited_english |= group.is_checked("Limited English Proficiency");
            if let Some(slider) = group.slider() {
                sel.min_value = slider.min;
                sel.max_value = slider.value;
            }
            if let Some(period) = group
                .select()
                .and_then(Select::selected_label)
                .and_then(TimePeriod::from_label)
            {
                sel.time_period = period;
            }
        }
        sel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider(min: f64, max: f64, unit: f64) -> RangeSlider {
        RangeSlider {
            min,
            max,
            value: min,
            major_tick_unit: unit,
            show_ticks: true,
            show_tick_labels: true,
        }
    }

    #[test]
    fn test_ticks_inclusive_of_endpoints() {
        let ticks = slider(0.0, 1_000_000.0, 100_000.0).ticks();
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&1_000_000.0));
    }

    #[test]
    fn test_ticks_degenerate_unit() {
        assert!(slider(0.0, 10.0, 0.0).ticks().is_empty());
        assert!(slider(10.0, 0.0, 1.0).ticks().is_empty());
    }

    #[test]
    fn test_select_out_of_range_has_no_label() {
        let select = Select {
            options: vec!["A".to_string()],
            selected: 3,
        };
        assert_eq!(select.selected_label(), None);
    }

    #[test]
    fn test_rows_sorted_by_column() {
        let panel = |kind, row, column| Panel {
            kind,
            title: String::new(),
            title_size: 16.0,
            background: Rgb::WHITE,
            text_colour: Rgb::WHITE,
            height: 300.0,
            corner_radius: 8.0,
            cell: GridCell {
                row,
                column,
                column_span: 1,
            },
        };
        let grid = ContentGrid {
            columns: 2,
            h_gap: 0.0,
            v_gap: 0.0,
            padding: 0.0,
            panels: vec![
                panel(PanelKind::Table, 1, 1),
                panel(PanelKind::Map, 0, 0),
                panel(PanelKind::Chart, 1, 0),
            ],
        };
        let rows = grid.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0].kind, PanelKind::Map);
        assert_eq!(rows[1][0].kind, PanelKind::Chart);
        assert_eq!(rows[1][1].kind, PanelKind::Table);
    }
}
