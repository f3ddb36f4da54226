// Homestead Explorer - core/layout.rs
//
// Window composer: builds the scene graph from plain per-region config
// structs. Every builder is pure and infallible.

use crate::core::model::{palette, Rgb, TimePeriod};
use crate::core::scene::{
    ActionButton, Checkbox, ContentGrid, Control, FilterGroup, GridCell, Header, Panel,
    PanelKind, RangeSlider, SceneRoot, Select, Sidebar, Size,
};
use crate::util::constants as c;

/// Configuration for the whole window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub size: Size,
    pub background: Rgb,
    pub header: HeaderConfig,
    pub sidebar: SidebarConfig,
    pub content: ContentConfig,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: c::APP_NAME.to_string(),
            size: Size {
                width: c::WINDOW_WIDTH,
                height: c::WINDOW_HEIGHT,
            },
            background: palette::PAGE_BACKGROUND,
            header: HeaderConfig::default(),
            sidebar: SidebarConfig::default(),
            content: ContentConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderConfig {
    pub title: String,
    pub background: Rgb,
    pub button_labels: Vec<String>,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            title: c::APP_NAME.to_string(),
            background: palette::HEADER_RED,
            button_labels: vec!["Export Data".to_string(), "Reset Filters".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarConfig {
    pub width: f32,
    pub background: Rgb,
    pub value_min: f64,
    pub value_max: f64,
    pub value_initial: f64,
    pub value_tick_unit: f64,
    pub time_period: TimePeriod,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            width: c::SIDEBAR_WIDTH,
            background: palette::SIDEBAR_WHITE,
            value_min: c::VALUE_MIN,
            value_max: c::VALUE_MAX,
            value_initial: c::VALUE_INITIAL,
            value_tick_unit: c::VALUE_TICK_UNIT,
            time_period: TimePeriod::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentConfig {
    pub panel_height: f32,
    pub map_colour: Rgb,
    pub chart_colour: Rgb,
    pub table_colour: Rgb,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            panel_height: c::PANEL_HEIGHT,
            map_colour: palette::MAP_MINT,
            chart_colour: palette::CHART_SALMON,
            table_colour: palette::TABLE_TEAL,
        }
    }
}

/// Build the default explorer window.
pub fn build_window() -> SceneRoot {
    build_window_with(&WindowConfig::default())
}

/// Build the window from an explicit configuration.
pub fn build_window_with(config: &WindowConfig) -> SceneRoot {
    let scene = SceneRoot {
        title: config.title.clone(),
        size: config.size,
        background: config.background,
        header: build_header(&config.header),
        sidebar: build_sidebar(&config.sidebar),
        content: build_main_content(&config.content),
    };

    tracing::debug!(
        width = scene.size.width,
        height = scene.size.height,
        groups = scene.sidebar.groups.len(),
        panels = scene.content.panels.len(),
        "Scene built"
    );

    scene
}

/// Title bar with two presentational buttons.
pub fn build_header(config: &HeaderConfig) -> Header {
    let buttons = config
        .button_labels
        .iter()
        .map(|label| ActionButton {
            label: label.clone(),
            background: config.background,
            text_colour: Rgb::WHITE,
            padding: c::HEADER_BUTTON_PADDING,
        })
        .collect();

    Header {
        title: config.title.clone(),
        title_size: c::HEADER_TITLE_SIZE,
        background: config.background,
        text_colour: Rgb::WHITE,
        padding: c::HEADER_PADDING,
        spacing: c::HEADER_SPACING,
        corner_radius: c::CORNER_RADIUS,
        buttons,
        button_spacing: c::HEADER_BUTTON_SPACING,
    }
}

/// Filter sidebar: four groups in fixed order.
pub fn build_sidebar(config: &SidebarConfig) -> Sidebar {
    let property = filter_group(
        "Property Characteristics",
        checkboxes(&["Residential Only", "Owner Occupied", "No Rental License"]),
    );

    let value = filter_group(
        "Value Range",
        vec![
            Control::Slider(RangeSlider {
                min: config.value_min,
                max: config.value_max,
                value: config.value_initial.clamp(config.value_min, config.value_max),
                major_tick_unit: config.value_tick_unit,
                show_ticks: true,
                show_tick_labels: true,
            }),
            Control::Labels(vec!["$0".to_string(), "$1M".to_string()]),
        ],
    );

    let demographics = filter_group(
        "Demographics",
        checkboxes(&["High Poverty Areas", "Limited English Proficiency"]),
    );

    let options: Vec<String> = TimePeriod::all()
        .iter()
        .map(|p| p.label().to_string())
        .collect();
    let selected = TimePeriod::all()
        .iter()
        .position(|p| *p == config.time_period)
        .unwrap_or(0);
    let time = filter_group(
        "Time Period",
        vec![Control::Select(Select { options, selected })],
    );

    Sidebar {
        width: config.width,
        background: config.background,
        padding: c::SIDEBAR_PADDING,
        spacing: c::SIDEBAR_GROUP_SPACING,
        corner_radius: c::CORNER_RADIUS,
        groups: vec![property, value, demographics, time],
    }
}

fn filter_group(title: &str, controls: Vec<Control>) -> FilterGroup {
    FilterGroup {
        title: title.to_string(),
        spacing: c::FILTER_GROUP_SPACING,
        controls,
    }
}

fn checkboxes(labels: &[&str]) -> Vec<Control> {
    labels
        .iter()
        .map(|label| {
            Control::Checkbox(Checkbox {
                label: (*label).to_string(),
                checked: false,
            })
        })
        .collect()
}

/// Two-column grid: map across the top, chart and table below.
pub fn build_main_content(config: &ContentConfig) -> ContentGrid {
    let panel = |kind, title: &str, background, row, column, column_span| Panel {
        kind,
        title: title.to_string(),
        title_size: c::PANEL_TITLE_SIZE,
        background,
        text_colour: Rgb::WHITE,
        height: config.panel_height,
        corner_radius: c::CORNER_RADIUS,
        cell: GridCell {
            row,
            column,
            column_span,
        },
    };

    ContentGrid {
        columns: c::CONTENT_COLUMNS,
        h_gap: c::CONTENT_GAP,
        v_gap: c::CONTENT_GAP,
        padding: c::CONTENT_PADDING,
        panels: vec![
            panel(
                PanelKind::Map,
                "Interactive Map of Philadelphia Census Tracts",
                config.map_colour,
                0,
                0,
                2,
            ),
            panel(
                PanelKind::Chart,
                "Homestead Exemption Rate Distribution",
                config.chart_colour,
                1,
                0,
                1,
            ),
            panel(
                PanelKind::Table,
                "Property Transfer Analysis",
                config.table_colour,
                1,
                1,
                1,
            ),
        ],
    }
}
