// Homestead Explorer - util/constants.rs
//
// Single source of truth for named constants, dimensions, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name (also the window title).
pub const APP_NAME: &str = "Philly Homestead Exemption Explorer";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default log level when neither RUST_LOG nor --debug is given.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Window geometry (logical pixels)
// =============================================================================

pub const WINDOW_WIDTH: f32 = 1200.0;
pub const WINDOW_HEIGHT: f32 = 800.0;

pub const SIDEBAR_WIDTH: f32 = 300.0;
pub const PANEL_HEIGHT: f32 = 300.0;

/// Corner radius shared by the header, sidebar, and placeholder panels.
pub const CORNER_RADIUS: f32 = 8.0;

pub const HEADER_PADDING: f32 = 15.0;
pub const HEADER_SPACING: f32 = 20.0;
pub const HEADER_TITLE_SIZE: f32 = 20.0;
pub const HEADER_BUTTON_SPACING: f32 = 10.0;
/// Button padding as (vertical, horizontal).
pub const HEADER_BUTTON_PADDING: (f32, f32) = (10.0, 20.0);

pub const SIDEBAR_PADDING: f32 = 20.0;
pub const SIDEBAR_GROUP_SPACING: f32 = 20.0;
pub const FILTER_GROUP_SPACING: f32 = 10.0;

pub const CONTENT_PADDING: f32 = 20.0;
pub const CONTENT_GAP: f32 = 20.0;
pub const CONTENT_COLUMNS: usize = 2;
pub const PANEL_TITLE_SIZE: f32 = 16.0;

// =============================================================================
// Value range slider
// =============================================================================

pub const VALUE_MIN: f64 = 0.0;
pub const VALUE_MAX: f64 = 1_000_000.0;
pub const VALUE_INITIAL: f64 = 500_000.0;
pub const VALUE_TICK_UNIT: f64 = 100_000.0;

// =============================================================================
// Outreach cost model
// =============================================================================

/// Fixed programme cost for a door-knocking campaign (USD).
pub const DOOR_KNOCKING_BASE_COST: f64 = 32_000.0;
/// Door-knocking cost per targeted property (USD).
pub const DOOR_KNOCKING_PER_PROPERTY: f64 = 3.5;
/// Fixed programme cost for a direct-mail campaign (USD).
pub const DIRECT_MAILING_BASE_COST: f64 = 3_500.0;
/// Direct-mail cost per targeted property (USD).
pub const DIRECT_MAILING_PER_PROPERTY: f64 = 0.38;
/// Overhead multiplier applied to both campaign types.
pub const OUTREACH_OVERHEAD: f64 = 1.1;

/// Share of contacted homeowners assumed to enrol after outreach.
pub const POST_OUTREACH_UPTAKE: f64 = 0.10;
/// Maximum annual tax saving from the exemption (USD).
pub const ANNUAL_EXEMPTION_SAVING: f64 = 1_399.0;
/// Indirect benefits as a multiple of direct homeowner savings.
pub const INDIRECT_BENEFIT_MULTIPLIER: f64 = 2.0;

/// Eligibility model threshold bounds and default.
pub const THRESHOLD_MIN: f64 = 0.5;
pub const THRESHOLD_MAX: f64 = 1.0;
pub const THRESHOLD_DEFAULT: f64 = 0.7;

// =============================================================================
// GeoJSON tooling
// =============================================================================

/// Property keys retained by `homestead-tools reduce` when no keep-list file
/// is supplied.
pub const DEFAULT_KEEP_FIELDS: &[&str] = &[
    "X_pred_1",
    "locatin",
    "owner_1",
    "cnss_tr",
    "dominant_language",
    "dominant_pct",
    "sm_ddrs",
    "rntl_lc",
    "cmmrcl_",
    "avg_mr_",
    "GEOID",
    "ownr_c_",
    "lmtd_n_",
    "pp_dnst",
    "mdn_ncm",
];

/// Field audited by `homestead-tools missing` by default.
pub const DEFAULT_AUDIT_FIELD: &str = "owner_1";

/// Property keys read by the outreach estimator.
pub const GEOID_FIELD: &str = "GEOID";
pub const PREDICTION_FIELD: &str = "_pred1";
pub const OBJECT_ID_FIELD: &str = "objectid";
