// Homestead Explorer - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// The GUI only ever produces `Launch`; the rest belong to homestead-tools.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all Homestead Explorer operations.
#[derive(Debug)]
pub enum ExplorerError {
    /// The host GUI toolkit failed to start (e.g. no display available).
    Launch(String),

    /// GeoJSON loading, shape validation, or serialisation failed.
    GeoJson(GeoJsonError),

    /// Tool configuration loading or validation failed.
    Config(ConfigError),

    /// CSV export failed.
    Export(ExportError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Launch(msg) => write!(f, "Failed to launch GUI: {msg}"),
            Self::GeoJson(e) => write!(f, "GeoJSON error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ExplorerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Launch(_) => None,
            Self::GeoJson(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<eframe::Error> for ExplorerError {
    fn from(e: eframe::Error) -> Self {
        Self::Launch(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// GeoJSON errors
// ---------------------------------------------------------------------------

/// Errors related to reading and writing tract GeoJSON files.
#[derive(Debug)]
pub enum GeoJsonError {
    /// The file is not valid JSON.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The document has no `features` array.
    NotAFeatureCollection { path: PathBuf },

    /// The collection could not be serialised for writing.
    Serialize { source: serde_json::Error },
}

impl fmt::Display for GeoJsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { path, source } => write!(
                f,
                "'{}' is not valid JSON: {source}. Validate the file for syntax errors.",
                path.display()
            ),
            Self::NotAFeatureCollection { path } => write!(
                f,
                "'{}' is not a FeatureCollection (missing 'features' array)",
                path.display()
            ),
            Self::Serialize { source } => write!(f, "Could not serialise collection: {source}"),
        }
    }
}

impl std::error::Error for GeoJsonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse { source, .. } => Some(source),
            Self::Serialize { source } => Some(source),
            Self::NotAFeatureCollection { .. } => None,
        }
    }
}

impl From<GeoJsonError> for ExplorerError {
    fn from(e: GeoJsonError) -> Self {
        Self::GeoJson(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to the keep-list configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// The keep list contains no fields, which would strip every property.
    EmptyKeepList { path: PathBuf },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::EmptyKeepList { path } => write!(
                f,
                "Keep list '{}' has no fields; refusing to strip every property",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::EmptyKeepList { .. } => None,
        }
    }
}

impl From<ConfigError> for ExplorerError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to exporting selected object ids.
#[derive(Debug)]
pub enum ExportError {
    /// File could not be created or flushed.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation failed.
    Csv { path: PathBuf, source: csv::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for ExplorerError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

/// Convenience type alias for Homestead Explorer results.
pub type Result<T> = std::result::Result<T, ExplorerError>;
