// Homestead Explorer - platform/config.rs
//
// Keep-list configuration for `homestead-tools reduce`.
//
// File shape (TOML):
//
//   fields = ["GEOID", "owner_1", "X_pred_1"]
//
// Unknown keys are ignored so a keep list can share a file with other notes.

use crate::util::constants;
use crate::util::error::{ConfigError, ExplorerError, Result};
use std::path::Path;

/// Raw deserialisable shape of a keep-list file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawKeepList {
    pub fields: Vec<String>,
}

/// The built-in keep list.
pub fn default_keep_list() -> Vec<String> {
    constants::DEFAULT_KEEP_FIELDS
        .iter()
        .map(|f| (*f).to_string())
        .collect()
}

/// Parse keep-list TOML. `path` is only used for error context.
pub fn parse_keep_list(content: &str, path: &Path) -> std::result::Result<Vec<String>, ConfigError> {
    let raw: RawKeepList = toml::from_str(content).map_err(|source| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut fields: Vec<String> = Vec::with_capacity(raw.fields.len());
    for field in raw.fields {
        let field = field.trim().to_string();
        if !field.is_empty() && !fields.contains(&field) {
            fields.push(field);
        }
    }

    if fields.is_empty() {
        return Err(ConfigError::EmptyKeepList {
            path: path.to_path_buf(),
        });
    }
    Ok(fields)
}

/// Resolve the keep list: the file at `path` if given, otherwise the
/// built-in default.
pub fn load_keep_list(path: Option<&Path>) -> Result<Vec<String>> {
    let Some(path) = path else {
        tracing::debug!("No keep-list file given; using built-in list");
        return Ok(default_keep_list());
    };

    let content = std::fs::read_to_string(path).map_err(|source| ExplorerError::Io {
        path: path.to_path_buf(),
        operation: "read keep list",
        source,
    })?;

    let fields = parse_keep_list(&content, path)?;
    tracing::info!(path = %path.display(), fields = fields.len(), "Loaded keep list");
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_dedups() {
        let fields = parse_keep_list(
            r#"fields = [" GEOID ", "owner_1", "GEOID", ""]
note = "ignored""#,
            Path::new("keep.toml"),
        )
        .unwrap();
        assert_eq!(fields, vec!["GEOID", "owner_1"]);
    }

    #[test]
    fn test_parse_empty_list_rejected() {
        let err = parse_keep_list("fields = []", Path::new("keep.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyKeepList { .. }));
        let err = parse_keep_list("", Path::new("keep.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyKeepList { .. }));
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = parse_keep_list("fields = [", Path::new("keep.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse { .. }));
    }

    #[test]
    fn test_default_list_without_file() {
        let fields = load_keep_list(None).unwrap();
        assert_eq!(fields.len(), constants::DEFAULT_KEEP_FIELDS.len());
        assert!(fields.iter().any(|f| f == "GEOID"));
    }
}
