//! Storage file path resolution.
//!
//! The core does not own the data file location; it comes from here, in
//! precedence order: `--data-file` flag, then the optional
//! `disaster-map.toml` config file, then the historical default filename.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Config file looked up in the working directory when `--config` is not
/// given.
pub const DEFAULT_CONFIG_FILE: &str = "disaster-map.toml";

/// Storage filename the original console program used; kept as the default
/// so existing data files keep working.
pub const DEFAULT_DATA_FILE: &str = "relatos_catastrofes.txt";

/// Settings read from the TOML config file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Storage file for reports.
    pub data_file: Option<PathBuf>,
}

impl CliConfig {
    /// Loads the config from `explicit` when given, otherwise from
    /// [`DEFAULT_CONFIG_FILE`] if it exists.
    ///
    /// An explicitly requested file must read and parse; the implicit
    /// default is forgiving (missing file or bad TOML falls back to
    /// defaults with a warning).
    ///
    /// # Errors
    ///
    /// Returns an error only when `explicit` is set and unreadable or
    /// invalid.
    pub fn load(explicit: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        if let Some(path) = explicit {
            let text = std::fs::read_to_string(path)?;
            return Ok(toml::from_str(&text)?);
        }

        let Ok(text) = std::fs::read_to_string(DEFAULT_CONFIG_FILE) else {
            return Ok(Self::default());
        };
        match toml::from_str(&text) {
            Ok(config) => Ok(config),
            Err(err) => {
                log::warn!("Ignoring invalid {DEFAULT_CONFIG_FILE}: {err}");
                Ok(Self::default())
            }
        }
    }
}

/// Applies the flag-over-config-over-default precedence.
#[must_use]
pub fn resolve_data_file(flag: Option<PathBuf>, config: &CliConfig) -> PathBuf {
    flag.or_else(|| config.data_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_data_file_from_toml() {
        let config: CliConfig = toml::from_str("data_file = \"reports.txt\"").unwrap();
        assert_eq!(config.data_file, Some(PathBuf::from("reports.txt")));
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<CliConfig>("data_fiel = \"oops.txt\"").is_err());
    }

    #[test]
    fn flag_beats_config_beats_default() {
        let config = CliConfig {
            data_file: Some(PathBuf::from("from-config.txt")),
        };

        assert_eq!(
            resolve_data_file(Some(PathBuf::from("from-flag.txt")), &config),
            PathBuf::from("from-flag.txt")
        );
        assert_eq!(
            resolve_data_file(None, &config),
            PathBuf::from("from-config.txt")
        );
        assert_eq!(
            resolve_data_file(None, &CliConfig::default()),
            PathBuf::from(DEFAULT_DATA_FILE)
        );
    }
}
