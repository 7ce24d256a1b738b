use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to parse config: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Document-level configuration, read once before a parse and treated as
/// read-only for its whole duration.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tables: TablesConfig,
}

/// Table parsing knobs. Defaults match strict GFM tables: exactly one header
/// row, column spans enabled, no column-count repair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TablesConfig {
    /// Fewest paragraph lines that may precede the separator line.
    pub min_header_rows: usize,
    /// Most paragraph lines that may precede the separator line.
    pub max_header_rows: usize,
    /// Collapse adjacent empty cells (`||`) into a column-spanning cell.
    pub column_spans: bool,
    /// Drop row cells beyond the separator's declared column count.
    pub discard_extra_columns: bool,
    /// Pad short body rows with empty cells up to the declared column count.
    pub append_missing_columns: bool,
    /// Reject tables whose header rows declare more columns than the separator.
    pub header_separator_columns: bool,
}

impl Default for TablesConfig {
    fn default() -> Self {
        TablesConfig {
            min_header_rows: 1,
            max_header_rows: 1,
            column_spans: true,
            discard_extra_columns: false,
            append_missing_columns: false,
            header_separator_columns: false,
        }
    }
}

impl Config {
    /// Load a config from `config_path`. A missing file is not an error:
    /// `Ok(None)` means "use defaults".
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    /// Parse a config directly from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
