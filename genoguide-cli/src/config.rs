//! Configuration handling for the genoguide CLI
//!
//! Supports loading configuration from genoguide.toml files with CLI argument overrides.

use genoguide_core::{MarkerParams, DEFAULT_MIN_MARKER_WIDTH_PERCENT, DEFAULT_SEARCH_LIMIT};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{CliError, CliResult};

pub const DEFAULT_CONFIG_FILE: &str = "genoguide.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Snapshot directory holding chromosomes.json, genes.json and statistics.json
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Smallest marker width drawn on a chromosome bar, in percent of its length
    #[serde(default = "default_min_marker_width")]
    pub min_marker_width_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of genes returned by a prefix search
    #[serde(default = "default_search_limit")]
    pub limit: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf { PathBuf::from("data") }
fn default_min_marker_width() -> f64 { DEFAULT_MIN_MARKER_WIDTH_PERCENT }
fn default_search_limit() -> usize { DEFAULT_SEARCH_LIMIT }

impl Default for DataConfig {
    fn default() -> Self {
        Self { dir: default_data_dir() }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { min_marker_width_percent: default_min_marker_width() }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { limit: default_search_limit() }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> CliResult<Self> {
        let config = match config_path {
            Some(path) => {
                log::info!("Loading configuration from: {}", path.display());
                if !path.exists() {
                    return Err(CliError::file_not_found(path.to_path_buf()));
                }
                Self::load_from_file(path)?
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    log::info!("Loading configuration from: {}", DEFAULT_CONFIG_FILE);
                    Self::load_from_file(&default_path)?
                } else {
                    log::debug!("Using default configuration");
                    Self::default()
                }
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &Path) -> CliResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Generate example configuration file content
    pub fn example_toml() -> CliResult<String> {
        Ok(toml::to_string_pretty(&Self::default())?)
    }

    /// Apply command-line overrides on top of the file values
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, json: bool) -> Self {
        if let Some(dir) = data_dir {
            self.data.dir = dir;
        }
        if json {
            self.output.format = OutputFormat::Json;
        }
        self
    }

    pub fn validate(&self) -> CliResult<()> {
        let width = self.layout.min_marker_width_percent;
        if !width.is_finite() || !(0.0..=100.0).contains(&width) {
            return Err(CliError::config(format!(
                "layout.min_marker_width_percent must be between 0 and 100, got {}",
                width
            )));
        }
        if self.search.limit == 0 {
            return Err(CliError::config("search.limit must be at least 1"));
        }
        Ok(())
    }

    pub fn marker_params(&self) -> MarkerParams {
        MarkerParams::with_min_width(self.layout.min_marker_width_percent)
    }

    pub fn is_json(&self) -> bool {
        self.output.format == OutputFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.data.dir, PathBuf::from("data"));
        assert_eq!(config.layout.min_marker_width_percent, 0.2);
        assert_eq!(config.search.limit, 10);
        assert_eq!(config.output.format, OutputFormat::Table);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip() -> CliResult<()> {
        let mut config = Config::default();
        config.search.limit = 25;
        config.output.format = OutputFormat::Json;
        let temp_file = NamedTempFile::new()?;

        config.save_to_file(temp_file.path())?;
        let loaded = Config::load(Some(temp_file.path()))?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_defaults() -> CliResult<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "[search]\nlimit = 3")?;

        let config = Config::load_from_file(temp_file.path())?;
        assert_eq!(config.search.limit, 3);
        assert_eq!(config.data.dir, PathBuf::from("data"));
        assert_eq!(config.layout.min_marker_width_percent, 0.2);

        Ok(())
    }

    #[test]
    fn test_invalid_values_rejected() -> CliResult<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "[layout]\nmin_marker_width_percent = -1.0")?;
        let err = Config::load(Some(temp_file.path())).unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));

        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "[output]\nformat = \"yaml\"")?;
        assert!(Config::load(Some(temp_file.path())).is_err());

        Ok(())
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound { .. }));
    }

    #[test]
    fn test_overrides() {
        let config = Config::default().with_overrides(Some(PathBuf::from("/tmp/snap")), true);
        assert_eq!(config.data.dir, PathBuf::from("/tmp/snap"));
        assert!(config.is_json());

        let config = Config::default().with_overrides(None, false);
        assert_eq!(config.data.dir, PathBuf::from("data"));
        assert!(!config.is_json());
    }

    #[test]
    fn test_example_toml_generation() -> CliResult<()> {
        let example = Config::example_toml()?;
        assert!(example.contains("[data]"));
        assert!(example.contains("[layout]"));
        assert!(example.contains("min_marker_width_percent"));
        assert!(example.contains("format = \"table\""));
        Ok(())
    }
}
