//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::{data_files, district_properties, output_formats, risk};
use crate::core::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base directory for the dataset files
    pub data_dir: Option<String>,

    /// Raw theft-records file, relative to the data directory
    pub theft_records: Option<String>,

    /// District boundary file, relative to the data directory
    pub districts: Option<String>,

    /// Cleaned tabular dataset, relative to the data directory
    pub cleaned_dataset: Option<String>,

    /// Precomputed predictions file, relative to the data directory
    pub predictions: Option<String>,

    /// GeoJSON property holding the district location code
    pub district_id_property: Option<String>,

    /// GeoJSON property holding the district name
    pub district_name_property: Option<String>,

    /// Half-width of the high-risk hour window (hours)
    pub risk_window: Option<u8>,

    /// Output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,

    /// Show timing and memory usage after a render
    pub show_performance: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Some(data_files::DEFAULT_DATA_DIR.to_string()),
            theft_records: Some(data_files::THEFT_RECORDS.to_string()),
            districts: Some(data_files::DISTRICTS.to_string()),
            cleaned_dataset: Some(data_files::CLEANED_DATASET.to_string()),
            predictions: Some(data_files::PREDICTIONS.to_string()),
            district_id_property: Some(district_properties::DEFAULT_ID_KEY.to_string()),
            district_name_property: Some(district_properties::DEFAULT_NAME_KEY.to_string()),
            risk_window: Some(risk::DEFAULT_WINDOW_HOURS),
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
            show_performance: Some(false),
        }
    }
}

/// Config file name discovered in the working directory and parents
pub const CONFIG_FILE_NAME: &str = ".velorisk.toml";

impl Config {
    /// Load configuration from file, falling back to defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            crate::core::error::VeloriskError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            crate::core::error::VeloriskError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        if let Ok(config) = Self::load_from_file(CONFIG_FILE_NAME) {
            return config;
        }

        // Check parent directories (up to 3 levels)
        for i in 1..=3 {
            let path = format!("{}{}", "../".repeat(i), CONFIG_FILE_NAME);
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref data_dir) = cli_config.data_dir {
            self.data_dir = Some(data_dir.clone());
        }
        if let Some(window) = cli_config.risk_window {
            self.risk_window = Some(window);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if cli_config.show_performance {
            self.show_performance = Some(true);
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(window) = self.risk_window {
            if window > risk::MAX_WINDOW_HOURS {
                return Err(crate::core::error::VeloriskError::Config(format!(
                    "risk_window must be at most {}, got {window}",
                    risk::MAX_WINDOW_HOURS
                )));
            }
        }
        if let Some(ref format) = self.output_format {
            if !output_formats::ALL.contains(&format.as_str()) {
                return Err(crate::core::error::VeloriskError::Config(format!(
                    "output_format must be one of {:?}, got '{format}'",
                    output_formats::ALL
                )));
            }
        }
        Ok(())
    }

    /// Effective risk window half-width
    pub fn risk_window(&self) -> u8 {
        self.risk_window.unwrap_or(risk::DEFAULT_WINDOW_HOURS)
    }

    /// Effective GeoJSON id property key
    pub fn district_id_property(&self) -> &str {
        self.district_id_property
            .as_deref()
            .unwrap_or(district_properties::DEFAULT_ID_KEY)
    }

    /// Effective GeoJSON name property key
    pub fn district_name_property(&self) -> &str {
        self.district_name_property
            .as_deref()
            .unwrap_or(district_properties::DEFAULT_NAME_KEY)
    }

    fn data_path(&self, file: Option<&str>, default: &str) -> PathBuf {
        let dir = self.data_dir.as_deref().unwrap_or(data_files::DEFAULT_DATA_DIR);
        Path::new(dir).join(file.unwrap_or(default))
    }

    /// Resolved path of the theft-records file
    pub fn theft_records_path(&self) -> PathBuf {
        self.data_path(self.theft_records.as_deref(), data_files::THEFT_RECORDS)
    }

    /// Resolved path of the district boundary file
    pub fn districts_path(&self) -> PathBuf {
        self.data_path(self.districts.as_deref(), data_files::DISTRICTS)
    }

    /// Resolved path of the cleaned dataset file
    pub fn cleaned_dataset_path(&self) -> PathBuf {
        self.data_path(self.cleaned_dataset.as_deref(), data_files::CLEANED_DATASET)
    }

    /// Resolved path of the predictions file
    pub fn predictions_path(&self) -> PathBuf {
        self.data_path(self.predictions.as_deref(), data_files::PREDICTIONS)
    }
}

/// CLI argument values that override file configuration
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub config_file: Option<String>,
    pub no_config: bool,
    pub data_dir: Option<String>,
    pub risk_window: Option<u8>,
    pub output_format: Option<String>,
    pub quiet: bool,
    pub verbose: bool,
    pub no_progress: bool,
    pub show_performance: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.risk_window(), 1);
        assert_eq!(config.output_format.as_deref(), Some("text"));
        assert_eq!(config.theft_records_path(), PathBuf::from("data/bike_thefts.csv"));
        assert_eq!(config.districts_path(), PathBuf::from("data/districts.geojson"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"data_dir = \"/srv/velorisk\"\nrisk_window = 2\noutput_format = \"json\"\n",
        )
        .unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.data_dir.as_deref(), Some("/srv/velorisk"));
        assert_eq!(config.risk_window(), 2);
        assert_eq!(config.output_format.as_deref(), Some("json"));
        // unset fields fall back through the accessors
        assert_eq!(
            config.theft_records_path(),
            PathBuf::from("/srv/velorisk/bike_thefts.csv")
        );
    }

    #[test]
    fn test_load_from_file_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"risk_window = [broken").unwrap();

        let result = Config::load_from_file(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = Config::load_from_file("/does/not/exist.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_window() {
        let config = Config {
            risk_window: Some(24),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_format() {
        let config = Config {
            output_format: Some("yaml".to_string()),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_merge_with_cli_precedence() {
        let mut config = Config::default();
        let cli = CliConfig {
            data_dir: Some("elsewhere".to_string()),
            risk_window: Some(3),
            output_format: Some("minimal".to_string()),
            verbose: true,
            ..CliConfig::default()
        };

        config.merge_with_cli(&cli);

        assert_eq!(config.data_dir.as_deref(), Some("elsewhere"));
        assert_eq!(config.risk_window(), 3);
        assert_eq!(config.output_format.as_deref(), Some("minimal"));
        assert_eq!(config.verbose, Some(true));
    }

    #[test]
    fn test_merge_with_cli_keeps_file_values() {
        let mut config = Config {
            risk_window: Some(2),
            ..Config::default()
        };
        config.merge_with_cli(&CliConfig::default());
        assert_eq!(config.risk_window(), 2);
    }
}
