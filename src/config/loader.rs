//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading per-diem rate
//! tables from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::rate_table::RateTable;
use super::types::{AbroadConfig, InlandConfig};

/// Loads and provides access to the rate table.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/rates/
/// ├── inland.yaml   # Home country and its fixed daily rate
/// └── abroad.yaml   # Abroad countries with default and variant rates
/// ```
///
/// JSON files with the same shape are accepted as well, since JSON is a
/// subset of YAML.
///
/// # Example
///
/// ```no_run
/// use per_diem_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/rates").unwrap();
/// let rate = loader.rate_table().resolve_daily_rate("DE", None).unwrap();
/// println!("Daily rate: {}", rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    table: RateTable,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/rates")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or misses a required field (`ConfigParseError`)
    /// - The rates are inconsistent (`InvalidRateTable`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let inland = Self::load_yaml::<InlandConfig>(&path.join("inland.yaml"))?;
        let abroad = Self::load_yaml::<AbroadConfig>(&path.join("abroad.yaml"))?;

        debug!(
            home_country = %inland.home_country.code,
            abroad_countries = abroad.countries.len(),
            "Loaded rate configuration"
        );

        let table = RateTable::new(inland, abroad)?;
        Ok(Self { table })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded rate table.
    pub fn rate_table(&self) -> &RateTable {
        &self.table
    }

    /// Consumes the loader and returns the rate table.
    pub fn into_rate_table(self) -> RateTable {
        self.table
    }
}
