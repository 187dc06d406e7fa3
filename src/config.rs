use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid max_age: {0}")]
    MaxAge(humantime::DurationError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub station: StationConfig,
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub defaults: PredictDefaults,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StationConfig {
    pub name: Option<String>,
    pub coordinates: String,
    #[serde(default)]
    pub altitude_m: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub tle_folder: PathBuf,
    #[serde(default = "default_max_age")]
    pub max_age: String,
}

fn default_max_age() -> String {
    "24h".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct PredictDefaults {
    #[serde(default = "default_horizon_days")]
    pub horizon_days: f64,
    #[serde(default = "default_min_elevation")]
    pub min_elevation_deg: f64,
}

impl Default for PredictDefaults {
    fn default() -> Self {
        Self {
            horizon_days: default_horizon_days(),
            min_elevation_deg: default_min_elevation(),
        }
    }
}

fn default_horizon_days() -> f64 {
    3.0
}

fn default_min_elevation() -> f64 {
    10.0
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Catalog reload threshold, parsed from the humantime string.
    pub fn catalog_max_age(&self) -> Result<Duration, ConfigError> {
        humantime::parse_duration(self.catalog.max_age.trim()).map_err(ConfigError::MaxAge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let yaml = r#"
station:
  name: Delft
  coordinates: "52.0, 4.36"
  altitude_m: 10
catalog:
  tle_folder: ./tle
  max_age: 6h
defaults:
  horizon_days: 1.5
  min_elevation_deg: 5
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.station.name.as_deref(), Some("Delft"));
        assert_eq!(config.station.altitude_m, 10.0);
        assert_eq!(config.defaults.horizon_days, 1.5);
        assert_eq!(config.defaults.min_elevation_deg, 5.0);
        assert_eq!(
            config.catalog_max_age().unwrap(),
            Duration::from_secs(6 * 3600)
        );
    }

    #[test]
    fn applies_defaults() {
        let yaml = r#"
station:
  coordinates: "0, 0"
catalog:
  tle_folder: ./tle
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.station.altitude_m, 0.0);
        assert_eq!(config.defaults.horizon_days, 3.0);
        assert_eq!(config.defaults.min_elevation_deg, 10.0);
        assert_eq!(
            config.catalog_max_age().unwrap(),
            Duration::from_secs(24 * 3600)
        );
    }

    #[test]
    fn rejects_bad_max_age() {
        let yaml = r#"
station:
  coordinates: "0, 0"
catalog:
  tle_folder: ./tle
  max_age: whenever
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.catalog_max_age().is_err());
    }
}
