//! Dashboard configuration loaded from `dashboard.yaml`.
//!
//! Every field has a default, so a missing file (or a file that sets only a
//! few keys) still yields a complete configuration. `IPO_DASHBOARD_DATA_DIR`
//! and `IPO_DASHBOARD_BIND` override the file.

use chrono::NaiveDate;
use chrono_tz::Tz;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::backend::storage::csv::connection::{DEFAULT_SCHEDULE_FILE, DEFAULT_TRADES_FILE};
use crate::backend::storage::CsvConnection;

pub const CONFIG_PATH_ENV: &str = "IPO_DASHBOARD_CONFIG";
pub const DATA_DIR_ENV: &str = "IPO_DASHBOARD_DATA_DIR";
pub const BIND_ENV: &str = "IPO_DASHBOARD_BIND";
pub const DEFAULT_CONFIG_FILE: &str = "dashboard.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub data_directory: PathBuf,
    pub schedule_file: String,
    pub trades_file: String,
    pub bind_address: String,
    pub refresh_interval_secs: u64,
    pub timezone: String,
    pub extra_holidays: Vec<NaiveDate>,
    pub allowed_origin: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_directory: PathBuf::from("data"),
            schedule_file: DEFAULT_SCHEDULE_FILE.to_string(),
            trades_file: DEFAULT_TRADES_FILE.to_string(),
            bind_address: "127.0.0.1:3000".to_string(),
            refresh_interval_secs: 300,
            timezone: "Asia/Seoul".to_string(),
            extra_holidays: Vec::new(),
            allowed_origin: None,
        }
    }
}

impl DashboardConfig {
    /// Load from the path in `IPO_DASHBOARD_CONFIG` (or `dashboard.yaml`),
    /// then apply environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut config = Self::from_file(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        // Fail at startup rather than on the first request
        config.timezone()?;
        Ok(config)
    }

    /// Read a YAML config file. A missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Config file {} not found, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        // An empty file deserializes to unit, not to a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(DATA_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            info!("Data directory overridden by {}: {}", DATA_DIR_ENV, dir);
            self.data_directory = PathBuf::from(dir);
        }
        if let Some(bind) = lookup(BIND_ENV).filter(|v| !v.trim().is_empty()) {
            info!("Bind address overridden by {}: {}", BIND_ENV, bind);
            self.bind_address = bind;
        }
    }

    pub fn timezone(&self) -> Result<Tz, ConfigError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| ConfigError::UnknownTimezone(self.timezone.clone()))
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn csv_connection(&self) -> CsvConnection {
        CsvConnection::with_file_names(&self.data_directory, &self.schedule_file, &self.trades_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = DashboardConfig::from_file(&temp_dir.path().join("absent.yaml")).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.refresh_interval(), Duration::from_secs(300));
        assert_eq!(config.timezone().unwrap(), chrono_tz::Asia::Seoul);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dashboard.yaml");
        fs::write(
            &path,
            "data_directory: /srv/ipo\nrefresh_interval_secs: 60\nextra_holidays:\n  - 2025-06-03\n",
        )
        .unwrap();

        let config = DashboardConfig::from_file(&path).unwrap();
        assert_eq!(config.data_directory, PathBuf::from("/srv/ipo"));
        assert_eq!(config.refresh_interval_secs, 60);
        assert_eq!(
            config.extra_holidays,
            vec![NaiveDate::from_ymd_opt(2025, 6, 3).unwrap()]
        );
        assert_eq!(config.schedule_file, "일정.csv");
        assert_eq!(config.bind_address, "127.0.0.1:3000");
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dashboard.yaml");
        fs::write(&path, "\n").unwrap();
        assert_eq!(DashboardConfig::from_file(&path).unwrap(), DashboardConfig::default());
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dashboard.yaml");
        fs::write(&path, "refresh_interval_secs: [not, a, number]\n").unwrap();
        assert!(matches!(
            DashboardConfig::from_file(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_environment_overrides() {
        let env: HashMap<&str, &str> = [(DATA_DIR_ENV, "/tmp/sheets"), (BIND_ENV, "0.0.0.0:8080")]
            .into_iter()
            .collect();
        let mut config = DashboardConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.data_directory, PathBuf::from("/tmp/sheets"));
        assert_eq!(config.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let mut config = DashboardConfig::default();
        config.apply_overrides(|key| (key == BIND_ENV).then(|| "  ".to_string()));
        assert_eq!(config.bind_address, "127.0.0.1:3000");
    }

    #[test]
    fn test_unknown_timezone() {
        let config = DashboardConfig {
            timezone: "Mars/Olympus".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.timezone(), Err(ConfigError::UnknownTimezone(_))));
    }

    #[test]
    fn test_csv_connection_uses_configured_names() {
        let config = DashboardConfig {
            data_directory: PathBuf::from("/data"),
            schedule_file: "schedule.csv".to_string(),
            ..Default::default()
        };
        let connection = config.csv_connection();
        assert_eq!(connection.schedule_file_path(), PathBuf::from("/data/schedule.csv"));
        assert_eq!(connection.trades_file_path(), PathBuf::from("/data/매매.csv"));
    }
}
