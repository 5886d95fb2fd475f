//! Application configuration.
//!
//! Loaded from an optional TOML file; missing sections fall back to
//! their defaults. A few environment variables override the file so
//! credentials need not be written to disk.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use studygroup_db::DbConfig;

pub const DB_URL_ENV: &str = "STUDYGROUP_DB_URL";
pub const DB_USER_ENV: &str = "STUDYGROUP_DB_USER";
pub const DB_PASSWORD_ENV: &str = "STUDYGROUP_DB_PASSWORD";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: DbConfig,
    pub log: LogConfig,
}

/// Logging configuration. `RUST_LOG`, when set, takes precedence over
/// `filter`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive (default: `studygroup=info`).
    pub filter: String,
    /// Emit JSON lines instead of compact text.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "studygroup=info".into(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from `path` (or defaults when `None`), then
    /// apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(DB_URL_ENV) {
            self.database.url = url;
        }
        if let Some(username) = lookup(DB_USER_ENV) {
            self.database.username = username;
        }
        if let Some(password) = lookup(DB_PASSWORD_ENV) {
            self.database.password = password;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_without_file() {
        let config = AppConfig::default();
        assert_eq!(config.database.url, "127.0.0.1:8000");
        assert_eq!(config.database.namespace, "studygroups");
        assert_eq!(config.log.filter, "studygroup=info");
        assert!(!config.log.json);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[database]\nurl = \"db.internal:8000\"\n\n[log]\njson = true"
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.database.url, "db.internal:8000");
        assert_eq!(config.database.database, "main");
        assert!(config.log.json);
        assert_eq!(config.log.filter, "studygroup=info");
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = AppConfig::from_file(Path::new("/nonexistent/studygroup.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[database\nurl = ").unwrap();

        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn environment_overrides_credentials() {
        let mut config = AppConfig::default();
        config.apply_overrides(|key| match key {
            DB_URL_ENV => Some("remote:9000".into()),
            DB_PASSWORD_ENV => Some("s3cret".into()),
            _ => None,
        });

        assert_eq!(config.database.url, "remote:9000");
        assert_eq!(config.database.username, "root");
        assert_eq!(config.database.password, "s3cret");
    }
}
