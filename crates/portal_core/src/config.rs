//! Portal host configuration.
//!
//! # Responsibility
//! - Resolve where fixtures come from, how to log, and where preferences
//!   live, layering `file → environment → caller overrides`.
//!
//! # Invariants
//! - A missing config file is not an error; defaults apply.
//! - A data source starting with `http://` or `https://` is a URL,
//!   anything else is a directory path.

use crate::fixture::{DirectorySource, FixtureSource, HttpSource};
use crate::logging::{default_log_level, normalize_level};
use serde::Deserialize;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const ENV_DATA: &str = "PORTAL_DATA";
pub const ENV_LOG_LEVEL: &str = "PORTAL_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "PORTAL_LOG_DIR";
pub const ENV_PREFS_DB: &str = "PORTAL_PREFS_DB";

const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: toml::de::Error },
    Invalid { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid config `{}`: {source}", path.display())
            }
            Self::Invalid { field, reason } => write!(f, "invalid `{field}`: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Directory(PathBuf),
    Http(String),
}

impl DataSource {
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::Http(trimmed.to_string())
        } else {
            Self::Directory(PathBuf::from(trimmed))
        }
    }

    /// Builds the byte source this location points at.
    pub fn open(&self) -> Box<dyn FixtureSource> {
        match self {
            Self::Directory(root) => Box::new(DirectorySource::new(root.clone())),
            Self::Http(base_url) => Box::new(HttpSource::new(base_url.clone())),
        }
    }
}

impl Display for DataSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Directory(root) => write!(f, "{}", root.display()),
            Self::Http(base_url) => f.write_str(base_url),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub data_source: DataSource,
    pub log_level: String,
    /// Absolute log directory; `None` logs to stderr.
    pub log_dir: Option<PathBuf>,
    /// SQLite preferences file; `None` keeps preferences in memory.
    pub preferences_db: Option<PathBuf>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            data_source: DataSource::Directory(PathBuf::from(DEFAULT_DATA_DIR)),
            log_level: default_log_level().to_string(),
            log_dir: None,
            preferences_db: None,
        }
    }
}

/// On-disk shape; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    data: Option<String>,
    log_level: Option<String>,
    log_dir: Option<PathBuf>,
    preferences_db: Option<PathBuf>,
}

impl PortalConfig {
    /// Loads `path` (when given and present) and applies process
    /// environment overrides.
    ///
    /// # Errors
    /// - Returns `ConfigError::Io` when an existing file cannot be read.
    /// - Returns `ConfigError::Parse` for malformed TOML or unknown keys.
    /// - Returns `ConfigError::Invalid` for an unsupported log level.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let env = std::env::vars().collect::<HashMap<_, _>>();
        Self::load_with_env(path, &env)
    }

    /// Same as [`PortalConfig::load`] with an explicit environment map.
    pub fn load_with_env(
        path: Option<&Path>,
        env: &HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(path) = path.filter(|path| path.exists()) {
            let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let file: ConfigFile = toml::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
            config.apply_file(file);
        }
        config.apply_env(env);
        config.validate()?;
        Ok(config)
    }

    fn apply_file(&mut self, file: ConfigFile) {
        if let Some(data) = file.data {
            self.data_source = DataSource::parse(&data);
        }
        if let Some(level) = file.log_level {
            self.log_level = level;
        }
        if file.log_dir.is_some() {
            self.log_dir = file.log_dir;
        }
        if file.preferences_db.is_some() {
            self.preferences_db = file.preferences_db;
        }
    }

    fn apply_env(&mut self, env: &HashMap<String, String>) {
        let value = |key: &str| env.get(key).filter(|value| !value.trim().is_empty());
        if let Some(data) = value(ENV_DATA) {
            self.data_source = DataSource::parse(data);
        }
        if let Some(level) = value(ENV_LOG_LEVEL) {
            self.log_level = level.clone();
        }
        if let Some(dir) = value(ENV_LOG_DIR) {
            self.log_dir = Some(PathBuf::from(dir));
        }
        if let Some(db) = value(ENV_PREFS_DB) {
            self.preferences_db = Some(PathBuf::from(db));
        }
    }

    /// Normalizes the log level in place.
    ///
    /// # Errors
    /// - Returns `ConfigError::Invalid` for an unsupported level.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        self.log_level = normalize_level(&self.log_level)
            .map_err(|reason| ConfigError::Invalid {
                field: "log_level",
                reason,
            })?
            .to_string();
        Ok(())
    }

    /// Log directory as the string form `init_logging` expects.
    pub fn log_dir_arg(&self) -> String {
        self.log_dir
            .as_ref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::{DataSource, PortalConfig};
    use std::path::PathBuf;

    #[test]
    fn data_source_detects_urls() {
        assert_eq!(
            DataSource::parse("https://portal.example/data/"),
            DataSource::Http("https://portal.example/data/".to_string())
        );
        assert_eq!(
            DataSource::parse("./fixtures"),
            DataSource::Directory(PathBuf::from("./fixtures"))
        );
    }

    #[test]
    fn validate_normalizes_level() {
        let mut config = PortalConfig {
            log_level: "WARNING".to_string(),
            ..PortalConfig::default()
        };
        config.validate().unwrap();
        assert_eq!(config.log_level, "warn");
    }
}
