//! Configuration management for dummylog.
//!
//! Settings are read from an optional TOML file, `~/.config/dummylog/config.toml`
//! unless `--config` points elsewhere. Command line flags take precedence over
//! the file, and the file over built-in defaults.

pub mod interval;

pub use interval::{format_interval, parse_interval};

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::Format;
use crate::emitter::DEFAULT_INTERVAL;
use crate::sentence::hipster::DEFAULT_WORDS;
use crate::server::{DEFAULT_BIND_ADDRESS, DEFAULT_SHUTDOWN_GRACE};

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub run: RunConfig,
    pub serve: ServeConfig,
}

/// `[run]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Output format: "text" or "json" (default: text)
    pub format: Format,

    /// Pause between messages in milliseconds (default: 1000)
    pub interval_ms: u64,

    /// Words per generated sentence (default: 5)
    pub words: usize,

    /// Seed for reproducible sentences
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            format: Format::Text,
            interval_ms: DEFAULT_INTERVAL.as_millis() as u64,
            words: DEFAULT_WORDS,
            seed: None,
        }
    }
}

impl RunConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// `[serve]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Listen address (default: 0.0.0.0:8080)
    pub bind_address: String,

    /// Grace period for in-flight requests on shutdown, in seconds (default: 3)
    pub shutdown_grace_secs: u64,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            shutdown_grace_secs: DEFAULT_SHUTDOWN_GRACE.as_secs(),
        }
    }
}

impl ServeConfig {
    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default path is used
    /// if present and built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Get the default config file path: `~/.config/dummylog/config.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dummylog").join("config.toml"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_values() {
        let config = Config::default();
        assert_eq!(config.run.format, Format::Text);
        assert_eq!(config.run.interval(), Duration::from_secs(1));
        assert_eq!(config.run.words, 5);
        assert_eq!(config.run.seed, None);
        assert_eq!(config.serve.bind_address, "0.0.0.0:8080");
        assert_eq!(config.serve.shutdown_grace(), Duration::from_secs(3));
    }

    #[test]
    fn test_partial_config() {
        let content = r#"
[run]
format = "json"

[serve]
shutdown_grace_secs = 10
"#;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        // Custom values
        assert_eq!(config.run.format, Format::Json);
        assert_eq!(config.serve.shutdown_grace(), Duration::from_secs(10));
        // Default values
        assert_eq!(config.run.interval_ms, 1000);
        assert_eq!(config.serve.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");
        assert_eq!(config.run.format, Format::Text);
        assert_eq!(config.serve.shutdown_grace_secs, 3);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[run]\ninterval_ms = 250\nseed = 7").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.run.interval(), Duration::from_millis(250));
        assert_eq!(config.run.seed, Some(7));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_unknown_format_rejected_at_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[run]\nformat = \"xml\"").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[run]\nwords = \"many\"").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
