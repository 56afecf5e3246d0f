//! Configuration management for shep.
//!
//! Loads configuration from ${SHEP_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the shepherd service.
    pub service_url: String,

    /// Timeout for requests to the service, in seconds.
    pub request_timeout_secs: u64,

    /// Open session addresses in the system browser on Enter.
    pub open_links: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_url: Self::DEFAULT_SERVICE_URL.to_string(),
            request_timeout_secs: 10,
            open_links: true,
        }
    }
}

impl Config {
    pub const DEFAULT_SERVICE_URL: &'static str = "http://localhost:7777";

    /// Loads the config file, falling back to defaults when it is absent.
    ///
    /// The `SHEP_SERVICE_URL` environment variable overrides `service_url`.
    pub fn load() -> Result<Self> {
        let path = paths::config_path();
        let mut config: Self = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("read config at {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("parse config at {}", path.display()))?
        } else {
            Self::default()
        };

        if let Ok(url) = std::env::var("SHEP_SERVICE_URL") {
            let url = url.trim();
            if !url.is_empty() {
                config.service_url = url.to_string();
            }
        }

        Ok(config)
    }

    /// Writes the commented default template to the config path.
    ///
    /// Fails if a config already exists.
    pub fn init() -> Result<PathBuf> {
        let path = paths::config_path();
        if path.exists() {
            anyhow::bail!("config already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        fs::write(&path, default_config_template())
            .with_context(|| format!("write config at {}", path.display()))?;
        Ok(path)
    }

    /// Persists the service URL to the config file.
    ///
    /// Edits the existing document in place (or the default template when no
    /// config exists yet) so comments and other user settings survive.
    pub fn save_service_url(url: &str) -> Result<PathBuf> {
        let path = paths::config_path();
        let existing = if path.exists() {
            fs::read_to_string(&path)
                .with_context(|| format!("read config at {}", path.display()))?
        } else {
            default_config_template().to_string()
        };

        let updated = set_service_url(&existing, url)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        fs::write(&path, updated).with_context(|| format!("write config at {}", path.display()))?;
        Ok(path)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

/// Sets `service_url` in a config document, preserving everything else.
fn set_service_url(document: &str, url: &str) -> Result<String> {
    use toml_edit::DocumentMut;

    let mut doc: DocumentMut = document.parse().context("parse config document")?;
    doc["service_url"] = toml_edit::value(url);
    Ok(doc.to_string())
}

pub mod paths {
    //! Path resolution for shep configuration and data directories.
    //!
    //! SHEP_HOME resolution order:
    //! 1. SHEP_HOME environment variable (if set)
    //! 2. ~/.config/shep (default)

    use std::path::PathBuf;

    /// Returns the shep home directory.
    pub fn shep_home() -> PathBuf {
        if let Ok(home) = std::env::var("SHEP_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("shep"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        shep_home().join("config.toml")
    }

    /// Returns the directory TUI log files are written to.
    pub fn logs_dir() -> PathBuf {
        shep_home().join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.service_url, "http://localhost:7777");
        assert_eq!(config.request_timeout_secs, 10);
        assert!(config.open_links);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: Config = toml::from_str("service_url = \"http://127.0.0.1:7000\"").unwrap();
        assert_eq!(config.service_url, "http://127.0.0.1:7000");
        assert_eq!(config.request_timeout_secs, 10);
        assert!(config.open_links);
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let config: Config = toml::from_str(default_config_template()).unwrap();
        let defaults = Config::default();
        assert_eq!(config.service_url, defaults.service_url);
        assert_eq!(config.request_timeout_secs, defaults.request_timeout_secs);
        assert_eq!(config.open_links, defaults.open_links);
    }

    #[test]
    fn test_set_service_url_preserves_comments_and_keys() {
        let updated = set_service_url(default_config_template(), "http://10.0.0.5:7777").unwrap();
        assert!(updated.contains("service_url = \"http://10.0.0.5:7777\""));
        assert!(updated.contains("# shep configuration"));
        assert!(updated.contains("request_timeout_secs = 10"));
    }

    #[test]
    fn test_request_timeout_floors_at_one_second() {
        let config = Config {
            request_timeout_secs: 0,
            ..Config::default()
        };
        assert_eq!(config.request_timeout(), Duration::from_secs(1));
    }
}
