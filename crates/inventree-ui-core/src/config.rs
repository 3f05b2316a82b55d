//! Application configuration
//!
//! Loaded from `<config dir>/inventree-ui/config.json`, then overridden by
//! environment variables. A missing file yields the defaults.

use crate::error::{ConfigError, Result};
use crate::icons::DEFAULT_ICON_SIZE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable overriding the server URL
pub const ENV_SERVER: &str = "INVENTREE_SERVER";
/// Environment variable overriding the API token
pub const ENV_API_TOKEN: &str = "INVENTREE_API_TOKEN";

const CONFIG_DIR_NAME: &str = "inventree-ui";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the InvenTree server
    pub server: String,
    /// User API token sent as `Authorization: Token <token>`
    pub api_token: Option<String>,
    /// Icon size in pixels
    pub icon_size: f32,
    /// HTTP request timeout
    pub request_timeout_secs: u64,
    /// Part whose subscription toggle is shown in the desktop UI
    pub subscription_part: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: "http://localhost:8000".to_string(),
            api_token: None,
            icon_size: DEFAULT_ICON_SIZE,
            request_timeout_secs: 10,
            subscription_part: None,
        }
    }
}

impl AppConfig {
    /// Default location of the config file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from the default location and apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::default_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load from a specific file; a missing file yields the defaults
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Apply overrides from a variable lookup (normally the process env)
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(server) = lookup(ENV_SERVER).filter(|s| !s.is_empty()) {
            self.server = server;
        }
        if let Some(token) = lookup(ENV_API_TOKEN).filter(|s| !s.is_empty()) {
            self.api_token = Some(token);
        }
    }

    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.server).map_err(|e| ConfigError::InvalidValue {
            key: "server".to_string(),
            message: e.to_string(),
        })?;

        if !(self.icon_size.is_finite() && self.icon_size > 0.0) {
            return Err(ConfigError::InvalidValue {
                key: "icon_size".to_string(),
                message: format!("must be a positive number, got {}", self.icon_size),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_from(dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"server": "https://demo.inventree.org", "icon_size": 18}"#)
            .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.server, "https://demo.inventree.org");
        assert_eq!(config.icon_size, 18.0);
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.api_token, None);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ server: ").unwrap();

        let result = AppConfig::load_from(&path);
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse { .. }))));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_SERVER, "https://inventree.example.com"),
            (ENV_API_TOKEN, "inv-token"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.server, "https://inventree.example.com");
        assert_eq!(config.api_token.as_deref(), Some("inv-token"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = AppConfig {
            server: "localhost".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            icon_size: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert!(AppConfig::default().validate().is_ok());
    }
}
