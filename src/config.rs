//! Client configuration management.
//!
//! This module handles loading and saving the client configuration, which
//! includes the backend base URL and the last used account email.
//!
//! Configuration is stored at `~/.config/coursehub/config.json`. The base
//! URL can also come from the `COURSEHUB_BASE_URL` environment variable
//! (a `.env` file is honored), which takes precedence over the file.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::api::client::DEFAULT_BASE_URL;

/// Application name used for config/cache directory paths
const APP_NAME: &str = "coursehub";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the backend base URL
const BASE_URL_ENV: &str = "COURSEHUB_BASE_URL";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub base_url: Option<String>,
    pub last_email: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Pick up a .env file if one is present
        let _ = dotenvy::dotenv();

        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// The base URL to use, in precedence order: environment variable,
    /// config file, built-in default.
    pub fn resolved_base_url(&self) -> String {
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.is_empty() {
                return url;
            }
        }
        self.base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Directory for the session file and other per-backend state
    pub fn cache_dir(&self) -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_base_url_defaults() {
        let config = Config::default();
        // Only meaningful when the override variable is absent
        if std::env::var(BASE_URL_ENV).is_err() {
            assert_eq!(config.resolved_base_url(), DEFAULT_BASE_URL);
        }
    }

    #[test]
    fn test_resolved_base_url_prefers_file_value() {
        let config = Config {
            base_url: Some("http://courses.internal:8080".to_string()),
            last_email: None,
        };
        if std::env::var(BASE_URL_ENV).is_err() {
            assert_eq!(config.resolved_base_url(), "http://courses.internal:8080");
        }
    }
}
