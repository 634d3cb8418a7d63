//! Revizor configuration system.
//!
//! Values come from a TOML file (default `~/.revizor/config.toml`) and can
//! be overridden by the `PRACTICUM_TOKEN`, `TELEGRAM_TOKEN`, and
//! `TELEGRAM_CHAT_ID` environment variables. The three secrets are a hard
//! startup gate: `validate()` must pass before the loop is allowed to run.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevizorConfig {
    /// OAuth token for the homework review API.
    #[serde(default)]
    pub practicum_token: String,
    /// Telegram bot token.
    #[serde(default)]
    pub telegram_token: String,
    /// Telegram chat to deliver notifications to.
    #[serde(default)]
    pub telegram_chat_id: String,
    /// Review API endpoint.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Seconds between polls.
    #[serde(default = "default_poll_interval")]
    pub poll_interval: u64,
}

fn default_api_url() -> String {
    "https://practicum.yandex.ru/api/user_api/homework_statuses/".into()
}
fn default_poll_interval() -> u64 {
    600
}

impl Default for RevizorConfig {
    fn default() -> Self {
        Self {
            practicum_token: String::new(),
            telegram_token: String::new(),
            telegram_chat_id: String::new(),
            api_url: default_api_url(),
            poll_interval: default_poll_interval(),
        }
    }
}

impl RevizorConfig {
    /// Load config from the default path, then apply env overrides.
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        let mut config = if path.exists() {
            Self::load_from(&path)?
        } else {
            Self::default()
        };
        config.merge_env();
        Ok(config)
    }

    /// Load config from a specific path, then apply env overrides.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;
        let mut config: Self = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;
        config.merge_env();
        Ok(config)
    }

    /// Environment variables win over file values when set and non-empty.
    fn merge_env(&mut self) {
        for (var, slot) in [
            ("PRACTICUM_TOKEN", &mut self.practicum_token),
            ("TELEGRAM_TOKEN", &mut self.telegram_token),
            ("TELEGRAM_CHAT_ID", &mut self.telegram_chat_id),
        ] {
            if let Ok(value) = std::env::var(var) {
                if !value.is_empty() {
                    *slot = value;
                }
            }
        }
    }

    /// Startup gate: all three secrets must be present and non-empty.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.practicum_token.is_empty() {
            missing.push("practicum_token");
        }
        if self.telegram_token.is_empty() {
            missing.push("telegram_token");
        }
        if self.telegram_chat_id.is_empty() {
            missing.push("telegram_chat_id");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::Config(format!(
                "missing required credentials: {}",
                missing.join(", ")
            )))
        }
    }

    /// Get the default config path.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".revizor")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RevizorConfig::default();
        assert_eq!(config.poll_interval, 600);
        assert!(config.api_url.contains("homework_statuses"));
        assert!(config.practicum_token.is_empty());
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
            practicum_token = "prak"
            telegram_token = "tg"
            telegram_chat_id = "42"
            poll_interval = 60
        "#;

        let config: RevizorConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.practicum_token, "prak");
        assert_eq!(config.telegram_chat_id, "42");
        assert_eq!(config.poll_interval, 60);
        // api_url falls back to the default
        assert!(config.api_url.starts_with("https://"));
    }

    #[test]
    fn test_config_missing_fields_use_defaults() {
        let config: RevizorConfig = toml::from_str("").unwrap();
        assert_eq!(config.poll_interval, 600);
    }

    #[test]
    fn test_validate_reports_every_missing_secret() {
        let config = RevizorConfig::default();
        let err = config.validate().unwrap_err();
        let text = err.to_string();
        assert!(text.contains("practicum_token"));
        assert!(text.contains("telegram_token"));
        assert!(text.contains("telegram_chat_id"));
    }

    #[test]
    fn test_validate_passes_with_all_secrets() {
        let config = RevizorConfig {
            practicum_token: "a".into(),
            telegram_token: "b".into(),
            telegram_chat_id: "c".into(),
            ..RevizorConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
