use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Environment variable holding the completion service credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Tunables for a run. Everything here has a sensible default, so the
/// config file is optional and may list any subset of the fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Chat model name sent with every request.
    pub model: String,
    /// Full URL of the chat-completions endpoint.
    pub endpoint: String,
    pub max_tokens: u32,
    pub temperature: f64,
    /// Whole-request timeout for the completion call.
    pub timeout_secs: u64,
    /// Pause after each simulated copy/paste so the clipboard can settle.
    pub settle_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".into(),
            endpoint: "https://api.openai.com/v1/chat/completions".into(),
            max_tokens: 500,
            temperature: 0.2,
            timeout_secs: 10,
            settle_delay_ms: 200,
        }
    }
}

impl Config {
    /// Directory: ~/.config/text-corrector/
    fn dir() -> PathBuf {
        let mut p = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        p.push("text-corrector");
        p
    }

    pub fn path() -> PathBuf {
        Self::dir().join("config.json")
    }

    /// Load from the default location, returning defaults if the file
    /// doesn't exist or is invalid.
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_else(|e| {
                log::warn!("Ignoring invalid config {}: {e}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

/// Read the API key from the process environment.
pub fn api_key_from_env() -> Result<String, ConfigError> {
    api_key_from(std::env::var(API_KEY_VAR).ok())
}

/// An unset or blank value both count as missing.
pub fn api_key_from(value: Option<String>) -> Result<String, ConfigError> {
    match value {
        Some(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err(ConfigError::MissingApiKey),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.max_tokens, 500);
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.settle_delay(), Duration::from_millis(200));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.json"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_overrides_only_listed_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"model": "gpt-4o-mini", "timeout_secs": 3}}"#).unwrap();

        let config = Config::load_from(file.path());
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.timeout(), Duration::from_secs(3));
        assert_eq!(config.max_tokens, 500);
        assert_eq!(config.endpoint, Config::default().endpoint);
    }

    #[test]
    fn invalid_file_gives_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert_eq!(Config::load_from(file.path()), Config::default());
    }

    #[test]
    fn api_key_must_be_present_and_non_blank() {
        assert!(matches!(api_key_from(None), Err(ConfigError::MissingApiKey)));
        assert!(matches!(
            api_key_from(Some("  ".into())),
            Err(ConfigError::MissingApiKey)
        ));
        assert_eq!(api_key_from(Some("sk-abc\n".into())).unwrap(), "sk-abc");
    }

    #[test]
    fn missing_key_message_names_the_variable() {
        assert_eq!(
            ConfigError::MissingApiKey.to_string(),
            format!("{API_KEY_VAR} not set.")
        );
    }
}
