//! Configuration loading and management for instabiz.
//!
//! Loads settings from `instabiz.toml` with environment variable overrides for sensitive data.
//! Every section has defaults, so running without a config file is supported.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const CONFIG_FILE_NAME: &str = "instabiz.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("missing required API key for provider: {0}")]
    MissingApiKey(String),
    #[error("unsupported provider: {0}")]
    UnsupportedProvider(String),
}

/// LLM provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// LLM provider, only "gemini" is supported
    pub provider: String,
    /// Model identifier (e.g., "gemini-2.5-flash")
    pub model: String,
    /// System persona for the agent
    pub persona: String,
    /// Language the report text is written in
    pub language: String,
}

/// API keys configuration (loaded from environment)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    #[serde(default)]
    pub gemini_key: Option<String>,
}

/// Terminal UI timing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Delay before the progress indicator moves from "searching" to "analyzing"
    pub analyzing_delay_ms: u64,
    /// Event loop poll interval
    pub tick_ms: u64,
}

/// Where exported reports are written
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file, defaults to the platform data directory
    pub file: Option<PathBuf>,
}

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location (instabiz.toml in cwd or home).
    ///
    /// Falls back to defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                let mut config = Config::default();
                config.apply_env();
                Ok(config)
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.apply_env();
        Ok(config)
    }

    /// Override API keys from environment variables
    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var("GEMINI_API_KEY").or_else(|_| std::env::var("API_KEY")) {
            if !key.trim().is_empty() {
                self.api.gemini_key = Some(key);
            }
        }
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        // Check current directory first
        let local_config = PathBuf::from(CONFIG_FILE_NAME);
        if local_config.exists() {
            return Some(local_config);
        }

        let home_config = dirs::home_dir()?
            .join(".config")
            .join("instabiz")
            .join(CONFIG_FILE_NAME);
        home_config.exists().then_some(home_config)
    }

    /// Get the API key for the configured provider
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        match self.agent.provider.as_str() {
            "gemini" => self
                .api
                .gemini_key
                .as_deref()
                .ok_or_else(|| ConfigError::MissingApiKey("gemini".to_string())),
            other => Err(ConfigError::UnsupportedProvider(other.to_string())),
        }
    }

    pub fn analyzing_delay(&self) -> Duration {
        Duration::from_millis(self.ui.analyzing_delay_ms)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.ui.tick_ms.max(10))
    }

    /// Resolved log file path
    pub fn log_path(&self) -> PathBuf {
        self.logging.file.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("instabiz")
                .join("instabiz.log")
        })
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            model: "gemini-2.5-flash".to_string(),
            persona: "You are a senior digital marketing strategist who audits the Instagram \
                      presence of local businesses and sells growth services to them."
                .to_string(),
            language: "Spanish".to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            analyzing_delay_ms: 2000,
            tick_ms: 100,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./reports"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.agent.provider, "gemini");
        assert_eq!(config.analyzing_delay(), Duration::from_millis(2000));
        assert_eq!(config.export.path, PathBuf::from("./reports"));
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[agent]\nmodel = \"gemini-2.5-pro\"\n\n[ui]\nanalyzing_delay_ms = 500"
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.agent.model, "gemini-2.5-pro");
        assert_eq!(config.agent.provider, "gemini");
        assert_eq!(config.ui.analyzing_delay_ms, 500);
        assert_eq!(config.ui.tick_ms, 100);
        assert_eq!(config.export.path, PathBuf::from("./reports"));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[agent\nmodel = ").unwrap();
        assert!(matches!(
            Config::load_from(file.path()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn api_key_rejects_unknown_provider() {
        let mut config = Config::default();
        config.agent.provider = "openai".to_string();
        config.api.gemini_key = Some("key".to_string());
        assert!(matches!(
            config.api_key(),
            Err(ConfigError::UnsupportedProvider(p)) if p == "openai"
        ));
    }

    #[test]
    fn api_key_returns_configured_gemini_key() {
        let mut config = Config::default();
        config.api.gemini_key = Some("secret".to_string());
        assert_eq!(config.api_key().unwrap(), "secret");
    }

    #[test]
    fn explicit_log_file_wins() {
        let mut config = Config::default();
        config.logging.file = Some(PathBuf::from("/tmp/instabiz-test.log"));
        assert_eq!(config.log_path(), PathBuf::from("/tmp/instabiz-test.log"));
    }
}
