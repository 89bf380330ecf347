//! Configuration loading for the Kokualoha site.
//! Reads kokualoha.toml from the current directory or the path in the
//! KOKUALOHA_CONFIG env var; a missing file falls back to defaults so the
//! site can come up before any configuration exists. The Gemini credential
//! itself lives in the environment, never in the file.

use kokualoha_common::{KokualohaError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The contact webhook ships with this literal until the office deployment
/// URL is filled in; forwarding stays disabled while it is in place.
pub const PLACEHOLDER_WEBHOOK_URL: &str = "YOUR_GAS_WEBAPP_URL_HERE";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    #[serde(default = "default_model")]
    pub model: String,
    /// Name of the env var holding the Gemini API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_model() -> String { kokualoha_assistant::DEFAULT_MODEL.to_string() }
fn default_api_key_env() -> String { "KOKUALOHA_GEMINI_API_KEY".to_string() }

impl Default for AssistantConfig {
    fn default() -> Self {
        Self { model: default_model(), api_key_env: default_api_key_env() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_webhook_url")]
    pub webhook_url: String,
    #[serde(default = "default_fallback_email")]
    pub fallback_email: String,
}

fn default_webhook_url() -> String { PLACEHOLDER_WEBHOOK_URL.to_string() }
fn default_fallback_email() -> String { "islandmakana@gmail.com".to_string() }

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            webhook_url: default_webhook_url(),
            fallback_email: default_fallback_email(),
        }
    }
}

impl ContactConfig {
    pub fn is_configured(&self) -> bool {
        !self.webhook_url.is_empty() && self.webhook_url != PLACEHOLDER_WEBHOOK_URL
    }
}

impl Config {
    /// Load configuration from kokualoha.toml.
    /// Checks KOKUALOHA_CONFIG env var first, then current directory.
    pub fn load() -> Result<Self> {
        let path = std::env::var("KOKUALOHA_CONFIG")
            .unwrap_or_else(|_| "kokualoha.toml".to_string());

        if !Path::new(&path).exists() {
            tracing::warn!(path = %path, "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| KokualohaError::Config(format!("failed to read {path}: {e}")))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| KokualohaError::Config(format!("invalid {path}: {e}")))?;
        Ok(config)
    }

    /// The Gemini credential, read once at startup and injected into the
    /// gateway. Absence is a configuration error the gateway reports per
    /// question, not a startup failure.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.assistant.api_key_env).ok()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_bind_to_localhost() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3001);
    }

    #[test]
    fn test_default_contact_webhook_is_disabled() {
        let contact = ContactConfig::default();
        assert!(!contact.is_configured());
        assert_eq!(contact.fallback_email, "islandmakana@gmail.com");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.assistant.model, kokualoha_assistant::DEFAULT_MODEL);
    }

    #[test]
    fn test_configured_webhook_enables_forwarding() {
        let contact = ContactConfig {
            webhook_url: "https://script.google.com/macros/s/abc/exec".to_string(),
            fallback_email: default_fallback_email(),
        };
        assert!(contact.is_configured());
    }
}
