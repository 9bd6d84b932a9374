//! Configuration loading and validation for DeepScout.
//!
//! Loads configuration from `~/.deepscout/config.toml` with environment
//! variable overrides. Validates all settings at load time; missing
//! credentials are caught here, before the first research round runs.

use deepscout_core::SearchDepth;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Invalid {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    #[error("Missing credential: {0}")]
    MissingCredential(String),
}

/// The research agent configuration.
///
/// Maps directly to `~/.deepscout/config.toml`.
#[derive(Clone, Serialize, Deserialize)]
pub struct ResearchConfig {
    /// LLM model name sent to the chat-completions endpoint.
    #[serde(default = "default_model")]
    pub model_name: String,

    /// Sampling temperature. 0.0 leans deterministic, which suits
    /// research prompts that must follow instructions.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Hard cap on research rounds.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Result-count cap passed to the search provider per round.
    #[serde(default = "default_max_search_results")]
    pub max_search_results: u32,

    /// Search thoroughness passed to the provider.
    #[serde(default)]
    pub search_depth: SearchDepth,

    /// LLM API key. Falls back to `DEEPSCOUT_API_KEY`, then
    /// `OPENAI_API_KEY`, then `OPENROUTER_API_KEY`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<String>,

    /// Override the chat-completions base URL (Ollama, vLLM, proxies).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai_base_url: Option<String>,

    /// Tavily search API key. Falls back to `TAVILY_API_KEY`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tavily_api_key: Option<String>,
}

fn default_model() -> String {
    "gpt-4o-mini".into()
}
fn default_temperature() -> f32 {
    0.0
}
fn default_max_iterations() -> u32 {
    5
}
fn default_max_search_results() -> u32 {
    5
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            model_name: default_model(),
            temperature: default_temperature(),
            max_iterations: default_max_iterations(),
            max_search_results: default_max_search_results(),
            search_depth: SearchDepth::default(),
            openai_api_key: None,
            openai_base_url: None,
            tavily_api_key: None,
        }
    }
}

/// Redact a secret string for Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for ResearchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResearchConfig")
            .field("model_name", &self.model_name)
            .field("temperature", &self.temperature)
            .field("max_iterations", &self.max_iterations)
            .field("max_search_results", &self.max_search_results)
            .field("search_depth", &self.search_depth)
            .field("openai_api_key", &redact(&self.openai_api_key))
            .field("openai_base_url", &self.openai_base_url)
            .field("tavily_api_key", &redact(&self.tavily_api_key))
            .finish()
    }
}

impl ResearchConfig {
    /// The configuration directory (`~/.deepscout`).
    pub fn config_dir() -> PathBuf {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_default()
            .join(".deepscout")
    }

    /// Load configuration from the default path with environment overrides.
    ///
    /// Environment variables checked (highest priority first):
    /// - `DEEPSCOUT_API_KEY`, `OPENAI_API_KEY`, `OPENROUTER_API_KEY` for the LLM
    /// - `TAVILY_API_KEY` for search
    /// - `DEEPSCOUT_MODEL` to override the model name
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load from a specific path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&raw).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Fold environment variables into unset fields.
    pub fn apply_env_overrides(&mut self) {
        if self.openai_api_key.is_none() {
            self.openai_api_key = std::env::var("DEEPSCOUT_API_KEY")
                .ok()
                .or_else(|| std::env::var("OPENAI_API_KEY").ok())
                .or_else(|| std::env::var("OPENROUTER_API_KEY").ok());
        }

        if self.tavily_api_key.is_none() {
            self.tavily_api_key = std::env::var("TAVILY_API_KEY").ok();
        }

        if let Ok(model) = std::env::var("DEEPSCOUT_MODEL") {
            self.model_name = model;
        }
    }

    /// Check setting ranges. Credential presence is checked separately by
    /// the accessors below so library users can wire their own clients.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations < 1 {
            return Err(ConfigError::InvalidSetting(
                "max_iterations must be at least 1".into(),
            ));
        }
        if self.max_search_results < 1 {
            return Err(ConfigError::InvalidSetting(
                "max_search_results must be at least 1".into(),
            ));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::InvalidSetting(format!(
                "temperature must be within 0.0..=2.0, got {}",
                self.temperature
            )));
        }
        if self.model_name.trim().is_empty() {
            return Err(ConfigError::InvalidSetting(
                "model_name must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// The LLM key, or a fatal missing-credential error.
    pub fn require_openai_key(&self) -> Result<&str, ConfigError> {
        self.openai_api_key.as_deref().ok_or_else(|| {
            ConfigError::MissingCredential(
                "LLM API key (set OPENAI_API_KEY or DEEPSCOUT_API_KEY)".into(),
            )
        })
    }

    /// The Tavily key, or a fatal missing-credential error.
    pub fn require_tavily_key(&self) -> Result<&str, ConfigError> {
        self.tavily_api_key.as_deref().ok_or_else(|| {
            ConfigError::MissingCredential("Tavily API key (set TAVILY_API_KEY)".into())
        })
    }
}
