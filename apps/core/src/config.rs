//! Agent configuration.
//!
//! Values come from the caller or from the environment (`OLLAMA_MODEL`,
//! `OLLAMA_TEMPERATURE`, `OLLAMA_BASE_URL`, `NLP_LANGUAGES`). The binary loads a
//! `.env` file first; this module only reads the process environment.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;
use validator::Validate;

pub const DEFAULT_MODEL: &str = "mistral";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";
pub const DEFAULT_NLP_LANGUAGES: &[&str] = &["fr", "en"];

/// Models known to work well for French conversation. Any identifier the runtime
/// accepts is valid; this list only feeds help output.
pub const RECOMMENDED_MODELS: &[(&str, &str)] = &[
    ("mistral", "balanced, good in French (7B)"),
    ("llama2", "strong, mostly English (7B)"),
    ("phi", "light and fast (2.7B)"),
    ("neural-chat", "tuned for conversation (7B)"),
    ("openchat", "good at dialogue (7B)"),
];

/// Configuration for one conversation agent. Fixed once the agent is built;
/// switching model means building a new agent.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct AgentConfig {
    /// The Ollama model identifier (e.g. `mistral`, `llama2:13b`).
    #[validate(length(min = 1))]
    pub model: String,
    /// Sampling temperature, between 0.0 and 1.0.
    #[validate(range(min = 0.0, max = 1.0))]
    pub temperature: f32,
    /// Base URL of the Ollama HTTP API.
    #[validate(url)]
    pub endpoint: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl AgentConfig {
    pub fn new(model: impl Into<String>, temperature: f32, endpoint: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            temperature,
            endpoint: endpoint.into(),
        }
    }

    /// Reads the configuration from the environment, falling back to defaults for
    /// unset variables. A set but unparsable temperature is an error.
    pub fn from_env() -> Result<Self, AppError> {
        let model = env::var("OLLAMA_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let endpoint = env::var("OLLAMA_BASE_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let temperature = match env::var("OLLAMA_TEMPERATURE") {
            Ok(raw) => raw.trim().parse::<f32>().map_err(|e| {
                AppError::Config(format!("OLLAMA_TEMPERATURE must be a number, got '{}': {}", raw, e))
            })?,
            Err(_) => DEFAULT_TEMPERATURE,
        };

        Ok(Self {
            model,
            temperature,
            endpoint,
        })
    }

    /// Validates every field. `range` lets NaN through, hence the extra check.
    pub fn check(&self) -> Result<(), AppError> {
        self.validate()?;
        if !self.temperature.is_finite() {
            return Err(AppError::Validation("temperature must be a finite number".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::Validation("model identifier is blank".to_string()));
        }
        Ok(())
    }

    /// Builds the URL of an API route under the configured endpoint.
    pub fn api_url(&self, route: &str) -> Result<Url, AppError> {
        let mut base = Url::parse(&self.endpoint)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base.join(route.trim_start_matches('/'))?)
    }

    /// True if the model is one of [`RECOMMENDED_MODELS`], ignoring any `:tag`.
    pub fn is_recommended_model(&self) -> bool {
        let family = self.model.split(':').next().unwrap_or(&self.model);
        RECOMMENDED_MODELS.iter().any(|(name, _)| *name == family)
    }
}

/// Language preference for the NLP pipeline, from `NLP_LANGUAGES` (comma separated).
/// `none` disables the pipeline and leaves the analyzer in degraded mode.
pub fn nlp_languages_from_env() -> Vec<String> {
    match env::var("NLP_LANGUAGES") {
        Ok(raw) => raw
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect(),
        Err(_) => DEFAULT_NLP_LANGUAGES.iter().map(|s| s.to_string()).collect(),
    }
}
