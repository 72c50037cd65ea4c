use std::fmt;
use std::io;
use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// The language-model runtime could not be reached or could not serve the model.
    /// Only raised while constructing an agent.
    #[error(transparent)]
    ModelUnavailable(#[from] ModelUnavailable),

    /// Represents errors specific to the actor system, such as communication failures.
    #[error("Actor error: {0}")]
    Actor(#[from] crate::actors::messages::ActorError),

    /// Represents data validation errors (e.g., invalid input format).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::ModelUnavailable(e) => AppError::ModelUnavailable(e.clone()),
            AppError::Actor(e) => AppError::Actor(e.clone()),
            AppError::Validation(s) => AppError::Validation(s.clone()),
            AppError::Config(s) => AppError::Config(s.clone()),
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Validation(format!("URL parse error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Io(io::Error::other(format!("HTTP error: {}", err)))
    }
}

/// Why the model runtime failed its liveness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableCause {
    /// The `ollama` executable is not on the PATH and nothing answers at the endpoint.
    BinaryNotInstalled,
    /// Nothing answers at the endpoint.
    ServiceNotRunning,
    /// The service answers but does not list the requested model.
    ModelNotDownloaded,
    /// The service and model look fine but the test generation still failed.
    ProbeFailed,
}

impl fmt::Display for UnavailableCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            UnavailableCause::BinaryNotInstalled => "ollama is not installed",
            UnavailableCause::ServiceNotRunning => "ollama service is not running",
            UnavailableCause::ModelNotDownloaded => "model is not downloaded",
            UnavailableCause::ProbeFailed => "test generation failed",
        };
        f.write_str(text)
    }
}

/// Fatal construction-time failure: the agent could not get a working model.
///
/// Carries enough context for a caller to show remediation steps. The agent never
/// retries on its own; build a new one once the problem is fixed.
#[derive(Debug, Clone, Error)]
#[error("model '{model}' unavailable at {endpoint}: {cause} ({detail})")]
pub struct ModelUnavailable {
    pub model: String,
    pub endpoint: String,
    pub cause: UnavailableCause,
    pub detail: String,
}

impl ModelUnavailable {
    /// Shell commands the user can run to diagnose or fix the problem, most relevant first.
    pub fn remediation(&self) -> Vec<String> {
        let mut steps = Vec::new();
        match self.cause {
            UnavailableCause::BinaryNotInstalled => {
                steps.push("Install Ollama from https://ollama.com, then check: ollama --version".to_string());
                steps.push("Start the service: ollama serve".to_string());
                steps.push(format!("Download the model: ollama pull {}", self.model));
            }
            UnavailableCause::ServiceNotRunning => {
                steps.push("Start the service: ollama serve".to_string());
                steps.push("Is Ollama installed? ollama --version".to_string());
            }
            UnavailableCause::ModelNotDownloaded => {
                steps.push(format!("Download the model: ollama pull {}", self.model));
            }
            UnavailableCause::ProbeFailed => {
                steps.push("Is Ollama installed? ollama --version".to_string());
                steps.push("Is the service running? ollama serve".to_string());
                steps.push(format!("Is the model downloaded? ollama pull {}", self.model));
            }
        }
        steps.push("Available models: ollama list".to_string());
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unavailable(cause: UnavailableCause) -> ModelUnavailable {
        ModelUnavailable {
            model: "mistral".to_string(),
            endpoint: "http://localhost:11434".to_string(),
            cause,
            detail: "connection refused".to_string(),
        }
    }

    #[test]
    fn test_model_unavailable_display() {
        let err = unavailable(UnavailableCause::ServiceNotRunning);
        assert_eq!(
            err.to_string(),
            "model 'mistral' unavailable at http://localhost:11434: ollama service is not running (connection refused)"
        );
    }

    #[test]
    fn test_remediation_mentions_pull_for_missing_model() {
        let steps = unavailable(UnavailableCause::ModelNotDownloaded).remediation();
        assert_eq!(steps[0], "Download the model: ollama pull mistral");
        assert_eq!(steps.last().unwrap(), "Available models: ollama list");
    }

    #[test]
    fn test_remediation_starts_with_serve_when_service_down() {
        let steps = unavailable(UnavailableCause::ServiceNotRunning).remediation();
        assert!(steps[0].contains("ollama serve"));
    }

    #[test]
    fn test_app_error_clone_keeps_variant() {
        let err = AppError::ModelUnavailable(unavailable(UnavailableCause::ProbeFailed));
        match err.clone() {
            AppError::ModelUnavailable(inner) => assert_eq!(inner.cause, UnavailableCause::ProbeFailed),
            other => panic!("unexpected variant: {:?}", other),
        }

        let io = AppError::Io(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(matches!(io.clone(), AppError::Io(e) if e.kind() == io::ErrorKind::NotFound));
    }
}
