//! Configuration Tests
//!
//! Environment-driven configuration, using `temp_env` to scope variables.

use crate::config::{nlp_languages_from_env, AgentConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use crate::error::AppError;

const OLLAMA_VARS: [&str; 3] = ["OLLAMA_MODEL", "OLLAMA_TEMPERATURE", "OLLAMA_BASE_URL"];

#[test]
fn test_defaults_when_unset() {
    temp_env::with_vars_unset(OLLAMA_VARS, || {
        let config = AgentConfig::from_env().unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.check().is_ok());
    });
}

#[test]
fn test_values_from_env() {
    temp_env::with_vars(
        [
            ("OLLAMA_MODEL", Some("llama2:13b")),
            ("OLLAMA_TEMPERATURE", Some(" 0.25 ")),
            ("OLLAMA_BASE_URL", Some("http://gpu-box:11434")),
        ],
        || {
            let config = AgentConfig::from_env().unwrap();
            assert_eq!(config.model, "llama2:13b");
            assert_eq!(config.temperature, 0.25);
            assert_eq!(config.endpoint, "http://gpu-box:11434");
        },
    );
}

#[test]
fn test_unparsable_temperature_is_config_error() {
    temp_env::with_var("OLLAMA_TEMPERATURE", Some("chaud"), || {
        let err = AgentConfig::from_env().unwrap_err();
        assert!(matches!(err, AppError::Config(ref msg) if msg.contains("chaud")));
    });
}

#[test]
fn test_out_of_range_temperature_parses_but_fails_validation() {
    temp_env::with_var("OLLAMA_TEMPERATURE", Some("1.5"), || {
        let config = AgentConfig::from_env().unwrap();
        assert!(matches!(config.check(), Err(AppError::Validation(_))));
    });
}

#[test]
fn test_nlp_languages() {
    temp_env::with_var_unset("NLP_LANGUAGES", || {
        assert_eq!(nlp_languages_from_env(), vec!["fr", "en"]);
    });
    temp_env::with_var("NLP_LANGUAGES", Some(" EN , fr ,"), || {
        assert_eq!(nlp_languages_from_env(), vec!["en", "fr"]);
    });
    temp_env::with_var("NLP_LANGUAGES", Some("none"), || {
        assert_eq!(nlp_languages_from_env(), vec!["none"]);
    });
}
