//! Preflight Check System
//!
//! Explains why the Ollama runtime failed a liveness probe. Each check is
//! independent and never fails itself; the report turns the individual results
//! into a single [`UnavailableCause`].

use crate::config::AgentConfig;
use crate::error::UnavailableCause;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

// --- Constants ---
const TAGS_TIMEOUT: Duration = Duration::from_secs(5);
const OLLAMA_BINARY: &str = "ollama";

/// Result of a single check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub message: String,
    pub details: Option<String>,
}

impl CheckResult {
    fn pass(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            message: message.to_string(),
            details: None,
        }
    }

    fn fail(name: &str, message: &str, details: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            message: message.to_string(),
            details,
        }
    }
}

/// Complete preflight check report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreflightReport {
    pub all_passed: bool,
    pub checks: Vec<CheckResult>,
    /// Models the service reported, empty if it could not be reached.
    pub available_models: Vec<String>,
}

impl PreflightReport {
    fn passed(&self, name: &str) -> bool {
        self.checks.iter().any(|c| c.name == name && c.passed)
    }

    /// The most specific explanation the checks support.
    pub fn probable_cause(&self) -> UnavailableCause {
        if !self.passed("service") {
            if self.passed("ollama_binary") {
                UnavailableCause::ServiceNotRunning
            } else {
                UnavailableCause::BinaryNotInstalled
            }
        } else if !self.passed("model") {
            UnavailableCause::ModelNotDownloaded
        } else {
            UnavailableCause::ProbeFailed
        }
    }
}

/// Runs every check against the configured endpoint and model.
pub async fn run_preflight_checks(client: &Client, config: &AgentConfig) -> PreflightReport {
    info!("Running preflight checks for model '{}' at {}", config.model, config.endpoint);

    let mut checks = vec![check_ollama_binary()];

    let (service_check, available_models) = check_service(client, config).await;
    let service_ok = service_check.passed;
    checks.push(service_check);

    if service_ok {
        checks.push(check_model_present(&config.model, &available_models));
    } else {
        checks.push(CheckResult::fail("model", "Skipped - service unreachable", None));
    }

    for check in &checks {
        if check.passed {
            info!("  ok   {}: {}", check.name, check.message);
        } else {
            warn!("  FAIL {}: {}", check.name, check.message);
            if let Some(details) = &check.details {
                warn!("       Details: {}", details);
            }
        }
    }

    PreflightReport {
        all_passed: checks.iter().all(|c| c.passed),
        checks,
        available_models,
    }
}

// --- Individual Checks ---

fn check_ollama_binary() -> CheckResult {
    match which::which(OLLAMA_BINARY) {
        Ok(path) => CheckResult::pass("ollama_binary", &format!("Found at {:?}", path)),
        Err(e) => CheckResult::fail(
            "ollama_binary",
            "ollama binary not found in PATH",
            Some(e.to_string()),
        ),
    }
}

async fn check_service(client: &Client, config: &AgentConfig) -> (CheckResult, Vec<String>) {
    let url = match config.api_url("api/tags") {
        Ok(url) => url,
        Err(e) => {
            return (
                CheckResult::fail("service", "Invalid endpoint", Some(e.to_string())),
                Vec::new(),
            )
        }
    };

    let response = match client.get(url).timeout(TAGS_TIMEOUT).send().await {
        Ok(response) => response,
        Err(e) => {
            return (
                CheckResult::fail("service", "Ollama service unreachable", Some(e.to_string())),
                Vec::new(),
            )
        }
    };

    let status = response.status();
    if !status.is_success() {
        return (
            CheckResult::fail("service", &format!("Service answered with status {}", status), None),
            Vec::new(),
        );
    }

    match response.json::<serde_json::Value>().await {
        Ok(json) => {
            let models = parse_model_names(&json);
            (
                CheckResult::pass("service", &format!("Service up ({} models)", models.len())),
                models,
            )
        }
        Err(e) => (
            CheckResult::fail("service", "Unexpected /api/tags payload", Some(e.to_string())),
            Vec::new(),
        ),
    }
}

fn check_model_present(model: &str, available: &[String]) -> CheckResult {
    if model_is_listed(model, available) {
        CheckResult::pass("model", &format!("Model '{}' is downloaded", model))
    } else {
        CheckResult::fail(
            "model",
            &format!("Model '{}' not found locally", model),
            Some(format!("Available: {}", available.join(", "))),
        )
    }
}

fn parse_model_names(json: &serde_json::Value) -> Vec<String> {
    json["models"]
        .as_array()
        .map(|arr| {
            arr.iter()
                .filter_map(|m| m["name"].as_str().map(|s| s.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

/// `mistral` matches `mistral:latest`; an explicit tag must match exactly.
fn model_is_listed(model: &str, available: &[String]) -> bool {
    available.iter().any(|name| {
        name == model || (!model.contains(':') && name.split(':').next() == Some(model))
    })
}
