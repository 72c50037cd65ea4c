//! Actor System Tests
//!
//! The Ollama actor and the agent built on it, against a mocked Ollama HTTP API.

use crate::actors::llm::{OllamaActorHandle, PROBE_PROMPT};
use crate::actors::messages::{ActorError, AppError};
use crate::actors::traits::LlmActor;
use crate::agent::ConversationAgent;
use crate::config::AgentConfig;
use crate::error::UnavailableCause;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> AgentConfig {
    AgentConfig::new("mistral", 0.5, server.uri())
}

async fn mount_generate(server: &MockServer, response: &str) {
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "mistral",
            "response": response,
            "done": true
        })))
        .mount(server)
        .await;
}

// ============================================================================
// Ollama actor
// ============================================================================

#[tokio::test]
async fn test_handles_are_cloneable_and_share_the_actor() {
    let server = MockServer::start().await;
    mount_generate(&server, "pong").await;

    let handle = OllamaActorHandle::new(config_for(&server));
    let other = handle.clone();

    let (a, b) = tokio::join!(handle.generate("ping".to_string()), other.generate("ping".to_string()));
    assert_eq!(a.unwrap(), "pong");
    assert_eq!(b.unwrap(), "pong");
}

#[tokio::test]
async fn test_malformed_body_is_llm_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let handle = OllamaActorHandle::new(config_for(&server));
    let result = handle.generate("Hello".to_string()).await;

    assert!(matches!(result, Err(AppError::Actor(ActorError::LlmError(_)))));
}

#[tokio::test]
async fn test_probe_failure_with_model_present_is_probe_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("out of memory"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [{ "name": "mistral:latest" }]
        })))
        .mount(&server)
        .await;

    let handle = OllamaActorHandle::new(config_for(&server));
    let err = handle.health_check().await.unwrap_err();

    assert_eq!(err.cause, UnavailableCause::ProbeFailed);
    assert!(err.detail.contains("out of memory"));
}

// ============================================================================
// Agent over the real actor
// ============================================================================

#[tokio::test]
async fn test_connect_probes_with_bonjour() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_partial_json(json!({ "prompt": PROBE_PROMPT })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "Bonjour !" })))
        .expect(1)
        .mount(&server)
        .await;

    let agent = ConversationAgent::connect(config_for(&server)).await;
    assert!(agent.is_ok());
}

#[tokio::test]
async fn test_full_turn_through_http() {
    let server = MockServer::start().await;
    mount_generate(&server, "  Je vais très bien, merci !  ").await;

    let mut agent = ConversationAgent::connect(config_for(&server)).await.unwrap();
    let result = agent.generate_response("Salut, ça va ?", true).await;

    assert_eq!(result.response, "Je vais très bien, merci !");
    assert!(result.analysis.is_some());
    assert_eq!(agent.get_stats().total_messages, 1);
}

#[tokio::test]
async fn test_server_error_during_turn_becomes_apology() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_partial_json(json!({ "prompt": PROBE_PROMPT })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "ok" })))
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
        .with_priority(2)
        .mount(&server)
        .await;

    let mut agent = ConversationAgent::connect(config_for(&server)).await.unwrap();
    let result = agent.generate_response("Raconte une histoire", false).await;

    assert!(result.response.starts_with("Désolé, j'ai rencontré une erreur: "));
    assert!(result.response.contains("503"));
    assert_eq!(agent.history().len(), 2);
}

#[tokio::test]
async fn test_connect_to_unreachable_endpoint_fails() {
    // Nothing listens on the discard port
    let config = AgentConfig::new("mistral", 0.7, "http://127.0.0.1:9");

    match ConversationAgent::connect(config).await {
        Err(AppError::ModelUnavailable(e)) => {
            assert!(matches!(
                e.cause,
                UnavailableCause::ServiceNotRunning | UnavailableCause::BinaryNotInstalled
            ));
            assert_eq!(e.model, "mistral");
            assert_eq!(e.endpoint, "http://127.0.0.1:9");
        }
        Err(other) => panic!("Expected ModelUnavailable, got {:?}", other),
        Ok(_) => panic!("Expected ModelUnavailable, got an agent"),
    }
}

#[tokio::test]
async fn test_connect_rejects_invalid_config_before_probing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "ok" })))
        .expect(0)
        .mount(&server)
        .await;

    let config = AgentConfig::new("mistral", 2.0, server.uri());
    let result = ConversationAgent::connect(config).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}
