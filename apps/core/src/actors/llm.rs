use crate::actors::messages::{ActorError, AppError, LlmMessage};
use crate::actors::traits::LlmActor;
use crate::config::AgentConfig;
use crate::error::{ModelUnavailable, UnavailableCause};
use crate::preflight::run_preflight_checks;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info};

/// Prompt used for the liveness probe.
pub const PROBE_PROMPT: &str = "Bonjour";

/// A handle to the Ollama-backed `LlmActor`.
///
/// This struct provides a public, cloneable interface for sending messages to the
/// running LLM actor. It abstracts away the `mpsc::Sender`.
#[derive(Clone)]
pub struct OllamaActorHandle {
    sender: mpsc::Sender<LlmMessage>,
    config: AgentConfig,
}

impl OllamaActorHandle {
    /// Creates a new Ollama actor and returns a handle to it.
    ///
    /// This will spawn the `OllamaActorRunner` in a new Tokio task, so it must be
    /// called from within a Tokio runtime.
    pub fn new(config: AgentConfig) -> Self {
        let (sender, receiver) = mpsc::channel(32);
        let actor = OllamaActorRunner::new(receiver, config.clone());
        tokio::spawn(async move { actor.run().await });
        Self { sender, config }
    }

    /// A convenience method for generating text with the configured temperature.
    pub async fn generate(&self, prompt: String) -> Result<String, AppError> {
        self.generate_with_params(prompt, None).await
    }
}

#[async_trait]
impl LlmActor for OllamaActorHandle {
    async fn generate_with_params(&self, prompt: String, temperature: Option<f32>) -> Result<String, AppError> {
        let (send, recv) = oneshot::channel();
        let msg = LlmMessage::Generate {
            prompt,
            temperature,
            responder: send,
        };

        self.sender
            .send(msg)
            .await
            .map_err(|e| ActorError::Internal(e.to_string()))?;
        recv.await.map_err(|e| ActorError::Internal(e.to_string()))?
    }

    async fn health_check(&self) -> Result<(), ModelUnavailable> {
        let (send, recv) = oneshot::channel();
        let unreachable = |detail: String| ModelUnavailable {
            model: self.config.model.clone(),
            endpoint: self.config.endpoint.clone(),
            cause: UnavailableCause::ProbeFailed,
            detail,
        };

        self.sender
            .send(LlmMessage::Probe { responder: send })
            .await
            .map_err(|e| unreachable(e.to_string()))?;
        recv.await.map_err(|e| unreachable(e.to_string()))?
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

// --- Actor Runner (Internal Logic) ---
struct OllamaActorRunner {
    receiver: mpsc::Receiver<LlmMessage>,
    config: AgentConfig,
    client: Client,
}

impl OllamaActorRunner {
    fn new(receiver: mpsc::Receiver<LlmMessage>, config: AgentConfig) -> Self {
        Self {
            receiver,
            config,
            client: Client::new(),
        }
    }

    async fn run(mut self) {
        info!("Ollama actor started for model {}", self.config.model);

        while let Some(msg) = self.receiver.recv().await {
            self.handle_message(msg).await;
        }

        info!("Ollama actor stopped");
    }

    async fn handle_message(&mut self, msg: LlmMessage) {
        match msg {
            LlmMessage::Generate {
                prompt,
                temperature,
                responder,
            } => {
                let result = self.generate_completion(&prompt, temperature).await;
                let _ = responder.send(result);
            }
            LlmMessage::Probe { responder } => {
                let result = self.probe().await;
                let _ = responder.send(result);
            }
        }
    }

    async fn probe(&self) -> Result<(), ModelUnavailable> {
        match self.generate_completion(PROBE_PROMPT, None).await {
            Ok(_) => {
                info!("Model {} loaded and responding", self.config.model);
                Ok(())
            }
            Err(e) => {
                error!("Model {} failed its liveness probe: {}", self.config.model, e);
                let report = run_preflight_checks(&self.client, &self.config).await;
                Err(ModelUnavailable {
                    model: self.config.model.clone(),
                    endpoint: self.config.endpoint.clone(),
                    cause: report.probable_cause(),
                    detail: e.to_string(),
                })
            }
        }
    }

    async fn generate_completion(&self, prompt: &str, temperature: Option<f32>) -> Result<String, AppError> {
        debug!("LLM generating for prompt of {} chars", prompt.len());

        let payload = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: temperature.unwrap_or(self.config.temperature),
            },
        };

        let url = self.config.api_url("api/generate")?;
        let res = self.client.post(url).json(&payload).send().await?;
        let status = res.status();

        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(ActorError::LlmError(format!(
                "Generation request failed with status {}: {}",
                status, body
            ))
            .into());
        }

        let body: GenerateResponse = res
            .json()
            .await
            .map_err(|e| ActorError::LlmError(e.to_string()))?;

        Ok(body.response)
    }
}
