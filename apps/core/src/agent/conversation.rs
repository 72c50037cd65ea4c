use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::memory::{ChatTurn, ConversationMemory};
use super::prompt::{build_prompt, enrich_input, response_or_apology, select_hint};
use super::stats::ConversationStats;
use crate::actors::llm::OllamaActorHandle;
use crate::actors::traits::LlmActor;
use crate::brain::{AnalysisResult, TurnAnalyzer};
use crate::config::{nlp_languages_from_env, AgentConfig};
use crate::error::AppError;

/// Outcome of one turn. `analysis` is only present when it was asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnResult {
    pub response: String,
    pub analysis: Option<AnalysisResult>,
}

/// Static description of the model behind an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub cost: String,
    pub privacy: String,
}

/// One conversation with a local model.
///
/// Owns its memory and statistics. Turns and clears take `&mut self`, so they
/// never interleave; share an agent across tasks behind a mutex if needed.
pub struct ConversationAgent<L: LlmActor = OllamaActorHandle> {
    session_id: Uuid,
    config: AgentConfig,
    llm: L,
    analyzer: TurnAnalyzer,
    memory: ConversationMemory,
    stats: ConversationStats,
}

impl ConversationAgent<OllamaActorHandle> {
    /// Connects to Ollama with `config` and probes the model once.
    ///
    /// The language pipeline follows `NLP_LANGUAGES`. Must be called from within a
    /// Tokio runtime.
    pub async fn connect(config: AgentConfig) -> Result<Self, AppError> {
        config.check()?;
        let llm = OllamaActorHandle::new(config.clone());
        let analyzer = TurnAnalyzer::from_languages(&nlp_languages_from_env());
        Self::with_backend(config, llm, analyzer).await
    }
}

impl<L: LlmActor> ConversationAgent<L> {
    /// Builds an agent over any backend. Validates the config, then runs the
    /// backend's health check; a failing check is returned as
    /// [`AppError::ModelUnavailable`] and never retried.
    pub async fn with_backend(config: AgentConfig, llm: L, analyzer: TurnAnalyzer) -> Result<Self, AppError> {
        config.check()?;

        info!("Checking model {} at {}", config.model, config.endpoint);
        llm.health_check().await?;

        let session_id = Uuid::new_v4();
        info!(
            "Conversation agent ready (session {}, model {}, temperature {})",
            session_id, config.model, config.temperature
        );
        if !config.is_recommended_model() {
            info!("Model {} is not in the recommended list, continuing anyway", config.model);
        }

        Ok(Self {
            session_id,
            config,
            llm,
            analyzer,
            memory: ConversationMemory::new(),
            stats: ConversationStats::new(),
        })
    }

    /// Runs one turn: analyze, count, prompt the model, remember.
    ///
    /// Never fails. A generation error becomes an apology response, which is
    /// counted and stored like any other answer.
    #[instrument(skip(self, utterance), fields(session = %self.session_id))]
    pub async fn generate_response(&mut self, utterance: &str, include_analysis: bool) -> TurnResult {
        let analysis = self.analyzer.analyze(utterance);
        self.stats.record(analysis.sentiment.label, analysis.intent);

        let input = enrich_input(select_hint(analysis.intent), utterance);
        let prompt = build_prompt(&self.memory.render(), &input);

        let result = self
            .llm
            .generate_with_params(prompt, Some(self.config.temperature))
            .await;
        if let Err(e) = &result {
            warn!("Generation failed, answering with an apology: {}", e);
        }
        let response = response_or_apology(result);

        self.memory.push_exchange(utterance, &response);

        TurnResult {
            response,
            analysis: include_analysis.then_some(analysis),
        }
    }

    /// Copy of the current statistics.
    pub fn stats(&self) -> ConversationStats {
        self.stats.clone()
    }

    pub fn get_stats(&self) -> ConversationStats {
        self.stats()
    }

    /// Forgets the history and zeroes the statistics.
    pub fn clear_memory(&mut self) {
        self.memory.clear();
        self.stats = ConversationStats::new();
        info!("Session {} memory cleared", self.session_id);
    }

    pub fn model_info(&self) -> ModelInfo {
        ModelInfo {
            model: self.config.model.clone(),
            kind: "local".to_string(),
            cost: "free".to_string(),
            privacy: "fully local".to_string(),
        }
    }

    pub fn get_model_info(&self) -> ModelInfo {
        self.model_info()
    }

    pub fn history(&self) -> &[ChatTurn] {
        self.memory.turns()
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn analyzer(&self) -> &TurnAnalyzer {
        &self.analyzer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelUnavailable;
    use async_trait::async_trait;

    struct EchoLlm;

    #[async_trait]
    impl LlmActor for EchoLlm {
        async fn generate_with_params(&self, _prompt: String, _temperature: Option<f32>) -> Result<String, AppError> {
            Ok("  écho  ".to_string())
        }

        async fn health_check(&self) -> Result<(), ModelUnavailable> {
            Ok(())
        }
    }

    async fn agent() -> ConversationAgent<EchoLlm> {
        ConversationAgent::with_backend(AgentConfig::default(), EchoLlm, TurnAnalyzer::degraded())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_model_info() {
        let agent = agent().await;
        let info = agent.get_model_info();
        assert_eq!(info.model, "mistral");

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["type"], "local");
        assert_eq!(json["cost"], "free");
        assert_eq!(json["privacy"], "fully local");
    }

    #[tokio::test]
    async fn test_analysis_is_optional() {
        let mut agent = agent().await;

        let without = agent.generate_response("Salut", false).await;
        assert_eq!(without.response, "écho");
        assert!(without.analysis.is_none());

        let with = agent.generate_response("Salut", true).await;
        assert_eq!(with.analysis.unwrap().intent, crate::brain::Intent::Greeting);
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected() {
        let config = AgentConfig::new("mistral", 1.5, "http://localhost:11434");
        let result = ConversationAgent::with_backend(config, EchoLlm, TurnAnalyzer::degraded()).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
