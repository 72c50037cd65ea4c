use crate::actors::messages::AppError;
use crate::error::ModelUnavailable;
use async_trait::async_trait;

/// Defines the public interface for an LLM (Large Language Model) actor.
///
/// This trait abstracts the specific implementation of the LLM, allowing for different
/// backends (e.g., a local Ollama service, a test double) to be used interchangeably.
#[async_trait]
pub trait LlmActor: Send + Sync + 'static {
    /// Generates a complete text response for a prompt that already embeds any history.
    async fn generate_with_params(&self, prompt: String, temperature: Option<f32>) -> Result<String, AppError>;

    /// Runs one minimal test generation and explains the failure if it does not succeed.
    async fn health_check(&self) -> Result<(), ModelUnavailable>;
}
