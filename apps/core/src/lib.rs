//! NlpChat Core
//!
//! A conversational agent over a local Ollama model. Each user turn is analyzed
//! (sentiment, intent, entities, lemmatized tokens) before the model is called;
//! the analysis enriches the prompt and feeds running statistics.

pub mod actors;
pub mod agent;
pub mod brain;
pub mod config;
pub mod error;
pub mod logging;
pub mod preflight;

pub use agent::{ConversationAgent, ConversationStats, ModelInfo, TurnResult};
pub use brain::{AnalysisResult, Intent, SentimentLabel, TurnAnalyzer};
pub use config::AgentConfig;
pub use error::{AppError, ModelUnavailable, UnavailableCause};

#[cfg(test)]
mod tests;
