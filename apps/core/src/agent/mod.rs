//! # Conversation Agent
//!
//! Orchestrates a turn: analyze the utterance, update statistics, build an
//! enriched prompt from the history, call the model, remember the exchange.

pub mod conversation;
pub mod memory;
pub mod prompt;
pub mod stats;

pub use conversation::{ConversationAgent, ModelInfo, TurnResult};
pub use memory::{ChatTurn, ConversationMemory, Role};
pub use prompt::response_or_apology;
pub use stats::ConversationStats;
