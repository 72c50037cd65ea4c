//! In-process conversation memory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Speaker name used when the history is rendered into a prompt.
    pub fn speaker(&self) -> &'static str {
        match self {
            Role::User => "Utilisateur",
            Role::Assistant => "Assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.speaker())
    }
}

/// One message of the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatTurn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered record of every exchange since creation or the last clear.
#[derive(Debug, Clone, Default)]
pub struct ConversationMemory {
    turns: Vec<ChatTurn>,
}

impl ConversationMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the user utterance and the assistant reply, in that order.
    pub fn push_exchange(&mut self, user: &str, assistant: &str) {
        self.turns.push(ChatTurn::new(Role::User, user));
        self.turns.push(ChatTurn::new(Role::Assistant, assistant));
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// One `Speaker: content` line per message; empty when there is no history.
    pub fn render(&self) -> String {
        self.turns
            .iter()
            .map(|turn| format!("{}: {}", turn.role, turn.content))
            .collect::<Vec<String>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_exchange_keeps_order() {
        let mut memory = ConversationMemory::new();
        memory.push_exchange("Salut", "Bonjour !");
        memory.push_exchange("Ça va ?", "Très bien.");

        let roles: Vec<Role> = memory.turns().iter().map(|t| t.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User, Role::Assistant]);
        assert_eq!(memory.turns()[2].content, "Ça va ?");
        assert!(memory.turns()[0].timestamp <= memory.turns()[3].timestamp);
    }

    #[test]
    fn test_render() {
        let mut memory = ConversationMemory::new();
        assert_eq!(memory.render(), "");

        memory.push_exchange("Salut", "Bonjour !");
        assert_eq!(memory.render(), "Utilisateur: Salut\nAssistant: Bonjour !");
    }

    #[test]
    fn test_clear() {
        let mut memory = ConversationMemory::new();
        memory.push_exchange("a", "b");
        memory.clear();
        assert!(memory.is_empty());
        assert_eq!(memory.len(), 0);
    }
}
