//! Prompt construction and the response fallback.

use crate::brain::Intent;
use crate::error::AppError;

pub const GREETING_HINT: &str = "L'utilisateur te salue. Réponds chaleureusement en une phrase.";
pub const FAREWELL_HINT: &str = "L'utilisateur dit au revoir. Termine poliment en une phrase.";
pub const HELP_HINT: &str = "L'utilisateur demande de l'aide. Sois clair et utile.";

const SYSTEM_PREAMBLE: &str =
    "Tu es un assistant IA serviable, amical et concis. Tu réponds en français de manière naturelle.";

/// Style hint for the model, only for greetings, farewells and help requests.
pub fn select_hint(intent: Intent) -> Option<&'static str> {
    match intent {
        Intent::Greeting => Some(GREETING_HINT),
        Intent::Farewell => Some(FAREWELL_HINT),
        Intent::HelpRequest => Some(HELP_HINT),
        Intent::Question | Intent::Thanks | Intent::Chitchat => None,
    }
}

/// Hint on its own line, then the utterance.
pub fn enrich_input(hint: Option<&str>, utterance: &str) -> String {
    match hint {
        Some(hint) => format!("{}\n{}", hint, utterance),
        None => utterance.to_string(),
    }
}

/// Renders the full prompt. `history` already holds one line per message.
pub fn build_prompt(history: &str, input: &str) -> String {
    format!(
        "{}\n\nHistorique de conversation:\n{}\n\nUtilisateur: {}\nAssistant:",
        SYSTEM_PREAMBLE, history, input
    )
}

/// Trimmed completion, or an apology carrying the error text.
pub fn response_or_apology(result: Result<String, AppError>) -> String {
    match result {
        Ok(text) => text.trim().to_string(),
        Err(e) => format!("Désolé, j'ai rencontré une erreur: {}", e),
    }
}
