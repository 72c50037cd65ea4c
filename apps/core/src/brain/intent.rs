//! Intent Classification using ordered keyword rules.
//!
//! The lower-cased utterance is tested against one keyword set per intent, in a
//! fixed priority order. The first set with a hit wins, so "Bonjour, comment
//! vas-tu?" is a greeting even though it also carries a question mark. Matching is
//! plain substring containment: short keywords such as `hi` also hit inside longer
//! words.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Detected intent type. The set is closed: every utterance maps to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Greeting (bonjour, salut, hello, etc.)
    Greeting,
    /// Farewell (au revoir, bye, etc.)
    Farewell,
    /// Question (?, comment, pourquoi, etc.)
    Question,
    /// Help/Assistance (aide, help, etc.)
    HelpRequest,
    /// Thanks (merci, thank, etc.)
    Thanks,
    /// Anything else
    Chitchat,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Intent {
    /// Every intent, in classification priority order.
    pub const ALL: [Intent; 6] = [
        Intent::Greeting,
        Intent::Farewell,
        Intent::Question,
        Intent::HelpRequest,
        Intent::Thanks,
        Intent::Chitchat,
    ];

    /// Returns the stable label used in stats and serialized output
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Farewell => "farewell",
            Intent::Question => "question",
            Intent::HelpRequest => "help_request",
            Intent::Thanks => "thanks",
            Intent::Chitchat => "chitchat",
        }
    }
}

/// Result of intent classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentResult {
    /// Detected intent
    pub intent: Intent,
    /// The keyword that decided it, `None` for `Chitchat`
    pub matched_keyword: Option<String>,
}

const GREETING_KEYWORDS: &[&str] = &["bonjour", "salut", "hello", "hi", "coucou"];
const FAREWELL_KEYWORDS: &[&str] = &["au revoir", "bye", "à bientôt", "adieu"];
const QUESTION_KEYWORDS: &[&str] = &["?", "comment", "pourquoi", "quoi", "quel", "qui", "où", "quand"];
const HELP_KEYWORDS: &[&str] = &["aide", "help", "assistance", "aidez-moi"];
const THANKS_KEYWORDS: &[&str] = &["merci", "thank", "remercie"];

/// Builds one alternation over escaped keywords; matching stays substring-based.
fn keyword_pattern(keywords: &[&str]) -> Regex {
    let alternation = keywords
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    // NOTE: expect() is acceptable here: the input is escaped literals, so the pattern always compiles
    Regex::new(&alternation).expect("Invalid regex: escaped keyword alternation")
}

// Compile patterns once at startup
static GREETING_PATTERN: LazyLock<Regex> = LazyLock::new(|| keyword_pattern(GREETING_KEYWORDS));
static FAREWELL_PATTERN: LazyLock<Regex> = LazyLock::new(|| keyword_pattern(FAREWELL_KEYWORDS));
static QUESTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| keyword_pattern(QUESTION_KEYWORDS));
static HELP_PATTERN: LazyLock<Regex> = LazyLock::new(|| keyword_pattern(HELP_KEYWORDS));
static THANKS_PATTERN: LazyLock<Regex> = LazyLock::new(|| keyword_pattern(THANKS_KEYWORDS));

/// Rule definition for intent matching
struct IntentRule {
    intent: Intent,
    pattern: &'static LazyLock<Regex>,
}

/// Intent classifier using ordered keyword rules
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Create a new intent classifier. Rule order is the tie-break and must not change:
    /// greeting, farewell, question, help, thanks.
    pub fn new() -> Self {
        let rules = vec![
            IntentRule {
                intent: Intent::Greeting,
                pattern: &GREETING_PATTERN,
            },
            IntentRule {
                intent: Intent::Farewell,
                pattern: &FAREWELL_PATTERN,
            },
            IntentRule {
                intent: Intent::Question,
                pattern: &QUESTION_PATTERN,
            },
            IntentRule {
                intent: Intent::HelpRequest,
                pattern: &HELP_PATTERN,
            },
            IntentRule {
                intent: Intent::Thanks,
                pattern: &THANKS_PATTERN,
            },
        ];

        Self { rules }
    }

    /// Classify the intent of a text, reporting the deciding keyword
    pub fn classify_detailed(&self, text: &str) -> IntentResult {
        let text = text.to_lowercase();

        for rule in &self.rules {
            if let Some(m) = rule.pattern.find(&text) {
                return IntentResult {
                    intent: rule.intent,
                    matched_keyword: Some(m.as_str().to_string()),
                };
            }
        }

        IntentResult {
            intent: Intent::Chitchat,
            matched_keyword: None,
        }
    }

    /// Classify the intent of a text
    pub fn classify(&self, text: &str) -> Intent {
        self.classify_detailed(text).intent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_detection() {
        let classifier = IntentClassifier::new();

        assert_eq!(classifier.classify("Bonjour!"), Intent::Greeting);
        assert_eq!(classifier.classify("Hello there"), Intent::Greeting);
        assert_eq!(classifier.classify("COUCOU"), Intent::Greeting);
    }

    #[test]
    fn test_greeting_wins_over_question() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify_detailed("Bonjour, comment vas-tu?");
        assert_eq!(result.intent, Intent::Greeting);
        assert_eq!(result.matched_keyword.as_deref(), Some("bonjour"));
    }

    #[test]
    fn test_farewell_detection() {
        let classifier = IntentClassifier::new();

        assert_eq!(classifier.classify("Au revoir et bonne soirée"), Intent::Farewell);
        assert_eq!(classifier.classify("à bientôt"), Intent::Farewell);
        assert_eq!(classifier.classify("Adieu"), Intent::Farewell);
    }

    #[test]
    fn test_question_detection() {
        let classifier = IntentClassifier::new();

        assert_eq!(classifier.classify("?"), Intent::Question);
        assert_eq!(classifier.classify("Pourquoi le ciel est bleu"), Intent::Question);
        assert_eq!(classifier.classify("Où est la gare"), Intent::Question);
    }

    #[test]
    fn test_help_checked_before_thanks() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify_detailed("Merci beaucoup pour ton aide!");
        assert_eq!(result.intent, Intent::HelpRequest);
        assert_eq!(result.matched_keyword.as_deref(), Some("aide"));
    }

    #[test]
    fn test_thanks_detection() {
        let classifier = IntentClassifier::new();

        assert_eq!(classifier.classify("Merci beaucoup"), Intent::Thanks);
        assert_eq!(classifier.classify("Je te remercie"), Intent::Thanks);
    }

    #[test]
    fn test_substring_matching_is_preserved() {
        let classifier = IntentClassifier::new();

        // "hi" hides inside "chien": the rules are substring based.
        assert_eq!(classifier.classify("Mon chien dort"), Intent::Greeting);
    }

    #[test]
    fn test_chitchat_fallback() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify_detailed("Il fait beau aujourd'hui");
        assert_eq!(result.intent, Intent::Chitchat);
        assert_eq!(result.matched_keyword, None);

        assert_eq!(classifier.classify(""), Intent::Chitchat);
        assert_eq!(classifier.classify("   "), Intent::Chitchat);
    }

    #[test]
    fn test_labels_are_stable() {
        let labels: Vec<&str> = Intent::ALL.iter().map(|i| i.label()).collect();
        assert_eq!(
            labels,
            vec!["greeting", "farewell", "question", "help_request", "thanks", "chitchat"]
        );
        assert_eq!(
            serde_json::to_string(&Intent::HelpRequest).unwrap(),
            "\"help_request\""
        );
    }
}
