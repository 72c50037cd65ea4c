//! Lexicon-based sentiment scoring.
//!
//! [`LexiconScorer`] follows the VADER recipe: per-word valences, scaled by a
//! preceding booster or dampener, flipped by a nearby negation, summed, nudged by
//! exclamation marks, then squashed into [-1, 1] with `s / sqrt(s² + 15)`. The
//! label is a pure function of the compound score, see [`SentimentLabel::from_compound`].

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Compound score at or above which text is positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound score at or below which text is negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

const NORMALIZATION_ALPHA: f64 = 15.0;
const NEGATION_SCALAR: f64 = -0.74;
const BOOSTER_INCREMENT: f64 = 0.293;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const NEGATION_WINDOW: usize = 3;

/// Overall polarity of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    /// Fixed thresholds: `>= 0.05` positive, `<= -0.05` negative, neutral otherwise.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw component scores from a lexicon scorer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// Sentiment of one utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    /// Compound score in [-1, 1].
    pub score: f64,
    pub details: PolarityScores,
}

impl SentimentResult {
    pub fn from_scores(details: PolarityScores) -> Self {
        Self {
            label: SentimentLabel::from_compound(details.compound),
            score: details.compound,
            details,
        }
    }
}

/// A lexicon scorer: text in, polarity scores out. Must be deterministic.
pub trait SentimentScorer: Send + Sync {
    fn polarity_scores(&self, text: &str) -> PolarityScores;
}

/// Word valences on the VADER scale (roughly -4 to +4), French and English.
const VALENCES: &[(&str, f64)] = &[
    // French, positive
    ("bon", 1.9), ("bonne", 1.9), ("bien", 1.5), ("super", 2.9), ("génial", 3.1),
    ("géniale", 3.1), ("excellent", 3.2), ("excellente", 3.2), ("parfait", 2.9),
    ("parfaite", 2.9), ("merci", 1.5), ("heureux", 2.7), ("heureuse", 2.7),
    ("content", 2.0), ("contente", 2.0), ("ravi", 2.6), ("ravie", 2.6), ("aime", 2.4),
    ("adore", 2.9), ("magnifique", 3.0), ("formidable", 2.9), ("agréable", 2.0),
    ("beau", 2.0), ("belle", 2.0), ("top", 2.2), ("cool", 1.3), ("sympa", 1.9),
    ("gentil", 1.9), ("gentille", 1.9), ("bravo", 2.6), ("chouette", 2.0),
    ("plaisir", 2.4), ("aide", 1.1), ("réussi", 2.2), ("joie", 2.8), ("incroyable", 2.4),
    // French, negative
    ("mauvais", -2.5), ("mauvaise", -2.5), ("nul", -2.2), ("nulle", -2.2),
    ("triste", -2.1), ("déteste", -3.0), ("horrible", -2.5), ("affreux", -2.6),
    ("terrible", -2.1), ("problème", -1.7), ("erreur", -1.6), ("malheureusement", -1.5),
    ("colère", -2.7), ("peur", -2.1), ("énervé", -2.3), ("fatigué", -1.5),
    ("déçu", -2.2), ("déçue", -2.2), ("ennuyeux", -1.8), ("difficile", -1.3),
    ("pire", -2.7), ("mal", -1.9), ("bug", -1.4), ("cassé", -1.8), ("échec", -2.3),
    ("stress", -1.8), ("inquiet", -1.7), ("inquiète", -1.7), ("ennui", -1.6),
    // English, positive
    ("good", 1.9), ("great", 3.1), ("love", 3.2), ("like", 2.0), ("happy", 2.7),
    ("thanks", 1.9), ("thank", 1.5), ("awesome", 3.1), ("nice", 1.8), ("perfect", 2.7),
    ("wonderful", 2.7), ("amazing", 2.8), ("excellent", 3.2), ("help", 1.7), ("glad", 2.0),
    // English, negative
    ("bad", -2.5), ("hate", -2.7), ("sad", -2.1), ("awful", -2.0), ("wrong", -2.1),
    ("angry", -2.3), ("worst", -3.1), ("broken", -1.8), ("problem", -1.7), ("error", -1.6),
    ("fail", -2.5), ("boring", -1.3), ("annoying", -1.7), ("afraid", -2.0),
];

const BOOSTERS: &[&str] = &[
    "très", "vraiment", "trop", "tellement", "extrêmement", "super", "hyper", "totalement",
    "very", "really", "so", "extremely", "totally", "absolutely", "incredibly",
];

const DAMPENERS: &[&str] = &[
    "peu", "assez", "plutôt", "légèrement", "moyennement",
    "slightly", "somewhat", "barely", "kinda", "fairly",
];

const NEGATIONS: &[&str] = &[
    "ne", "n", "pas", "jamais", "rien", "aucun", "aucune", "sans", "ni",
    "not", "no", "never", "nothing", "without", "don't", "doesn't", "isn't", "can't", "won't",
];

static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // NOTE: expect() is acceptable here: the pattern is a literal
    Regex::new(r"[\p{L}\p{N}]+(?:'[\p{L}]+)?").expect("Invalid regex: sentiment word pattern")
});

/// Built-in lexicon scorer.
pub struct LexiconScorer {
    valences: HashMap<&'static str, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            valences: VALENCES.iter().copied().collect(),
        }
    }

    fn tokenize(text: &str) -> Vec<String> {
        let lower = text.to_lowercase().replace('’', "'");
        WORD_PATTERN
            .find_iter(&lower)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Valence of the word at `index`, adjusted for its neighbours.
    fn contextual_valence(&self, tokens: &[String], index: usize) -> f64 {
        let word = tokens[index].as_str();
        let base = match self.valences.get(word) {
            Some(v) => *v,
            None => return 0.0,
        };
        // "super" is a booster in "super content" but a valence word on its own.
        if BOOSTERS.contains(&word) && tokens.get(index + 1).is_some_and(|next| self.valences.contains_key(next.as_str())) {
            return 0.0;
        }

        let mut valence = base;
        if index > 0 {
            let previous = tokens[index - 1].as_str();
            let step = if BOOSTERS.contains(&previous) {
                BOOSTER_INCREMENT
            } else if DAMPENERS.contains(&previous) {
                -BOOSTER_INCREMENT
            } else {
                0.0
            };
            valence += step * valence.signum();
        }

        let window_start = index.saturating_sub(NEGATION_WINDOW);
        let negated = tokens[window_start..index]
            .iter()
            .any(|t| NEGATIONS.contains(&t.as_str()) || t.starts_with("n'"));
        if negated {
            valence *= NEGATION_SCALAR;
        }

        valence
    }
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

impl SentimentScorer for LexiconScorer {
    fn polarity_scores(&self, text: &str) -> PolarityScores {
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            return PolarityScores::default();
        }

        let valences: Vec<f64> = (0..tokens.len())
            .map(|i| self.contextual_valence(&tokens, i))
            .collect();

        let mut sum: f64 = valences.iter().sum();
        if sum != 0.0 {
            let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS) as f64;
            sum += exclamations * EXCLAMATION_INCREMENT * sum.signum();
        }

        let mut pos_sum = 0.0;
        let mut neg_sum = 0.0;
        let mut neu_count = 0.0;
        for v in &valences {
            if *v > 0.0 {
                pos_sum += v + 1.0;
            } else if *v < 0.0 {
                neg_sum += v - 1.0;
            } else {
                neu_count += 1.0;
            }
        }

        let total = pos_sum + neg_sum.abs() + neu_count;
        PolarityScores {
            neg: round_to(neg_sum.abs() / total, 3),
            neu: round_to(neu_count / total, 3),
            pos: round_to(pos_sum / total, 3),
            compound: round_to(normalize(sum), 4),
        }
    }
}
