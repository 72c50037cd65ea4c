//! Turn Analyzer - Main orchestrator for the Brain module.
//!
//! Coordinates entity extraction, sentiment scoring, intent classification and
//! preprocessing for a single utterance.
//!
//! Runs in one of two modes, fixed at construction:
//! 1. Full: a language pipeline provides entities and lemmatized tokens
//! 2. Degraded: no pipeline, entities are empty and preprocessing is naive

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::analysis::{AnalysisResult, Entity, PreprocessedText};
use super::intent::{Intent, IntentClassifier, IntentResult};
use super::pipeline::{load_pipeline, LanguagePipeline, PipelineUnavailable};
use super::sentiment::{LexiconScorer, SentimentResult, SentimentScorer};

enum Mode {
    Full(Arc<dyn LanguagePipeline>),
    Degraded,
}

/// Main analyzer that orchestrates all analysis components
pub struct TurnAnalyzer {
    mode: Mode,
    scorer: Box<dyn SentimentScorer>,
    intent_classifier: IntentClassifier,
}

impl TurnAnalyzer {
    /// Create an analyzer from the outcome of pipeline setup.
    ///
    /// An `Err` puts the analyzer in degraded mode for its whole lifetime.
    pub fn new(pipeline: Result<Arc<dyn LanguagePipeline>, PipelineUnavailable>) -> Self {
        let mode = match pipeline {
            Ok(pipeline) => {
                info!("Turn analyzer ready (language: {})", pipeline.language());
                Mode::Full(pipeline)
            }
            Err(e) => {
                warn!("Turn analyzer running in degraded mode: {}", e);
                Mode::Degraded
            }
        };

        Self {
            mode,
            scorer: Box::new(LexiconScorer::new()),
            intent_classifier: IntentClassifier::new(),
        }
    }

    /// Load the first available pipeline among `languages`.
    pub fn from_languages<S: AsRef<str>>(languages: &[S]) -> Self {
        Self::new(load_pipeline(languages))
    }

    /// Analyzer without a language pipeline.
    pub fn degraded() -> Self {
        Self::new(Err(PipelineUnavailable {
            requested: String::new(),
            reason: "language analysis disabled".to_string(),
        }))
    }

    /// Replace the sentiment scorer.
    pub fn with_scorer(mut self, scorer: Box<dyn SentimentScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self.mode, Mode::Degraded)
    }

    /// Named entities, empty in degraded mode
    pub fn extract_entities(&self, text: &str) -> Vec<Entity> {
        match &self.mode {
            Mode::Full(pipeline) => pipeline.entities(text),
            Mode::Degraded => Vec::new(),
        }
    }

    pub fn analyze_sentiment(&self, text: &str) -> SentimentResult {
        SentimentResult::from_scores(self.scorer.polarity_scores(text))
    }

    pub fn classify_intent(&self, text: &str) -> Intent {
        self.intent_classifier.classify(text)
    }

    /// Intent with the keyword that decided it
    pub fn classify_intent_detailed(&self, text: &str) -> IntentResult {
        self.intent_classifier.classify_detailed(text)
    }

    /// Normalize the utterance into tokens.
    pub fn preprocess(&self, text: &str) -> PreprocessedText {
        match &self.mode {
            Mode::Full(pipeline) => {
                let tokens = pipeline.lemmatize(text);
                PreprocessedText {
                    original: text.to_string(),
                    clean_text: tokens.join(" "),
                    tokens,
                }
            }
            Mode::Degraded => PreprocessedText {
                original: text.to_string(),
                clean_text: text.to_lowercase(),
                tokens: text.split_whitespace().map(str::to_string).collect(),
            },
        }
    }

    /// Run every analysis on one utterance
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let start = Instant::now();

        let entities = self.extract_entities(text);
        let sentiment = self.analyze_sentiment(text);
        let intent = self.classify_intent_detailed(text);
        let preprocessed = self.preprocess(text);

        debug!(
            "Analysis: intent={} (keyword {:?}), sentiment={} ({:.2}), {} entities, {} tokens in {}µs",
            intent.intent,
            intent.matched_keyword,
            sentiment.label,
            sentiment.score,
            entities.len(),
            preprocessed.tokens.len(),
            start.elapsed().as_micros()
        );

        AnalysisResult {
            entities,
            sentiment,
            intent: intent.intent,
            preprocessed,
        }
    }
}
