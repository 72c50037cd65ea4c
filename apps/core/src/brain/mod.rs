//! # Brain Module
//!
//! Fast, non-LLM analysis of each user turn.
//! Runs BEFORE the LLM call so the agent can enrich the prompt and keep stats.
//!
//! ## Components
//! - `intent`: Intent classification using ordered keyword rules
//! - `sentiment`: Lexicon-based sentiment scoring
//! - `pipeline`: Language pipeline (entities, lemmatization)
//! - `lexicon`: Word lists used by the pipeline
//! - `analysis`: Output data structures
//! - `analyzer`: Main orchestrator

pub mod analysis;
pub mod analyzer;
pub mod intent;
pub mod lexicon;
pub mod pipeline;
pub mod sentiment;

// Re-export main types for convenience
pub use analysis::{AnalysisResult, Entity, PreprocessedText};
pub use analyzer::TurnAnalyzer;
pub use intent::{Intent, IntentClassifier, IntentResult};
pub use pipeline::{load_pipeline, LanguagePipeline, PipelineUnavailable, RuleBasedPipeline};
pub use sentiment::{LexiconScorer, PolarityScores, SentimentLabel, SentimentResult, SentimentScorer};
