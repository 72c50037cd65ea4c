//! Test Module
//!
//! Cross-module test suite for NlpChat core.
//!
//! ## Test Categories
//! - `brain_tests`: Intent priority, sentiment thresholds, entities, preprocessing
//! - `agent_tests`: Turn pipeline, statistics, memory, failure handling
//! - `actor_tests`: Ollama actor against a mocked HTTP API
//! - `config_tests`: Environment-driven configuration

pub mod actor_tests;
pub mod config_tests;
