//! Actor system for the language-model backend.
//!
//! A handle owns an `mpsc::Sender`; a runner task owns the HTTP client and answers
//! each message through a `oneshot` channel.

pub mod llm;
pub mod messages;
pub mod traits;
