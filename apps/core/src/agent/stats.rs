//! Running counters over the turns of one conversation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::brain::{Intent, SentimentLabel};

/// Snapshot of conversation statistics.
///
/// Every turn bumps `total_messages`, one sentiment bucket and one intent bucket,
/// so each bucket map sums to `total_messages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationStats {
    pub total_messages: u64,
    /// All three labels are present, starting at zero.
    pub sentiment_counts: BTreeMap<SentimentLabel, u64>,
    /// An intent appears once it has been seen.
    pub intent_counts: BTreeMap<Intent, u64>,
}

impl Default for ConversationStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationStats {
    pub fn new() -> Self {
        Self {
            total_messages: 0,
            sentiment_counts: SentimentLabel::ALL.iter().map(|label| (*label, 0)).collect(),
            intent_counts: BTreeMap::new(),
        }
    }

    /// Counts one turn.
    pub fn record(&mut self, sentiment: SentimentLabel, intent: Intent) {
        self.total_messages += 1;
        *self.sentiment_counts.entry(sentiment).or_insert(0) += 1;
        *self.intent_counts.entry(intent).or_insert(0) += 1;
    }

    pub fn sentiment_count(&self, label: SentimentLabel) -> u64 {
        self.sentiment_counts.get(&label).copied().unwrap_or(0)
    }

    pub fn intent_count(&self, intent: Intent) -> u64 {
        self.intent_counts.get(&intent).copied().unwrap_or(0)
    }

    /// Bucket sums match the message total.
    pub fn is_consistent(&self) -> bool {
        self.sentiment_counts.values().sum::<u64>() == self.total_messages
            && self.intent_counts.values().sum::<u64>() == self.total_messages
    }
}
