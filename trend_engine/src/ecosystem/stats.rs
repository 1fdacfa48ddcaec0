//! Aggregate statistics read by the presentation layer.

use serde::{Deserialize, Serialize};

/// Snapshot of ecosystem totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcosystemStats {
    pub total_articles: usize,
    pub total_authors: usize,
    pub total_readers: usize,
    pub total_views: u64,
    pub total_likes: u64,
    pub total_shares: u64,
    /// Articles whose trending score is above the trending threshold.
    pub trending_count: usize,
}

impl EcosystemStats {
    /// Sum of all engagement counters.
    pub fn total_interactions(&self) -> u64 {
        self.total_views + self.total_likes + self.total_shares
    }

    /// True when the ecosystem holds nothing at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
