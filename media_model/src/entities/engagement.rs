//! Engagement counters shared by articles and the statistics layer.

use serde::{Deserialize, Serialize};

use crate::interactions::Interaction;

/// Raw engagement counters for an article.
///
/// Counters only ever grow through [`Engagement::record`]; the fields are public
/// so a seeding routine can overwrite them in bulk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Engagement {
    pub views: u64,
    pub likes: u64,
    pub shares: u64,
}

impl Engagement {
    /// Create a set of counters with explicit values.
    pub fn new(views: u64, likes: u64, shares: u64) -> Self {
        Self {
            views,
            likes,
            shares,
        }
    }

    /// Get the counter for a given interaction kind.
    pub fn count(&self, interaction: Interaction) -> u64 {
        match interaction {
            Interaction::View => self.views,
            Interaction::Like => self.likes,
            Interaction::Share => self.shares,
        }
    }

    /// Increment the counter for a given interaction kind by one.
    pub fn record(&mut self, interaction: Interaction) {
        let counter = match interaction {
            Interaction::View => &mut self.views,
            Interaction::Like => &mut self.likes,
            Interaction::Share => &mut self.shares,
        };
        *counter = counter.saturating_add(1);
    }

    /// Weighted engagement: views*1 + likes*2 + shares*3.
    pub fn weighted_total(&self) -> f64 {
        Interaction::ALL
            .iter()
            .map(|kind| self.count(*kind) as f64 * kind.weight())
            .sum()
    }
}
