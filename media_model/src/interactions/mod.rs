//! Reader interactions and their engagement weights.

use serde::{Deserialize, Serialize};

/// The ways a reader can engage with an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interaction {
    View,
    Like,
    /// May be repeated by the same reader, and triggers viral spread.
    Share,
}

impl Interaction {
    /// Every interaction kind, in weight order.
    pub const ALL: [Interaction; 3] = [Interaction::View, Interaction::Like, Interaction::Share];

    /// Get the engagement weight for this interaction kind.
    pub fn weight(&self) -> f64 {
        match self {
            Interaction::View => 1.0,
            Interaction::Like => 2.0,
            Interaction::Share => 3.0,
        }
    }

    /// Map a uniform roll in `[0, 1)` to an interaction.
    ///
    /// Rolls below `view_cutoff` are views, rolls below `like_cutoff` are likes,
    /// everything else is a share.
    pub fn from_roll(roll: f64, view_cutoff: f64, like_cutoff: f64) -> Self {
        if roll < view_cutoff {
            Interaction::View
        } else if roll < like_cutoff {
            Interaction::Like
        } else {
            Interaction::Share
        }
    }
}

impl std::fmt::Display for Interaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Interaction::View => "view",
            Interaction::Like => "like",
            Interaction::Share => "share",
        };
        write!(f, "{}", name)
    }
}
