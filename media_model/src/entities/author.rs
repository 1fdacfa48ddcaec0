//! Author definitions.

use serde::{Deserialize, Serialize};

use super::{Article, ArticleId, AuthorId, Identified, Named};

/// An author owns published articles and derives influence from their engagement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    /// Seed value; the simulation never changes it.
    pub followers: u64,
    pub articles: Vec<ArticleId>,
    pub influence_score: f64,
}

impl Author {
    /// Create a new author with no followers.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_followers(name, 0)
    }

    /// Create a new author with a seeded follower count.
    pub fn with_followers(name: impl Into<String>, followers: u64) -> Self {
        Self {
            id: AuthorId::new(),
            name: name.into(),
            followers,
            articles: Vec::new(),
            influence_score: 0.0,
        }
    }

    /// Record a newly published article, then refresh influence.
    pub fn publish_article<'a>(
        &mut self,
        article: ArticleId,
        all_articles: impl IntoIterator<Item = &'a Article>,
    ) {
        self.articles.push(article);
        self.calculate_influence(all_articles);
    }

    /// Recompute influence from the engagement of owned articles.
    ///
    /// `all_articles` may contain articles by other authors; only owned ones count.
    /// The log argument is at least 1, so the score is never negative.
    pub fn calculate_influence<'a>(
        &mut self,
        all_articles: impl IntoIterator<Item = &'a Article>,
    ) -> f64 {
        let total_engagement: f64 = all_articles
            .into_iter()
            .filter(|article| self.articles.contains(&article.id))
            .map(|article| article.engagement.weighted_total())
            .sum();

        self.influence_score = (total_engagement + self.followers as f64 * 10.0 + 1.0).log10() * 10.0;
        self.influence_score
    }
}

impl Identified for Author {
    type Id = AuthorId;

    fn id(&self) -> AuthorId {
        self.id
    }
}

impl Named for Author {
    fn name(&self) -> &str {
        &self.name
    }
}
