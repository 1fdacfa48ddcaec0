//! Article definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ArticleId, AuthorId, CategoryId, Engagement, Identified, TagId};
use crate::interactions::Interaction;

/// Milliseconds in one hour.
const MS_PER_HOUR: f64 = 3_600_000.0;

/// Hours after publication at which the recency bonus reaches zero.
const DECAY_WINDOW_HOURS: f64 = 24.0;

/// A published article. Author, category and tags are fixed at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    author: AuthorId,
    category: CategoryId,
    tags: Vec<TagId>,
    pub publish_date: DateTime<Utc>,
    pub engagement: Engagement,
    pub trending_score: f64,

    /// UI selection flag; ignored by the engine.
    #[serde(default)]
    pub selected: bool,
}

impl Article {
    /// Create a new article with zero engagement.
    ///
    /// Duplicate tag IDs are collapsed, keeping first-seen order.
    pub fn new(
        title: impl Into<String>,
        author: AuthorId,
        category: CategoryId,
        tags: impl IntoIterator<Item = TagId>,
        publish_date: DateTime<Utc>,
    ) -> Self {
        let mut unique_tags: Vec<TagId> = Vec::new();
        for tag in tags {
            if !unique_tags.contains(&tag) {
                unique_tags.push(tag);
            }
        }

        Self {
            id: ArticleId::new(),
            title: title.into(),
            author,
            category,
            tags: unique_tags,
            publish_date,
            engagement: Engagement::default(),
            trending_score: 0.0,
            selected: false,
        }
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn tags(&self) -> &[TagId] {
        &self.tags
    }

    /// Check if the article carries a specific tag.
    pub fn has_tag(&self, tag: TagId) -> bool {
        self.tags.contains(&tag)
    }

    /// Check if the article shares its category or at least one tag with another.
    pub fn is_related_to(&self, other: &Article) -> bool {
        other.id != self.id
            && (other.category == self.category
                || other.tags.iter().any(|tag| self.has_tag(*tag)))
    }

    /// Recompute and store the trending score.
    ///
    /// `author_influence` is the author's influence score as currently stored;
    /// it is not refreshed here.
    pub fn calculate_trending_score(&mut self, author_influence: f64, now: DateTime<Utc>) -> f64 {
        let engagement = self.engagement.weighted_total();
        let time_decay = (1.0 - self.hours_since_publish(now) / DECAY_WINDOW_HOURS).max(0.0);
        let author_boost = 1.0 + author_influence * 0.1;

        self.trending_score = engagement * (1.0 + time_decay * 0.5) * author_boost;
        self.trending_score
    }

    /// Hours elapsed between publication and `now`.
    pub fn hours_since_publish(&self, now: DateTime<Utc>) -> f64 {
        (now - self.publish_date).num_milliseconds() as f64 / MS_PER_HOUR
    }

    /// All other articles sharing the category or a tag, in input order.
    pub fn related_articles<'a>(
        &self,
        all_articles: impl IntoIterator<Item = &'a Article>,
    ) -> Vec<ArticleId> {
        all_articles
            .into_iter()
            .filter(|article| self.is_related_to(article))
            .map(|article| article.id)
            .collect()
    }

    pub fn add_view(&mut self) {
        self.engagement.record(Interaction::View);
    }

    pub fn add_like(&mut self) {
        self.engagement.record(Interaction::Like);
    }

    pub fn add_share(&mut self) {
        self.engagement.record(Interaction::Share);
    }

    pub fn views(&self) -> u64 {
        self.engagement.views
    }

    pub fn likes(&self) -> u64 {
        self.engagement.likes
    }

    pub fn shares(&self) -> u64 {
        self.engagement.shares
    }

    pub fn toggle_selected(&mut self) {
        self.selected = !self.selected;
    }
}

impl Identified for Article {
    type Id = ArticleId;

    fn id(&self) -> ArticleId {
        self.id
    }
}
