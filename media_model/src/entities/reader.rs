//! Reader definitions.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{Article, ArticleId, Identified, ReaderId, TagId};

/// A reader records what they viewed and liked, and accumulates tag interests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reader {
    pub id: ReaderId,
    pub name: String,
    pub viewed_articles: HashSet<ArticleId>,
    pub liked_articles: HashSet<ArticleId>,
    /// Tags of every liked article.
    pub interests: HashSet<TagId>,
}

impl Reader {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ReaderId::new(),
            name: name.into(),
            viewed_articles: HashSet::new(),
            liked_articles: HashSet::new(),
            interests: HashSet::new(),
        }
    }

    /// View an article once. Returns `false` if it was already viewed.
    pub fn view_article(&mut self, article: &mut Article) -> bool {
        if !self.viewed_articles.insert(article.id) {
            return false;
        }
        article.add_view();
        true
    }

    /// Like an article once, adopting its tags as interests.
    /// Returns `false` if it was already liked.
    pub fn like_article(&mut self, article: &mut Article) -> bool {
        if !self.liked_articles.insert(article.id) {
            return false;
        }
        article.add_like();
        self.interests.extend(article.tags().iter().copied());
        true
    }

    /// Share an article. Every call counts.
    pub fn share_article(&self, article: &mut Article) {
        article.add_share();
    }

    pub fn has_viewed(&self, article: ArticleId) -> bool {
        self.viewed_articles.contains(&article)
    }

    pub fn is_interested_in(&self, article: &Article) -> bool {
        article.tags().iter().any(|tag| self.interests.contains(tag))
    }

    /// Unviewed articles that match an interest or score above `trending_threshold`,
    /// best first, at most `limit`.
    pub fn recommendations<'a>(
        &self,
        all_articles: impl IntoIterator<Item = &'a Article>,
        trending_threshold: f64,
        limit: usize,
    ) -> Vec<ArticleId> {
        let mut candidates: Vec<&Article> = all_articles
            .into_iter()
            .filter(|article| !self.has_viewed(article.id))
            .filter(|article| {
                self.is_interested_in(article) || article.trending_score > trending_threshold
            })
            .collect();

        candidates.sort_by(|a, b| {
            b.trending_score
                .partial_cmp(&a.trending_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        candidates.into_iter().take(limit).map(|article| article.id).collect()
    }
}

impl Identified for Reader {
    type Id = ReaderId;

    fn id(&self) -> ReaderId {
        self.id
    }
}
