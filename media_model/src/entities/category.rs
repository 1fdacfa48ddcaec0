//! Category definitions.

use serde::{Deserialize, Serialize};

use super::{Article, ArticleId, CategoryId, Identified, Named};
use crate::Registry;

/// Number of articles kept in a category's trending list.
pub const CATEGORY_TRENDING_LIMIT: usize = 5;

/// A category groups articles and caches its top trending subset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub articles: Vec<ArticleId>,
    /// Result of the last [`Category::trending_articles`] call.
    pub trending_articles: Vec<ArticleId>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            articles: Vec::new(),
            trending_articles: Vec::new(),
        }
    }

    /// Append an article. No duplicate check.
    pub fn add_article(&mut self, article: ArticleId) {
        self.articles.push(article);
    }

    /// Top five owned articles by trending score, descending.
    ///
    /// Ties keep insertion order. The result is cached in `trending_articles`.
    pub fn trending_articles(&mut self, articles: &Registry<ArticleId, Article>) -> &[ArticleId] {
        let mut ranked: Vec<&Article> = self
            .articles
            .iter()
            .filter_map(|id| articles.get(*id))
            .collect();

        ranked.sort_by(|a, b| {
            b.trending_score
                .partial_cmp(&a.trending_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        self.trending_articles = ranked
            .into_iter()
            .take(CATEGORY_TRENDING_LIMIT)
            .map(|article| article.id)
            .collect();
        &self.trending_articles
    }

    /// Share of the category's articles that make its trending list, as a percentage.
    pub fn calculate_category_trend(&mut self, articles: &Registry<ArticleId, Article>) -> f64 {
        let trending_count = self.trending_articles(articles).len();
        if self.articles.is_empty() {
            return 0.0;
        }
        trending_count as f64 / self.articles.len() as f64 * 100.0
    }
}

impl Identified for Category {
    type Id = CategoryId;

    fn id(&self) -> CategoryId {
        self.id
    }
}

impl Named for Category {
    fn name(&self) -> &str {
        &self.name
    }
}
