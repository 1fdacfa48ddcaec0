//! Tag definitions.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{ArticleId, Identified, Named, TagId};

/// A tag labels articles and keeps backlinks to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    /// Append-only, no duplicates.
    pub articles: Vec<ArticleId>,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: TagId::new(),
            name: name.into(),
            articles: Vec::new(),
        }
    }

    /// Add an article backlink unless it is already present.
    pub fn add_article(&mut self, article: ArticleId) {
        if !self.articles.contains(&article) {
            self.articles.push(article);
        }
    }

    /// Tags other than this one that label at least one of the same articles.
    pub fn related_tags<'a>(&self, all_tags: impl IntoIterator<Item = &'a Tag>) -> Vec<TagId> {
        let article_ids: HashSet<ArticleId> = self.articles.iter().copied().collect();

        all_tags
            .into_iter()
            .filter(|tag| tag.id != self.id)
            .filter(|tag| tag.articles.iter().any(|id| article_ids.contains(id)))
            .map(|tag| tag.id)
            .collect()
    }
}

impl Identified for Tag {
    type Id = TagId;

    fn id(&self) -> TagId {
        self.id
    }
}

impl Named for Tag {
    fn name(&self) -> &str {
        &self.name
    }
}
