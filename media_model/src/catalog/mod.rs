//! Catalog - the central structure holding every entity of the ecosystem.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::entities::{
    Article, ArticleId, Author, AuthorId, Category, CategoryId, Identified, Named, Reader, ReaderId,
    Tag, TagId,
};

/// Insertion-ordered entity storage with lookup by ID.
///
/// Entities are never removed individually; [`Registry::clear`] drops them all.
#[derive(Debug, Clone)]
pub struct Registry<I, T> {
    items: Vec<T>,
    index: HashMap<I, usize>,
}

impl<I, T> Default for Registry<I, T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<I, T> Registry<I, T>
where
    I: Copy + Eq + std::hash::Hash,
    T: Identified<Id = I>,
{
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity. Returns its ID.
    pub fn insert(&mut self, item: T) -> I {
        let id = item.id();
        self.index.insert(id, self.items.len());
        self.items.push(item);
        id
    }

    pub fn get(&self, id: I) -> Option<&T> {
        self.index.get(&id).and_then(|i| self.items.get(*i))
    }

    pub fn get_mut(&mut self, id: I) -> Option<&mut T> {
        match self.index.get(&id) {
            Some(i) => self.items.get_mut(*i),
            None => None,
        }
    }

    /// Get an entity by insertion position.
    pub fn get_index(&self, position: usize) -> Option<&T> {
        self.items.get(position)
    }

    pub fn contains(&self, id: I) -> bool {
        self.index.contains_key(&id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.index.clear();
    }
}

impl<I, T> Registry<I, T>
where
    I: Copy + Eq + std::hash::Hash,
    T: Named<Id = I>,
{
    /// First entity with exactly this name (case-sensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&T> {
        self.items.iter().find(|item| item.name() == name)
    }
}

impl<'a, I, T> IntoIterator for &'a Registry<I, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Every entity in the ecosystem, plus name indexes for find-or-create.
///
/// Name indexes map a name to the first entity registered under it, so a
/// duplicate name binds to the existing entity.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub articles: Registry<ArticleId, Article>,
    pub authors: Registry<AuthorId, Author>,
    pub categories: Registry<CategoryId, Category>,
    pub tags: Registry<TagId, Tag>,
    pub readers: Registry<ReaderId, Reader>,

    author_names: HashMap<String, AuthorId>,
    category_names: HashMap<String, CategoryId>,
    tag_names: HashMap<String, TagId>,
}

impl Catalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an author with a seeded follower count.
    pub fn add_author(&mut self, name: impl Into<String>, followers: u64) -> AuthorId {
        let author = Author::with_followers(name, followers);
        self.author_names.entry(author.name.clone()).or_insert(author.id);
        self.authors.insert(author)
    }

    pub fn add_category(&mut self, name: impl Into<String>) -> CategoryId {
        let category = Category::new(name);
        self.category_names
            .entry(category.name.clone())
            .or_insert(category.id);
        self.categories.insert(category)
    }

    pub fn add_tag(&mut self, name: impl Into<String>) -> TagId {
        let tag = Tag::new(name);
        self.tag_names.entry(tag.name.clone()).or_insert(tag.id);
        self.tags.insert(tag)
    }

    pub fn add_reader(&mut self, name: impl Into<String>) -> ReaderId {
        self.readers.insert(Reader::new(name))
    }

    pub fn author_by_name(&self, name: &str) -> Option<AuthorId> {
        self.author_names.get(name).copied()
    }

    pub fn category_by_name(&self, name: &str) -> Option<CategoryId> {
        self.category_names.get(name).copied()
    }

    pub fn tag_by_name(&self, name: &str) -> Option<TagId> {
        self.tag_names.get(name).copied()
    }

    /// Find an author by exact name, or create one with no followers.
    pub fn find_or_create_author(&mut self, name: &str) -> AuthorId {
        match self.author_by_name(name) {
            Some(id) => id,
            None => self.add_author(name, 0),
        }
    }

    pub fn find_or_create_category(&mut self, name: &str) -> CategoryId {
        match self.category_by_name(name) {
            Some(id) => id,
            None => self.add_category(name),
        }
    }

    pub fn find_or_create_tag(&mut self, name: &str) -> TagId {
        match self.tag_by_name(name) {
            Some(id) => id,
            None => self.add_tag(name),
        }
    }

    /// Create an article and register it with its author, category and tags.
    ///
    /// Missing author, category and tags are created on demand. The author's
    /// influence is recalculated as part of publishing.
    pub fn publish_article<S: AsRef<str>>(
        &mut self,
        title: impl Into<String>,
        author_name: &str,
        category_name: &str,
        tag_names: &[S],
        publish_date: DateTime<Utc>,
    ) -> ArticleId {
        let author_id = self.find_or_create_author(author_name);
        let category_id = self.find_or_create_category(category_name);
        let tag_ids: Vec<TagId> = tag_names
            .iter()
            .map(|name| self.find_or_create_tag(name.as_ref()))
            .collect();

        let article = Article::new(title, author_id, category_id, tag_ids, publish_date);
        let article_id = self.articles.insert(article);

        if let Some(author) = self.authors.get_mut(author_id) {
            author.publish_article(article_id, &self.articles);
        }
        if let Some(category) = self.categories.get_mut(category_id) {
            category.add_article(article_id);
        }
        let article_tags = self
            .articles
            .get(article_id)
            .map(|article| article.tags().to_vec())
            .unwrap_or_default();
        for tag_id in article_tags {
            if let Some(tag) = self.tags.get_mut(tag_id) {
                tag.add_article(article_id);
            }
        }

        article_id
    }

    /// Drop every entity and name index.
    pub fn clear(&mut self) {
        self.articles.clear();
        self.authors.clear();
        self.categories.clear();
        self.tags.clear();
        self.readers.clear();
        self.author_names.clear();
        self.category_names.clear();
        self.tag_names.clear();
    }
}
