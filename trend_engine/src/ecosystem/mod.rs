//! The ecosystem controller - owns every entity and advances simulated time.
//!
//! A driver calls [`Ecosystem::tick`] as often as it likes; the controller only
//! runs a simulation step once the speed-adjusted interval has elapsed. A step
//! is:
//! 1. **Interactions**: 1-3 random readers view, like or share random articles
//! 2. **Viral spread**: each share adds a few views to every related article
//! 3. **Trending**: every article's score is recomputed from current engagement
//!    and the author influence left over from the previous step
//! 4. **Influence**: every author's influence is refreshed from the new engagement
//!
//! Trending in step 3 always sees influence from the previous step's step 4.

mod random;
mod stats;

pub use random::*;
pub use stats::*;

use chrono::{DateTime, Utc};
use media_model::{
    Article, ArticleId, Author, AuthorId, Catalog, Category, CategoryId, Engagement, Interaction,
    Reader, ReaderId, Registry, Tag, TagId,
};
use rand::rngs::StdRng;
use tracing::{debug, info, trace};

use crate::config::EngineConfig;
use crate::error::ConfigError;

/// Titles used by [`Ecosystem::add_random_article`].
pub const RANDOM_TITLES: [&str; 8] = [
    "The Art of Minimalist Design",
    "Building Modern Web Applications",
    "Data-Driven Product Decisions",
    "The Psychology of User Experience",
    "Scaling Teams and Products",
    "Design Thinking in Practice",
    "Emerging Tech Trends",
    "Content Strategy Essentials",
];

/// The simulation controller.
///
/// Single-threaded and synchronous: every operation finishes inside the call.
/// Callers sharing an ecosystem across threads must serialize access themselves.
#[derive(Debug)]
pub struct Ecosystem<S = RngSource<StdRng>> {
    catalog: Catalog,
    config: EngineConfig,
    update_speed: f64,
    last_update_ms: u64,
    random: S,
}

impl Ecosystem {
    /// Create an empty ecosystem with default configuration and OS-seeded randomness.
    pub fn new() -> Self {
        Self::from_parts(EngineConfig::default(), RngSource::from_entropy())
    }

    /// Create an empty ecosystem with OS-seeded randomness.
    ///
    /// Fails with [`ConfigError::Invalid`] if `config` does not validate.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::with_source(config, RngSource::from_entropy())
    }
}

impl Default for Ecosystem {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RandomSource> Ecosystem<S> {
    /// Create an empty ecosystem drawing randomness from `random`.
    ///
    /// Fails with [`ConfigError::Invalid`] if `config` does not validate.
    pub fn with_source(config: EngineConfig, random: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config, random))
    }

    fn from_parts(config: EngineConfig, random: S) -> Self {
        let update_speed = config.clamp_speed(config.initial_update_speed);
        Self {
            catalog: Catalog::new(),
            config,
            update_speed,
            last_update_ms: 0,
            random,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn random_source(&self) -> &S {
        &self.random
    }

    pub fn articles(&self) -> &Registry<ArticleId, Article> {
        &self.catalog.articles
    }

    pub fn authors(&self) -> &Registry<AuthorId, Author> {
        &self.catalog.authors
    }

    pub fn categories(&self) -> &Registry<CategoryId, Category> {
        &self.catalog.categories
    }

    pub fn tags(&self) -> &Registry<TagId, Tag> {
        &self.catalog.tags
    }

    pub fn readers(&self) -> &Registry<ReaderId, Reader> {
        &self.catalog.readers
    }

    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.catalog.articles.get(id)
    }

    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.catalog.authors.get(id)
    }

    pub fn reader(&self, id: ReaderId) -> Option<&Reader> {
        self.catalog.readers.get(id)
    }

    pub fn update_speed(&self) -> f64 {
        self.update_speed
    }

    pub fn last_update_ms(&self) -> u64 {
        self.last_update_ms
    }

    /// Milliseconds that must pass between simulation steps at the current speed.
    pub fn adjusted_interval_ms(&self) -> f64 {
        self.config.base_update_interval_ms / self.update_speed
    }

    /// Register an author with a seeded follower count.
    pub fn add_author(&mut self, name: impl Into<String>, followers: u64) -> AuthorId {
        self.catalog.add_author(name, followers)
    }

    pub fn add_reader(&mut self, name: impl Into<String>) -> ReaderId {
        self.catalog.add_reader(name)
    }

    pub fn add_category(&mut self, name: impl Into<String>) -> CategoryId {
        self.catalog.add_category(name)
    }

    pub fn add_tag(&mut self, name: impl Into<String>) -> TagId {
        self.catalog.add_tag(name)
    }

    /// Publish an article now. See [`Ecosystem::add_article_at`].
    pub fn add_article<T: AsRef<str>>(
        &mut self,
        title: impl Into<String>,
        author_name: &str,
        category_name: &str,
        tag_names: &[T],
    ) -> ArticleId {
        self.add_article_at(title, author_name, category_name, tag_names, Utc::now())
    }

    /// Publish an article with an explicit publication time.
    ///
    /// Author, category and tags are found by exact name or created. The new
    /// article starts with `floor(author influence / 10)` views. Names are not
    /// validated; empty strings are accepted.
    pub fn add_article_at<T: AsRef<str>>(
        &mut self,
        title: impl Into<String>,
        author_name: &str,
        category_name: &str,
        tag_names: &[T],
        publish_date: DateTime<Utc>,
    ) -> ArticleId {
        let id = self.catalog.publish_article(
            title,
            author_name,
            category_name,
            tag_names,
            publish_date,
        );

        // The new article has no engagement yet, so this is the influence of
        // the author's earlier work.
        let influence = self
            .catalog
            .articles
            .get(id)
            .and_then(|article| self.catalog.authors.get(article.author()))
            .map(|author| author.influence_score)
            .unwrap_or(0.0);
        let seed_views = (influence / 10.0).floor() as u64;

        if let Some(article) = self.catalog.articles.get_mut(id) {
            article.engagement.views = seed_views;
        }

        info!(
            article_id = %id,
            author = author_name,
            category = category_name,
            seed_views,
            "Article published"
        );
        id
    }

    /// Overwrite an article's counters directly (bulk seed import).
    ///
    /// Returns `false` if the article does not exist.
    pub fn seed_engagement(&mut self, article: ArticleId, engagement: Engagement) -> bool {
        match self.catalog.articles.get_mut(article) {
            Some(article) => {
                article.engagement = engagement;
                true
            }
            None => false,
        }
    }

    /// Publish a random article from existing authors, categories and tags.
    ///
    /// Picks 1-3 tag names, possibly repeated. Returns `None` if there is no
    /// author or no category to pick from.
    pub fn add_random_article(&mut self) -> Option<ArticleId> {
        if self.catalog.authors.is_empty() || self.catalog.categories.is_empty() {
            return None;
        }

        let title = RANDOM_TITLES[self.random.index(RANDOM_TITLES.len())];
        let author_index = self.random.index(self.catalog.authors.len());
        let author = self.catalog.authors.get_index(author_index)?.name.clone();
        let category_index = self.random.index(self.catalog.categories.len());
        let category = self.catalog.categories.get_index(category_index)?.name.clone();

        let mut tag_names = Vec::new();
        if !self.catalog.tags.is_empty() {
            let count = self.random.range_inclusive(1, 3);
            for _ in 0..count {
                let index = self.random.index(self.catalog.tags.len());
                if let Some(tag) = self.catalog.tags.get_index(index) {
                    tag_names.push(tag.name.clone());
                }
            }
        }

        Some(self.add_article(title, &author, &category, tag_names.as_slice()))
    }

    /// Recompute trending scores, then author influence, using the current time.
    pub fn update_trending(&mut self) {
        self.update_trending_at(Utc::now());
    }

    /// Recompute every trending score as of `now`, then every author's influence.
    pub fn update_trending_at(&mut self, now: DateTime<Utc>) {
        let catalog = &mut self.catalog;

        for article in catalog.articles.iter_mut() {
            let influence = catalog
                .authors
                .get(article.author())
                .map(|author| author.influence_score)
                .unwrap_or(0.0);
            article.calculate_trending_score(influence, now);
        }

        for author in catalog.authors.iter_mut() {
            author.calculate_influence(&catalog.articles);
        }
    }

    /// Run a random batch of reader interactions.
    ///
    /// Does nothing when there are no readers or no articles.
    pub fn simulate_interactions(&mut self) {
        if self.catalog.readers.is_empty() || self.catalog.articles.is_empty() {
            return;
        }

        let count = self
            .random
            .range_inclusive(self.config.min_interactions, self.config.max_interactions);
        debug!(count, "Simulating interactions");

        for _ in 0..count {
            let reader_index = self.random.index(self.catalog.readers.len());
            let article_index = self.random.index(self.catalog.articles.len());
            let interaction = Interaction::from_roll(
                self.random.unit(),
                self.config.view_cutoff,
                self.config.like_cutoff,
            );

            let reader = self.catalog.readers.get_index(reader_index).map(|r| r.id);
            let article = self.catalog.articles.get_index(article_index).map(|a| a.id);
            if let (Some(reader), Some(article)) = (reader, article) {
                self.interact(reader, article, interaction);
            }
        }
    }

    /// Apply one reader interaction.
    ///
    /// Views and likes count once per reader; shares always count and trigger
    /// viral spread. Returns `false` if nothing changed.
    pub fn interact(&mut self, reader: ReaderId, article: ArticleId, interaction: Interaction) -> bool {
        let (Some(reader_entry), Some(article_entry)) = (
            self.catalog.readers.get_mut(reader),
            self.catalog.articles.get_mut(article),
        ) else {
            return false;
        };

        let changed = match interaction {
            Interaction::View => reader_entry.view_article(article_entry),
            Interaction::Like => reader_entry.like_article(article_entry),
            Interaction::Share => {
                reader_entry.share_article(article_entry);
                true
            }
        };
        debug!(reader_id = %reader, article_id = %article, %interaction, changed, "Interaction");

        if interaction == Interaction::Share {
            self.apply_viral_spread(article);
        }
        changed
    }

    /// Give every article related to `shared` a random boost of views.
    ///
    /// Returns the total number of views added.
    pub fn apply_viral_spread(&mut self, shared: ArticleId) -> u64 {
        let related = match self.catalog.articles.get(shared) {
            Some(article) => article.related_articles(&self.catalog.articles),
            None => return 0,
        };

        let mut total = 0u64;
        for id in &related {
            let boost = self
                .random
                .range_inclusive(self.config.min_viral_boost, self.config.max_viral_boost);
            if let Some(article) = self.catalog.articles.get_mut(*id) {
                for _ in 0..boost {
                    article.add_view();
                }
                total += u64::from(boost);
            }
        }

        debug!(article_id = %shared, related = related.len(), views = total, "Viral spread");
        total
    }

    /// Advance the simulation if enough time has passed since the last step.
    ///
    /// Returns `true` if a step ran. A call within the speed-adjusted interval
    /// (or with a time before the last step) changes nothing.
    pub fn tick(&mut self, current_time_ms: u64) -> bool {
        let elapsed = current_time_ms.saturating_sub(self.last_update_ms) as f64;
        if elapsed < self.adjusted_interval_ms() {
            trace!(current_time_ms, last_update_ms = self.last_update_ms, "Tick throttled");
            return false;
        }

        self.last_update_ms = current_time_ms;
        self.simulate_interactions();
        self.update_trending();
        true
    }

    /// Set the speed multiplier, clamped to the configured range.
    ///
    /// NaN selects the slowest speed.
    pub fn set_update_speed(&mut self, speed: f64) {
        self.update_speed = self.config.clamp_speed(speed);
        debug!(requested = speed, applied = self.update_speed, "Update speed changed");
    }

    /// Drop every entity. Speed and the last update time are kept.
    pub fn reset(&mut self) {
        self.catalog.clear();
        info!("Ecosystem reset");
    }

    /// Aggregate counts over the whole ecosystem.
    pub fn stats(&self) -> EcosystemStats {
        let articles = &self.catalog.articles;
        EcosystemStats {
            total_articles: articles.len(),
            total_authors: self.catalog.authors.len(),
            total_readers: self.catalog.readers.len(),
            total_views: articles.iter().map(|a| a.views()).sum(),
            total_likes: articles.iter().map(|a| a.likes()).sum(),
            total_shares: articles.iter().map(|a| a.shares()).sum(),
            trending_count: articles
                .iter()
                .filter(|a| a.trending_score > self.config.trending_threshold)
                .count(),
        }
    }

    /// Recommendations for a reader, or `None` if the reader does not exist.
    pub fn recommendations_for(&self, reader: ReaderId) -> Option<Vec<ArticleId>> {
        let reader = self.catalog.readers.get(reader)?;
        Some(reader.recommendations(
            &self.catalog.articles,
            self.config.trending_threshold,
            self.config.recommendation_limit,
        ))
    }

    /// Top trending articles of a category (also refreshes its cached list).
    pub fn trending_in_category(&mut self, category: CategoryId) -> Option<Vec<ArticleId>> {
        let articles = &self.catalog.articles;
        self.catalog
            .categories
            .get_mut(category)
            .map(|category| category.trending_articles(articles).to_vec())
    }

    pub fn category_trend(&mut self, category: CategoryId) -> Option<f64> {
        let articles = &self.catalog.articles;
        self.catalog
            .categories
            .get_mut(category)
            .map(|category| category.calculate_category_trend(articles))
    }

    pub fn related_tags(&self, tag: TagId) -> Option<Vec<TagId>> {
        let tag = self.catalog.tags.get(tag)?;
        Some(tag.related_tags(&self.catalog.tags))
    }

    pub fn related_articles(&self, article: ArticleId) -> Option<Vec<ArticleId>> {
        let article = self.catalog.articles.get(article)?;
        Some(article.related_articles(&self.catalog.articles))
    }

    /// The `limit` highest-scoring articles across the ecosystem.
    pub fn top_trending(&self, limit: usize) -> Vec<ArticleId> {
        let mut ranked: Vec<&Article> = self.catalog.articles.iter().collect();
        ranked.sort_by(|a, b| {
            b.trending_score
                .partial_cmp(&a.trending_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.into_iter().take(limit).map(|a| a.id).collect()
    }

    /// Flip an article's UI selection flag.
    pub fn toggle_selected(&mut self, article: ArticleId) -> bool {
        match self.catalog.articles.get_mut(article) {
            Some(article) => {
                article.toggle_selected();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    /// A source whose every draw is `value`.
    fn constant(value: f64) -> SequenceSource {
        SequenceSource::new([value])
    }

    fn ecosystem(script: impl IntoIterator<Item = f64>) -> Ecosystem<SequenceSource> {
        Ecosystem::with_source(EngineConfig::default(), SequenceSource::new(script)).unwrap()
    }

    #[test]
    fn test_new_ecosystem_is_empty() {
        let eco = Ecosystem::new();
        assert!(eco.stats().is_empty());
        assert_eq!(eco.update_speed(), 1.0);
        assert_eq!(eco.last_update_ms(), 0);
    }

    #[test]
    fn test_add_article_reuses_entities() {
        let mut eco = ecosystem([0.0]);
        let first = eco.add_article("One", "Sarah Chen", "Design", &["UX", "UI"]);
        let second = eco.add_article("Two", "Sarah Chen", "Design", &["UX"]);

        assert_eq!(eco.authors().len(), 1);
        assert_eq!(eco.categories().len(), 1);
        assert_eq!(eco.tags().len(), 2);

        let author = eco.authors().get_index(0).unwrap();
        assert_eq!(author.articles, vec![first, second]);
        assert_eq!(author.followers, 0);
    }

    #[test]
    fn test_add_article_seeds_views_from_influence() {
        let mut eco = ecosystem([0.0]);
        eco.add_author("Sarah Chen", 1200);

        let id = eco.add_article("Fresh", "Sarah Chen", "Design", &["UX"]);

        // influence = log10(12001) * 10 = 40.79..., so 4 seed views
        assert_eq!(eco.article(id).unwrap().views(), 4);
    }

    #[test]
    fn test_new_author_gets_no_seed_views() {
        let mut eco = ecosystem([0.0]);
        let id = eco.add_article("First", "Newcomer", "Tech", &["Web"]);
        assert_eq!(eco.article(id).unwrap().views(), 0);
    }

    #[test]
    fn test_set_update_speed_clamps() {
        let mut eco = ecosystem([0.0]);
        eco.set_update_speed(10.0);
        assert_eq!(eco.update_speed(), 3.0);
        eco.set_update_speed(0.1);
        assert_eq!(eco.update_speed(), 0.5);
        eco.set_update_speed(2.0);
        assert_eq!(eco.update_speed(), 2.0);
        assert!((eco.adjusted_interval_ms() - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_initial_speed_is_clamped() {
        let config = EngineConfig {
            initial_update_speed: 9.0,
            ..Default::default()
        };
        let eco = Ecosystem::with_source(config, constant(0.0)).unwrap();
        assert_eq!(eco.update_speed(), 3.0);
    }

    #[test]
    fn test_inverted_speed_range_rejected() {
        let config = EngineConfig {
            min_update_speed: 3.0,
            max_update_speed: 0.5,
            ..Default::default()
        };
        let err = Ecosystem::with_source(config.clone(), constant(0.0)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert!(Ecosystem::with_config(config).is_err());
    }

    #[test]
    fn test_inverted_interaction_range_rejected() {
        let interactions = EngineConfig {
            min_interactions: 5,
            max_interactions: 1,
            ..Default::default()
        };
        let err = Ecosystem::with_source(interactions, constant(0.0)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));

        let boost = EngineConfig {
            min_viral_boost: 5,
            max_viral_boost: 1,
            ..Default::default()
        };
        assert!(Ecosystem::with_config(boost).is_err());
    }

    #[test]
    fn test_nan_speed_selects_slowest() {
        let mut eco = ecosystem([0.0]);
        eco.add_reader("Alex");
        eco.add_article("A", "Author", "Cat", &[] as &[&str]);

        eco.set_update_speed(f64::NAN);

        assert_eq!(eco.update_speed(), 0.5);
        assert!((eco.adjusted_interval_ms() - 2000.0).abs() < 1e-9);
        assert!(!eco.tick(1));
        assert!(!eco.tick(1999));
        assert!(eco.tick(2000));
    }

    #[test]
    fn test_nan_initial_speed_selects_slowest() {
        let config = EngineConfig {
            initial_update_speed: f64::NAN,
            ..Default::default()
        };
        let eco = Ecosystem::with_source(config, constant(0.0)).unwrap();
        assert_eq!(eco.update_speed(), 0.5);
    }

    #[test]
    fn test_simulate_without_readers_draws_nothing() {
        let mut eco = ecosystem([0.5]);
        eco.add_article("Lonely", "A", "C", &["T"]);

        eco.simulate_interactions();

        assert_eq!(eco.random_source().draws(), 0);
        assert_eq!(eco.stats().total_views, 0);
    }

    #[test]
    fn test_simulate_single_view() {
        // count = 1, reader 0, article 0, roll 0.0 -> view
        let mut eco = ecosystem([0.0]);
        let reader = eco.add_reader("Alex");
        let article = eco.add_article("A", "Author", "Cat", &["T"]);

        eco.simulate_interactions();

        assert_eq!(eco.article(article).unwrap().views(), 1);
        assert!(eco.reader(reader).unwrap().has_viewed(article));
    }

    #[test]
    fn test_simulate_like_draws() {
        // count draw 0.0 -> 1; indices 0.0; roll 0.75 -> like
        let mut eco = ecosystem([0.0, 0.0, 0.0, 0.75]);
        let reader = eco.add_reader("Alex");
        let article = eco.add_article("A", "Author", "Cat", &["UX"]);

        eco.simulate_interactions();

        assert_eq!(eco.article(article).unwrap().likes(), 1);
        assert_eq!(eco.reader(reader).unwrap().interests.len(), 1);
        assert_eq!(eco.random_source().draws(), 4);
    }

    #[test]
    fn test_share_spreads_views_to_related_articles() {
        let mut eco = ecosystem([0.0]);
        let reader = eco.add_reader("Alex");
        let shared = eco.add_article("Shared", "A", "Design", &["UX"]);
        let same_category = eco.add_article("Same category", "B", "Design", &["Other"]);
        let same_tag = eco.add_article("Same tag", "C", "Tech", &["UX"]);
        let unrelated = eco.add_article("Unrelated", "D", "Business", &["Money"]);

        // Every boost draw is 0.0 -> minimum boost of 1.
        assert!(eco.interact(reader, shared, Interaction::Share));

        assert_eq!(eco.article(shared).unwrap().shares(), 1);
        assert_eq!(eco.article(shared).unwrap().views(), 0);
        assert_eq!(eco.article(same_category).unwrap().views(), 1);
        assert_eq!(eco.article(same_tag).unwrap().views(), 1);
        assert_eq!(eco.article(unrelated).unwrap().views(), 0);
    }

    #[test]
    fn test_viral_boost_upper_bound() {
        let mut eco = ecosystem([0.999]);
        let shared = eco.add_article("Shared", "A", "Design", &[] as &[&str]);
        let related = eco.add_article("Related", "B", "Design", &[] as &[&str]);

        assert_eq!(eco.apply_viral_spread(shared), 5);
        assert_eq!(eco.article(related).unwrap().views(), 5);
    }

    #[test]
    fn test_repeat_interactions_are_idempotent_except_share() {
        let mut eco = ecosystem([0.0]);
        let reader = eco.add_reader("Alex");
        let article = eco.add_article("A", "Author", "Cat", &[] as &[&str]);

        assert!(eco.interact(reader, article, Interaction::View));
        assert!(!eco.interact(reader, article, Interaction::View));
        assert!(eco.interact(reader, article, Interaction::Like));
        assert!(!eco.interact(reader, article, Interaction::Like));
        assert!(eco.interact(reader, article, Interaction::Share));
        assert!(eco.interact(reader, article, Interaction::Share));

        let article = eco.article(article).unwrap();
        assert_eq!(article.engagement, Engagement::new(1, 1, 2));
    }

    #[test]
    fn test_interact_with_unknown_ids() {
        let mut eco = ecosystem([0.0]);
        let reader = eco.add_reader("Alex");
        assert!(!eco.interact(reader, ArticleId::new(), Interaction::View));
        assert_eq!(eco.apply_viral_spread(ArticleId::new()), 0);
    }

    #[test]
    fn test_tick_throttles() {
        let mut eco = ecosystem([0.0]);
        eco.add_reader("Alex");
        eco.add_article("A", "Author", "Cat", &[] as &[&str]);

        assert!(!eco.tick(999));
        assert_eq!(eco.last_update_ms(), 0);

        assert!(eco.tick(1000));
        assert_eq!(eco.last_update_ms(), 1000);
        let after_first = eco.stats();

        assert!(!eco.tick(1500));
        assert_eq!(eco.stats(), after_first);
        assert_eq!(eco.last_update_ms(), 1000);

        eco.set_update_speed(2.0);
        assert!(eco.tick(1500));
    }

    #[test]
    fn test_tick_backwards_in_time_is_noop() {
        let mut eco = ecosystem([0.0]);
        assert!(eco.tick(5000));
        assert!(!eco.tick(100));
        assert_eq!(eco.last_update_ms(), 5000);
    }

    #[test]
    fn test_update_trending_uses_previous_influence() {
        let mut eco = ecosystem([0.0]);
        let author = eco.add_author("Sarah Chen", 1200);
        let now = Utc::now();
        let id = eco.add_article_at("Post", "Sarah Chen", "Design", &["UX"], now);
        eco.seed_engagement(id, Engagement::new(450, 120, 35));

        let stale_influence = eco.author(author).unwrap().influence_score;
        eco.update_trending_at(now);

        let expected = 795.0 * 1.5 * (1.0 + stale_influence * 0.1);
        assert!((eco.article(id).unwrap().trending_score - expected).abs() < 1e-6);

        let fresh = eco.author(author).unwrap().influence_score;
        assert!((fresh - 41.0707).abs() < 0.001);
        assert!(fresh > stale_influence);
    }

    #[test]
    fn test_reset_keeps_speed_and_clock() {
        let mut eco = ecosystem([0.0]);
        eco.add_reader("Alex");
        eco.add_article("A", "Author", "Cat", &["T"]);
        eco.set_update_speed(2.0);
        eco.tick(2000);

        eco.reset();

        assert!(eco.stats().is_empty());
        assert!(eco.tags().is_empty());
        assert!(eco.categories().is_empty());
        assert_eq!(eco.update_speed(), 2.0);
        assert_eq!(eco.last_update_ms(), 2000);
    }

    #[test]
    fn test_stats_trending_count_is_strict() {
        let mut eco = ecosystem([0.0]);
        let publish = Utc::now() - Duration::days(2);
        let at_threshold = eco.add_article_at("At", "A", "C", &[] as &[&str], publish);
        let above = eco.add_article_at("Above", "B", "C", &[] as &[&str], publish);
        eco.seed_engagement(at_threshold, Engagement::new(50, 0, 0));
        eco.seed_engagement(above, Engagement::new(51, 0, 0));

        // Influence is zero for both authors until after this pass.
        eco.update_trending_at(Utc::now());

        let stats = eco.stats();
        assert_eq!(stats.trending_count, 1);
        assert_eq!(stats.total_views, 101);
        assert_eq!(stats.total_authors, 2);
    }

    #[test]
    fn test_add_random_article() {
        let mut eco = ecosystem([0.0]);
        assert!(eco.add_random_article().is_none());

        eco.add_author("Sarah Chen", 0);
        eco.add_category("Design");
        eco.add_tag("UX");

        let id = eco.add_random_article().unwrap();
        let article = eco.article(id).unwrap();
        assert_eq!(article.title, RANDOM_TITLES[0]);
        assert_eq!(article.tags().len(), 1);
        assert_eq!(eco.authors().len(), 1);
        assert_eq!(eco.categories().len(), 1);
    }

    #[test]
    fn test_random_article_without_tags() {
        let mut eco = ecosystem([0.5]);
        eco.add_author("Sarah Chen", 0);
        eco.add_category("Design");

        let id = eco.add_random_article().unwrap();
        assert!(eco.article(id).unwrap().tags().is_empty());
        assert!(eco.tags().is_empty());
    }

    #[test]
    fn test_queries_for_unknown_ids() {
        let mut eco = ecosystem([0.0]);
        assert!(eco.recommendations_for(ReaderId::new()).is_none());
        assert!(eco.trending_in_category(CategoryId::new()).is_none());
        assert!(eco.category_trend(CategoryId::new()).is_none());
        assert!(eco.related_tags(TagId::new()).is_none());
        assert!(eco.related_articles(ArticleId::new()).is_none());
        assert!(!eco.toggle_selected(ArticleId::new()));
    }

    #[test]
    fn test_toggle_selected() {
        let mut eco = ecosystem([0.0]);
        let id = eco.add_article("A", "B", "C", &[] as &[&str]);
        assert!(eco.toggle_selected(id));
        assert!(eco.article(id).unwrap().selected);
    }
}
