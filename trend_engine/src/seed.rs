//! Demo population - a small newsroom with history, ready to simulate.

use media_model::Engagement;
use tracing::info;

use crate::ecosystem::{Ecosystem, RandomSource};

/// Authors and their follower counts.
pub const DEMO_AUTHORS: [(&str, u64); 4] = [
    ("Sarah Chen", 1200),
    ("Marcus Johnson", 800),
    ("Emily Rodriguez", 1500),
    ("David Kim", 950),
];

pub const DEMO_CATEGORIES: [&str; 4] = ["Technology", "Design", "Business", "Media"];

pub const DEMO_TAGS: [&str; 8] = ["UX", "UI", "Design", "Tech", "Product", "Web", "Mobile", "Strategy"];

pub const DEMO_READERS: [&str; 5] = ["Alex", "Jordan", "Taylor", "Morgan", "Casey"];

/// An article to import together with its historical engagement.
#[derive(Debug, Clone, Copy)]
pub struct SeedArticle {
    pub title: &'static str,
    pub author: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
    pub engagement: Engagement,
}

const fn seed(
    title: &'static str,
    author: &'static str,
    category: &'static str,
    tags: &'static [&'static str],
    views: u64,
    likes: u64,
    shares: u64,
) -> SeedArticle {
    SeedArticle {
        title,
        author,
        category,
        tags,
        engagement: Engagement {
            views,
            likes,
            shares,
        },
    }
}

/// The demo articles. "Business" and "Media" tags are not pre-registered and
/// get created on first use.
pub const DEMO_ARTICLES: [SeedArticle; 15] = [
    seed("The Future of UI Design", "Sarah Chen", "Design", &["UX", "UI", "Design"], 450, 120, 35),
    seed("React Performance Optimization", "Marcus Johnson", "Technology", &["Tech", "Web", "Product"], 320, 85, 22),
    seed("Building Scalable Products", "Emily Rodriguez", "Business", &["Product", "Strategy", "Business"], 280, 95, 18),
    seed("Mobile-First Design Principles", "Sarah Chen", "Design", &["Mobile", "UX", "Design"], 380, 110, 28),
    seed("Web3 and the Future", "David Kim", "Technology", &["Tech", "Web", "Strategy"], 210, 45, 12),
    seed("Content Strategy for 2024", "Emily Rodriguez", "Media", &["Strategy", "Media", "Product"], 195, 60, 15),
    seed("Accessibility in Modern Web", "Marcus Johnson", "Technology", &["UX", "Web", "Tech"], 265, 75, 20),
    seed("Design Systems Deep Dive", "Sarah Chen", "Design", &["Design", "UI", "Product"], 420, 130, 40),
    seed("Startup Growth Hacks", "David Kim", "Business", &["Business", "Strategy", "Product"], 180, 50, 10),
    seed("Video Content Trends", "Emily Rodriguez", "Media", &["Media", "Strategy"], 150, 40, 8),
    seed("CSS Grid Mastery", "Marcus Johnson", "Technology", &["Web", "Tech", "UI"], 240, 65, 16),
    seed("User Research Methods", "Sarah Chen", "Design", &["UX", "Design", "Product"], 310, 90, 25),
    seed("API Design Best Practices", "David Kim", "Technology", &["Tech", "Product", "Web"], 200, 55, 14),
    seed("Brand Identity Systems", "Emily Rodriguez", "Design", &["Design", "Strategy"], 175, 48, 11),
    seed("Social Media Analytics", "Marcus Johnson", "Media", &["Media", "Strategy", "Product"], 160, 42, 9),
];

/// Build the demo ecosystem with OS-seeded randomness.
pub fn demo_ecosystem() -> Ecosystem {
    let mut ecosystem = Ecosystem::new();
    populate(&mut ecosystem);
    ecosystem
}

/// Fill an ecosystem with the demo population and compute initial scores.
///
/// Engagement is imported by overwriting counters, then trending is updated once.
pub fn populate<S: RandomSource>(ecosystem: &mut Ecosystem<S>) {
    for (name, followers) in DEMO_AUTHORS {
        ecosystem.add_author(name, followers);
    }
    for name in DEMO_CATEGORIES {
        ecosystem.add_category(name);
    }
    for name in DEMO_TAGS {
        ecosystem.add_tag(name);
    }
    for name in DEMO_READERS {
        ecosystem.add_reader(name);
    }

    for article in DEMO_ARTICLES {
        let id = ecosystem.add_article(article.title, article.author, article.category, article.tags);
        ecosystem.seed_engagement(id, article.engagement);
    }

    ecosystem.update_trending();

    let stats = ecosystem.stats();
    info!(
        articles = stats.total_articles,
        authors = stats.total_authors,
        readers = stats.total_readers,
        trending = stats.trending_count,
        "Demo ecosystem seeded"
    );
}
