//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `inkpost_core` linkage.
//! - Load one catalog document and report counts for quick local sanity
//!   checks.

use inkpost_core::{all_tags, featured, ArticleStore, JsonFileSource};

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/articles.json".to_string());

    let store = ArticleStore::new(JsonFileSource::new(&path));
    let catalog = store.load();

    println!("inkpost_core version={}", inkpost_core::core_version());
    println!("catalog source={path} articles={}", catalog.len());
    println!("tags={}", all_tags(catalog.articles()).join(","));
    if let Some(article) = featured(catalog.articles()) {
        println!("featured id={} title={}", article.id, article.title);
    }
}
