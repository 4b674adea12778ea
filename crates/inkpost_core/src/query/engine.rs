//! Catalog query engine.
//!
//! # Responsibility
//! - Provide the search/filter/related/featured/pagination operations
//!   consumed by presentation layers.
//! - Keep all operations pure and total for well-typed input.
//!
//! # Invariants
//! - Every filter preserves catalog order.
//! - Related-article ranking is a stable sort: ties keep catalog order.
//! - The only failure mode is a structurally invalid argument
//!   (`page_size == 0`); everything else yields empty results.

use crate::model::article::{Article, ArticleId};
use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default number of related articles returned to detail pages.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Result type for fallible query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Structurally invalid caller input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Page size must be at least 1.
    InvalidPageSize(u32),
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPageSize(value) => {
                write!(f, "page size must be positive, got {value}")
            }
        }
    }
}

impl Error for QueryError {}

/// The filter selection owned by a presentation layer.
///
/// Passed by value into the pure engine functions; the engine holds no
/// state of its own between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Exact-match category filter; `None` means no category filter.
    pub category: Option<String>,
    /// Conjunctive tag filter; empty means no tag filter.
    pub tags: Vec<String>,
    /// Free-text search; blank means no search filter.
    pub search: String,
    /// Current page, 1-based.
    pub page: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: None,
            tags: Vec::new(),
            search: String::new(),
            page: 1,
        }
    }
}

/// One page of results plus the page count for the whole sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Always at least 1, even for an empty sequence.
    pub total_pages: u32,
}

/// Case-insensitive substring search over title and content.
///
/// Blank or whitespace-only `text` is defined to match the whole
/// catalog, so callers can treat empty search as "no filter" without a
/// special case.
pub fn search<'a>(articles: &'a [Article], text: &str) -> Vec<&'a Article> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return articles.iter().collect();
    }

    articles
        .iter()
        .filter(|article| matches_search(article, &needle))
        .collect()
}

/// Exact category match; `None` passes the whole catalog through.
pub fn filter_by_category<'a>(
    articles: &'a [Article],
    category: Option<&str>,
) -> Vec<&'a Article> {
    match category {
        None => articles.iter().collect(),
        Some(wanted) => articles
            .iter()
            .filter(|article| article.category == wanted)
            .collect(),
    }
}

/// Articles whose tag set contains `tag`.
pub fn filter_by_tag<'a>(articles: &'a [Article], tag: &str) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|article| article.tags.iter().any(|candidate| candidate == tag))
        .collect()
}

/// Articles whose tag set contains ALL of `tags` (conjunctive).
///
/// An empty `tags` slice passes the whole catalog through. This is
/// deliberately distinct from [`filter_by_tag`]: the single-tag variant
/// answers "has this tag", this one answers "has every tag".
pub fn filter_by_tags<'a>(articles: &'a [Article], tags: &[String]) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|article| tags.iter().all(|tag| article.tags.contains(tag)))
        .collect()
}

/// Conjunction of category, tag-set and search predicates.
///
/// Each absent or empty part passes through. Result preserves catalog
/// order regardless of predicate order. `state.page` is not consumed
/// here; feed the result to [`paginate`].
pub fn apply_filters<'a>(articles: &'a [Article], state: &FilterState) -> Vec<&'a Article> {
    let needle = state.search.trim().to_lowercase();

    articles
        .iter()
        .filter(|article| {
            let category_ok = state
                .category
                .as_deref()
                .map_or(true, |wanted| article.category == wanted);
            let tags_ok = state.tags.iter().all(|tag| article.tags.contains(tag));
            let search_ok = needle.is_empty() || matches_search(article, &needle);
            category_ok && tags_ok && search_ok
        })
        .collect()
}

/// Articles related to `article_id`, ranked by shared-tag count.
///
/// Candidates share the source's category or at least one tag, excluding
/// the source itself. Ranking is descending by number of shared tags;
/// the sort is stable, so ties keep catalog order. The result is
/// truncated to `limit` ([`DEFAULT_RELATED_LIMIT`] for detail pages).
/// An unknown `article_id` yields an empty result.
pub fn related_to<'a>(
    articles: &'a [Article],
    article_id: &ArticleId,
    limit: usize,
) -> Vec<&'a Article> {
    let Some(source) = articles.iter().find(|article| &article.id == article_id) else {
        return Vec::new();
    };

    let mut candidates: Vec<&Article> = articles
        .iter()
        .filter(|article| article.id != source.id)
        .filter(|article| {
            article.category == source.category
                || article.tags.iter().any(|tag| source.tags.contains(tag))
        })
        .collect();

    candidates.sort_by_key(|article| Reverse(shared_tag_count(article, source)));
    candidates.truncate(limit);
    candidates
}

/// The featured article: most recent `date`, first occurrence on ties.
///
/// Selection goes by recency, not the editorial `featured` flag; the
/// flag stayed in the model for presentation use only.
pub fn featured(articles: &[Article]) -> Option<&Article> {
    articles.iter().reduce(|best, article| {
        if article.date > best.date {
            article
        } else {
            best
        }
    })
}

/// Slices one 1-based page out of `items`.
///
/// `total_pages` is `ceil(len / page_size)` with a minimum of 1 even for
/// an empty sequence. Pages beyond the end yield empty items without
/// error; pages below 1 clamp to the first page.
///
/// # Errors
/// - `QueryError::InvalidPageSize` when `page_size == 0`.
pub fn paginate<T: Clone>(items: &[T], page: u32, page_size: u32) -> QueryResult<Page<T>> {
    if page_size == 0 {
        return Err(QueryError::InvalidPageSize(page_size));
    }

    let total_pages = (items.len() as u32).div_ceil(page_size).max(1);
    let start = (page.max(1) - 1) as usize * page_size as usize;
    let page_items = items
        .iter()
        .skip(start)
        .take(page_size as usize)
        .cloned()
        .collect();

    Ok(Page {
        items: page_items,
        total_pages,
    })
}

/// Duplicate-free union of every article's tag set, sorted by name.
///
/// Sorting makes the result independent of catalog order.
pub fn all_tags(articles: &[Article]) -> Vec<String> {
    let mut unique = BTreeSet::new();
    for article in articles {
        for tag in &article.tags {
            unique.insert(tag.clone());
        }
    }
    unique.into_iter().collect()
}

fn matches_search(article: &Article, lowercase_needle: &str) -> bool {
    article.title.to_lowercase().contains(lowercase_needle)
        || article.content.to_lowercase().contains(lowercase_needle)
}

fn shared_tag_count(article: &Article, source: &Article) -> usize {
    article
        .tags
        .iter()
        .filter(|tag| source.tags.contains(*tag))
        .count()
}
