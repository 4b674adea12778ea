//! Article and catalog domain model.
//!
//! # Responsibility
//! - Define the immutable article record as published in the catalog
//!   document.
//! - Wrap the full catalog snapshot behind read-only accessors.
//!
//! # Invariants
//! - `id` is unique within one catalog snapshot.
//! - `tags` may be empty.
//! - The catalog never reorders after deserialization; document order is
//!   the canonical order for every downstream query.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};

/// Stable identifier for one article.
///
/// Catalog documents drifted between numeric and string ids over time, so
/// deserialization accepts both and canonicalizes to string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for ArticleId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ArticleId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for ArticleId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Text(value) => Ok(ArticleId(value)),
            RawId::Number(value) => Ok(ArticleId(value.to_string())),
        }
    }
}

/// One published article as it appears in the catalog document.
///
/// Fields use the document's camelCase naming on the wire. `read_time`
/// is absent in older catalogs and `featured` defaults to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Stable id, canonical address for routing and the comment log key.
    pub id: ArticleId,
    pub title: String,
    /// Short summary used on listing surfaces.
    pub excerpt: String,
    /// Full HTML body.
    pub content: String,
    /// Cover image URI.
    pub image: String,
    /// Publication date, ISO `YYYY-MM-DD` on the wire.
    pub date: NaiveDate,
    pub author: String,
    /// Single category label, matched exactly by filters.
    pub category: String,
    /// Tag labels; order carries no meaning.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Display string like "5 min"; not present in older catalogs.
    #[serde(default)]
    pub read_time: Option<String>,
    /// Editorial highlight flag. Presentation-only: featured selection
    /// goes by recency, see [`crate::query::engine::featured`].
    #[serde(default)]
    pub featured: bool,
}

/// The full, ordered article snapshot for one session.
///
/// Deserialized from the `{"articles": [...]}` document envelope. The
/// catalog is read-only by construction: there is no mutation API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    articles: Vec<Article>,
}

impl Catalog {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    /// Articles in document order.
    pub fn articles(&self) -> &[Article] {
        self.articles.as_slice()
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Article> {
        self.articles.iter()
    }

    /// Looks up one article by stable id.
    pub fn get_by_id(&self, id: &ArticleId) -> Option<&Article> {
        self.articles.iter().find(|article| &article.id == id)
    }
}
