//! Article store: catalog loading, caching and lookup.
//!
//! # Responsibility
//! - Read and deserialize the catalog document exactly once per session.
//! - Degrade to an empty catalog when the source is unreadable or
//!   malformed, so downstream queries return empty results instead of
//!   failing.
//! - Resolve articles by stable id and by title slug.
//!
//! # Invariants
//! - The catalog snapshot never changes after the first successful or
//!   failed load; repeat calls hit the cache.
//! - Partial data is never exposed: a load either yields the full parsed
//!   document or an empty catalog.

use crate::model::article::{Article, ArticleId, Catalog};
use crate::text::slugify;
use log::{error, info};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Result type for catalog source and parsing APIs.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// The catalog-unavailable condition: source unreadable or malformed.
#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "catalog unavailable: {err}"),
            Self::Parse(err) => write!(f, "catalog document malformed: {err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Transport seam for catalog documents.
///
/// Implementations own any retry or timeout policy; the store only
/// consumes the raw document text.
pub trait CatalogSource {
    /// Reads the full catalog document.
    fn read_document(&self) -> CatalogResult<String>;

    /// Human-readable source label for logging.
    fn describe(&self) -> String;
}

/// Catalog source backed by a JSON file on disk.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CatalogSource for JsonFileSource {
    fn read_document(&self) -> CatalogResult<String> {
        Ok(std::fs::read_to_string(&self.path)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Deserializes one catalog document.
///
/// The document is the `{"articles": [...]}` envelope. Parsing is
/// all-or-nothing: one malformed record fails the whole document.
pub fn parse_catalog(document: &str) -> CatalogResult<Catalog> {
    Ok(serde_json::from_str(document)?)
}

/// Session-scoped article store.
///
/// Fetches and parses the catalog on first access and serves the cached
/// snapshot afterwards. A failed load caches an empty catalog for the
/// rest of the session.
pub struct ArticleStore<S: CatalogSource> {
    source: S,
    catalog: OnceCell<Catalog>,
}

impl<S: CatalogSource> ArticleStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            catalog: OnceCell::new(),
        }
    }

    /// Returns the catalog snapshot, loading it on first call.
    ///
    /// # Side effects
    /// - First call reads the source and emits a `catalog_load` event.
    /// - On failure the error is logged and an empty catalog is cached.
    pub fn load(&self) -> &Catalog {
        self.catalog.get_or_init(|| {
            let started_at = Instant::now();
            let loaded = self
                .source
                .read_document()
                .and_then(|document| parse_catalog(&document));

            match loaded {
                Ok(catalog) => {
                    info!(
                        "event=catalog_load module=catalog status=ok source={} articles={} duration_ms={}",
                        self.source.describe(),
                        catalog.len(),
                        started_at.elapsed().as_millis()
                    );
                    catalog
                }
                Err(err) => {
                    error!(
                        "event=catalog_load module=catalog status=error source={} duration_ms={} error={}",
                        self.source.describe(),
                        started_at.elapsed().as_millis(),
                        err
                    );
                    Catalog::default()
                }
            }
        })
    }

    /// Looks up one article by stable id.
    pub fn get_by_id(&self, id: &ArticleId) -> Option<&Article> {
        self.load().get_by_id(id)
    }

    /// Looks up one article by title slug.
    ///
    /// Slugs are not guaranteed unique: two titles may collapse to the
    /// same slug, in which case the first catalog occurrence wins.
    pub fn get_by_slug(&self, slug: &str) -> Option<&Article> {
        self.load()
            .iter()
            .find(|article| slugify(&article.title) == slug)
    }
}
