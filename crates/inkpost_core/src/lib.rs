//! Core domain logic for Inkpost.
//! This crate is the single source of truth for blog business invariants.

pub mod catalog;
pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;
pub mod share;
pub mod text;

pub use catalog::{
    parse_catalog, ArticleStore, CatalogError, CatalogResult, CatalogSource, JsonFileSource,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{Article, ArticleId, Catalog};
pub use model::comment::{Comment, CommentId, CommentValidationError, ANONYMOUS_AUTHOR};
pub use query::engine::{
    all_tags, apply_filters, featured, filter_by_category, filter_by_tag, filter_by_tags,
    paginate, related_to, search, FilterState, Page, QueryError, QueryResult,
    DEFAULT_RELATED_LIMIT,
};
pub use repo::comment_repo::{
    CommentRepository, RepoError, RepoResult, SqliteCommentRepository,
};
pub use service::comment_service::{CommentService, CommentServiceError};
pub use share::{share_url, SharePlatform};
pub use text::{format_date, slugify, truncate_text};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
