//! Domain records for the article catalog and comment log.
//!
//! # Responsibility
//! - Define the canonical data structures consumed by the query engine
//!   and the comment persistence layer.
//! - Keep the catalog read-only once deserialized.
//!
//! # Invariants
//! - `ArticleId` is unique within one catalog snapshot.
//! - Comments are append-only records; nothing here supports editing.

pub mod article;
pub mod comment;
