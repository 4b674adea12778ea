//! Repository layer for comment persistence.
//!
//! # Responsibility
//! - Define the data access contract for the per-article comment log.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Write paths must call `Comment::validate()` before SQL mutations.
//! - The comment log is append-only: no update or delete API exists.

pub mod comment_repo;
