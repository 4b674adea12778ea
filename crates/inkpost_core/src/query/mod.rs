//! Pure query operations over the article catalog.
//!
//! # Responsibility
//! - Expose search, filter, ranking and pagination over a catalog slice.
//! - Keep every operation free of I/O and deterministic.
//!
//! # Invariants
//! - Filters never reorder the catalog; document order is preserved.
//! - Absence (unknown id, nothing matching) is an empty result, not an
//!   error.

pub mod engine;
