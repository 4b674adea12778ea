//! Slug and display formatting utilities.
//!
//! # Responsibility
//! - Derive URL slugs from article titles.
//! - Render dates and truncated excerpts for display surfaces.
//!
//! # Invariants
//! - `slugify` is deterministic; distinct titles may legitimately
//!   collapse to the same slug and callers must tolerate that.
//! - `truncate_text` never splits a character.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALPHANUMERIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("[^a-z0-9]+").expect("valid slug regex"));

/// Derives a URL-safe slug from a title.
///
/// Lowercases the input, collapses every non-alphanumeric run to a
/// single `-` and trims leading/trailing separators. This system does
/// not disambiguate slug collisions.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    NON_ALPHANUMERIC_RE
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Renders a long-form publication date like "March 15, 2024".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Truncates text to `max_chars` characters, appending `...` when cut.
///
/// Counts characters, not bytes, so multi-byte text is never split.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}
