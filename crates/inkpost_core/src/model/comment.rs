//! Comment domain model.
//!
//! # Responsibility
//! - Define the append-only comment record attached to one article.
//! - Provide construction helpers that apply the anonymous-author default.
//!
//! # Invariants
//! - `id` is stable and never reused for another comment.
//! - Comments are created once and never edited or deleted.
//! - `content` must not be blank; write paths call `validate()` first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one comment.
pub type CommentId = Uuid;

/// Author label applied when a comment is submitted without a name.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// Validation failure for comment records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentValidationError {
    /// Comment content is empty or whitespace-only.
    EmptyContent,
}

impl Display for CommentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "comment content cannot be blank"),
        }
    }
}

impl Error for CommentValidationError {}

/// One reader comment on an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Stable global ID generated at submission.
    pub id: CommentId,
    /// Display name; defaults to [`ANONYMOUS_AUTHOR`].
    pub author: String,
    /// Free-text comment body.
    pub content: String,
    /// Submission timestamp.
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Creates a comment stamped with the current time and a fresh id.
    ///
    /// A missing or blank `author` falls back to [`ANONYMOUS_AUTHOR`].
    pub fn new(author: Option<String>, content: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), author, content, Utc::now())
    }

    /// Creates a comment with caller-provided identity and timestamp.
    ///
    /// Used by import paths and tests where identity already exists.
    /// Timestamps are stored with millisecond precision, so construction
    /// clamps `created_at` accordingly.
    pub fn with_id(
        id: CommentId,
        author: Option<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let author = author
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string());

        Self {
            id,
            author,
            content: content.into(),
            created_at: clamp_to_millis(created_at),
        }
    }

    /// Checks record-level invariants before persistence.
    pub fn validate(&self) -> Result<(), CommentValidationError> {
        if self.content.trim().is_empty() {
            return Err(CommentValidationError::EmptyContent);
        }
        Ok(())
    }
}

fn clamp_to_millis(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(timestamp.timestamp_millis()).unwrap_or(timestamp)
}

#[cfg(test)]
mod tests {
    use super::{Comment, CommentValidationError, ANONYMOUS_AUTHOR};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    #[test]
    fn missing_author_defaults_to_anonymous() {
        let comment = Comment::new(None, "nice article");
        assert_eq!(comment.author, ANONYMOUS_AUTHOR);
        assert!(!comment.id.is_nil());
    }

    #[test]
    fn blank_author_defaults_to_anonymous() {
        let comment = Comment::new(Some("   ".to_string()), "nice article");
        assert_eq!(comment.author, ANONYMOUS_AUTHOR);
    }

    #[test]
    fn named_author_is_trimmed_and_kept() {
        let comment = Comment::new(Some("  Ada  ".to_string()), "nice article");
        assert_eq!(comment.author, "Ada");
    }

    #[test]
    fn timestamps_clamp_to_millisecond_precision() {
        let precise = Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap()
            + chrono::Duration::nanoseconds(1_234_567);
        let comment = Comment::with_id(Uuid::new_v4(), None, "body", precise);
        assert_eq!(comment.created_at.timestamp_subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn validate_rejects_blank_content() {
        let comment = Comment::new(None, "   \n ");
        assert_eq!(
            comment.validate().unwrap_err(),
            CommentValidationError::EmptyContent
        );
    }
}
