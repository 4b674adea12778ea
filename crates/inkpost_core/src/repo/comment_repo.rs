//! Comment repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the append-only comment log keyed by article id.
//! - Return comments in submission order with a deterministic tiebreak.
//!
//! # Invariants
//! - `append` validates the comment before the SQL insert.
//! - Listing order is `created_at ASC, id ASC`.
//! - Read paths reject corrupt persisted rows instead of masking them.

use crate::db::DbError;
use crate::model::article::ArticleId;
use crate::model::comment::{Comment, CommentId, CommentValidationError};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for comment persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(CommentValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted comment data: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<CommentValidationError> for RepoError {
    fn from(value: CommentValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for the per-article comment log.
///
/// Deliberately append-only: comments are never edited or deleted.
pub trait CommentRepository {
    /// Appends one comment to the article's log.
    fn append(&self, article_id: &ArticleId, comment: &Comment) -> RepoResult<CommentId>;
    /// Lists all comments for one article in submission order.
    fn list_for_article(&self, article_id: &ArticleId) -> RepoResult<Vec<Comment>>;
    /// Counts comments for one article.
    fn count_for_article(&self, article_id: &ArticleId) -> RepoResult<u64>;
}

/// SQLite-backed comment repository.
pub struct SqliteCommentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCommentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CommentRepository for SqliteCommentRepository<'_> {
    fn append(&self, article_id: &ArticleId, comment: &Comment) -> RepoResult<CommentId> {
        comment.validate()?;

        self.conn.execute(
            "INSERT INTO comments (id, article_id, author, content, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                comment.id.to_string(),
                article_id.as_str(),
                comment.author.as_str(),
                comment.content.as_str(),
                comment.created_at.timestamp_millis(),
            ],
        )?;

        Ok(comment.id)
    }

    fn list_for_article(&self, article_id: &ArticleId) -> RepoResult<Vec<Comment>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, author, content, created_at
             FROM comments
             WHERE article_id = ?1
             ORDER BY created_at ASC, id ASC;",
        )?;

        let mut rows = stmt.query([article_id.as_str()])?;
        let mut comments = Vec::new();
        while let Some(row) = rows.next()? {
            comments.push(parse_comment_row(row)?);
        }

        Ok(comments)
    }

    fn count_for_article(&self, article_id: &ArticleId) -> RepoResult<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM comments WHERE article_id = ?1;",
            [article_id.as_str()],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }
}

fn parse_comment_row(row: &Row<'_>) -> RepoResult<Comment> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{id_text}` in comments.id"))
    })?;

    let created_at_ms: i64 = row.get("created_at")?;
    let created_at: DateTime<Utc> =
        DateTime::from_timestamp_millis(created_at_ms).ok_or_else(|| {
            RepoError::InvalidData(format!(
                "invalid timestamp `{created_at_ms}` in comments.created_at"
            ))
        })?;

    Ok(Comment {
        id,
        author: row.get("author")?,
        content: row.get("content")?,
        created_at,
    })
}
