//! Comment use-case service.
//!
//! # Responsibility
//! - Provide the submit/list entry points for article comments.
//! - Apply the anonymous-author default and submission timestamping.
//!
//! # Invariants
//! - Blank content is rejected before any persistence happens.
//! - Submitted comments are returned as stored, id and timestamp set.

use crate::model::article::ArticleId;
use crate::model::comment::{Comment, CommentValidationError};
use crate::repo::comment_repo::{CommentRepository, RepoError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for comment use-cases.
#[derive(Debug)]
pub enum CommentServiceError {
    /// Submitted content is empty or whitespace-only.
    EmptyContent,
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for CommentServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "comment content cannot be blank"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommentServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyContent => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for CommentServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(CommentValidationError::EmptyContent) => Self::EmptyContent,
            other => Self::Repo(other),
        }
    }
}

/// Comment service facade over repository implementations.
pub struct CommentService<R: CommentRepository> {
    repo: R,
}

impl<R: CommentRepository> CommentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Submits one comment to an article's log.
    ///
    /// Content is trimmed; blank content is rejected. A missing author
    /// falls back to the anonymous label. Returns the stored comment
    /// with its generated id and submission timestamp.
    pub fn post_comment(
        &self,
        article_id: &ArticleId,
        author: Option<String>,
        content: impl Into<String>,
    ) -> Result<Comment, CommentServiceError> {
        let content = content.into().trim().to_string();
        if content.is_empty() {
            return Err(CommentServiceError::EmptyContent);
        }

        let comment = Comment::new(author, content);
        self.repo.append(article_id, &comment)?;
        info!(
            "event=comment_post module=service status=ok article_id={} comment_id={}",
            article_id, comment.id
        );
        Ok(comment)
    }

    /// Lists all comments for one article in submission order.
    pub fn list_comments(
        &self,
        article_id: &ArticleId,
    ) -> Result<Vec<Comment>, CommentServiceError> {
        Ok(self.repo.list_for_article(article_id)?)
    }

    /// Counts comments for one article.
    pub fn count_comments(&self, article_id: &ArticleId) -> Result<u64, CommentServiceError> {
        Ok(self.repo.count_for_article(article_id)?)
    }
}
