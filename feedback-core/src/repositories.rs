// Low-level database access traits.
// Each repository is responsible for a single entity.
// Queries that accept an optional page id span all pages
// if no page id is given.

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait CommentRepository {
    fn create_comment(&self, _: Comment) -> Result<()>;

    fn load_comment(&self, id: &str) -> Result<Comment>;

    // Most recent first
    fn load_comments(&self, page_id: Option<&str>) -> Result<Vec<Comment>>;

    // Replaces an existing reply
    fn reply_to_comment(&self, id: &str, reply: &Reply) -> Result<()>;

    fn delete_comment(&self, id: &str) -> Result<()>;

    fn count_comments(&self) -> Result<usize>;
}

pub trait RatingRepository {
    fn create_rating(&self, _: Rating) -> Result<()>;

    // Most recent first
    fn load_ratings(&self, page_id: Option<&str>) -> Result<Vec<Rating>>;

    fn count_ratings(&self, page_id: Option<&str>) -> Result<usize>;

    /// Deletes the ratings of all pages and returns how many
    /// have been deleted.
    fn delete_all_ratings(&self) -> Result<usize>;
}
