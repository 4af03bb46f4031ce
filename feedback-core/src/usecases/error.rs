use thiserror::Error;

use crate::{
    repositories,
    util::validate::{CommentInvalidation, RatingInvalidation},
};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Comment(#[from] CommentInvalidation),
    #[error(transparent)]
    Rating(#[from] RatingInvalidation),
    #[error("Empty reply")]
    EmptyReply,
    #[error("No recipient for contact messages configured")]
    MissingContactRecipient,
    #[error("Unable to deliver the e-mail: {0}")]
    Delivery(anyhow::Error),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
