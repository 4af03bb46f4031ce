use super::json_error_response;
use anyhow::anyhow;
use feedback_application::error::{AppError, BError};
pub use feedback_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
    tokio::task::JoinError,
};
use thiserror::Error;

const INVALID_COMMENT: &str = "Name, message, and pageId are required.";
const INVALID_RATING: &str = "Name, rating (1-5), and pageId are required.";
const EMPTY_REPLY: &str = "Reply message is required.";
const COMMENT_NOT_FOUND: &str = "Comment not found";
const DELIVERY_FAILED: &str = "Failed to send email";
const INTERNAL_ERROR: &str = "Internal server error";

#[derive(Debug, Error)]
#[allow(clippy::large_enum_variant)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::BadRequest),
            JsonError::Parse(_str, err) => Self::OtherWithStatus(
                anyhow!("Malformed JSON request body: {err}"),
                Status::BadRequest,
            ),
        }
    }
}

impl From<JoinError> for Error {
    fn from(err: JoinError) -> Self {
        Self::Other(anyhow!(err))
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<BError> for Error {
    fn from(err: BError) -> Self {
        AppError::from(err).into()
    }
}

/// Public message and status of a business error.
///
/// Details of internal and delivery failures are only logged.
fn business_error_response(err: &BError) -> (Status, &'static str) {
    match err {
        BError::Parameter(err) => match err {
            ParameterError::Comment(_) => (Status::BadRequest, INVALID_COMMENT),
            ParameterError::Rating(_) => (Status::BadRequest, INVALID_RATING),
            ParameterError::EmptyReply => (Status::BadRequest, EMPTY_REPLY),
            ParameterError::MissingContactRecipient | ParameterError::Delivery(_) => {
                error!("{err}");
                (Status::InternalServerError, DELIVERY_FAILED)
            }
            ParameterError::Repo(err) => {
                error!("Repository error: {err}");
                (Status::InternalServerError, INTERNAL_ERROR)
            }
        },
        // Comments are the only records that are addressed by their id
        BError::Repo(RepoError::NotFound) => (Status::NotFound, COMMENT_NOT_FOUND),
        BError::Repo(err) => {
            error!("Repository error: {err}");
            (Status::InternalServerError, INTERNAL_ERROR)
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(AppError::Business(err)) => {
                let (status, message) = business_error_response(&err);
                debug!("{} {} failed: {err}", req.method(), req.uri());
                json_error_response(req, &message, status)
            }
            Error::App(AppError::Other(err)) | Error::Other(err) => {
                error!("Error: {err:#}");
                json_error_response(req, &INTERNAL_ERROR, Status::InternalServerError)
            }
            Error::OtherWithStatus(err, status) => {
                debug!("{} {} failed: {err}", req.method(), req.uri());
                json_error_response(req, &err, status)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedback_core::util::validate::{CommentInvalidation, RatingInvalidation};

    #[test]
    fn map_business_errors() {
        let status = |err: ParameterError| business_error_response(&err.into()).0;
        assert_eq!(
            status(CommentInvalidation::Name.into()),
            Status::BadRequest
        );
        assert_eq!(
            status(RatingInvalidation::Value(6.0).into()),
            Status::BadRequest
        );
        assert_eq!(status(ParameterError::EmptyReply), Status::BadRequest);
        assert_eq!(
            status(ParameterError::Delivery(anyhow!("connection refused"))),
            Status::InternalServerError
        );
        assert_eq!(
            status(ParameterError::MissingContactRecipient),
            Status::InternalServerError
        );
        assert_eq!(
            status(RepoError::NotFound.into()),
            Status::NotFound
        );
    }

    #[test]
    fn hide_internal_details() {
        let (status, message) =
            business_error_response(&BError::Repo(RepoError::Other(anyhow!("disk I/O error"))));
        assert_eq!(status, Status::InternalServerError);
        assert_eq!(message, INTERNAL_ERROR);
    }
}
