mod admin;
mod comments;
mod contact;
mod rating;

pub use self::{admin::*, comments::*, contact::*, rating::*};

use feedback_frontend_api as api;

/// Text that is shown to the visitor if a request fails.
fn error_message(err: &api::Error) -> String {
    match err {
        api::Error::Api(err) => err.message.clone(),
        api::Error::Fetch(_) => "An error occurred. Please try again later.".to_owned(),
    }
}
