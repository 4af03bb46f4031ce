mod average_rating;
mod create_comment;
mod create_rating;
mod delete_comment;
mod error;
mod load_comments;
mod load_ratings;
mod reply_to_comment;
mod reset_ratings;
mod send_contact_message;

#[cfg(test)]
pub mod tests;

pub use self::{
    average_rating::*, create_comment::*, create_rating::*, delete_comment::*, error::Error,
    load_comments::*, load_ratings::*, reply_to_comment::*, reset_ratings::*,
    send_contact_message::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}

/// A missing or empty page id selects all pages.
fn page_filter(page_id: Option<&str>) -> Option<&str> {
    page_id.filter(|id| !id.is_empty())
}
