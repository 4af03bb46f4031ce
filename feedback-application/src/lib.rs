#[macro_use]
extern crate log;

mod create_comment;
mod create_rating;
mod delete_comment;
mod queries;
mod reply_to_comment;
mod reset_ratings;
mod send_contact_message;

pub mod prelude {
    pub use super::{
        create_comment::*, create_rating::*, delete_comment::*, queries::*, reply_to_comment::*,
        reset_ratings::*, send_contact_message::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use feedback_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use feedback_db_sqlite::Connections;
}
