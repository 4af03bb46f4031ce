pub use feedback_boundary::*;

use feedback_core::usecases;

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    // Missing fields become empty strings that
    // are rejected by the validation of the use case.
    pub fn new_comment(from: NewComment) -> usecases::NewComment {
        let NewComment {
            name,
            message,
            page_id,
        } = from;
        usecases::NewComment {
            name: name.unwrap_or_default(),
            message: message.unwrap_or_default(),
            page_id: page_id.unwrap_or_default(),
        }
    }

    pub fn new_rating(from: NewRating) -> usecases::NewRating {
        let NewRating {
            name,
            rating,
            page_id,
        } = from;
        usecases::NewRating {
            name: name.unwrap_or_default(),
            value: rating,
            page_id: page_id.unwrap_or_default(),
        }
    }
}
