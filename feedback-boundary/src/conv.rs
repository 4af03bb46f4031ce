use super::*;
use feedback_entities as e;

impl From<e::comment::Comment> for Comment {
    fn from(from: e::comment::Comment) -> Self {
        let e::comment::Comment {
            id,
            page_id,
            name,
            message,
            created_at,
            reply,
        } = from;
        Self {
            id: id.into(),
            page_id,
            name,
            message,
            created_at: created_at.as_millis(),
            reply: reply.map(Into::into),
        }
    }
}

impl From<e::comment::Reply> for Reply {
    fn from(from: e::comment::Reply) -> Self {
        let e::comment::Reply {
            message,
            replied_at,
        } = from;
        Self {
            message,
            replied_at: replied_at.as_millis(),
        }
    }
}

impl From<e::rating::Rating> for Rating {
    fn from(from: e::rating::Rating) -> Self {
        let e::rating::Rating {
            id,
            page_id,
            name,
            value,
            created_at,
        } = from;
        Self {
            id: id.into(),
            page_id,
            name,
            rating: value.into(),
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::rating::AverageRating> for AverageRating {
    fn from(from: e::rating::AverageRating) -> Self {
        let e::rating::AverageRating { average, count } = from;
        Self {
            average: average.into(),
            count: count as u64,
        }
    }
}

impl From<ContactRequest> for e::contact::ContactMessage {
    fn from(from: ContactRequest) -> Self {
        let ContactRequest {
            name,
            email,
            message,
        } = from;
        Self {
            name,
            email,
            message,
        }
    }
}
