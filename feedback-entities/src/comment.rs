use crate::{id::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id         : Id,
    pub page_id    : String,
    /// Stored as submitted, replaced by a placeholder only when displayed
    pub name       : Option<String>,
    pub message    : String,
    pub created_at : Timestamp,
    pub reply      : Option<Reply>,
}

/// The answer of an administrator.
///
/// A comment has at most one reply, replying again replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub message: String,
    pub replied_at: Timestamp,
}
