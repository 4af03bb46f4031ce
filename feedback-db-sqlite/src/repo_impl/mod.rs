use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use feedback_core::{entities::*, repositories::{self as repo, *}};

use super::*;

mod comment;
mod rating;


type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn timestamp_from_millis(millis: i64) -> Result<Timestamp> {
    Timestamp::try_from_millis(millis)
        .ok_or_else(|| repo::Error::Other(anyhow!("Invalid timestamp: {millis}")))
}

fn read_only_violation() -> repo::Error {
    repo::Error::Other(anyhow!("Write access through a read-only connection"))
}
