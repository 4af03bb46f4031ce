use thiserror::Error;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

/// Blank strings are treated as missing.
#[must_use]
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommentInvalidation {
    #[error("Missing name")]
    Name,
    #[error("Missing message")]
    Message,
    #[error("Missing page id")]
    PageId,
}

#[derive(Debug, Error, PartialEq)]
pub enum RatingInvalidation {
    #[error("Missing rating value")]
    MissingValue,
    #[error("The rating value {0} is not a whole number from 1 to 5")]
    Value(f64),
    #[error("Missing page id")]
    PageId,
}

/// Accepts whole numbers from 1 to 5 only.
pub fn rating_value(value: Option<f64>) -> Result<i64, RatingInvalidation> {
    let value = value.ok_or(RatingInvalidation::MissingValue)?;
    if !value.is_finite() || value.fract() != 0.0 || !(1.0..=5.0).contains(&value) {
        return Err(RatingInvalidation::Value(value));
    }
    Ok(value as i64)
}
