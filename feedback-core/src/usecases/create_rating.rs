use super::prelude::*;
use crate::util::validate::{self, is_blank, RatingInvalidation, Validate};

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewRating {
    /// May be empty
    pub name    : String,
    pub value   : Option<f64>,
    pub page_id : String,
}

impl Validate for NewRating {
    type Error = RatingInvalidation;
    fn validate(&self) -> std::result::Result<(), Self::Error> {
        validate::rating_value(self.value)?;
        if is_blank(&self.page_id) {
            return Err(RatingInvalidation::PageId);
        }
        Ok(())
    }
}

pub fn create_rating<R>(repo: &R, new_rating: NewRating) -> Result<Rating>
where
    R: RatingRepository,
{
    new_rating.validate()?;
    let NewRating {
        name,
        value,
        page_id,
    } = new_rating;
    let value = validate::rating_value(value)?;
    let value =
        RatingValue::try_from(value).map_err(|_| RatingInvalidation::Value(value as f64))?;
    let rating = Rating {
        id: Id::new(),
        page_id: page_id.trim().to_owned(),
        name: name.trim().to_owned(),
        value,
        created_at: Timestamp::now(),
    };
    log::debug!(
        "Creating rating {} with value {} on page '{}'",
        rating.id,
        rating.value,
        rating.page_id
    );
    repo.create_rating(rating.clone())?;
    Ok(rating)
}
