use super::{page_filter, prelude::*};
use crate::rating::Rated;

pub fn average_rating<R>(repo: &R, page_id: Option<&str>) -> Result<AverageRating>
where
    R: RatingRepository,
{
    let ratings = repo.load_ratings(page_filter(page_id))?;
    Ok(ratings.average_rating())
}
