use super::{page_filter, prelude::*};

pub fn load_ratings<R>(repo: &R, page_id: Option<&str>) -> Result<Vec<Rating>>
where
    R: RatingRepository,
{
    Ok(repo.load_ratings(page_filter(page_id))?)
}
