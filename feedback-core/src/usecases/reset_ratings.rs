use super::prelude::*;

/// Deletes all ratings of all pages.
pub fn reset_ratings<R>(repo: &R) -> Result<usize>
where
    R: RatingRepository,
{
    let count = repo.delete_all_ratings()?;
    log::info!("Deleted {count} ratings");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use crate::usecases::average_rating;
    use feedback_entities::builders::*;

    #[test]
    fn reset_empties_every_page() {
        let db = MockDb::default();
        for page_id in ["a", "b", "c"] {
            db.create_rating(Rating::build().page_id(page_id).value(3).finish())
                .unwrap();
        }
        assert_eq!(reset_ratings(&db).unwrap(), 3);
        for page_id in ["a", "b", "c"] {
            let avg = average_rating(&db, Some(page_id)).unwrap();
            assert_eq!(avg, AverageRating::default());
        }
        assert_eq!(db.count_ratings(None).unwrap(), 0);
        assert_eq!(reset_ratings(&db).unwrap(), 0);
    }
}
