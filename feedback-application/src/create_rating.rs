use super::*;

pub fn create_rating(
    connections: &sqlite::Connections,
    new_rating: usecases::NewRating,
) -> Result<Rating> {
    let rating = connections.exclusive()?.transaction(|conn| {
        usecases::create_rating(conn, new_rating).map_err(|err| {
            warn!("Failed to create rating: {err}");
            err
        })
    })?;
    info!(
        "Created rating {} on page '{}'",
        rating.id, rating.page_id
    );
    Ok(rating)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn rate_and_average() {
        let fixture = BackendFixture::new();
        for value in [5.0, 4.0, 4.0] {
            fixture.create_rating("home", value);
        }
        fixture.create_rating("other", 1.0);
        let avg = flows::average_rating(&fixture.db_connections, Some("home")).unwrap();
        assert_eq!(avg.count, 3);
        assert_eq!(f64::from(avg.average), 4.3);
    }

    #[test]
    fn reject_out_of_range_ratings() {
        let fixture = BackendFixture::new();
        for value in [0.0, 6.0] {
            let err = flows::create_rating(
                &fixture.db_connections,
                usecases::NewRating {
                    name: "Ivan".into(),
                    value: Some(value),
                    page_id: "home".into(),
                },
            )
            .unwrap_err();
            assert!(matches!(
                err,
                AppError::Business(BError::Parameter(usecases::Error::Rating(_)))
            ));
        }
        let ratings = flows::load_ratings(&fixture.db_connections, None).unwrap();
        assert!(ratings.is_empty());
    }
}
