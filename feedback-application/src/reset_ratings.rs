use super::*;

pub fn reset_ratings(connections: &sqlite::Connections) -> Result<usize> {
    let count = connections
        .exclusive()?
        .transaction(|conn| usecases::reset_ratings(conn))?;
    warn!("All ratings have been reset ({count} deleted)");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn reset_all_pages() {
        let fixture = BackendFixture::new();
        fixture.create_rating("a", 5.0);
        fixture.create_rating("b", 3.0);
        assert_eq!(flows::reset_ratings(&fixture.db_connections).unwrap(), 2);
        for page_id in ["a", "b"] {
            let avg = flows::average_rating(&fixture.db_connections, Some(page_id)).unwrap();
            assert_eq!(avg, AverageRating::default());
        }
    }
}
