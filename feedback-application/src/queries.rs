use super::*;

pub fn load_comments(
    connections: &sqlite::Connections,
    page_id: Option<&str>,
) -> Result<Vec<Comment>> {
    let db = connections.shared()?;
    Ok(usecases::load_comments(&db, page_id)?)
}

pub fn load_ratings(
    connections: &sqlite::Connections,
    page_id: Option<&str>,
) -> Result<Vec<Rating>> {
    let db = connections.shared()?;
    Ok(usecases::load_ratings(&db, page_id)?)
}

pub fn average_rating(
    connections: &sqlite::Connections,
    page_id: Option<&str>,
) -> Result<AverageRating> {
    let db = connections.shared()?;
    let avg = usecases::average_rating(&db, page_id)?;
    debug!(
        "Average rating of {}: {:?} ({} ratings)",
        page_id.unwrap_or("all pages"),
        avg.average,
        avg.count
    );
    Ok(avg)
}
