use super::*;
use crate::adapters::json::from_json;

#[post("/ratings", data = "<new_rating>")]
pub fn post_rating(
    db: &State<Connections>,
    new_rating: JsonResult<json::NewRating>,
) -> CreatedResult<json::RatingResponse> {
    let new_rating = from_json::new_rating(new_rating?.into_inner());
    let rating = flows::create_rating(db, new_rating)?;
    Ok((
        Status::Created,
        Json(json::RatingResponse {
            success: true,
            rating: rating.into(),
        }),
    ))
}

#[get("/ratings?<filter..>")]
pub fn get_ratings(db: &State<Connections>, filter: PageFilter) -> Result<Vec<json::Rating>> {
    let ratings = flows::load_ratings(db, filter.page_id())?;
    Ok(Json(ratings.into_iter().map(Into::into).collect()))
}

#[get("/ratings/average?<filter..>")]
pub fn get_average_rating(
    db: &State<Connections>,
    filter: PageFilter,
) -> Result<json::AverageRating> {
    let avg = flows::average_rating(db, filter.page_id())?;
    Ok(Json(avg.into()))
}

#[delete("/ratings/reset")]
pub fn delete_all_ratings(db: &State<Connections>, _admin: Admin) -> Result<json::Confirmation> {
    flows::reset_ratings(db)?;
    Ok(Json(json::Confirmation::new(
        "All ratings have been reset successfully.",
    )))
}
