use super::*;
use crate::adapters::json::from_json;

#[post("/comments", data = "<new_comment>")]
pub fn post_comment(
    db: &State<Connections>,
    new_comment: JsonResult<json::NewComment>,
) -> CreatedResult<json::CommentResponse> {
    let new_comment = from_json::new_comment(new_comment?.into_inner());
    let comment = flows::create_comment(db, new_comment)?;
    Ok((
        Status::Created,
        Json(json::CommentResponse {
            success: true,
            comment: comment.into(),
        }),
    ))
}

#[get("/comments?<filter..>")]
pub fn get_comments(db: &State<Connections>, filter: PageFilter) -> Result<Vec<json::Comment>> {
    let comments = flows::load_comments(db, filter.page_id())?;
    Ok(Json(comments.into_iter().map(Into::into).collect()))
}

#[post("/comments/<id>/reply", data = "<reply>")]
pub fn post_reply(
    db: &State<Connections>,
    _admin: Admin,
    id: &str,
    reply: JsonResult<json::NewReply>,
) -> Result<json::CommentResponse> {
    let message = reply?.into_inner().message.unwrap_or_default();
    let comment = flows::reply_to_comment(db, id, &message)?;
    Ok(Json(json::CommentResponse {
        success: true,
        comment: comment.into(),
    }))
}

#[delete("/comments/<id>")]
pub fn delete_comment(
    db: &State<Connections>,
    _admin: Admin,
    id: &str,
) -> Result<json::Confirmation> {
    flows::delete_comment(db, id)?;
    Ok(Json(json::Confirmation::new("Comment deleted")))
}
