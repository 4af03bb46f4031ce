use super::{page_filter, prelude::*};

pub fn load_comments<R>(repo: &R, page_id: Option<&str>) -> Result<Vec<Comment>>
where
    R: CommentRepository,
{
    Ok(repo.load_comments(page_filter(page_id))?)
}
