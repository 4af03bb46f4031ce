use super::prelude::*;

pub fn delete_comment<R>(repo: &R, id: &str) -> Result<()>
where
    R: CommentRepository,
{
    log::debug!("Deleting comment {id}");
    Ok(repo.delete_comment(id)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use crate::repositories::Error as RepoError;
    use feedback_entities::builders::*;

    #[test]
    fn delete_existing_comment() {
        let db = MockDb::default();
        db.create_comment(Comment::build().id("c1").finish()).unwrap();
        db.create_comment(Comment::build().id("c2").finish()).unwrap();
        delete_comment(&db, "c1").unwrap();
        assert_eq!(db.count_comments().unwrap(), 1);
        assert!(matches!(
            db.load_comment("c1"),
            Err(RepoError::NotFound)
        ));
    }

    #[test]
    fn delete_unknown_comment() {
        let db = MockDb::default();
        db.create_comment(Comment::build().id("c1").finish()).unwrap();
        assert!(matches!(
            delete_comment(&db, "unknown"),
            Err(Error::Repo(RepoError::NotFound))
        ));
        assert_eq!(db.count_comments().unwrap(), 1);
    }
}
