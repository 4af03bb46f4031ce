use super::prelude::*;
use crate::util::validate::is_blank;

/// Replaces any previous reply (last write wins).
///
/// An unknown comment is reported before the message is validated.
pub fn reply_to_comment<R>(repo: &R, id: &str, message: &str) -> Result<Comment>
where
    R: CommentRepository,
{
    repo.load_comment(id)?;
    if is_blank(message) {
        return Err(Error::EmptyReply);
    }
    let reply = Reply {
        message: message.trim().to_owned(),
        replied_at: Timestamp::now(),
    };
    log::debug!("Replying to comment {id}");
    repo.reply_to_comment(id, &reply)?;
    Ok(repo.load_comment(id)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use crate::repositories::Error as RepoError;
    use feedback_entities::builders::*;

    #[test]
    fn last_reply_wins() {
        let db = MockDb::default();
        db.create_comment(Comment::build().id("c1").finish()).unwrap();

        let comment = reply_to_comment(&db, "c1", "thanks").unwrap();
        assert_eq!(comment.reply.unwrap().message, "thanks");

        let comment = reply_to_comment(&db, "c1", "actually no").unwrap();
        assert_eq!(comment.reply.unwrap().message, "actually no");
        assert_eq!(
            db.load_comment("c1").unwrap().reply.unwrap().message,
            "actually no"
        );
    }

    #[test]
    fn reply_to_unknown_comment() {
        let db = MockDb::default();
        assert!(matches!(
            reply_to_comment(&db, "unknown", "thanks"),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }

    #[test]
    fn empty_reply_to_unknown_comment() {
        let db = MockDb::default();
        assert!(matches!(
            reply_to_comment(&db, "unknown", ""),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }

    #[test]
    fn reject_empty_reply() {
        let db = MockDb::default();
        db.create_comment(Comment::build().id("c1").finish()).unwrap();
        assert!(matches!(
            reply_to_comment(&db, "c1", "  "),
            Err(Error::EmptyReply)
        ));
        assert!(db.load_comment("c1").unwrap().reply.is_none());
    }
}
