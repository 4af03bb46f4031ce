use super::prelude::*;
use crate::util::validate::{is_blank, CommentInvalidation, Validate};

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewComment {
    pub name    : String,
    pub message : String,
    pub page_id : String,
}

impl Validate for NewComment {
    type Error = CommentInvalidation;
    fn validate(&self) -> std::result::Result<(), Self::Error> {
        let Self {
            name,
            message,
            page_id,
        } = self;
        if is_blank(name) {
            return Err(CommentInvalidation::Name);
        }
        if is_blank(message) {
            return Err(CommentInvalidation::Message);
        }
        if is_blank(page_id) {
            return Err(CommentInvalidation::PageId);
        }
        Ok(())
    }
}

pub fn create_comment<R>(repo: &R, new_comment: NewComment) -> Result<Comment>
where
    R: CommentRepository,
{
    new_comment.validate()?;
    let NewComment {
        name,
        message,
        page_id,
    } = new_comment;
    let comment = Comment {
        id: Id::new(),
        page_id: page_id.trim().to_owned(),
        name: Some(name.trim().to_owned()),
        message: message.trim().to_owned(),
        created_at: Timestamp::now(),
        reply: None,
    };
    log::debug!(
        "Creating comment {} on page '{}'",
        comment.id,
        comment.page_id
    );
    repo.create_comment(comment.clone())?;
    Ok(comment)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn new_comment(name: &str, message: &str, page_id: &str) -> NewComment {
        NewComment {
            name: name.into(),
            message: message.into(),
            page_id: page_id.into(),
        }
    }

    #[test]
    fn create_valid_comment() {
        let db = MockDb::default();
        let comment = create_comment(&db, new_comment(" Alice ", "Nice page", "about")).unwrap();
        assert_eq!(comment.name.as_deref(), Some("Alice"));
        assert_eq!(comment.message, "Nice page");
        assert_eq!(comment.page_id, "about");
        assert!(comment.reply.is_none());
        assert!(comment.id.is_valid());
        assert_eq!(db.comments.borrow().len(), 1);
        assert_eq!(db.comments.borrow()[0], comment);
    }

    #[test]
    fn reject_comments_with_missing_fields() {
        let db = MockDb::default();
        let invalid = [
            (new_comment("", "msg", "page"), CommentInvalidation::Name),
            (new_comment("Bob", " ", "page"), CommentInvalidation::Message),
            (new_comment("Bob", "msg", ""), CommentInvalidation::PageId),
        ];
        for (c, expected) in invalid {
            match create_comment(&db, c) {
                Err(Error::Comment(err)) => assert_eq!(err, expected),
                res => panic!("Unexpected result: {res:?}"),
            }
        }
        assert!(db.comments.borrow().is_empty());
    }
}
