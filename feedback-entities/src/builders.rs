pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{comment_builder::*, rating_builder::*};

pub mod comment_builder {

    use super::*;
    use crate::{comment::*, id::*, time::*};

    #[derive(Debug)]
    pub struct CommentBuild {
        comment: Comment,
    }

    impl CommentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.comment.id = id.into();
            self
        }
        pub fn page_id(mut self, page_id: &str) -> Self {
            self.comment.page_id = page_id.into();
            self
        }
        pub fn name(mut self, name: Option<&str>) -> Self {
            self.comment.name = name.map(Into::into);
            self
        }
        pub fn message(mut self, message: &str) -> Self {
            self.comment.message = message.into();
            self
        }
        pub fn created_at(mut self, millis: i64) -> Self {
            self.comment.created_at = Timestamp::try_from_millis(millis).unwrap();
            self
        }
        pub fn reply(mut self, message: &str, millis: i64) -> Self {
            self.comment.reply = Some(Reply {
                message: message.into(),
                replied_at: Timestamp::try_from_millis(millis).unwrap(),
            });
            self
        }
        pub fn finish(self) -> Comment {
            self.comment
        }
    }

    impl Builder for Comment {
        type Build = CommentBuild;
        fn build() -> CommentBuild {
            CommentBuild {
                comment: Comment {
                    id: Id::new(),
                    page_id: "index".into(),
                    name: Some("Anonymous".into()),
                    message: "A comment".into(),
                    created_at: Timestamp::now(),
                    reply: None,
                },
            }
        }
    }
}

pub mod rating_builder {

    use super::*;
    use crate::{id::*, rating::*, time::*};

    #[derive(Debug)]
    pub struct RatingBuild {
        rating: Rating,
    }

    impl RatingBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.rating.id = id.into();
            self
        }
        pub fn page_id(mut self, page_id: &str) -> Self {
            self.rating.page_id = page_id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.rating.name = name.into();
            self
        }
        pub fn value(mut self, value: i64) -> Self {
            self.rating.value = RatingValue::try_from(value).unwrap();
            self
        }
        pub fn created_at(mut self, millis: i64) -> Self {
            self.rating.created_at = Timestamp::try_from_millis(millis).unwrap();
            self
        }
        pub fn finish(self) -> Rating {
            self.rating
        }
    }

    impl Builder for Rating {
        type Build = RatingBuild;
        fn build() -> RatingBuild {
            RatingBuild {
                rating: Rating {
                    id: Id::new(),
                    page_id: "index".into(),
                    name: "Anonymous".into(),
                    value: RatingValue::max(),
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}
