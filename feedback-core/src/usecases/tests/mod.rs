use std::cell::RefCell;

use super::prelude::*;
use crate::repositories::Error as RepoError;

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub comments: RefCell<Vec<Comment>>,
    pub ratings: RefCell<Vec<Rating>>,
}

fn newest_first<T>(mut items: Vec<T>, created_at: impl Fn(&T) -> Timestamp) -> Vec<T> {
    // Later insertions win ties
    items.reverse();
    items.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    items
}

impl CommentRepository for MockDb {
    fn create_comment(&self, comment: Comment) -> RepoResult<()> {
        let mut comments = self.comments.borrow_mut();
        if comments.iter().any(|c| c.id == comment.id) {
            return Err(RepoError::AlreadyExists);
        }
        comments.push(comment);
        Ok(())
    }

    fn load_comment(&self, id: &str) -> RepoResult<Comment> {
        self.comments
            .borrow()
            .iter()
            .find(|c| c.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn load_comments(&self, page_id: Option<&str>) -> RepoResult<Vec<Comment>> {
        let comments = self
            .comments
            .borrow()
            .iter()
            .filter(|c| page_id.map_or(true, |id| c.page_id == id))
            .cloned()
            .collect();
        Ok(newest_first(comments, |c| c.created_at))
    }

    fn reply_to_comment(&self, id: &str, reply: &Reply) -> RepoResult<()> {
        let mut comments = self.comments.borrow_mut();
        let comment = comments
            .iter_mut()
            .find(|c| c.id.as_str() == id)
            .ok_or(RepoError::NotFound)?;
        comment.reply = Some(reply.clone());
        Ok(())
    }

    fn delete_comment(&self, id: &str) -> RepoResult<()> {
        let mut comments = self.comments.borrow_mut();
        let len = comments.len();
        comments.retain(|c| c.id.as_str() != id);
        if comments.len() == len {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    fn count_comments(&self) -> RepoResult<usize> {
        Ok(self.comments.borrow().len())
    }
}

impl RatingRepository for MockDb {
    fn create_rating(&self, rating: Rating) -> RepoResult<()> {
        let mut ratings = self.ratings.borrow_mut();
        if ratings.iter().any(|r| r.id == rating.id) {
            return Err(RepoError::AlreadyExists);
        }
        ratings.push(rating);
        Ok(())
    }

    fn load_ratings(&self, page_id: Option<&str>) -> RepoResult<Vec<Rating>> {
        let ratings = self
            .ratings
            .borrow()
            .iter()
            .filter(|r| page_id.map_or(true, |id| r.page_id == id))
            .cloned()
            .collect();
        Ok(newest_first(ratings, |r| r.created_at))
    }

    fn count_ratings(&self, page_id: Option<&str>) -> RepoResult<usize> {
        Ok(self.load_ratings(page_id)?.len())
    }

    fn delete_all_ratings(&self) -> RepoResult<usize> {
        Ok(self.ratings.borrow_mut().drain(..).count())
    }
}
