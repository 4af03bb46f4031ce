use gloo_net::http::Request;

use feedback_boundary::{
    AverageRating, Comment, CommentResponse, Confirmation, ContactRequest, NewComment, NewRating,
    Rating, RatingResponse,
};

use crate::{into_json, page_query, Result};

/// Public feedback API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackApi {
    url: String,
}

impl FeedbackApi {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into().trim_end_matches('/').to_owned();
        Self { url }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn comments(&self, page_id: Option<&str>) -> Result<Vec<Comment>> {
        let url = format!("{}/comments{}", self.url, page_query(page_id));
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    pub async fn create_comment(&self, comment: &NewComment) -> Result<Comment> {
        let url = format!("{}/comments", self.url);
        let response = Request::post(&url).json(comment)?.send().await?;
        let CommentResponse { comment, .. } = into_json(response).await?;
        Ok(comment)
    }

    pub async fn ratings(&self, page_id: Option<&str>) -> Result<Vec<Rating>> {
        let url = format!("{}/ratings{}", self.url, page_query(page_id));
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    pub async fn average_rating(&self, page_id: Option<&str>) -> Result<AverageRating> {
        let url = format!("{}/ratings/average{}", self.url, page_query(page_id));
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    pub async fn create_rating(&self, rating: &NewRating) -> Result<Rating> {
        let url = format!("{}/ratings", self.url);
        let response = Request::post(&url).json(rating)?.send().await?;
        let RatingResponse { rating, .. } = into_json(response).await?;
        Ok(rating)
    }

    pub async fn send_contact_message(&self, message: &ContactRequest) -> Result<Confirmation> {
        let url = format!("{}/contact", self.url);
        let response = Request::post(&url).json(message)?.send().await?;
        into_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_trailing_slashes() {
        assert_eq!(FeedbackApi::new("/api/").url(), "/api");
        assert_eq!(
            FeedbackApi::new("https://example.com/feedback").url(),
            "https://example.com/feedback"
        );
    }
}
