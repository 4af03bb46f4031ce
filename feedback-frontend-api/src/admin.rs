use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;

use feedback_boundary::{Comment, CommentResponse, Confirmation, NewReply};

use crate::{into_json, path_segment, FeedbackApi, Result};

/// Administrative feedback API
///
/// Requests are sent with the admin token as bearer token
/// if one has been provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminApi {
    public: FeedbackApi,
    token: Option<String>,
}

impl AdminApi {
    #[must_use]
    pub fn new(url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            public: FeedbackApi::new(url),
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    #[must_use]
    pub const fn public(&self) -> &FeedbackApi {
        &self.public
    }

    fn auth_header_value(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {token}"))
    }

    fn add_auth_headers(&self, req: RequestBuilder) -> RequestBuilder {
        match self.auth_header_value() {
            Some(value) => req.header("Authorization", &value),
            None => req,
        }
    }

    async fn send<T>(&self, req: RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.add_auth_headers(req).send().await?;
        into_json(response).await
    }

    pub async fn reply_to_comment(&self, id: &str, message: &str) -> Result<Comment> {
        let url = format!("{}/comments/{}/reply", self.public.url(), path_segment(id));
        let reply = NewReply {
            message: Some(message.to_owned()),
        };
        let response = self
            .add_auth_headers(Request::post(&url))
            .json(&reply)?
            .send()
            .await?;
        let CommentResponse { comment, .. } = into_json(response).await?;
        Ok(comment)
    }

    pub async fn delete_comment(&self, id: &str) -> Result<Confirmation> {
        let url = format!("{}/comments/{}", self.public.url(), path_segment(id));
        self.send(Request::delete(&url)).await
    }

    pub async fn reset_ratings(&self) -> Result<Confirmation> {
        let url = format!("{}/ratings/reset", self.public.url());
        self.send(Request::delete(&url)).await
    }
}
