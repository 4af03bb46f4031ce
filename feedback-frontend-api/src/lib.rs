use gloo_net::http::Response;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use thiserror::Error;

mod admin;
mod public;

pub use self::{admin::*, public::*};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("{0}")]
    Api(#[from] feedback_boundary::Error),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response.json().await?)
    } else {
        Err(response.json::<feedback_boundary::Error>().await?.into())
    }
}

/// Query string that restricts a request to a single page.
fn page_query(page_id: Option<&str>) -> String {
    match page_id.filter(|id| !id.is_empty()) {
        Some(id) => format!("?pageId={}", utf8_percent_encode(id, NON_ALPHANUMERIC)),
        None => String::new(),
    }
}

fn path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string()
}
