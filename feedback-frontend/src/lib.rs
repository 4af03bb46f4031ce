//! Embeddable feedback widgets.
//!
//! The widgets are mounted into the elements of the host page
//! that carry one of the well-known ids (see [`bindings`]).

use leptos::*;

mod bindings;
mod components;
mod render;

const DEFAULT_API_URL: &str = "/api";
const DEFAULT_PAGE_ID: &str = "unknown_page";

const PAGE_ID_META: &str = "page-id";
const API_URL_META: &str = "feedback-api-url";

/// Settings that are read from the `<meta>` tags of the host page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    pub page_id: String,
}

impl Settings {
    #[must_use]
    pub fn from_meta_values(api_url: Option<String>, page_id: Option<String>) -> Self {
        let non_blank = |value: String| {
            let value = value.trim().to_owned();
            (!value.is_empty()).then_some(value)
        };
        Self {
            api_url: api_url
                .and_then(non_blank)
                .unwrap_or_else(|| DEFAULT_API_URL.to_owned()),
            page_id: page_id
                .and_then(non_blank)
                .unwrap_or_else(|| DEFAULT_PAGE_ID.to_owned()),
        }
    }

    #[must_use]
    pub fn from_document() -> Self {
        Self::from_meta_values(meta_content(API_URL_META), meta_content(PAGE_ID_META))
    }
}

fn meta_content(name: &str) -> Option<String> {
    document()
        .query_selector(&format!(r#"meta[name="{name}"]"#))
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
}

pub fn run() {
    let settings = Settings::from_document();
    log::info!(
        "Start feedback widgets for page '{}' (API: {})",
        settings.page_id,
        settings.api_url
    );
    bindings::mount_all(&settings);
}
