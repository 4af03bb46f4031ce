use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use feedback_frontend_api::FeedbackApi;

use crate::{
    components::{AdminPanel, CommentsWidget, ContactForm, RatingWidget},
    Settings,
};

/// Associates an element id of the host page with a widget.
struct Binding {
    element_id: &'static str,
    mount: fn(HtmlElement, Settings),
}

const BINDINGS: &[Binding] = &[
    Binding {
        element_id: "feedback-rating",
        mount: mount_rating,
    },
    Binding {
        element_id: "feedback-comments",
        mount: mount_comments,
    },
    Binding {
        element_id: "feedback-contact",
        mount: mount_contact,
    },
    Binding {
        element_id: "feedback-admin",
        mount: mount_admin,
    },
];

pub fn mount_all(settings: &Settings) {
    for binding in BINDINGS {
        let Some(element) = document().get_element_by_id(binding.element_id) else {
            log::debug!("No element with id '{}' found", binding.element_id);
            continue;
        };
        match element.dyn_into::<HtmlElement>() {
            Ok(element) => (binding.mount)(element, settings.clone()),
            Err(_) => log::warn!("Element '{}' is not an HTML element", binding.element_id),
        }
    }
}

fn mount_rating(parent: HtmlElement, settings: Settings) {
    let Settings { api_url, page_id } = settings;
    let api = FeedbackApi::new(api_url);
    mount_to(parent, move || view! { <RatingWidget api=api page_id=page_id /> });
}

fn mount_comments(parent: HtmlElement, settings: Settings) {
    let Settings { api_url, page_id } = settings;
    let api = FeedbackApi::new(api_url);
    mount_to(parent, move || view! { <CommentsWidget api=api page_id=page_id /> });
}

fn mount_contact(parent: HtmlElement, settings: Settings) {
    let api = FeedbackApi::new(settings.api_url);
    mount_to(parent, move || view! { <ContactForm api=api /> });
}

fn mount_admin(parent: HtmlElement, settings: Settings) {
    let api_url = settings.api_url;
    mount_to(parent, move || view! { <AdminPanel api_url=api_url /> });
}
