//! Typed render functions for the records of the feedback API.
//!
//! All text is inserted as text nodes and therefore escaped.

use leptos::*;
use time::{macros::format_description, OffsetDateTime};

use feedback_boundary::{AverageRating, Comment, Rating, Reply};

const ANONYMOUS: &str = "Anonymous";

#[must_use]
pub fn display_name(name: Option<&str>) -> &str {
    name.map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(ANONYMOUS)
}

/// Filled and empty stars, e.g. `★★★☆☆`.
#[must_use]
pub fn stars(value: u8) -> String {
    let filled = usize::from(value.min(5));
    "★".repeat(filled) + &"☆".repeat(5 - filled)
}

/// Formats milliseconds since the Unix epoch (UTC).
#[must_use]
pub fn format_timestamp(millis: i64) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute] UTC");
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
        .ok()
        .and_then(|dt| dt.format(&format).ok())
        .unwrap_or_else(|| millis.to_string())
}

#[must_use]
pub fn average_text(avg: &AverageRating) -> String {
    if avg.count == 0 {
        return "N/A".to_owned();
    }
    format!("{:.1}", avg.average)
}

pub fn comment_card(comment: Comment) -> impl IntoView {
    let Comment {
        name,
        message,
        created_at,
        reply,
        ..
    } = comment;
    let name = display_name(name.as_deref()).to_owned();
    view! {
      <div class="comment-card">
        <div class="comment-content">
          <p><strong>{ name }</strong></p>
          <p>{ message }</p>
          <small>{ format_timestamp(created_at) }</small>
        </div>
        { reply.map(reply_block) }
      </div>
    }
}

fn reply_block(reply: Reply) -> impl IntoView {
    let Reply {
        message,
        replied_at,
    } = reply;
    view! {
      <div class="reply">
        <strong>"Reply:"</strong>
        <p>{ message }</p>
        <small>{ format_timestamp(replied_at) }</small>
      </div>
    }
}

pub fn rating_row(rating: Rating) -> impl IntoView {
    let Rating {
        page_id,
        name,
        rating,
        created_at,
        ..
    } = rating;
    let name = display_name(Some(&name)).to_owned();
    view! {
      <li class="rating-row">
        <strong>{ name }</strong>
        ": "
        <span class="stars" title=format!("{rating} stars")>{ stars(rating) }</span>
        " "
        <small>"(Page: " { page_id } ")"</small>
        " "
        <small>{ format_timestamp(created_at) }</small>
      </li>
    }
}

pub fn average_badge(avg: AverageRating) -> impl IntoView {
    let count = avg.count;
    view! {
      <p class="average-rating">
        "Average rating: "
        <strong>{ average_text(&avg) }</strong>
        " (" { count } { if count == 1 { " rating" } else { " ratings" } } ")"
      </p>
    }
}
