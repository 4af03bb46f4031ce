use std::{fmt::Display, result};

use feedback_boundary::{self as json, Error as JsonErrorResponse};
use rocket::{
    self, catch, catchers, delete, get,
    http::Status,
    post,
    response::{self, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Catcher, FromForm, Request, Route, State,
};

use super::{guards::*, Cfg};
use feedback_application::prelude as flows;
use feedback_db_sqlite::Connections;

mod comments;
mod contact;
mod error;
mod ratings;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type CreatedResult<T> = result::Result<(Status, Json<T>), ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

/// Restricts a query to a single page.
///
/// A missing or empty `pageId` selects all pages.
#[derive(Debug, Default, FromForm)]
pub struct PageFilter {
    #[field(name = "pageId")]
    page_id: Option<String>,
}

impl PageFilter {
    fn page_id(&self) -> Option<&str> {
        self.page_id.as_deref()
    }
}

pub fn routes() -> Vec<Route> {
    routes![
        // ---   comments   --- //
        comments::post_comment,
        comments::get_comments,
        comments::post_reply,
        comments::delete_comment,
        // ---   ratings   --- //
        ratings::post_rating,
        ratings::get_ratings,
        ratings::get_average_rating,
        ratings::delete_all_ratings,
        // ---   contact   --- //
        contact::post_contact,
    ]
}

pub fn catchers() -> Vec<Catcher> {
    catchers![not_found, default_catcher]
}

#[catch(404)]
fn not_found(req: &Request) -> Json<JsonErrorResponse> {
    Json(JsonErrorResponse::new(format!(
        "No such resource: {} {}",
        req.method(),
        req.uri().path()
    )))
}

#[catch(default)]
fn default_catcher(status: Status, _: &Request) -> Json<JsonErrorResponse> {
    Json(JsonErrorResponse::new(
        status.reason().unwrap_or("Unexpected error"),
    ))
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let boundary_error = JsonErrorResponse::new(err.to_string());
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
