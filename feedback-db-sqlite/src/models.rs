#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = page_comment)]
pub struct NewComment<'a> {
    pub id: &'a str,
    pub page_id: &'a str,
    pub name: Option<&'a str>,
    pub message: &'a str,
    pub created_at: i64,
    pub reply_message: Option<&'a str>,
    pub replied_at: Option<i64>,
}

#[derive(Queryable)]
pub struct Comment {
    pub _rowid: i64,
    pub id: String,
    pub page_id: String,
    pub name: Option<String>,
    pub message: String,
    pub created_at: i64,
    pub reply_message: Option<String>,
    pub replied_at: Option<i64>,
}

#[derive(Insertable)]
#[diesel(table_name = page_rating)]
pub struct NewRating<'a> {
    pub id: &'a str,
    pub page_id: &'a str,
    pub name: &'a str,
    pub value: i16,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct Rating {
    pub _rowid: i64,
    pub id: String,
    pub page_id: String,
    pub name: String,
    pub value: i16,
    pub created_at: i64,
}
