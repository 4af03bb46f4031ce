table! {
    page_comment (rowid) {
        rowid -> BigInt,
        id -> Text,
        page_id -> Text,
        name -> Nullable<Text>,
        message -> Text,
        created_at -> BigInt,
        reply_message -> Nullable<Text>,
        replied_at -> Nullable<BigInt>,
    }
}

table! {
    page_rating (rowid) {
        rowid -> BigInt,
        id -> Text,
        page_id -> Text,
        name -> Text,
        value -> SmallInt,
        created_at -> BigInt,
    }
}

allow_tables_to_appear_in_same_query!(page_comment, page_rating);
