use super::*;

pub fn create_comment(
    connections: &sqlite::Connections,
    new_comment: usecases::NewComment,
) -> Result<Comment> {
    let comment = connections.exclusive()?.transaction(|conn| {
        usecases::create_comment(conn, new_comment).map_err(|err| {
            warn!("Failed to create comment: {err}");
            err
        })
    })?;
    info!(
        "Created comment {} on page '{}'",
        comment.id, comment.page_id
    );
    Ok(comment)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn create_and_list_comment() {
        let fixture = BackendFixture::new();
        let comment = flows::create_comment(
            &fixture.db_connections,
            usecases::NewComment {
                name: "Heidi".into(),
                message: "Great article".into(),
                page_id: "blog/1".into(),
            },
        )
        .unwrap();
        let comments = flows::load_comments(&fixture.db_connections, Some("blog/1")).unwrap();
        assert_eq!(comments, vec![comment]);
    }

    #[test]
    fn reject_invalid_comment() {
        let fixture = BackendFixture::new();
        let err = flows::create_comment(
            &fixture.db_connections,
            usecases::NewComment {
                name: "Heidi".into(),
                message: String::new(),
                page_id: "blog/1".into(),
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::Comment(_)))
        ));
        assert_eq!(fixture.count_comments(), 0);
    }
}
