use super::*;

pub fn reply_to_comment(
    connections: &sqlite::Connections,
    id: &str,
    message: &str,
) -> Result<Comment> {
    let comment = connections.exclusive()?.transaction(|conn| {
        usecases::reply_to_comment(conn, id, message).map_err(|err| {
            warn!("Failed to reply to comment {id}: {err}");
            err
        })
    })?;
    info!("Replied to comment {id}");
    Ok(comment)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn last_reply_wins() {
        let fixture = BackendFixture::new();
        let id = fixture.create_comment("page");
        flows::reply_to_comment(&fixture.db_connections, &id, "thanks").unwrap();
        let comment =
            flows::reply_to_comment(&fixture.db_connections, &id, "actually no").unwrap();
        assert_eq!(comment.reply.unwrap().message, "actually no");
    }

    #[test]
    fn reply_to_unknown_comment() {
        let fixture = BackendFixture::new();
        let err = flows::reply_to_comment(&fixture.db_connections, "unknown", "thanks")
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Repo(RepoError::NotFound))
        ));
    }
}
