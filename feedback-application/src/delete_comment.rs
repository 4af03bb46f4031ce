use super::*;

pub fn delete_comment(connections: &sqlite::Connections, id: &str) -> Result<()> {
    connections.exclusive()?.transaction(|conn| {
        usecases::delete_comment(conn, id).map_err(|err| {
            warn!("Failed to delete comment {id}: {err}");
            err
        })
    })?;
    info!("Deleted comment {id}");
    Ok(())
}
