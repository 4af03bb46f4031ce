use super::*;

impl CommentRepository for DbReadWrite<'_> {
    fn create_comment(&self, comment: Comment) -> Result<()> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn load_comment(&self, id: &str) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn load_comments(&self, page_id: Option<&str>) -> Result<Vec<Comment>> {
        load_comments(&mut self.conn.borrow_mut(), page_id)
    }
    fn reply_to_comment(&self, id: &str, reply: &Reply) -> Result<()> {
        reply_to_comment(&mut self.conn.borrow_mut(), id, reply)
    }
    fn delete_comment(&self, id: &str) -> Result<()> {
        delete_comment(&mut self.conn.borrow_mut(), id)
    }
    fn count_comments(&self) -> Result<usize> {
        count_comments(&mut self.conn.borrow_mut())
    }
}

impl CommentRepository for DbConnection<'_> {
    fn create_comment(&self, comment: Comment) -> Result<()> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn load_comment(&self, id: &str) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn load_comments(&self, page_id: Option<&str>) -> Result<Vec<Comment>> {
        load_comments(&mut self.conn.borrow_mut(), page_id)
    }
    fn reply_to_comment(&self, id: &str, reply: &Reply) -> Result<()> {
        reply_to_comment(&mut self.conn.borrow_mut(), id, reply)
    }
    fn delete_comment(&self, id: &str) -> Result<()> {
        delete_comment(&mut self.conn.borrow_mut(), id)
    }
    fn count_comments(&self) -> Result<usize> {
        count_comments(&mut self.conn.borrow_mut())
    }
}

impl CommentRepository for DbReadOnly<'_> {
    fn create_comment(&self, _comment: Comment) -> Result<()> {
        Err(read_only_violation())
    }
    fn load_comment(&self, id: &str) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn load_comments(&self, page_id: Option<&str>) -> Result<Vec<Comment>> {
        load_comments(&mut self.conn.borrow_mut(), page_id)
    }
    fn reply_to_comment(&self, _id: &str, _reply: &Reply) -> Result<()> {
        Err(read_only_violation())
    }
    fn delete_comment(&self, _id: &str) -> Result<()> {
        Err(read_only_violation())
    }
    fn count_comments(&self) -> Result<usize> {
        count_comments(&mut self.conn.borrow_mut())
    }
}

impl TryFrom<models::Comment> for Comment {
    type Error = repo::Error;
    fn try_from(from: models::Comment) -> Result<Self> {
        let models::Comment {
            _rowid,
            id,
            page_id,
            name,
            message,
            created_at,
            reply_message,
            replied_at,
        } = from;
        let reply = match (reply_message, replied_at) {
            (Some(message), Some(replied_at)) => Some(Reply {
                message,
                replied_at: timestamp_from_millis(replied_at)?,
            }),
            (None, None) => None,
            _ => {
                log::warn!("Incomplete reply of comment {id} ignored");
                None
            }
        };
        Ok(Self {
            id: id.into(),
            page_id,
            name,
            message,
            created_at: timestamp_from_millis(created_at)?,
            reply,
        })
    }
}

fn create_comment(conn: &mut SqliteConnection, comment: Comment) -> Result<()> {
    let Comment {
        id,
        page_id,
        name,
        message,
        created_at,
        reply,
    } = comment;
    let new_comment = models::NewComment {
        id: id.as_str(),
        page_id: &page_id,
        name: name.as_deref(),
        message: &message,
        created_at: created_at.as_millis(),
        reply_message: reply.as_ref().map(|r| r.message.as_str()),
        replied_at: reply.as_ref().map(|r| r.replied_at.as_millis()),
    };
    let _count = diesel::insert_into(schema::page_comment::table)
        .values(&new_comment)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn load_comment(conn: &mut SqliteConnection, id: &str) -> Result<Comment> {
    use schema::page_comment::dsl;
    schema::page_comment::table
        .filter(dsl::id.eq(id))
        .first::<models::Comment>(conn)
        .map_err(from_diesel_err)?
        .try_into()
}

fn load_comments(conn: &mut SqliteConnection, page_id: Option<&str>) -> Result<Vec<Comment>> {
    use schema::page_comment::dsl;
    let mut query = schema::page_comment::table
        .order_by((dsl::created_at.desc(), dsl::rowid.desc()))
        .into_boxed();
    if let Some(page_id) = page_id {
        query = query.filter(dsl::page_id.eq(page_id));
    }
    query
        .load::<models::Comment>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(TryInto::try_into)
        .collect()
}

fn reply_to_comment(conn: &mut SqliteConnection, id: &str, reply: &Reply) -> Result<()> {
    use schema::page_comment::dsl;
    let count = diesel::update(schema::page_comment::table.filter(dsl::id.eq(id)))
        .set((
            dsl::reply_message.eq(Some(reply.message.as_str())),
            dsl::replied_at.eq(Some(reply.replied_at.as_millis())),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    if count < 1 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_comment(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::page_comment::dsl;
    let count = diesel::delete(schema::page_comment::table.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    if count < 1 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn count_comments(conn: &mut SqliteConnection) -> Result<usize> {
    Ok(schema::page_comment::table
        .select(diesel::dsl::count_star())
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
