use super::*;

impl RatingRepository for DbReadWrite<'_> {
    fn create_rating(&self, rating: Rating) -> Result<()> {
        create_rating(&mut self.conn.borrow_mut(), rating)
    }
    fn load_ratings(&self, page_id: Option<&str>) -> Result<Vec<Rating>> {
        load_ratings(&mut self.conn.borrow_mut(), page_id)
    }
    fn count_ratings(&self, page_id: Option<&str>) -> Result<usize> {
        count_ratings(&mut self.conn.borrow_mut(), page_id)
    }
    fn delete_all_ratings(&self) -> Result<usize> {
        delete_all_ratings(&mut self.conn.borrow_mut())
    }
}

impl RatingRepository for DbConnection<'_> {
    fn create_rating(&self, rating: Rating) -> Result<()> {
        create_rating(&mut self.conn.borrow_mut(), rating)
    }
    fn load_ratings(&self, page_id: Option<&str>) -> Result<Vec<Rating>> {
        load_ratings(&mut self.conn.borrow_mut(), page_id)
    }
    fn count_ratings(&self, page_id: Option<&str>) -> Result<usize> {
        count_ratings(&mut self.conn.borrow_mut(), page_id)
    }
    fn delete_all_ratings(&self) -> Result<usize> {
        delete_all_ratings(&mut self.conn.borrow_mut())
    }
}

impl RatingRepository for DbReadOnly<'_> {
    fn create_rating(&self, _rating: Rating) -> Result<()> {
        Err(read_only_violation())
    }
    fn load_ratings(&self, page_id: Option<&str>) -> Result<Vec<Rating>> {
        load_ratings(&mut self.conn.borrow_mut(), page_id)
    }
    fn count_ratings(&self, page_id: Option<&str>) -> Result<usize> {
        count_ratings(&mut self.conn.borrow_mut(), page_id)
    }
    fn delete_all_ratings(&self) -> Result<usize> {
        Err(read_only_violation())
    }
}

impl TryFrom<models::Rating> for Rating {
    type Error = repo::Error;
    fn try_from(from: models::Rating) -> Result<Self> {
        let models::Rating {
            _rowid,
            id,
            page_id,
            name,
            value,
            created_at,
        } = from;
        let value = RatingValue::try_from(i64::from(value))
            .map_err(|err| repo::Error::Other(err.into()))?;
        Ok(Self {
            id: id.into(),
            page_id,
            name,
            value,
            created_at: timestamp_from_millis(created_at)?,
        })
    }
}

fn create_rating(conn: &mut SqliteConnection, rating: Rating) -> Result<()> {
    let Rating {
        id,
        page_id,
        name,
        value,
        created_at,
    } = rating;
    let new_rating = models::NewRating {
        id: id.as_str(),
        page_id: &page_id,
        name: &name,
        value: i16::from(u8::from(value)),
        created_at: created_at.as_millis(),
    };
    let _count = diesel::insert_into(schema::page_rating::table)
        .values(&new_rating)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn load_ratings(conn: &mut SqliteConnection, page_id: Option<&str>) -> Result<Vec<Rating>> {
    use schema::page_rating::dsl;
    let mut query = schema::page_rating::table
        .order_by((dsl::created_at.desc(), dsl::rowid.desc()))
        .into_boxed();
    if let Some(page_id) = page_id {
        query = query.filter(dsl::page_id.eq(page_id));
    }
    query
        .load::<models::Rating>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(TryInto::try_into)
        .collect()
}

fn count_ratings(conn: &mut SqliteConnection, page_id: Option<&str>) -> Result<usize> {
    use schema::page_rating::dsl;
    let mut query = schema::page_rating::table
        .select(diesel::dsl::count_star())
        .into_boxed();
    if let Some(page_id) = page_id {
        query = query.filter(dsl::page_id.eq(page_id));
    }
    Ok(query.first::<i64>(conn).map_err(from_diesel_err)? as usize)
}

fn delete_all_ratings(conn: &mut SqliteConnection) -> Result<usize> {
    diesel::delete(schema::page_rating::table)
        .execute(conn)
        .map_err(from_diesel_err)
}
