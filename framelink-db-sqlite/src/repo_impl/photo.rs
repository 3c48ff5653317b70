use super::*;

impl PhotoRepo for DbConnection<'_> {
    fn create_photo(&self, photo: &Photo) -> Result<()> {
        create_photo(&mut self.conn.borrow_mut(), photo)
    }
    fn get_photo(&self, id: &str) -> Result<Photo> {
        get_photo(&mut self.conn.borrow_mut(), id)
    }

    fn approve_photo(&self, id: &str) -> Result<()> {
        approve_photo(&mut self.conn.borrow_mut(), id)
    }
    fn update_photo_likes(&self, id: &str, likes: u64) -> Result<()> {
        update_photo_likes(&mut self.conn.borrow_mut(), id, likes)
    }

    fn delete_photo(&self, id: &str) -> Result<()> {
        delete_photo(&mut self.conn.borrow_mut(), id)
    }

    fn all_photos(&self) -> Result<Vec<Photo>> {
        load_photos(&mut self.conn.borrow_mut(), None, None)
    }
    fn photos_by_approval(&self, approved: bool) -> Result<Vec<Photo>> {
        load_photos(&mut self.conn.borrow_mut(), Some(approved), None)
    }
    fn photos_of_photographer(&self, photographer_id: &str) -> Result<Vec<Photo>> {
        load_photos(&mut self.conn.borrow_mut(), None, Some(photographer_id))
    }
}

fn load_photo(entity: models::PhotoEntity) -> Result<Photo> {
    let models::PhotoEntity {
        id,
        photographer_id,
        url,
        caption,
        approved,
        likes,
        created_at,
    } = entity;
    Ok(Photo {
        id: id.into(),
        photographer_id: photographer_id.into(),
        url: load_url(&url)?,
        caption,
        approved,
        likes: load_count(likes)?,
        created_at: load_timestamp(created_at)?,
    })
}

fn create_photo(conn: &mut SqliteConnection, photo: &Photo) -> Result<()> {
    let new_photo = models::NewPhoto {
        id: photo.id.as_str(),
        photographer_id: photo.photographer_id.as_str(),
        url: photo.url.as_str(),
        caption: &photo.caption,
        approved: photo.approved,
        likes: store_count(photo.likes)?,
        created_at: photo.created_at.as_millis(),
    };
    diesel::insert_into(schema::photos::table)
        .values(&new_photo)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_photo(conn: &mut SqliteConnection, id: &str) -> Result<Photo> {
    use schema::photos::dsl;
    dsl::photos
        .find(id)
        .first::<models::PhotoEntity>(conn)
        .map_err(from_diesel_err)
        .and_then(load_photo)
}

fn approve_photo(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::photos::dsl;
    let affected_rows = diesel::update(dsl::photos.find(id))
        .set(dsl::approved.eq(true))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(affected_rows)
}

fn update_photo_likes(conn: &mut SqliteConnection, id: &str, likes: u64) -> Result<()> {
    use schema::photos::dsl;
    let affected_rows = diesel::update(dsl::photos.find(id))
        .set(dsl::likes.eq(store_count(likes)?))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(affected_rows)
}

// Dependent rows are deleted explicitly instead of relying
// on the per-connection foreign key settings.
fn delete_photo(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::{photo_comments, photo_likes, photos};
    let deleted_likes =
        diesel::delete(photo_likes::table.filter(photo_likes::photo_id.eq(id)))
            .execute(conn)
            .map_err(from_diesel_err)?;
    let deleted_comments =
        diesel::delete(photo_comments::table.filter(photo_comments::photo_id.eq(id)))
            .execute(conn)
            .map_err(from_diesel_err)?;
    let affected_rows = diesel::delete(photos::table.find(id))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(affected_rows)?;
    log::debug!(
        "Deleted photo {id} with {deleted_likes} like(s) and {deleted_comments} comment(s)"
    );
    Ok(())
}

fn load_photos(
    conn: &mut SqliteConnection,
    approved: Option<bool>,
    photographer_id: Option<&str>,
) -> Result<Vec<Photo>> {
    use schema::photos::dsl;
    let mut query = dsl::photos
        .order_by((dsl::created_at, dsl::id))
        .into_boxed();
    if let Some(approved) = approved {
        query = query.filter(dsl::approved.eq(approved));
    }
    if let Some(photographer_id) = photographer_id {
        query = query.filter(dsl::photographer_id.eq(photographer_id));
    }
    query
        .load::<models::PhotoEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_photo)
        .collect()
}
