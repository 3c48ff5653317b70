use super::*;

impl LikeRepo for DbConnection<'_> {
    fn create_like(&self, like: &Like) -> Result<()> {
        create_like(&mut self.conn.borrow_mut(), like)
    }
    fn delete_like(&self, user_id: &str, photo_id: &str) -> Result<bool> {
        delete_like(&mut self.conn.borrow_mut(), user_id, photo_id)
    }

    fn like_exists(&self, user_id: &str, photo_id: &str) -> Result<bool> {
        like_exists(&mut self.conn.borrow_mut(), user_id, photo_id)
    }
    fn count_likes_of_photo(&self, photo_id: &str) -> Result<u64> {
        count_likes_of_photo(&mut self.conn.borrow_mut(), photo_id)
    }
}

// A unique violation of the primary key
// is reported as `AlreadyExists`.
fn create_like(conn: &mut SqliteConnection, like: &Like) -> Result<()> {
    let new_like = models::NewLike {
        user_id: like.user_id.as_str(),
        photo_id: like.photo_id.as_str(),
        created_at: like.created_at.as_millis(),
    };
    diesel::insert_into(schema::photo_likes::table)
        .values(&new_like)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_like(conn: &mut SqliteConnection, user_id: &str, photo_id: &str) -> Result<bool> {
    use schema::photo_likes::dsl;
    let affected_rows = diesel::delete(dsl::photo_likes.find((user_id, photo_id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(affected_rows > 0)
}

fn like_exists(conn: &mut SqliteConnection, user_id: &str, photo_id: &str) -> Result<bool> {
    use schema::photo_likes::dsl;
    diesel::select(diesel::dsl::exists(
        dsl::photo_likes.find((user_id, photo_id)),
    ))
    .get_result(conn)
    .map_err(from_diesel_err)
}

fn count_likes_of_photo(conn: &mut SqliteConnection, photo_id: &str) -> Result<u64> {
    use schema::photo_likes::dsl;
    let count = dsl::photo_likes
        .filter(dsl::photo_id.eq(photo_id))
        .select(diesel::dsl::count_star())
        .first::<i64>(conn)
        .map_err(from_diesel_err)?;
    load_count(count)
}
