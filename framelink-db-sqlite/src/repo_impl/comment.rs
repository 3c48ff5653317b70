use super::*;

impl CommentRepository for DbConnection<'_> {
    fn create_comment(&self, comment: &Comment) -> Result<()> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn load_comments_of_photo(&self, photo_id: &str) -> Result<Vec<Comment>> {
        load_comments_of_photo(&mut self.conn.borrow_mut(), photo_id)
    }
}

fn create_comment(conn: &mut SqliteConnection, comment: &Comment) -> Result<()> {
    let new_comment = models::NewComment {
        id: comment.id.as_str(),
        photo_id: comment.photo_id.as_str(),
        user_id: comment.user_id.as_str(),
        text: &comment.text,
        created_at: comment.created_at.as_millis(),
    };
    diesel::insert_into(schema::photo_comments::table)
        .values(&new_comment)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn load_comments_of_photo(conn: &mut SqliteConnection, photo_id: &str) -> Result<Vec<Comment>> {
    use schema::photo_comments::dsl;
    dsl::photo_comments
        .filter(dsl::photo_id.eq(photo_id))
        // Comments of the same millisecond keep their insertion order
        .order_by((
            dsl::created_at,
            diesel::dsl::sql::<diesel::sql_types::BigInt>("rowid"),
        ))
        .load::<models::CommentEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|entity| {
            let models::CommentEntity {
                id,
                photo_id,
                user_id,
                text,
                created_at,
            } = entity;
            Ok(Comment {
                id: id.into(),
                photo_id: photo_id.into(),
                user_id: user_id.into(),
                text,
                created_at: load_timestamp(created_at)?,
            })
        })
        .collect()
}
