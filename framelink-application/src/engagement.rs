use super::*;

pub fn toggle_like(
    connections: &sqlite::Connections,
    user_id: &str,
    photo_id: &str,
) -> Result<usecases::LikeToggle> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::toggle_like(conn, user_id, photo_id).map_err(|err| {
            log::warn!("Failed to toggle like of user {user_id} for photo {photo_id}: {err}");
            err
        })
    })?)
}

pub fn is_liked(connections: &sqlite::Connections, user_id: &str, photo_id: &str) -> Result<bool> {
    Ok(connections
        .shared()?
        .read(|db| usecases::is_liked(db, user_id, photo_id))?)
}

pub fn reconcile_likes(connections: &sqlite::Connections, photo_id: &str) -> Result<u64> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::reconcile_likes(conn, photo_id))?)
}

pub fn reconcile_all_likes(connections: &sqlite::Connections) -> Result<usize> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::reconcile_all_likes(conn))?)
}

pub fn add_comment(
    connections: &sqlite::Connections,
    new_comment: usecases::NewComment,
) -> Result<Comment> {
    let photo_id = new_comment.photo_id.clone();
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::add_comment(conn, new_comment).map_err(|err| {
            log::warn!("Failed to comment on photo {photo_id}: {err}");
            err
        })
    })?)
}

pub fn comments_of_photo(
    connections: &sqlite::Connections,
    photo_id: &str,
) -> Result<Vec<Comment>> {
    Ok(connections
        .shared()?
        .read(|db| usecases::comments_of_photo(db, photo_id))?)
}
