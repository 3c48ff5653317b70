use super::*;

pub fn submit_photo(
    connections: &sqlite::Connections,
    new_photo: usecases::NewPhoto,
) -> Result<Photo> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::submit_photo(conn, new_photo).map_err(|err| {
            log::warn!("Failed to submit photo: {err}");
            err
        })
    })?)
}

pub fn moderate_photo(
    connections: &sqlite::Connections,
    account_id: &str,
    photo_id: &str,
    decision: Decision,
) -> Result<usecases::ModerationOutcome> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::authorize_account(conn, account_id, Role::Admin)?;
        usecases::moderate_photo(conn, photo_id, decision).map_err(|err| {
            log::warn!("Failed to moderate photo {photo_id} ({decision}): {err}");
            err
        })
    })?)
}

pub fn pending_photos(connections: &sqlite::Connections, account_id: &str) -> Result<Vec<Photo>> {
    Ok(connections.shared()?.read(|db| {
        usecases::authorize_account(db, account_id, Role::Admin)?;
        usecases::pending_photos(db)
    })?)
}

pub fn public_feed(connections: &sqlite::Connections) -> Result<Vec<Photo>> {
    Ok(connections.shared()?.read(|db| usecases::public_feed(db))?)
}

pub fn approved_photos_of_photographer(
    connections: &sqlite::Connections,
    photographer_id: &str,
) -> Result<Vec<Photo>> {
    Ok(connections
        .shared()?
        .read(|db| usecases::approved_photos_of_photographer(db, photographer_id))?)
}

pub fn all_photos(connections: &sqlite::Connections) -> Result<Vec<Photo>> {
    Ok(connections.shared()?.read(|db| db.all_photos())?)
}
