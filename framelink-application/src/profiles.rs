use super::*;

pub fn update_own_profile(
    connections: &sqlite::Connections,
    account_id: &str,
    update: usecases::ProfileUpdate,
) -> Result<PhotographerProfile> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::update_own_profile(conn, account_id, update).map_err(|err| {
            log::warn!("Failed to update profile of {account_id}: {err}");
            err
        })
    })?)
}

pub fn search_photographers(
    connections: &sqlite::Connections,
    filter: &usecases::PhotographerFilter,
) -> Result<Vec<usecases::DirectoryEntry>> {
    Ok(connections
        .shared()?
        .read(|db| usecases::search_photographers(db, filter))?)
}

pub fn all_profiles(connections: &sqlite::Connections) -> Result<Vec<PhotographerProfile>> {
    Ok(connections.shared()?.read(|db| db.all_profiles())?)
}
