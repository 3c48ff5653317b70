use super::*;

pub fn set_user_active(
    connections: &sqlite::Connections,
    account_id: &str,
    user_id: &str,
    active: bool,
) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::set_user_active(conn, account_id, user_id, active).map_err(|err| {
            log::warn!("Failed to change status of user {user_id}: {err}");
            err
        })
    })?)
}

pub fn all_users(connections: &sqlite::Connections) -> Result<Vec<User>> {
    Ok(connections.shared()?.read(|db| db.all_users())?)
}
