use super::*;

pub fn submit_application(
    connections: &sqlite::Connections,
    new_application: usecases::NewApplication,
    policy: usecases::ApplicationPolicy,
) -> Result<Application> {
    let user_id = new_application.user_id.clone();
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::submit_application(conn, new_application, policy).map_err(|err| {
            log::warn!("Failed to submit application of user {user_id}: {err}");
            err
        })
    })?)
}

pub fn applications_of_user(
    connections: &sqlite::Connections,
    user_id: &str,
) -> Result<Vec<Application>> {
    Ok(connections
        .shared()?
        .read(|db| usecases::applications_of_user(db, user_id))?)
}

pub fn all_applications(connections: &sqlite::Connections) -> Result<Vec<Application>> {
    Ok(connections.shared()?.read(|db| db.all_applications())?)
}
