use super::*;

/// Approves or rejects an application on behalf of an admin.
///
/// Role and profile of the applicant are synchronized within
/// the same transaction.
pub fn decide_application(
    connections: &sqlite::Connections,
    account_id: &str,
    application_id: &str,
    decision: Decision,
) -> Result<Application> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::authorize_account(conn, account_id, Role::Admin)?;
        usecases::decide_application(conn, application_id, decision).map_err(|err| {
            log::warn!("Failed to decide application {application_id} ({decision}): {err}");
            err
        })
    })?)
}

pub fn pending_applications(
    connections: &sqlite::Connections,
    account_id: &str,
) -> Result<Vec<Application>> {
    Ok(connections.shared()?.read(|db| {
        usecases::authorize_account(db, account_id, Role::Admin)?;
        usecases::pending_applications(db)
    })?)
}
