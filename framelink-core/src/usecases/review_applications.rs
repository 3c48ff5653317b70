use super::{prelude::*, sync_role::promote_to_photographer};

/// Records an admin decision on an application.
///
/// Deciding a terminal application again with the same outcome
/// returns the stored record without any side effects.
pub fn decide_application<R>(repo: &R, id: &str, decision: Decision) -> Result<Application>
where
    R: ApplicationRepo + UserRepo + PhotographerProfileRepo,
{
    let mut application = repo.get_application(id)?;
    let target = ApplicationStatus::from(decision);
    match application.status {
        current if current == target => {
            log::info!("Application {id} has already been {current}");
            return Ok(application);
        }
        ApplicationStatus::Pending => {}
        current => {
            return Err(Error::InvalidTransition {
                from: current,
                to: target,
            });
        }
    }
    repo.update_application_status(id, target)?;
    application.status = target;
    log::info!("Application {id} of user {} {target}", application.user_id);
    if target == ApplicationStatus::Approved {
        let promotion = promote_to_photographer(repo, &application)?;
        log::info!("Synchronized role of user {}: {promotion:?}", application.user_id);
    }
    Ok(application)
}

pub fn pending_applications<R: ApplicationRepo>(repo: &R) -> Result<Vec<Application>> {
    Ok(repo.applications_by_status(ApplicationStatus::Pending)?)
}

pub fn applications_of_user<R: ApplicationRepo>(repo: &R, user_id: &str) -> Result<Vec<Application>> {
    Ok(repo.applications_of_user(user_id)?)
}
