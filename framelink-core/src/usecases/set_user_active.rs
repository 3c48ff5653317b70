use super::{authorize_account, prelude::*};

/// Activates or deactivates an account.
///
/// Only admins may change the status and admins
/// can never be deactivated.
pub fn set_user_active<R: UserRepo>(
    repo: &R,
    account_id: &str,
    user_id: &str,
    active: bool,
) -> Result<User> {
    log::info!("Changing status of user {user_id} to active={active}");
    authorize_account(repo, account_id, Role::Admin)?;
    let mut user = repo.get_user(user_id)?;
    if user.role == Role::Admin && !active {
        return Err(Error::Forbidden);
    }
    if user.active != active {
        user.active = active;
        repo.update_user(&user)?;
    }
    Ok(user)
}
