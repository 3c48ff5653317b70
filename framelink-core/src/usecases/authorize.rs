use super::prelude::*;
use crate::authorization::user::authorize_role;

/// Loads the acting account and checks its role.
///
/// Unknown and deactivated accounts are treated as forbidden.
pub fn authorize_account<R: UserRepo>(repo: &R, account_id: &str, min_role: Role) -> Result<User> {
    let account = repo.try_get_user(account_id)?.ok_or(Error::Forbidden)?;
    authorize_role(&account, min_role)?;
    Ok(account)
}
