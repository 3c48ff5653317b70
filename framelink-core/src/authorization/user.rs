use framelink_entities::user::{Role, User};

use std::result::Result as StdResult;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unauthorized role")]
    UnauthorizedRole,
    #[error("inactive user")]
    InactiveUser,
}

pub type Result<T> = StdResult<T, Error>;

pub fn authorize_role(user: &User, min_required_role: Role) -> Result<()> {
    if !user.active {
        return Err(Error::InactiveUser);
    }
    if user.role < min_required_role {
        return Err(Error::UnauthorizedRole);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use framelink_entities::builders::Builder;

    #[test]
    fn admins_pass_every_role_check() {
        let admin = User::build().role(Role::Admin).finish();
        assert!(authorize_role(&admin, Role::User).is_ok());
        assert!(authorize_role(&admin, Role::Photographer).is_ok());
        assert!(authorize_role(&admin, Role::Admin).is_ok());
    }

    #[test]
    fn photographers_are_no_admins() {
        let photographer = User::build().role(Role::Photographer).finish();
        assert!(authorize_role(&photographer, Role::Photographer).is_ok());
        assert!(matches!(
            authorize_role(&photographer, Role::Admin),
            Err(Error::UnauthorizedRole)
        ));
    }

    #[test]
    fn deactivated_users_are_rejected() {
        let admin = User::build().role(Role::Admin).active(false).finish();
        assert!(matches!(
            authorize_role(&admin, Role::User),
            Err(Error::InactiveUser)
        ));
    }
}
