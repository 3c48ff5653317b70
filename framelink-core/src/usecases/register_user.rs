use super::prelude::*;
use crate::{
    repositories::Error as RepoError,
    util::validate::{AutoCorrect, Validate},
};

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id      : Id,
    pub name    : String,
    pub email   : String,
    pub country : Option<String>,
}

/// Registers a new account with the default role.
///
/// Accounts are created by the external identity provider, i.e.
/// the id is chosen by the caller.
pub fn register_user<R: UserRepo>(repo: &R, new_user: NewUser) -> Result<User> {
    let NewUser {
        id,
        name,
        email,
        country,
    } = new_user;
    let user = User {
        id,
        name,
        email,
        role: Role::User,
        country,
        active: true,
    }
    .auto_correct();
    user.validate()?;
    if repo.try_get_user(user.id.as_str())?.is_some()
        || repo.try_get_user_by_email(&user.email)?.is_some()
    {
        return Err(Error::UserExists);
    }
    repo.create_user(&user).map_err(|err| match err {
        RepoError::AlreadyExists => Error::UserExists,
        err => err.into(),
    })?;
    log::info!("Registered new user {}", user.id);
    Ok(user)
}
