use super::*;

pub fn register_user(
    connections: &sqlite::Connections,
    new_user: usecases::NewUser,
) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::register_user(conn, new_user).map_err(|err| {
            log::warn!("Failed to register user: {err}");
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn register_and_reject_duplicates() {
        let fixture = BackendFixture::new();
        let new_user = usecases::NewUser {
            id: "jane".into(),
            name: "Jane".into(),
            email: "jane@example.com".into(),
            country: None,
        };
        let user = flows::register_user(&fixture.db_connections, new_user.clone()).unwrap();
        assert_eq!(user.role, Role::User);
        assert_eq!(fixture.get_user("jane"), user);
        let err = flows::register_user(&fixture.db_connections, new_user).unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(usecases::Error::UserExists)
        ));
    }
}
