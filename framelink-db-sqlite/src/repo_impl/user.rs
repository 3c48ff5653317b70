use super::*;

impl UserRepo for DbConnection<'_> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update_user(&mut self.conn.borrow_mut(), user)
    }

    fn get_user(&self, id: &str) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }

    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut())
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }
}

impl<'a> From<&'a User> for models::NewUser<'a> {
    fn from(from: &'a User) -> Self {
        let User {
            id,
            name,
            email,
            role,
            country,
            active,
        } = from;
        Self {
            id: id.as_str(),
            name,
            email,
            role: RolePrimitive::from(*role),
            country: country.as_deref(),
            active: *active,
        }
    }
}

fn load_user(entity: models::UserEntity) -> Result<User> {
    let models::UserEntity {
        id,
        name,
        email,
        role,
        country,
        active,
    } = entity;
    let role = Role::try_from(role).map_err(|err| repo::Error::Other(err.into()))?;
    Ok(User {
        id: id.into(),
        name,
        email,
        role,
        country,
        active,
    })
}

fn create_user(conn: &mut SqliteConnection, user: &User) -> Result<()> {
    diesel::insert_into(schema::users::table)
        .values(models::NewUser::from(user))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_user(conn: &mut SqliteConnection, user: &User) -> Result<()> {
    use schema::users::dsl;
    let affected_rows = diesel::update(dsl::users.find(user.id.as_str()))
        .set(models::NewUser::from(user))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(affected_rows)
}

fn get_user(conn: &mut SqliteConnection, id: &str) -> Result<User> {
    use schema::users::dsl;
    dsl::users
        .find(id)
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)
        .and_then(load_user)
}

fn try_get_user_by_email(conn: &mut SqliteConnection, email: &str) -> Result<Option<User>> {
    use schema::users::dsl;
    dsl::users
        .filter(dsl::email.eq(email))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_user)
        .transpose()
}

fn all_users(conn: &mut SqliteConnection) -> Result<Vec<User>> {
    use schema::users::dsl;
    dsl::users
        .order_by(dsl::name)
        .load::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_user)
        .collect()
}

fn count_users(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::users::dsl;
    let count = dsl::users
        .select(diesel::dsl::count_star())
        .first::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(load_count(count)? as usize)
}
