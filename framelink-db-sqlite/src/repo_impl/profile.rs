use super::*;

impl PhotographerProfileRepo for DbConnection<'_> {
    fn create_profile(&self, profile: &PhotographerProfile) -> Result<()> {
        create_profile(&mut self.conn.borrow_mut(), profile)
    }
    fn update_profile(&self, profile: &PhotographerProfile) -> Result<()> {
        update_profile(&mut self.conn.borrow_mut(), profile)
    }

    fn try_get_profile(&self, id: &str) -> Result<Option<PhotographerProfile>> {
        try_get_profile(&mut self.conn.borrow_mut(), id)
    }
    fn all_profiles(&self) -> Result<Vec<PhotographerProfile>> {
        all_profiles(&mut self.conn.borrow_mut())
    }
}

impl<'a> From<&'a PhotographerProfile> for models::NewPhotographerProfile<'a> {
    fn from(from: &'a PhotographerProfile) -> Self {
        let PhotographerProfile {
            id,
            name,
            email,
            bio,
            specialization,
            country,
            avatar_url,
            availability,
            verified,
        } = from;
        Self {
            id: id.as_str(),
            name,
            email,
            bio,
            specialization: specialization.to_string(),
            country: country.as_deref(),
            avatar_url: avatar_url.as_ref().map(Url::as_str),
            availability: AvailabilityPrimitive::from(*availability),
            verified: *verified,
        }
    }
}

fn load_profile(entity: models::PhotographerProfileEntity) -> Result<PhotographerProfile> {
    let models::PhotographerProfileEntity {
        id,
        name,
        email,
        bio,
        specialization,
        country,
        avatar_url,
        availability,
        verified,
    } = entity;
    let availability =
        Availability::try_from(availability).map_err(|err| repo::Error::Other(err.into()))?;
    Ok(PhotographerProfile {
        id: id.into(),
        name,
        email,
        bio,
        specialization: load_parsed(&specialization)?,
        country,
        avatar_url: avatar_url.as_deref().map(load_url).transpose()?,
        availability,
        verified,
    })
}

fn create_profile(conn: &mut SqliteConnection, profile: &PhotographerProfile) -> Result<()> {
    diesel::insert_into(schema::photographer_profiles::table)
        .values(models::NewPhotographerProfile::from(profile))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_profile(conn: &mut SqliteConnection, profile: &PhotographerProfile) -> Result<()> {
    use schema::photographer_profiles::dsl;
    let affected_rows = diesel::update(dsl::photographer_profiles.find(profile.id.as_str()))
        .set(models::NewPhotographerProfile::from(profile))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(affected_rows)
}

fn try_get_profile(conn: &mut SqliteConnection, id: &str) -> Result<Option<PhotographerProfile>> {
    use schema::photographer_profiles::dsl;
    dsl::photographer_profiles
        .find(id)
        .first::<models::PhotographerProfileEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_profile)
        .transpose()
}

fn all_profiles(conn: &mut SqliteConnection) -> Result<Vec<PhotographerProfile>> {
    use schema::photographer_profiles::dsl;
    dsl::photographer_profiles
        .order_by(dsl::name)
        .load::<models::PhotographerProfileEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_profile)
        .collect()
}
