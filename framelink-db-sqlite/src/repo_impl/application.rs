use super::*;
use std::collections::HashMap;

impl ApplicationRepo for DbConnection<'_> {
    fn create_application(&self, application: &Application) -> Result<()> {
        create_application(&mut self.conn.borrow_mut(), application)
    }
    fn update_application_status(&self, id: &str, status: ApplicationStatus) -> Result<()> {
        update_application_status(&mut self.conn.borrow_mut(), id, status)
    }

    fn get_application(&self, id: &str) -> Result<Application> {
        get_application(&mut self.conn.borrow_mut(), id)
    }

    fn all_applications(&self) -> Result<Vec<Application>> {
        load_applications(&mut self.conn.borrow_mut(), None, None)
    }
    fn applications_by_status(&self, status: ApplicationStatus) -> Result<Vec<Application>> {
        load_applications(&mut self.conn.borrow_mut(), Some(status), None)
    }
    fn applications_of_user(&self, user_id: &str) -> Result<Vec<Application>> {
        load_applications(&mut self.conn.borrow_mut(), None, Some(user_id))
    }
}

fn create_application(conn: &mut SqliteConnection, application: &Application) -> Result<()> {
    let Application {
        id,
        user_id,
        name,
        email,
        experience,
        specialization,
        portfolio,
        bio,
        images,
        status,
        submitted_at,
    } = application;
    let new_application = models::NewApplication {
        id: id.as_str(),
        user_id: user_id.as_str(),
        name,
        email,
        experience: experience.to_string(),
        specialization: specialization.to_string(),
        portfolio: portfolio.as_ref().map(Url::as_str),
        bio,
        status: ApplicationStatusPrimitive::from(*status),
        submitted_at: submitted_at.as_millis(),
    };
    diesel::insert_into(schema::applications::table)
        .values(&new_application)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let images: Vec<_> = images
        .iter()
        .enumerate()
        .map(|(pos, url)| models::ApplicationImage {
            application_id: id.to_string(),
            pos: pos as i32,
            url: url.to_string(),
        })
        .collect();
    if !images.is_empty() {
        diesel::insert_into(schema::application_images::table)
            .values(&images)
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    Ok(())
}

fn update_application_status(
    conn: &mut SqliteConnection,
    id: &str,
    status: ApplicationStatus,
) -> Result<()> {
    use schema::applications::dsl;
    let affected_rows = diesel::update(dsl::applications.find(id))
        .set(dsl::status.eq(ApplicationStatusPrimitive::from(status)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(affected_rows)
}

fn get_application(conn: &mut SqliteConnection, id: &str) -> Result<Application> {
    use schema::applications::dsl;
    let entity = dsl::applications
        .find(id)
        .first::<models::ApplicationEntity>(conn)
        .map_err(from_diesel_err)?;
    let images = load_images(conn, &[id])?.remove(id).unwrap_or_default();
    load_application(entity, images)
}

fn load_applications(
    conn: &mut SqliteConnection,
    status: Option<ApplicationStatus>,
    user_id: Option<&str>,
) -> Result<Vec<Application>> {
    use schema::applications::dsl;
    let mut query = dsl::applications
        .order_by((dsl::submitted_at, dsl::id))
        .into_boxed();
    if let Some(status) = status {
        query = query.filter(dsl::status.eq(ApplicationStatusPrimitive::from(status)));
    }
    if let Some(user_id) = user_id {
        query = query.filter(dsl::user_id.eq(user_id));
    }
    let entities = query
        .load::<models::ApplicationEntity>(conn)
        .map_err(from_diesel_err)?;
    let ids: Vec<_> = entities.iter().map(|e| e.id.as_str()).collect();
    let mut images = load_images(conn, &ids)?;
    entities
        .into_iter()
        .map(|entity| {
            let urls = images.remove(entity.id.as_str()).unwrap_or_default();
            load_application(entity, urls)
        })
        .collect()
}

// Each id is bound as a separate SQL variable and SQLite
// limits the number of variables per statement.
const MAX_IDS_PER_QUERY: usize = 500;

// Ordered image URLs grouped by application id
fn load_images(
    conn: &mut SqliteConnection,
    application_ids: &[&str],
) -> Result<HashMap<String, Vec<Url>>> {
    use schema::application_images::dsl;
    let mut images: HashMap<String, Vec<Url>> = HashMap::new();
    for chunk in application_ids.chunks(MAX_IDS_PER_QUERY) {
        let rows = dsl::application_images
            .filter(dsl::application_id.eq_any(chunk.iter().copied()))
            .order_by((dsl::application_id, dsl::pos))
            .load::<models::ApplicationImage>(conn)
            .map_err(from_diesel_err)?;
        for models::ApplicationImage {
            application_id,
            pos: _,
            url,
        } in rows
        {
            images
                .entry(application_id)
                .or_default()
                .push(load_url(&url)?);
        }
    }
    Ok(images)
}

fn load_application(entity: models::ApplicationEntity, images: Vec<Url>) -> Result<Application> {
    let models::ApplicationEntity {
        id,
        user_id,
        name,
        email,
        experience,
        specialization,
        portfolio,
        bio,
        status,
        submitted_at,
    } = entity;
    let status =
        ApplicationStatus::try_from(status).map_err(|err| repo::Error::Other(err.into()))?;
    Ok(Application {
        id: id.into(),
        user_id: user_id.into(),
        name,
        email,
        experience: load_parsed(&experience)?,
        specialization: load_parsed(&specialization)?,
        portfolio: portfolio.as_deref().map(load_url).transpose()?,
        bio,
        images,
        status,
        submitted_at: load_timestamp(submitted_at)?,
    })
}
