use super::prelude::*;
use crate::{authorization::user::authorize_role, util::validate::is_blank};

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub user_id        : Id,
    pub experience     : Experience,
    pub specialization : Specialization,
    pub portfolio      : Option<Url>,
    pub bio            : String,
    pub images         : Vec<Url>,
}

/// Controls how submissions of users that are
/// still waiting for a decision are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplicationPolicy {
    /// Accept another application while an earlier
    /// one is still pending.
    pub allow_concurrent_pending: bool,
}

pub fn submit_application<R>(
    repo: &R,
    new_application: NewApplication,
    policy: ApplicationPolicy,
) -> Result<Application>
where
    R: ApplicationRepo + UserRepo,
{
    let NewApplication {
        user_id,
        experience,
        specialization,
        portfolio,
        bio,
        images,
    } = new_application;
    if images.len() > MAX_APPLICATION_IMAGES {
        return Err(Error::TooManyImages(images.len()));
    }
    if is_blank(&bio) {
        return Err(Error::EmptyBio);
    }
    let user = repo.get_user(user_id.as_str())?;
    authorize_role(&user, Role::User)?;
    if !policy.allow_concurrent_pending {
        let has_pending = repo
            .applications_of_user(user.id.as_str())?
            .iter()
            .any(|a| a.status == ApplicationStatus::Pending);
        if has_pending {
            return Err(Error::PendingApplicationExists);
        }
    }
    let application = Application {
        id: Id::new(),
        user_id: user.id,
        name: user.name,
        email: user.email,
        experience,
        specialization,
        portfolio,
        bio: bio.trim().to_owned(),
        images,
        status: ApplicationStatus::Pending,
        submitted_at: Timestamp::now(),
    };
    repo.create_application(&application)?;
    log::info!(
        "User {} submitted application {} with {} image(s)",
        application.user_id,
        application.id,
        application.images.len()
    );
    Ok(application)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use framelink_entities::builders::Builder;

    fn new_application(user_id: &str, image_count: usize) -> NewApplication {
        NewApplication {
            user_id: user_id.into(),
            experience: Experience::ThreeToFiveYears,
            specialization: Specialization::Portrait,
            portfolio: None,
            bio: "Portraits in natural light".into(),
            images: (0..image_count)
                .map(|i| {
                    format!("https://images.example.com/{i}.jpg")
                        .parse()
                        .unwrap()
                })
                .collect(),
        }
    }

    fn db_with_user(id: &str) -> MockDb {
        let db = MockDb::default();
        db.create_user(&User::build().id(id).name("Jane").finish())
            .unwrap();
        db
    }

    #[test]
    fn submit_a_pending_application() {
        let db = db_with_user("jane");
        let application =
            submit_application(&db, new_application("jane", 3), Default::default()).unwrap();
        assert_eq!(application.status, ApplicationStatus::Pending);
        assert_eq!(application.name, "Jane");
        assert_eq!(application.images.len(), 3);
        assert_eq!(db.get_application(application.id.as_str()).unwrap(), application);
    }

    #[test]
    fn accept_short_image_lists() {
        let db = db_with_user("jane");
        let application =
            submit_application(&db, new_application("jane", 0), Default::default()).unwrap();
        assert!(application.images.is_empty());
    }

    #[test]
    fn reject_more_than_five_images() {
        let db = db_with_user("jane");
        let err = submit_application(&db, new_application("jane", 6), Default::default())
            .unwrap_err();
        assert!(matches!(err, Error::TooManyImages(6)));
        assert!(err.is_validation());
        assert!(db.all_applications().unwrap().is_empty());
        assert!(
            submit_application(&db, new_application("jane", 5), Default::default()).is_ok()
        );
    }

    #[test]
    fn reject_blank_bio() {
        let db = db_with_user("jane");
        let mut application = new_application("jane", 1);
        application.bio = " \n ".into();
        assert!(matches!(
            submit_application(&db, application, Default::default()),
            Err(Error::EmptyBio)
        ));
    }

    #[test]
    fn reject_unknown_users() {
        let db = MockDb::default();
        let err = submit_application(&db, new_application("ghost", 1), Default::default())
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn reject_deactivated_users() {
        let db = MockDb::default();
        db.create_user(&User::build().id("jane").active(false).finish())
            .unwrap();
        assert!(matches!(
            submit_application(&db, new_application("jane", 1), Default::default()),
            Err(Error::Forbidden)
        ));
        assert!(db.all_applications().unwrap().is_empty());
    }

    #[test]
    fn reject_second_pending_application_by_default() {
        let db = db_with_user("jane");
        submit_application(&db, new_application("jane", 1), Default::default()).unwrap();
        assert!(matches!(
            submit_application(&db, new_application("jane", 2), Default::default()),
            Err(Error::PendingApplicationExists)
        ));
        assert_eq!(db.applications_of_user("jane").unwrap().len(), 1);
    }

    #[test]
    fn allow_concurrent_pending_applications_if_configured() {
        let db = db_with_user("jane");
        let policy = ApplicationPolicy {
            allow_concurrent_pending: true,
        };
        submit_application(&db, new_application("jane", 1), policy).unwrap();
        submit_application(&db, new_application("jane", 2), policy).unwrap();
        assert_eq!(db.applications_of_user("jane").unwrap().len(), 2);
    }

    #[test]
    fn resubmit_after_rejection() {
        let db = db_with_user("jane");
        let rejected = Application::build()
            .user_id("jane")
            .status(ApplicationStatus::Rejected)
            .finish();
        db.create_application(&rejected).unwrap();
        assert!(
            submit_application(&db, new_application("jane", 1), Default::default()).is_ok()
        );
    }
}
