use super::*;
use framelink_core::{
    entities::*,
    repositories::{self as repo, *},
};
use framelink_entities::builders::Builder;

fn setup() -> Connections {
    let connections = Connections::init(":memory:", 1).unwrap();
    run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
    connections
}

fn write<T>(connections: &Connections, f: impl FnOnce(&DbConnection) -> Result<T, uc::Error>) -> T {
    connections.exclusive().unwrap().transaction(f).unwrap()
}

#[test]
fn create_and_update_users() {
    let connections = setup();
    let mut user = User::build()
        .id("jane")
        .name("Jane")
        .email("jane@example.com")
        .country(Some("DE"))
        .finish();
    write(&connections, |db| Ok(db.create_user(&user)?));
    user.role = Role::Photographer;
    user.country = None;
    write(&connections, |db| Ok(db.update_user(&user)?));
    connections.shared().unwrap().read(|db| {
        assert_eq!(db.get_user("jane").unwrap(), user);
        assert_eq!(
            db.try_get_user_by_email("jane@example.com").unwrap(),
            Some(user.clone())
        );
        assert_eq!(db.count_users().unwrap(), 1);
        assert!(db.get_user("john").unwrap_err().is_not_found());
    });
}

#[test]
fn reject_duplicate_emails() {
    let connections = setup();
    let jane = User::build().id("jane").email("mail@example.com").finish();
    let john = User::build().id("john").email("mail@example.com").finish();
    write(&connections, |db| Ok(db.create_user(&jane)?));
    let err = connections
        .exclusive()
        .unwrap()
        .transaction(|db| db.create_user(&john))
        .unwrap_err();
    assert!(matches!(err, uc::Error::Repo(repo::Error::AlreadyExists)));
}

#[test]
fn update_missing_rows() {
    let connections = setup();
    let user = User::build().id("ghost").finish();
    let err = connections
        .exclusive()
        .unwrap()
        .transaction(|db| db.update_user(&user))
        .unwrap_err();
    assert!(err.is_not_found());
    let err = connections
        .exclusive()
        .unwrap()
        .transaction(|db| db.approve_photo("nope"))
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn keep_the_order_of_application_images() {
    let connections = setup();
    let user = User::build().id("jane").finish();
    let application = Application::build()
        .user_id("jane")
        .experience(Experience::MoreThanTenYears)
        .specialization(Specialization::Architecture)
        .bio("Concrete and glass")
        .images(&[
            "https://images.example.com/c.jpg",
            "https://images.example.com/a.jpg",
            "https://images.example.com/b.jpg",
        ])
        .finish();
    write(&connections, |db| {
        db.create_user(&user)?;
        Ok(db.create_application(&application)?)
    });
    connections.shared().unwrap().read(|db| {
        assert_eq!(
            db.get_application(application.id.as_str()).unwrap(),
            application
        );
        assert_eq!(db.applications_of_user("jane").unwrap(), vec![application.clone()]);
        assert_eq!(
            db.applications_by_status(ApplicationStatus::Pending)
                .unwrap()
                .len(),
            1
        );
        assert!(db
            .applications_by_status(ApplicationStatus::Approved)
            .unwrap()
            .is_empty());
    });
}

#[test]
fn load_more_applications_than_sql_variables() {
    // Exceeds the default limit of 32766 bound variables per statement
    const COUNT: usize = 33_000;
    let connections = setup();
    let user = User::build().id("jane").finish();
    let first = Application::build()
        .id("first")
        .user_id("jane")
        .images(&["https://images.example.com/first.jpg"])
        .finish();
    let last = Application::build()
        .id("last")
        .user_id("jane")
        .images(&[
            "https://images.example.com/last-1.jpg",
            "https://images.example.com/last-2.jpg",
        ])
        .finish();
    write(&connections, |db| {
        db.create_user(&user)?;
        db.create_application(&first)?;
        for _ in 2..COUNT {
            db.create_application(&Application::build().user_id("jane").finish())?;
        }
        Ok(db.create_application(&last)?)
    });
    connections.shared().unwrap().read(|db| {
        let applications = db.all_applications().unwrap();
        assert_eq!(applications.len(), COUNT);
        let find = |id: &str| applications.iter().find(|a| a.id.as_str() == id).unwrap();
        assert_eq!(find("first").images, first.images);
        assert_eq!(find("last").images, last.images);
        assert_eq!(
            db.applications_by_status(ApplicationStatus::Pending)
                .unwrap()
                .len(),
            COUNT
        );
        assert_eq!(db.applications_of_user("jane").unwrap().len(), COUNT);
    });
}

#[test]
fn delete_photo_with_likes_and_comments() {
    let connections = setup();
    let user = User::build().id("jane").role(Role::Photographer).finish();
    let photo = Photo::build().id("p1").photographer_id("jane").finish();
    write(&connections, |db| {
        db.create_user(&user)?;
        db.create_photo(&photo)?;
        db.create_like(&Like {
            user_id: "jane".into(),
            photo_id: "p1".into(),
            created_at: Timestamp::now(),
        })?;
        db.create_comment(&Comment {
            id: Id::new(),
            photo_id: "p1".into(),
            user_id: "jane".into(),
            text: "Nice".into(),
            created_at: Timestamp::now(),
        })?;
        Ok(db.delete_photo("p1")?)
    });
    connections.shared().unwrap().read(|db| {
        assert!(db.get_photo("p1").unwrap_err().is_not_found());
        assert_eq!(db.count_likes_of_photo("p1").unwrap(), 0);
        assert!(db.load_comments_of_photo("p1").unwrap().is_empty());
    });
}

#[test]
fn report_duplicate_likes_as_conflict() {
    let connections = setup();
    let user = User::build().id("jane").finish();
    let photo = Photo::build().id("p1").photographer_id("jane").finish();
    let like = Like {
        user_id: "jane".into(),
        photo_id: "p1".into(),
        created_at: Timestamp::now(),
    };
    write(&connections, |db| {
        db.create_user(&user)?;
        db.create_photo(&photo)?;
        Ok(db.create_like(&like)?)
    });
    write(&connections, |db| {
        assert!(matches!(
            db.create_like(&like),
            Err(repo::Error::AlreadyExists)
        ));
        assert!(db.like_exists("jane", "p1")?);
        assert_eq!(db.count_likes_of_photo("p1")?, 1);
        assert!(db.delete_like("jane", "p1")?);
        assert!(!db.delete_like("jane", "p1")?);
        Ok(())
    });
}

#[test]
fn roll_back_failed_transactions() {
    let connections = setup();
    let user = User::build().id("jane").finish();
    let err = connections
        .exclusive()
        .unwrap()
        .transaction(|db| {
            db.create_user(&user)?;
            Err::<(), _>(uc::Error::Forbidden)
        })
        .unwrap_err();
    assert!(matches!(err, uc::Error::Forbidden));
    connections.shared().unwrap().read(|db| {
        assert_eq!(db.count_users().unwrap(), 0);
    });
}

#[test]
fn store_profiles_and_photo_counters() {
    let connections = setup();
    let user = User::build().id("ansel").role(Role::Photographer).finish();
    let mut profile = PhotographerProfile::build()
        .id("ansel")
        .name("Ansel")
        .bio("Landscapes")
        .specialization(Specialization::Landscape)
        .country(Some("US"))
        .finish();
    let photo = Photo::build()
        .id("p1")
        .photographer_id("ansel")
        .caption("Half Dome")
        .finish();
    write(&connections, |db| {
        db.create_user(&user)?;
        db.create_profile(&profile)?;
        db.create_photo(&photo)?;
        db.approve_photo("p1")?;
        Ok(db.update_photo_likes("p1", 3)?)
    });
    profile.availability = Availability::NotAvailable;
    profile.avatar_url = Some("https://images.example.com/ansel.png".parse().unwrap());
    write(&connections, |db| Ok(db.update_profile(&profile)?));
    connections.shared().unwrap().read(|db| {
        assert_eq!(db.try_get_profile("ansel").unwrap(), Some(profile.clone()));
        let stored = db.get_photo("p1").unwrap();
        assert!(stored.approved);
        assert_eq!(stored.likes, 3);
        assert_eq!(db.photos_by_approval(true).unwrap(), vec![stored.clone()]);
        assert!(db.photos_by_approval(false).unwrap().is_empty());
        assert_eq!(db.photos_of_photographer("ansel").unwrap(), vec![stored]);
    });
}
