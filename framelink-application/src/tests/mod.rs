pub mod prelude {

    pub use framelink_core::{
        db::*,
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{error::AppError, prelude as flows};

    pub fn new_application(user_id: &str, image_count: usize) -> usecases::NewApplication {
        usecases::NewApplication {
            user_id: user_id.into(),
            experience: Experience::ThreeToFiveYears,
            specialization: Specialization::Landscape,
            portfolio: Some("https://portfolio.example.com".parse().unwrap()),
            bio: "Chasing light since 2015".into(),
            images: (0..image_count)
                .map(|i| {
                    format!("https://images.example.com/{user_id}/{i}.jpg")
                        .parse()
                        .unwrap()
                })
                .collect(),
        }
    }

    pub fn new_photo(photographer_id: &str, caption: &str) -> usecases::NewPhoto {
        usecases::NewPhoto {
            photographer_id: photographer_id.into(),
            url: format!("https://images.example.com/{photographer_id}/photo.jpg")
                .parse()
                .unwrap(),
            caption: caption.into(),
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap())
                .unwrap();
            Self { db_connections }
        }

        /// Registers a user and assigns the role directly.
        pub fn create_user(&self, id: &str, role: Role) -> User {
            let mut user = flows::register_user(
                &self.db_connections,
                usecases::NewUser {
                    id: id.into(),
                    name: id.into(),
                    email: format!("{id}@example.com"),
                    country: None,
                },
            )
            .unwrap();
            if user.role != role {
                user.role = role;
                self.db_connections
                    .exclusive()
                    .unwrap()
                    .transaction(|conn| conn.update_user(&user))
                    .unwrap();
            }
            user
        }

        pub fn get_user(&self, id: &str) -> User {
            self.db_connections
                .shared()
                .unwrap()
                .read(|db| db.get_user(id))
                .unwrap()
        }

        pub fn get_profile(&self, id: &str) -> Option<PhotographerProfile> {
            self.db_connections
                .shared()
                .unwrap()
                .read(|db| db.try_get_profile(id))
                .unwrap()
        }

        pub fn all_profiles(&self) -> Vec<PhotographerProfile> {
            self.db_connections
                .shared()
                .unwrap()
                .read(|db| db.all_profiles())
                .unwrap()
        }
    }
}
