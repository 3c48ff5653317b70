mod engagement;
mod moderate_photos;
mod profiles;
mod register_user;
mod review_applications;
mod set_user_active;
mod statistics;
mod submit_application;

pub mod cache;
pub mod error;

pub mod prelude {
    pub use super::{
        engagement::*, moderate_photos::*, profiles::*, register_user::*, review_applications::*,
        set_user_active::*, statistics::*, submit_application::*,
    };
}

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use framelink_core::{entities::*, repositories::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub mod sqlite {
    pub use framelink_db_sqlite::{run_embedded_database_migrations, Connections};
}
