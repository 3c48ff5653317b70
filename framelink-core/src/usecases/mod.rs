mod authorize;
mod engagement;
mod error;
mod moderate_photos;
mod profiles;
mod register_user;
mod review_applications;
mod set_user_active;
mod statistics;
mod submit_application;
mod sync_role;

#[cfg(test)]
pub mod tests;

pub use self::{
    authorize::*, engagement::*, error::Error, moderate_photos::*, profiles::*, register_user::*,
    review_applications::*, set_user_active::*, statistics::*, submit_application::*,
    sync_role::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{db::*, entities::*, repositories::*};
}
