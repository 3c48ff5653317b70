// Low-level storage access traits.
// Each repository is responsible for a single entity.
// Related entities are only referenced by their id.
// The only exception is `PhotoRepo::delete_photo` that
// also removes the likes and comments of the photo.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    // Fails with `AlreadyExists` if either the id or
    // the email address is already taken.
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;

    fn get_user(&self, id: &str) -> Result<User>;
    fn try_get_user(&self, id: &str) -> Result<Option<User>> {
        match self.get_user(id) {
            Ok(user) => Ok(Some(user)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
    fn try_get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;
}

pub trait ApplicationRepo {
    fn create_application(&self, application: &Application) -> Result<()>;
    fn update_application_status(&self, id: &str, status: ApplicationStatus) -> Result<()>;

    fn get_application(&self, id: &str) -> Result<Application>;

    // Ordered by submission time, oldest first
    fn all_applications(&self) -> Result<Vec<Application>>;
    fn applications_by_status(&self, status: ApplicationStatus) -> Result<Vec<Application>>;
    fn applications_of_user(&self, user_id: &str) -> Result<Vec<Application>>;
}

pub trait PhotographerProfileRepo {
    fn create_profile(&self, profile: &PhotographerProfile) -> Result<()>;
    fn update_profile(&self, profile: &PhotographerProfile) -> Result<()>;

    fn try_get_profile(&self, id: &str) -> Result<Option<PhotographerProfile>>;
    fn all_profiles(&self) -> Result<Vec<PhotographerProfile>>;
}

pub trait PhotoRepo {
    fn create_photo(&self, photo: &Photo) -> Result<()>;
    fn get_photo(&self, id: &str) -> Result<Photo>;

    fn approve_photo(&self, id: &str) -> Result<()>;
    fn update_photo_likes(&self, id: &str, likes: u64) -> Result<()>;

    // Removes the photo together with all of its likes and comments
    fn delete_photo(&self, id: &str) -> Result<()>;

    // Ordered by creation time, oldest first
    fn all_photos(&self) -> Result<Vec<Photo>>;
    fn photos_by_approval(&self, approved: bool) -> Result<Vec<Photo>>;
    fn photos_of_photographer(&self, photographer_id: &str) -> Result<Vec<Photo>>;
}

pub trait LikeRepo {
    // Fails with `AlreadyExists` if the user already likes the photo.
    fn create_like(&self, like: &Like) -> Result<()>;
    // Returns `false` if there was nothing to delete.
    fn delete_like(&self, user_id: &str, photo_id: &str) -> Result<bool>;

    fn like_exists(&self, user_id: &str, photo_id: &str) -> Result<bool>;
    fn count_likes_of_photo(&self, photo_id: &str) -> Result<u64>;
}

pub trait CommentRepository {
    fn create_comment(&self, comment: &Comment) -> Result<()>;

    // Ordered by creation time, oldest first
    fn load_comments_of_photo(&self, photo_id: &str) -> Result<Vec<Comment>>;
}
