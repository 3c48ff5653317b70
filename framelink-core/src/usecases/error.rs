use crate::{
    authorization, repositories,
    util::validate::{ProfileInvalidation, UserInvalidation},
};
use framelink_entities::application::{ApplicationStatus, MAX_APPLICATION_IMAGES};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid id")]
    Id,
    #[error("Invalid name")]
    Name,
    #[error("Invalid email address")]
    Email,
    #[error("Invalid country code")]
    Country,
    #[error("Invalid URL")]
    Url,
    #[error("Invalid experience")]
    Experience,
    #[error("Invalid specialization")]
    Specialization,
    #[error("Invalid availability")]
    Availability,
    #[error("The bio must not be empty")]
    EmptyBio,
    #[error("The caption must not be empty")]
    EmptyCaption,
    #[error("Empty comment")]
    EmptyComment,
    #[error("Too many images: {0} (at most {max} are allowed)", max = MAX_APPLICATION_IMAGES)]
    TooManyImages(usize),
    #[error("The user already exists")]
    UserExists,
    #[error("The user already has a pending application")]
    PendingApplicationExists,
    #[error("The application has already been {from} and cannot be {to}")]
    InvalidTransition {
        from: ApplicationStatus,
        to: ApplicationStatus,
    },
    #[error("This is not allowed")]
    Forbidden,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl Error {
    /// Rejected input that could be corrected and resubmitted.
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Id
                | Self::Name
                | Self::Email
                | Self::Country
                | Self::Url
                | Self::Experience
                | Self::Specialization
                | Self::Availability
                | Self::EmptyBio
                | Self::EmptyCaption
                | Self::EmptyComment
                | Self::TooManyImages(_)
        )
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Repo(repositories::Error::NotFound))
    }
}

impl From<authorization::user::Error> for Error {
    fn from(_: authorization::user::Error) -> Self {
        Self::Forbidden
    }
}

impl From<framelink_entities::url::ParseError> for Error {
    fn from(_: framelink_entities::url::ParseError) -> Self {
        Self::Url
    }
}

impl From<UserInvalidation> for Error {
    fn from(err: UserInvalidation) -> Self {
        match err {
            UserInvalidation::Id => Self::Id,
            UserInvalidation::Name => Self::Name,
            UserInvalidation::Email => Self::Email,
            UserInvalidation::Country => Self::Country,
        }
    }
}

impl From<ProfileInvalidation> for Error {
    fn from(err: ProfileInvalidation) -> Self {
        match err {
            ProfileInvalidation::Bio => Self::EmptyBio,
            ProfileInvalidation::Country => Self::Country,
        }
    }
}
