use super::*;
use framelink_entities as e;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Invalid URL: {0}")]
    Url(#[from] e::url::ParseError),
    #[error("Invalid experience: {0}")]
    Experience(String),
    #[error("Invalid specialization: {0}")]
    Specialization(String),
    #[error(transparent)]
    Timestamp(#[from] e::time::TimestampRangeError),
}

impl From<e::user::Role> for UserRole {
    fn from(from: e::user::Role) -> Self {
        use e::user::Role::*;
        match from {
            User => UserRole::User,
            Photographer => UserRole::Photographer,
            Admin => UserRole::Admin,
        }
    }
}

impl From<UserRole> for e::user::Role {
    fn from(from: UserRole) -> Self {
        use e::user::Role::*;
        match from {
            UserRole::User => User,
            UserRole::Photographer => Photographer,
            UserRole::Admin => Admin,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            name,
            email,
            role,
            country,
            active,
        } = from;
        Self {
            id: id.into(),
            name,
            email,
            role: role.into(),
            country,
            active,
        }
    }
}

impl From<User> for e::user::User {
    fn from(from: User) -> Self {
        let User {
            id,
            name,
            email,
            role,
            country,
            active,
        } = from;
        Self {
            id: id.into(),
            name,
            email,
            role: role.into(),
            country,
            active,
        }
    }
}

impl From<e::application::ApplicationStatus> for ApplicationStatus {
    fn from(from: e::application::ApplicationStatus) -> Self {
        use e::application::ApplicationStatus::*;
        match from {
            Pending => ApplicationStatus::Pending,
            Approved => ApplicationStatus::Approved,
            Rejected => ApplicationStatus::Rejected,
        }
    }
}

impl From<ApplicationStatus> for e::application::ApplicationStatus {
    fn from(from: ApplicationStatus) -> Self {
        use e::application::ApplicationStatus::*;
        match from {
            ApplicationStatus::Pending => Pending,
            ApplicationStatus::Approved => Approved,
            ApplicationStatus::Rejected => Rejected,
        }
    }
}

impl From<e::application::Application> for Application {
    fn from(from: e::application::Application) -> Self {
        let e::application::Application {
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
        } = from;
        Self {
            id: id.into(),
            user_id: user_id.into(),
            name,
            email,
            experience: experience.to_string(),
            specialization: specialization.to_string(),
            portfolio: portfolio.map(String::from),
            bio,
            images: images.into_iter().map(String::from).collect(),
            status: status.into(),
            submitted_at: submitted_at.as_millis(),
        }
    }
}

impl TryFrom<Application> for e::application::Application {
    type Error = ConversionError;
    fn try_from(from: Application) -> Result<Self, Self::Error> {
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
        } = from;
        Ok(Self {
            id: id.into(),
            user_id: user_id.into(),
            name,
            email,
            experience: parse_experience(&experience)?,
            specialization: parse_specialization(&specialization)?,
            portfolio: portfolio.as_deref().map(str::parse).transpose()?,
            bio,
            images: images
                .iter()
                .map(|url| url.parse::<e::url::Url>())
                .collect::<Result<_, _>>()?,
            status: status.into(),
            submitted_at: e::time::Timestamp::try_from_millis(submitted_at)?,
        })
    }
}

pub fn parse_experience(
    experience: &str,
) -> Result<e::application::Experience, ConversionError> {
    experience
        .trim()
        .parse()
        .map_err(|_| ConversionError::Experience(experience.to_owned()))
}

pub fn parse_specialization(
    specialization: &str,
) -> Result<e::application::Specialization, ConversionError> {
    specialization
        .trim()
        .parse()
        .map_err(|_| ConversionError::Specialization(specialization.to_owned()))
}

impl From<e::profile::Availability> for Availability {
    fn from(from: e::profile::Availability) -> Self {
        use e::profile::Availability::*;
        match from {
            Available => Availability::Available,
            Busy => Availability::Busy,
            NotAvailable => Availability::NotAvailable,
        }
    }
}

impl From<Availability> for e::profile::Availability {
    fn from(from: Availability) -> Self {
        use e::profile::Availability::*;
        match from {
            Availability::Available => Available,
            Availability::Busy => Busy,
            Availability::NotAvailable => NotAvailable,
        }
    }
}

impl From<e::profile::PhotographerProfile> for PhotographerProfile {
    fn from(from: e::profile::PhotographerProfile) -> Self {
        let e::profile::PhotographerProfile {
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
            id: id.into(),
            name,
            email,
            bio,
            specialization: specialization.to_string(),
            country,
            avatar_url: avatar_url.map(String::from),
            availability: availability.into(),
            verified,
        }
    }
}

impl TryFrom<PhotographerProfile> for e::profile::PhotographerProfile {
    type Error = ConversionError;
    fn try_from(from: PhotographerProfile) -> Result<Self, Self::Error> {
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
        Ok(Self {
            id: id.into(),
            name,
            email,
            bio,
            specialization: parse_specialization(&specialization)?,
            country,
            avatar_url: avatar_url.as_deref().map(str::parse).transpose()?,
            availability: availability.into(),
            verified,
        })
    }
}

impl From<e::photo::Photo> for Photo {
    fn from(from: e::photo::Photo) -> Self {
        let e::photo::Photo {
            id,
            photographer_id,
            url,
            caption,
            approved,
            likes,
            created_at,
        } = from;
        Self {
            id: id.into(),
            photographer_id: photographer_id.into(),
            url: url.into(),
            caption,
            approved,
            likes,
            created_at: created_at.as_millis(),
        }
    }
}

impl TryFrom<Photo> for e::photo::Photo {
    type Error = ConversionError;
    fn try_from(from: Photo) -> Result<Self, Self::Error> {
        let Photo {
            id,
            photographer_id,
            url,
            caption,
            approved,
            likes,
            created_at,
        } = from;
        Ok(Self {
            id: id.into(),
            photographer_id: photographer_id.into(),
            url: url.parse()?,
            caption,
            approved,
            likes,
            created_at: e::time::Timestamp::try_from_millis(created_at)?,
        })
    }
}

impl From<e::engagement::Comment> for Comment {
    fn from(from: e::engagement::Comment) -> Self {
        let e::engagement::Comment {
            id,
            photo_id,
            user_id,
            text,
            created_at,
        } = from;
        Self {
            id: id.into(),
            photo_id: photo_id.into(),
            user_id: user_id.into(),
            text,
            created_at: created_at.as_millis(),
        }
    }
}
