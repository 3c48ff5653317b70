use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

use crate::{id::*, time::*, url::Url};

/// The maximum number of sample images that may be attached
/// to a single application.
pub const MAX_APPLICATION_IMAGES: usize = 5;

/// A user's request to become a verified photographer.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub id             : Id,
    pub user_id        : Id,
    pub name           : String,
    pub email          : String,
    pub experience     : Experience,
    pub specialization : Specialization,
    pub portfolio      : Option<Url>,
    pub bio            : String,
    pub images         : Vec<Url>,
    pub status         : ApplicationStatus,
    pub submitted_at   : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, EnumIter, EnumString, Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ApplicationStatus {
    Rejected = -1,
    Pending  =  0,
    Approved =  1,
}

impl ApplicationStatus {
    pub const fn is_decided(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

pub type ApplicationStatusPrimitive = i16;

#[derive(Debug, Error)]
#[error("Invalid application status primitive: {0}")]
pub struct InvalidApplicationStatusPrimitive(ApplicationStatusPrimitive);

impl TryFrom<ApplicationStatusPrimitive> for ApplicationStatus {
    type Error = InvalidApplicationStatusPrimitive;
    fn try_from(from: ApplicationStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidApplicationStatusPrimitive(from))
    }
}

impl From<ApplicationStatus> for ApplicationStatusPrimitive {
    fn from(from: ApplicationStatus) -> Self {
        from.to_i16().unwrap_or_default()
    }
}

/// The outcome of an admin review, shared by applications and photos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Decision {
    Approved,
    Rejected,
}

impl From<Decision> for ApplicationStatus {
    fn from(from: Decision) -> Self {
        match from {
            Decision::Approved => Self::Approved,
            Decision::Rejected => Self::Rejected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
pub enum Experience {
    #[strum(to_string = "1-2")]
    OneToTwoYears,
    #[strum(to_string = "3-5")]
    ThreeToFiveYears,
    #[strum(to_string = "5-10")]
    FiveToTenYears,
    #[strum(to_string = "10+")]
    MoreThanTenYears,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum Specialization {
    Portrait,
    Wedding,
    Landscape,
    Street,
    Commercial,
    Fashion,
    Wildlife,
    Architecture,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn status_primitive_round_trip() {
        for status in ApplicationStatus::iter() {
            let primitive = ApplicationStatusPrimitive::from(status);
            assert_eq!(status, ApplicationStatus::try_from(primitive).unwrap());
        }
        assert!(ApplicationStatus::try_from(5).is_err());
    }

    #[test]
    fn only_pending_is_undecided() {
        assert!(!ApplicationStatus::Pending.is_decided());
        assert!(ApplicationStatus::Approved.is_decided());
        assert!(ApplicationStatus::Rejected.is_decided());
    }

    #[test]
    fn parse_experience_ranges() {
        assert_eq!("3-5".parse::<Experience>().unwrap(), Experience::ThreeToFiveYears);
        assert_eq!("10+".parse::<Experience>().unwrap(), Experience::MoreThanTenYears);
        assert_eq!(Experience::OneToTwoYears.to_string(), "1-2");
        assert!("2-3".parse::<Experience>().is_err());
    }

    #[test]
    fn parse_specialization_ignoring_case() {
        assert_eq!(
            "portrait".parse::<Specialization>().unwrap(),
            Specialization::Portrait
        );
        assert_eq!(Specialization::Wildlife.to_string(), "Wildlife");
    }

    #[test]
    fn decision_maps_to_terminal_status() {
        assert_eq!(
            ApplicationStatus::from(Decision::Approved),
            ApplicationStatus::Approved
        );
        assert_eq!(
            ApplicationStatus::from(Decision::Rejected),
            ApplicationStatus::Rejected
        );
        assert_eq!("rejected".parse::<Decision>().unwrap(), Decision::Rejected);
    }
}
