use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

use crate::{application::Specialization, id::Id, url::Url};

/// The public profile of a verified photographer.
///
/// Profiles are a projection of an approved application and
/// share their id with the owning user.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotographerProfile {
    pub id             : Id,
    pub name           : String,
    pub email          : String,
    pub bio            : String,
    pub specialization : Specialization,
    pub country        : Option<String>,
    pub avatar_url     : Option<Url>,
    pub availability   : Availability,
    pub verified       : bool,
}

#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, EnumIter, EnumString, Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Availability {
    #[default]
    Available    = 0,
    Busy         = 1,
    NotAvailable = 2,
}

pub type AvailabilityPrimitive = i16;

#[derive(Debug, Error)]
#[error("Invalid availability primitive: {0}")]
pub struct InvalidAvailabilityPrimitive(AvailabilityPrimitive);

impl TryFrom<AvailabilityPrimitive> for Availability {
    type Error = InvalidAvailabilityPrimitive;
    fn try_from(from: AvailabilityPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidAvailabilityPrimitive(from))
    }
}

impl From<Availability> for AvailabilityPrimitive {
    fn from(from: Availability) -> Self {
        from.to_i16().unwrap_or_default()
    }
}
