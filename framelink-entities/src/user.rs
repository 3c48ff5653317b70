use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{Display, EnumString};
use thiserror::Error;

use crate::id::Id;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id      : Id,
    pub name    : String,
    pub email   : String,
    pub role    : Role,
    pub country : Option<String>,
    pub active  : bool,
}

#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive, ToPrimitive, EnumString, Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Role {
    #[default]
    User         = 0,
    Photographer = 1,
    Admin        = 2,
}

pub type RolePrimitive = i16;

#[derive(Debug, Error)]
#[error("Invalid role primitive: {0}")]
pub struct InvalidRolePrimitive(RolePrimitive);

impl TryFrom<RolePrimitive> for Role {
    type Error = InvalidRolePrimitive;
    fn try_from(from: RolePrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidRolePrimitive(from))
    }
}

impl From<Role> for RolePrimitive {
    fn from(from: Role) -> Self {
        // All variants fit into an i16
        from.to_i16().unwrap_or_default()
    }
}
