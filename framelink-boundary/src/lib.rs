use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::{parse_experience, parse_specialization, ConversionError};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id      : String,
    pub name    : String,
    pub email   : String,
    pub role    : UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country : Option<String>,
    #[serde(default = "default_active")]
    pub active  : bool,
}

const fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    User,
    Photographer,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id             : String,
    pub user_id        : String,
    pub name           : String,
    pub email          : String,
    pub experience     : String,
    pub specialization : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio      : Option<String>,
    pub bio            : String,
    #[serde(default)]
    pub images         : Vec<String>,
    pub status         : ApplicationStatus,
    /// Unix timestamp in milliseconds
    pub submitted_at   : i64,
}

/// A submitted application form.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewApplication {
    pub user_id        : String,
    pub experience     : String,
    pub specialization : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio      : Option<String>,
    pub bio            : String,
    #[serde(default)]
    pub images         : ImageUrls,
}

/// Image URLs are either sent as a list or as a
/// JSON-encoded list inside a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageUrls {
    List(Vec<String>),
    Encoded(String),
}

impl Default for ImageUrls {
    fn default() -> Self {
        Self::List(vec![])
    }
}

impl ImageUrls {
    pub fn into_list(self) -> Result<Vec<String>, serde_json::Error> {
        match self {
            Self::List(urls) => Ok(urls),
            Self::Encoded(encoded) if encoded.trim().is_empty() => Ok(vec![]),
            Self::Encoded(encoded) => serde_json::from_str(&encoded),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    Busy,
    NotAvailable,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotographerProfile {
    pub id             : String,
    pub name           : String,
    pub email          : String,
    pub bio            : String,
    pub specialization : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country        : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url     : Option<String>,
    pub availability   : Availability,
    pub verified       : bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    #[serde(flatten)]
    pub profile: PhotographerProfile,
    pub photo_count: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUpdate {
    pub bio: Option<String>,
    pub availability: Option<Availability>,
    pub avatar_url: Option<String>,
    pub country: Option<String>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id              : String,
    pub photographer_id : String,
    pub url             : String,
    pub caption         : String,
    pub approved        : bool,
    #[serde(default)]
    pub likes           : u64,
    /// Unix timestamp in milliseconds
    pub created_at      : i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ModerationOutcome {
    Published { photo: Photo },
    Deleted { id: String },
    /// The photo did not exist (anymore).
    Vanished { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeToggle {
    pub liked: bool,
    pub likes: u64,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id         : String,
    pub photo_id   : String,
    pub user_id    : String,
    pub text       : String,
    /// Unix timestamp in milliseconds
    pub created_at : i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewCounts {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_users          : usize,
    pub active_photographers : usize,
    pub regular_users        : usize,
    pub verified_profiles    : usize,
    pub applications         : ReviewCounts,
    pub photos               : ReviewCounts,
    pub recent_applications  : usize,
    pub recent_photos        : usize,
}

/// Collections as received from an untrusted source.
///
/// A collection is `None` if it is missing or not an array.
/// Elements that cannot be parsed are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSnapshot {
    pub users: Option<Vec<User>>,
    pub applications: Option<Vec<Application>>,
    pub photos: Option<Vec<Photo>>,
    pub profiles: Option<Vec<PhotographerProfile>>,
}

impl RawSnapshot {
    pub fn from_json(value: &Value) -> Self {
        Self {
            users: parse_collection(value.get("users")),
            applications: parse_collection(value.get("applications")),
            photos: parse_collection(value.get("photos")),
            profiles: parse_collection(value.get("profiles")),
        }
    }
}

pub fn parse_collection<T: DeserializeOwned>(value: Option<&Value>) -> Option<Vec<T>> {
    let items = value?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|item| T::deserialize(item).ok())
            .collect(),
    )
}
