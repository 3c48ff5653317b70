use framelink_entities::{profile::PhotographerProfile, user::User};
use thiserror::Error;

pub use fast_chemail::is_valid_email;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Two-letter country codes in upper case, e.g. "DE".
pub fn is_valid_country_code(code: &str) -> bool {
    code.len() == 2 && code.chars().all(|c| c.is_ascii_uppercase())
}

pub fn normalize_country(country: Option<String>) -> Option<String> {
    country
        .map(|c| c.trim().to_ascii_uppercase())
        .filter(|c| !c.is_empty())
}

#[derive(Debug, Error)]
pub enum UserInvalidation {
    #[error("Invalid id")]
    Id,
    #[error("Invalid name")]
    Name,
    #[error("Invalid email address")]
    Email,
    #[error("Invalid country code")]
    Country,
}

impl Validate for User {
    type Error = UserInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !self.id.is_valid() {
            return Err(UserInvalidation::Id);
        }
        if is_blank(&self.name) {
            return Err(UserInvalidation::Name);
        }
        if !is_valid_email(&self.email) {
            return Err(UserInvalidation::Email);
        }
        if let Some(ref country) = self.country {
            if !is_valid_country_code(country) {
                return Err(UserInvalidation::Country);
            }
        }
        Ok(())
    }
}

impl AutoCorrect for User {
    fn auto_correct(mut self) -> Self {
        self.name = self.name.trim().to_owned();
        self.email = self.email.trim().to_lowercase();
        self.country = normalize_country(self.country);
        self
    }
}

#[derive(Debug, Error)]
pub enum ProfileInvalidation {
    #[error("The bio must not be empty")]
    Bio,
    #[error("Invalid country code")]
    Country,
}

impl Validate for PhotographerProfile {
    type Error = ProfileInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if is_blank(&self.bio) {
            return Err(ProfileInvalidation::Bio);
        }
        if let Some(ref country) = self.country {
            if !is_valid_country_code(country) {
                return Err(ProfileInvalidation::Country);
            }
        }
        Ok(())
    }
}

impl AutoCorrect for PhotographerProfile {
    fn auto_correct(mut self) -> Self {
        self.bio = self.bio.trim().to_owned();
        self.country = normalize_country(self.country);
        self
    }
}
