use super::prelude::*;
use crate::{
    repositories::Error as RepoError,
    util::validate::{is_blank, normalize_country, Validate},
};
use std::collections::HashSet;

/// Changes of a photographer to their own profile.
///
/// Fields that are `None` remain unchanged.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub bio          : Option<String>,
    pub availability : Option<Availability>,
    pub avatar_url   : Option<Url>,
    pub country      : Option<String>,
}

pub fn update_own_profile<R>(
    repo: &R,
    account_id: &str,
    update: ProfileUpdate,
) -> Result<PhotographerProfile>
where
    R: PhotographerProfileRepo + UserRepo,
{
    let account = repo.get_user(account_id)?;
    if !account.active {
        return Err(Error::Forbidden);
    }
    let mut profile = repo
        .try_get_profile(account.id.as_str())?
        .ok_or(RepoError::NotFound)?;
    let ProfileUpdate {
        bio,
        availability,
        avatar_url,
        country,
    } = update;
    if let Some(bio) = bio {
        if is_blank(&bio) {
            return Err(Error::EmptyBio);
        }
        profile.bio = bio.trim().to_owned();
    }
    if let Some(availability) = availability {
        profile.availability = availability;
    }
    if avatar_url.is_some() {
        profile.avatar_url = avatar_url;
    }
    if country.is_some() {
        profile.country = normalize_country(country);
    }
    profile.validate()?;
    repo.update_profile(&profile)?;
    log::info!("Photographer {} updated the profile", profile.id);
    Ok(profile)
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct PhotographerFilter {
    pub country        : Option<String>,
    pub specialization : Option<Specialization>,
    pub availability   : Option<Availability>,
}

impl PhotographerFilter {
    fn matches(&self, profile: &PhotographerProfile) -> bool {
        let country_matches = match (&self.country, &profile.country) {
            (None, _) => true,
            (Some(wanted), Some(country)) => wanted.eq_ignore_ascii_case(country),
            (Some(_), None) => false,
        };
        country_matches
            && self
                .specialization
                .map_or(true, |s| s == profile.specialization)
            && self.availability.map_or(true, |a| a == profile.availability)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub profile: PhotographerProfile,
    /// Number of approved photos.
    pub photo_count: usize,
}

/// Verified photographers with an active account, ordered by name.
pub fn search_photographers<R>(repo: &R, filter: &PhotographerFilter) -> Result<Vec<DirectoryEntry>>
where
    R: PhotographerProfileRepo + UserRepo + PhotoRepo,
{
    let active_users: HashSet<Id> = repo
        .all_users()?
        .into_iter()
        .filter(|u| u.active)
        .map(|u| u.id)
        .collect();
    let approved_photos = repo.photos_by_approval(true)?;
    let mut entries: Vec<_> = repo
        .all_profiles()?
        .into_iter()
        .filter(|p| p.verified && active_users.contains(&p.id) && filter.matches(p))
        .map(|profile| {
            let photo_count = approved_photos
                .iter()
                .filter(|photo| photo.photographer_id == profile.id)
                .count();
            DirectoryEntry {
                profile,
                photo_count,
            }
        })
        .collect();
    entries.sort_by(|a, b| a.profile.name.cmp(&b.profile.name));
    Ok(entries)
}
