//! A session-local snapshot of the store.
//!
//! Every command issued through [`ClientCache`] is executed by the
//! corresponding flow and afterwards the affected collections are
//! re-queried. Reads never touch the store.

use super::{prelude::*, *};
use std::{collections::HashMap, time::Duration};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Applications,
    Photos,
    Profiles,
    Users,
}

/// The locally cached collections.
///
/// A collection is `None` until it has been loaded.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub applications: Option<Vec<Application>>,
    pub photos: Option<Vec<Photo>>,
    pub profiles: Option<Vec<PhotographerProfile>>,
    pub users: Option<Vec<User>>,
}

impl Snapshot {
    pub fn as_statistics_input(&self) -> usecases::Snapshot<'_> {
        usecases::Snapshot {
            users: self.users.as_deref(),
            applications: self.applications.as_deref(),
            photos: self.photos.as_deref(),
            profiles: self.profiles.as_deref(),
        }
    }
}

/// The outcome of moderating a photo through the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Moderation {
    Published(Photo),
    Deleted(Id),
    /// The photo had already been removed by someone else.
    Vanished(Id),
}

impl From<usecases::ModerationOutcome> for Moderation {
    fn from(from: usecases::ModerationOutcome) -> Self {
        match from {
            usecases::ModerationOutcome::Published(photo) => Self::Published(photo),
            usecases::ModerationOutcome::Deleted(id) => Self::Deleted(id),
        }
    }
}

pub struct ClientCache {
    connections: sqlite::Connections,
    account_id: Id,
    policy: usecases::ApplicationPolicy,
    recent_window: Duration,
    snapshot: Snapshot,
    generations: HashMap<Collection, u64>,
}

impl ClientCache {
    /// Opens a session for the given account and loads all collections.
    pub fn open(
        connections: sqlite::Connections,
        account_id: Id,
        policy: usecases::ApplicationPolicy,
        recent_window: Duration,
    ) -> Result<Self> {
        let mut cache = Self {
            connections,
            account_id,
            policy,
            recent_window,
            snapshot: Snapshot::default(),
            generations: HashMap::new(),
        };
        for collection in [
            Collection::Applications,
            Collection::Photos,
            Collection::Profiles,
            Collection::Users,
        ] {
            cache.refresh(collection)?;
        }
        Ok(cache)
    }

    pub fn account_id(&self) -> &Id {
        &self.account_id
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Counts how often a collection has been refreshed.
    pub fn generation(&self, collection: Collection) -> u64 {
        self.generations.get(&collection).copied().unwrap_or_default()
    }

    pub fn refresh(&mut self, collection: Collection) -> Result<()> {
        let connections = &self.connections;
        match collection {
            Collection::Applications => {
                self.snapshot.applications = Some(all_applications(connections)?);
            }
            Collection::Photos => {
                self.snapshot.photos = Some(all_photos(connections)?);
            }
            Collection::Profiles => {
                self.snapshot.profiles = Some(all_profiles(connections)?);
            }
            Collection::Users => {
                self.snapshot.users = Some(all_users(connections)?);
            }
        }
        let generation = self.generations.entry(collection).or_default();
        *generation += 1;
        log::debug!("Refreshed {collection:?} (generation {generation})");
        Ok(())
    }

    fn refresh_all(&mut self, collections: &[Collection]) -> Result<()> {
        for collection in collections {
            self.refresh(*collection)?;
        }
        Ok(())
    }

    pub fn pending_applications(&self) -> Vec<&Application> {
        self.snapshot
            .applications
            .iter()
            .flatten()
            .filter(|a| a.status == ApplicationStatus::Pending)
            .collect()
    }

    pub fn moderation_queue(&self) -> Vec<&Photo> {
        self.snapshot
            .photos
            .iter()
            .flatten()
            .filter(|p| p.is_pending())
            .collect()
    }

    /// Approved photos, newest first.
    pub fn public_feed(&self) -> Vec<&Photo> {
        let mut feed: Vec<_> = self
            .snapshot
            .photos
            .iter()
            .flatten()
            .filter(|p| p.approved)
            .collect();
        feed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        feed
    }

    pub fn statistics(&self, now: Timestamp) -> usecases::Statistics {
        usecases::aggregate_statistics(
            &self.snapshot.as_statistics_input(),
            now,
            self.recent_window,
        )
    }

    pub fn submit_application(
        &mut self,
        new_application: usecases::NewApplication,
    ) -> Result<Application> {
        let application = submit_application(&self.connections, new_application, self.policy)?;
        self.refresh(Collection::Applications)?;
        Ok(application)
    }

    pub fn decide_application(
        &mut self,
        application_id: &str,
        decision: Decision,
    ) -> Result<Application> {
        let application = decide_application(
            &self.connections,
            self.account_id.as_str(),
            application_id,
            decision,
        )?;
        self.refresh_all(&[
            Collection::Applications,
            Collection::Users,
            Collection::Profiles,
        ])?;
        Ok(application)
    }

    pub fn submit_photo(&mut self, url: Url, caption: String) -> Result<Photo> {
        let new_photo = usecases::NewPhoto {
            photographer_id: self.account_id.clone(),
            url,
            caption,
        };
        let photo = submit_photo(&self.connections, new_photo)?;
        self.refresh(Collection::Photos)?;
        Ok(photo)
    }

    /// Moderates a photo.
    ///
    /// A photo that no longer exists is dropped from the
    /// local queue instead of failing.
    pub fn moderate_photo(&mut self, photo_id: &str, decision: Decision) -> Result<Moderation> {
        let moderation = match moderate_photo(
            &self.connections,
            self.account_id.as_str(),
            photo_id,
            decision,
        ) {
            Ok(outcome) => outcome.into(),
            Err(err) if err.is_not_found() => {
                log::info!("Photo {photo_id} has vanished");
                if let Some(photos) = &mut self.snapshot.photos {
                    photos.retain(|p| p.id.as_str() != photo_id);
                }
                Moderation::Vanished(photo_id.into())
            }
            Err(err) => return Err(err),
        };
        self.refresh(Collection::Photos)?;
        Ok(moderation)
    }

    pub fn toggle_like(&mut self, photo_id: &str) -> Result<usecases::LikeToggle> {
        let toggle = toggle_like(&self.connections, self.account_id.as_str(), photo_id)?;
        self.refresh(Collection::Photos)?;
        Ok(toggle)
    }

    /// Comments are not cached.
    pub fn add_comment(&mut self, photo_id: &str, text: String) -> Result<Comment> {
        add_comment(
            &self.connections,
            usecases::NewComment {
                user_id: self.account_id.clone(),
                photo_id: photo_id.into(),
                text,
            },
        )
    }

    pub fn update_own_profile(
        &mut self,
        update: usecases::ProfileUpdate,
    ) -> Result<PhotographerProfile> {
        let profile = update_own_profile(&self.connections, self.account_id.as_str(), update)?;
        self.refresh(Collection::Profiles)?;
        Ok(profile)
    }

    pub fn set_user_active(&mut self, user_id: &str, active: bool) -> Result<User> {
        let user = set_user_active(&self.connections, self.account_id.as_str(), user_id, active)?;
        self.refresh(Collection::Users)?;
        Ok(user)
    }
}
