pub use framelink_boundary::*;

use framelink_application::cache;
use framelink_core::{entities as e, usecases};

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the entities both are outside this crate.

    pub fn try_new_application(from: NewApplication) -> anyhow::Result<usecases::NewApplication> {
        let NewApplication {
            user_id,
            experience,
            specialization,
            portfolio,
            bio,
            images,
        } = from;
        let portfolio = portfolio
            .filter(|url| !url.trim().is_empty())
            .map(|url| url.trim().parse::<e::Url>())
            .transpose()?;
        let images = images
            .into_list()?
            .iter()
            .map(|url| url.trim().parse::<e::Url>())
            .collect::<Result<_, _>>()?;
        Ok(usecases::NewApplication {
            user_id: user_id.into(),
            experience: parse_experience(&experience)?,
            specialization: parse_specialization(&specialization)?,
            portfolio,
            bio,
            images,
        })
    }

    pub fn try_profile_update(from: ProfileUpdate) -> anyhow::Result<usecases::ProfileUpdate> {
        let ProfileUpdate {
            bio,
            availability,
            avatar_url,
            country,
        } = from;
        Ok(usecases::ProfileUpdate {
            bio,
            availability: availability.map(Into::into),
            avatar_url: avatar_url.as_deref().map(str::parse).transpose()?,
            country,
        })
    }

    /// Converts all elements that represent valid entities.
    pub fn snapshot(from: RawSnapshot) -> cache::Snapshot {
        let RawSnapshot {
            users,
            applications,
            photos,
            profiles,
        } = from;
        cache::Snapshot {
            users: users.map(|users| users.into_iter().map(Into::into).collect()),
            applications: applications.map(valid_entities),
            photos: photos.map(valid_entities),
            profiles: profiles.map(valid_entities),
        }
    }

    fn valid_entities<T, E>(items: Vec<T>) -> Vec<E>
    where
        E: TryFrom<T, Error = ConversionError>,
    {
        items
            .into_iter()
            .filter_map(|item| {
                E::try_from(item)
                    .map_err(|err| log::warn!("Skipping invalid snapshot item: {err}"))
                    .ok()
            })
            .collect()
    }
}

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    pub fn review_counts(from: usecases::ReviewCounts) -> ReviewCounts {
        let usecases::ReviewCounts {
            pending,
            approved,
            rejected,
        } = from;
        ReviewCounts {
            pending,
            approved,
            rejected,
        }
    }

    pub fn statistics(from: usecases::Statistics) -> Statistics {
        let usecases::Statistics {
            total_users,
            active_photographers,
            regular_users,
            verified_profiles,
            applications,
            photos,
            recent_applications,
            recent_photos,
        } = from;
        Statistics {
            total_users,
            active_photographers,
            regular_users,
            verified_profiles,
            applications: review_counts(applications),
            photos: review_counts(photos),
            recent_applications,
            recent_photos,
        }
    }

    pub fn like_toggle(from: usecases::LikeToggle) -> LikeToggle {
        let usecases::LikeToggle { liked, likes } = from;
        LikeToggle { liked, likes }
    }

    pub fn directory_entry(from: usecases::DirectoryEntry) -> DirectoryEntry {
        let usecases::DirectoryEntry {
            profile,
            photo_count,
        } = from;
        DirectoryEntry {
            profile: profile.into(),
            photo_count,
        }
    }

    pub fn moderation(from: cache::Moderation) -> ModerationOutcome {
        match from {
            cache::Moderation::Published(photo) => ModerationOutcome::Published {
                photo: photo.into(),
            },
            cache::Moderation::Deleted(id) => ModerationOutcome::Deleted { id: id.into() },
            cache::Moderation::Vanished(id) => ModerationOutcome::Vanished { id: id.into() },
        }
    }
}
