use super::prelude::*;
use std::time::Duration;

/// Submissions within this window count as recent.
pub const DEFAULT_RECENT_WINDOW: Duration = Duration::from_secs(7 * 24 * 60 * 60);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewCounts {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    pub total_users          : usize,
    pub active_photographers : usize,
    pub regular_users        : usize,
    pub verified_profiles    : usize,
    pub applications         : ReviewCounts,
    /// Rejected photos are deleted and thus
    /// `photos.rejected` is always zero.
    pub photos               : ReviewCounts,
    pub recent_applications  : usize,
    pub recent_photos        : usize,
}

/// A possibly incomplete view of all collections.
///
/// Missing collections are counted as empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct Snapshot<'a> {
    pub users: Option<&'a [User]>,
    pub applications: Option<&'a [Application]>,
    pub photos: Option<&'a [Photo]>,
    pub profiles: Option<&'a [PhotographerProfile]>,
}

pub fn aggregate_statistics(
    snapshot: &Snapshot<'_>,
    now: Timestamp,
    recent_window: Duration,
) -> Statistics {
    let users = snapshot.users.unwrap_or_default();
    let applications = snapshot.applications.unwrap_or_default();
    let photos = snapshot.photos.unwrap_or_default();
    let profiles = snapshot.profiles.unwrap_or_default();

    // If the window reaches beyond the earliest representable
    // point in time everything is recent.
    let since = now.checked_sub(recent_window);
    let is_recent = |t: Timestamp| since.map_or(true, |since| t > since);

    let mut stats = Statistics {
        total_users: users.len(),
        ..Default::default()
    };
    for user in users {
        match user.role {
            Role::Photographer if user.active => stats.active_photographers += 1,
            Role::User => stats.regular_users += 1,
            _ => {}
        }
    }
    stats.verified_profiles = profiles.iter().filter(|p| p.verified).count();
    for application in applications {
        match application.status {
            ApplicationStatus::Pending => stats.applications.pending += 1,
            ApplicationStatus::Approved => stats.applications.approved += 1,
            ApplicationStatus::Rejected => stats.applications.rejected += 1,
        }
        if is_recent(application.submitted_at) {
            stats.recent_applications += 1;
        }
    }
    for photo in photos {
        if photo.approved {
            stats.photos.approved += 1;
        } else {
            stats.photos.pending += 1;
        }
        if is_recent(photo.created_at) {
            stats.recent_photos += 1;
        }
    }
    stats
}

/// Loads all collections from the store and aggregates them.
pub fn load_statistics<R: Db>(repo: &R, now: Timestamp, recent_window: Duration) -> Result<Statistics> {
    let users = repo.all_users()?;
    let applications = repo.all_applications()?;
    let photos = repo.all_photos()?;
    let profiles = repo.all_profiles()?;
    let snapshot = Snapshot {
        users: Some(&users),
        applications: Some(&applications),
        photos: Some(&photos),
        profiles: Some(&profiles),
    };
    Ok(aggregate_statistics(&snapshot, now, recent_window))
}
