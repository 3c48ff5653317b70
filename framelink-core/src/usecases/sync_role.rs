use super::prelude::*;

/// What happened to the applicant when an approval was synchronized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Promotion {
    /// Admins keep their role and never get a profile.
    AdminUnchanged,
    /// The user already was a photographer, only the profile was updated.
    ProfileRefreshed,
    /// The user became a photographer with a new or updated profile.
    Promoted,
}

/// Keeps the applicant's role and profile in sync with an
/// approved application.
///
/// This is the only place where users are promoted.
/// Applying the same application again leaves the state unchanged.
pub fn promote_to_photographer<R>(repo: &R, application: &Application) -> Result<Promotion>
where
    R: UserRepo + PhotographerProfileRepo,
{
    debug_assert_eq!(application.status, ApplicationStatus::Approved);
    let mut user = repo.get_user(application.user_id.as_str())?;
    if user.role == Role::Admin {
        log::info!(
            "User {} is an admin: role and profile remain unchanged",
            user.id
        );
        return Ok(Promotion::AdminUnchanged);
    }
    let promotion = match repo.try_get_profile(user.id.as_str())? {
        Some(mut profile) => {
            refresh_profile(&mut profile, application);
            repo.update_profile(&profile)?;
            if user.role == Role::Photographer {
                Promotion::ProfileRefreshed
            } else {
                Promotion::Promoted
            }
        }
        None => {
            repo.create_profile(&new_profile(&user, application))?;
            Promotion::Promoted
        }
    };
    if user.role != Role::Photographer {
        user.role = Role::Photographer;
        repo.update_user(&user)?;
        log::info!("User {} is now a photographer", user.id);
    }
    Ok(promotion)
}

fn new_profile(user: &User, application: &Application) -> PhotographerProfile {
    PhotographerProfile {
        id: user.id.clone(),
        name: application.name.clone(),
        email: application.email.clone(),
        bio: application.bio.clone(),
        specialization: application.specialization,
        country: user.country.clone(),
        avatar_url: None,
        availability: Availability::Available,
        verified: true,
    }
}

// Fields owned by the profile owner (avatar, country and
// availability) are left untouched.
fn refresh_profile(profile: &mut PhotographerProfile, application: &Application) {
    profile.name = application.name.clone();
    profile.email = application.email.clone();
    profile.bio = application.bio.clone();
    profile.specialization = application.specialization;
    profile.verified = true;
}
