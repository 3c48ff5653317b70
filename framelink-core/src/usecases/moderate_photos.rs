use super::{authorize_account, prelude::*};
use crate::util::validate::is_blank;

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewPhoto {
    pub photographer_id : Id,
    pub url             : Url,
    pub caption         : String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModerationOutcome {
    /// The photo is visible in the public feed.
    Published(Photo),
    /// The photo has been removed together with its likes and comments.
    Deleted(Id),
}

/// Adds a photo to the moderation queue.
pub fn submit_photo<R>(repo: &R, new_photo: NewPhoto) -> Result<Photo>
where
    R: PhotoRepo + UserRepo,
{
    let NewPhoto {
        photographer_id,
        url,
        caption,
    } = new_photo;
    if is_blank(&caption) {
        return Err(Error::EmptyCaption);
    }
    let photographer = authorize_account(repo, photographer_id.as_str(), Role::Photographer)?;
    let photo = Photo {
        id: Id::new(),
        photographer_id: photographer.id,
        url,
        caption: caption.trim().to_owned(),
        approved: false,
        likes: 0,
        created_at: Timestamp::now(),
    };
    repo.create_photo(&photo)?;
    log::info!(
        "Photographer {} submitted photo {}",
        photo.photographer_id,
        photo.id
    );
    Ok(photo)
}

/// Publishes or permanently deletes a photo.
///
/// Unlike applications rejected photos are not kept.
pub fn moderate_photo<R: PhotoRepo>(
    repo: &R,
    id: &str,
    decision: Decision,
) -> Result<ModerationOutcome> {
    let mut photo = repo.get_photo(id)?;
    match decision {
        Decision::Approved => {
            if photo.approved {
                log::info!("Photo {id} has already been approved");
            } else {
                repo.approve_photo(id)?;
                photo.approved = true;
                log::info!("Approved photo {id}");
            }
            Ok(ModerationOutcome::Published(photo))
        }
        Decision::Rejected => {
            repo.delete_photo(id)?;
            log::info!("Rejected and deleted photo {id}");
            Ok(ModerationOutcome::Deleted(photo.id))
        }
    }
}

/// The moderation queue, oldest first.
pub fn pending_photos<R: PhotoRepo>(repo: &R) -> Result<Vec<Photo>> {
    Ok(repo.photos_by_approval(false)?)
}

/// All approved photos, newest first.
pub fn public_feed<R: PhotoRepo>(repo: &R) -> Result<Vec<Photo>> {
    let mut photos = repo.photos_by_approval(true)?;
    photos.reverse();
    Ok(photos)
}

pub fn approved_photos_of_photographer<R: PhotoRepo>(
    repo: &R,
    photographer_id: &str,
) -> Result<Vec<Photo>> {
    let mut photos: Vec<_> = repo
        .photos_of_photographer(photographer_id)?
        .into_iter()
        .filter(|p| p.approved)
        .collect();
    photos.reverse();
    Ok(photos)
}
