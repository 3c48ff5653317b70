use super::prelude::*;
use crate::{
    authorization::user::authorize_role, repositories::Error as RepoError,
    util::validate::is_blank,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeToggle {
    /// Whether the user likes the photo after toggling.
    pub liked: bool,
    /// The reconciled number of likes of the photo.
    pub likes: u64,
}

/// Likes or unlikes a photo.
///
/// The stored counter is always recomputed from the
/// likes table after the toggle.
pub fn toggle_like<R>(repo: &R, user_id: &str, photo_id: &str) -> Result<LikeToggle>
where
    R: PhotoRepo + LikeRepo + UserRepo,
{
    let photo = repo.get_photo(photo_id)?;
    let user = repo.get_user(user_id)?;
    authorize_role(&user, Role::User)?;
    let (liked, expected) = if repo.delete_like(user_id, photo_id)? {
        log::info!("User {} unliked photo {}", user.id, photo.id);
        (false, photo.likes.saturating_sub(1))
    } else {
        let like = Like {
            user_id: user.id,
            photo_id: photo.id,
            created_at: Timestamp::now(),
        };
        match repo.create_like(&like) {
            Ok(()) => {
                log::info!("User {} liked photo {}", like.user_id, like.photo_id);
                (true, photo.likes.saturating_add(1))
            }
            Err(RepoError::AlreadyExists) => {
                log::warn!(
                    "User {} already likes photo {}",
                    like.user_id,
                    like.photo_id
                );
                (true, photo.likes)
            }
            Err(err) => return Err(err.into()),
        }
    };
    let likes = store_like_count(repo, photo_id, expected)?;
    Ok(LikeToggle { liked, likes })
}

fn store_like_count<R>(repo: &R, photo_id: &str, expected: u64) -> Result<u64>
where
    R: PhotoRepo + LikeRepo,
{
    let counted = repo.count_likes_of_photo(photo_id)?;
    if counted != expected {
        log::warn!(
            "Like counter of photo {photo_id} diverged: expected {expected}, counted {counted}"
        );
    }
    repo.update_photo_likes(photo_id, counted)?;
    Ok(counted)
}

/// Recomputes the like counter of a single photo.
pub fn reconcile_likes<R>(repo: &R, photo_id: &str) -> Result<u64>
where
    R: PhotoRepo + LikeRepo,
{
    let photo = repo.get_photo(photo_id)?;
    let counted = repo.count_likes_of_photo(photo_id)?;
    if counted != photo.likes {
        log::warn!(
            "Fixing like counter of photo {photo_id}: {} -> {counted}",
            photo.likes
        );
        repo.update_photo_likes(photo_id, counted)?;
    }
    Ok(counted)
}

/// Recomputes the like counters of all photos and
/// returns the number of corrected photos.
pub fn reconcile_all_likes<R>(repo: &R) -> Result<usize>
where
    R: PhotoRepo + LikeRepo,
{
    let mut fixed = 0;
    for photo in repo.all_photos()? {
        let counted = repo.count_likes_of_photo(photo.id.as_str())?;
        if counted != photo.likes {
            log::warn!(
                "Fixing like counter of photo {}: {} -> {counted}",
                photo.id,
                photo.likes
            );
            repo.update_photo_likes(photo.id.as_str(), counted)?;
            fixed += 1;
        }
    }
    log::info!("Reconciled like counters: {fixed} photo(s) fixed");
    Ok(fixed)
}

pub fn is_liked<R: LikeRepo>(repo: &R, user_id: &str, photo_id: &str) -> Result<bool> {
    Ok(repo.like_exists(user_id, photo_id)?)
}

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewComment {
    pub user_id  : Id,
    pub photo_id : Id,
    pub text     : String,
}

pub fn add_comment<R>(repo: &R, new_comment: NewComment) -> Result<Comment>
where
    R: PhotoRepo + UserRepo + CommentRepository,
{
    let NewComment {
        user_id,
        photo_id,
        text,
    } = new_comment;
    if is_blank(&text) {
        return Err(Error::EmptyComment);
    }
    let photo = repo.get_photo(photo_id.as_str())?;
    let user = repo.get_user(user_id.as_str())?;
    authorize_role(&user, Role::User)?;
    let comment = Comment {
        id: Id::new(),
        photo_id: photo.id,
        user_id: user.id,
        text: text.trim().to_owned(),
        created_at: Timestamp::now(),
    };
    repo.create_comment(&comment)?;
    log::info!(
        "User {} commented on photo {}",
        comment.user_id,
        comment.photo_id
    );
    Ok(comment)
}

/// All comments of a photo, oldest first.
pub fn comments_of_photo<R>(repo: &R, photo_id: &str) -> Result<Vec<Comment>>
where
    R: PhotoRepo + CommentRepository,
{
    repo.get_photo(photo_id)?;
    Ok(repo.load_comments_of_photo(photo_id)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use framelink_entities::builders::Builder;

    fn db_with_photo() -> MockDb {
        let db = MockDb::default();
        db.create_user(&User::build().id("jane").finish()).unwrap();
        db.create_user(&User::build().id("john").finish()).unwrap();
        db.create_photo(&Photo::build().id("p1").approved(true).finish())
            .unwrap();
        db
    }

    fn assert_counter_matches(db: &MockDb, photo_id: &str) {
        assert_eq!(
            db.get_photo(photo_id).unwrap().likes,
            db.count_likes_of_photo(photo_id).unwrap()
        );
    }

    #[test]
    fn toggle_twice_restores_the_count() {
        let db = db_with_photo();
        let toggle = toggle_like(&db, "jane", "p1").unwrap();
        assert_eq!(toggle, LikeToggle { liked: true, likes: 1 });
        assert!(is_liked(&db, "jane", "p1").unwrap());
        assert_counter_matches(&db, "p1");

        let toggle = toggle_like(&db, "jane", "p1").unwrap();
        assert_eq!(toggle, LikeToggle { liked: false, likes: 0 });
        assert!(!is_liked(&db, "jane", "p1").unwrap());
        assert_counter_matches(&db, "p1");
    }

    #[test]
    fn count_likes_of_different_users() {
        let db = db_with_photo();
        toggle_like(&db, "jane", "p1").unwrap();
        let toggle = toggle_like(&db, "john", "p1").unwrap();
        assert_eq!(toggle.likes, 2);
        toggle_like(&db, "jane", "p1").unwrap();
        assert_eq!(db.get_photo("p1").unwrap().likes, 1);
        assert_counter_matches(&db, "p1");
    }

    #[test]
    fn heal_a_diverged_counter_while_toggling() {
        let db = db_with_photo();
        db.update_photo_likes("p1", 7).unwrap();
        let toggle = toggle_like(&db, "jane", "p1").unwrap();
        assert_eq!(toggle.likes, 1);
        assert_counter_matches(&db, "p1");
    }

    #[test]
    fn absorb_concurrent_likes() {
        let db = db_with_photo();
        *db.fail_next_like_with_conflict.borrow_mut() = true;
        let toggle = toggle_like(&db, "jane", "p1").unwrap();
        assert!(toggle.liked);
        assert_counter_matches(&db, "p1");
    }

    #[test]
    fn like_unknown_photo_or_user() {
        let db = db_with_photo();
        assert!(toggle_like(&db, "jane", "nope").unwrap_err().is_not_found());
        assert!(toggle_like(&db, "ghost", "p1").unwrap_err().is_not_found());
        assert_eq!(db.count_likes_of_photo("p1").unwrap(), 0);
    }

    #[test]
    fn deactivated_users_cannot_like_or_comment() {
        let db = db_with_photo();
        let mut jane = db.get_user("jane").unwrap();
        jane.active = false;
        db.update_user(&jane).unwrap();
        assert!(matches!(
            toggle_like(&db, "jane", "p1"),
            Err(Error::Forbidden)
        ));
        assert!(!is_liked(&db, "jane", "p1").unwrap());
        assert!(matches!(
            add_comment(
                &db,
                NewComment {
                    user_id: "jane".into(),
                    photo_id: "p1".into(),
                    text: "Still here".into(),
                },
            ),
            Err(Error::Forbidden)
        ));
        assert!(comments_of_photo(&db, "p1").unwrap().is_empty());
    }

    #[test]
    fn reconcile_diverged_counters() {
        let db = db_with_photo();
        db.create_photo(&Photo::build().id("p2").likes(3).finish())
            .unwrap();
        toggle_like(&db, "jane", "p1").unwrap();
        db.update_photo_likes("p1", 0).unwrap();
        assert_eq!(reconcile_all_likes(&db).unwrap(), 2);
        assert_counter_matches(&db, "p1");
        assert_counter_matches(&db, "p2");
        assert_eq!(reconcile_all_likes(&db).unwrap(), 0);
        assert_eq!(reconcile_likes(&db, "p1").unwrap(), 1);
    }

    #[test]
    fn comments_are_appended_in_order() {
        let db = db_with_photo();
        for text in ["First!", "Lovely light"] {
            add_comment(
                &db,
                NewComment {
                    user_id: "john".into(),
                    photo_id: "p1".into(),
                    text: text.into(),
                },
            )
            .unwrap();
        }
        let texts: Vec<_> = comments_of_photo(&db, "p1")
            .unwrap()
            .into_iter()
            .map(|c| c.text)
            .collect();
        assert_eq!(texts, ["First!", "Lovely light"]);
    }

    #[test]
    fn reject_blank_comments() {
        let db = db_with_photo();
        let err = add_comment(
            &db,
            NewComment {
                user_id: "john".into(),
                photo_id: "p1".into(),
                text: " \t".into(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::EmptyComment));
        assert!(err.is_validation());
        assert!(comments_of_photo(&db, "p1").unwrap().is_empty());
    }
}
