use super::prelude::*;
use crate::repositories::Error as RepoError;
use std::{cell::RefCell, result};

type RepoResult<T> = result::Result<T, RepoError>;

trait Key {
    fn key(&self) -> &str;
}

impl Key for User {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for Application {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for PhotographerProfile {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for Photo {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for Comment {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

#[derive(Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    pub applications: RefCell<Vec<Application>>,
    pub profiles: RefCell<Vec<PhotographerProfile>>,
    pub photos: RefCell<Vec<Photo>>,
    pub likes: RefCell<Vec<Like>>,
    pub comments: RefCell<Vec<Comment>>,
    /// Simulates a like that has been inserted concurrently
    /// by another session right before our own insert.
    pub fail_next_like_with_conflict: RefCell<bool>,
}

fn get<T: Clone + Key>(objects: &[T], id: &str) -> RepoResult<T> {
    match objects.iter().find(|x| x.key() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(RepoError::NotFound),
    }
}

fn create<T: Clone + Key>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.key() == e.key()) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(e);
    Ok(())
}

fn update<T: Clone + Key>(objects: &mut [T], e: &T) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.key() == e.key()) {
        objects[pos] = e.clone();
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

fn delete<T: Clone + Key>(objects: &mut Vec<T>, id: &str) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.key() == id) {
        objects.remove(pos);
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        if self.users.borrow().iter().any(|u| u.email == user.email) {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.users.borrow_mut(), user.clone())
    }
    fn update_user(&self, user: &User) -> RepoResult<()> {
        update(&mut self.users.borrow_mut(), user)
    }
    fn get_user(&self, id: &str) -> RepoResult<User> {
        get(&self.users.borrow(), id)
    }
    fn try_get_user_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }
    fn all_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.borrow().clone())
    }
    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }
}

impl ApplicationRepo for MockDb {
    fn create_application(&self, application: &Application) -> RepoResult<()> {
        create(&mut self.applications.borrow_mut(), application.clone())
    }
    fn update_application_status(&self, id: &str, status: ApplicationStatus) -> RepoResult<()> {
        let mut application = get(&self.applications.borrow(), id)?;
        application.status = status;
        update(&mut self.applications.borrow_mut(), &application)
    }
    fn get_application(&self, id: &str) -> RepoResult<Application> {
        get(&self.applications.borrow(), id)
    }
    fn all_applications(&self) -> RepoResult<Vec<Application>> {
        let mut applications = self.applications.borrow().clone();
        applications.sort_by_key(|a| a.submitted_at);
        Ok(applications)
    }
    fn applications_by_status(&self, status: ApplicationStatus) -> RepoResult<Vec<Application>> {
        Ok(self
            .all_applications()?
            .into_iter()
            .filter(|a| a.status == status)
            .collect())
    }
    fn applications_of_user(&self, user_id: &str) -> RepoResult<Vec<Application>> {
        Ok(self
            .all_applications()?
            .into_iter()
            .filter(|a| a.user_id.as_str() == user_id)
            .collect())
    }
}

impl PhotographerProfileRepo for MockDb {
    fn create_profile(&self, profile: &PhotographerProfile) -> RepoResult<()> {
        create(&mut self.profiles.borrow_mut(), profile.clone())
    }
    fn update_profile(&self, profile: &PhotographerProfile) -> RepoResult<()> {
        update(&mut self.profiles.borrow_mut(), profile)
    }
    fn try_get_profile(&self, id: &str) -> RepoResult<Option<PhotographerProfile>> {
        match get(&self.profiles.borrow(), id) {
            Ok(profile) => Ok(Some(profile)),
            Err(RepoError::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
    fn all_profiles(&self) -> RepoResult<Vec<PhotographerProfile>> {
        Ok(self.profiles.borrow().clone())
    }
}

impl PhotoRepo for MockDb {
    fn create_photo(&self, photo: &Photo) -> RepoResult<()> {
        create(&mut self.photos.borrow_mut(), photo.clone())
    }
    fn get_photo(&self, id: &str) -> RepoResult<Photo> {
        get(&self.photos.borrow(), id)
    }
    fn approve_photo(&self, id: &str) -> RepoResult<()> {
        let mut photo = self.get_photo(id)?;
        photo.approved = true;
        update(&mut self.photos.borrow_mut(), &photo)
    }
    fn update_photo_likes(&self, id: &str, likes: u64) -> RepoResult<()> {
        let mut photo = self.get_photo(id)?;
        photo.likes = likes;
        update(&mut self.photos.borrow_mut(), &photo)
    }
    fn delete_photo(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.photos.borrow_mut(), id)?;
        self.likes.borrow_mut().retain(|l| l.photo_id.as_str() != id);
        self.comments
            .borrow_mut()
            .retain(|c| c.photo_id.as_str() != id);
        Ok(())
    }
    fn all_photos(&self) -> RepoResult<Vec<Photo>> {
        let mut photos = self.photos.borrow().clone();
        photos.sort_by_key(|p| p.created_at);
        Ok(photos)
    }
    fn photos_by_approval(&self, approved: bool) -> RepoResult<Vec<Photo>> {
        Ok(self
            .all_photos()?
            .into_iter()
            .filter(|p| p.approved == approved)
            .collect())
    }
    fn photos_of_photographer(&self, photographer_id: &str) -> RepoResult<Vec<Photo>> {
        Ok(self
            .all_photos()?
            .into_iter()
            .filter(|p| p.photographer_id.as_str() == photographer_id)
            .collect())
    }
}

impl LikeRepo for MockDb {
    fn create_like(&self, like: &Like) -> RepoResult<()> {
        if self.fail_next_like_with_conflict.replace(false) {
            self.likes.borrow_mut().push(like.clone());
            return Err(RepoError::AlreadyExists);
        }
        if self.like_exists(like.user_id.as_str(), like.photo_id.as_str())? {
            return Err(RepoError::AlreadyExists);
        }
        self.likes.borrow_mut().push(like.clone());
        Ok(())
    }
    fn delete_like(&self, user_id: &str, photo_id: &str) -> RepoResult<bool> {
        let mut likes = self.likes.borrow_mut();
        let count = likes.len();
        likes.retain(|l| !(l.user_id.as_str() == user_id && l.photo_id.as_str() == photo_id));
        Ok(likes.len() < count)
    }
    fn like_exists(&self, user_id: &str, photo_id: &str) -> RepoResult<bool> {
        Ok(self
            .likes
            .borrow()
            .iter()
            .any(|l| l.user_id.as_str() == user_id && l.photo_id.as_str() == photo_id))
    }
    fn count_likes_of_photo(&self, photo_id: &str) -> RepoResult<u64> {
        Ok(self
            .likes
            .borrow()
            .iter()
            .filter(|l| l.photo_id.as_str() == photo_id)
            .count() as u64)
    }
}

impl CommentRepository for MockDb {
    fn create_comment(&self, comment: &Comment) -> RepoResult<()> {
        create(&mut self.comments.borrow_mut(), comment.clone())
    }
    fn load_comments_of_photo(&self, photo_id: &str) -> RepoResult<Vec<Comment>> {
        let mut comments: Vec<_> = self
            .comments
            .borrow()
            .iter()
            .filter(|c| c.photo_id.as_str() == photo_id)
            .cloned()
            .collect();
        comments.sort_by_key(|c| c.created_at);
        Ok(comments)
    }
}
