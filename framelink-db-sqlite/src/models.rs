#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users, treat_none_as_null = true)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub role: i16,
    pub country: Option<&'a str>,
    pub active: bool,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: i16,
    pub country: Option<String>,
    pub active: bool,
}

#[derive(Insertable)]
#[diesel(table_name = applications)]
pub struct NewApplication<'a> {
    pub id: &'a str,
    pub user_id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub experience: String,
    pub specialization: String,
    pub portfolio: Option<&'a str>,
    pub bio: &'a str,
    pub status: i16,
    pub submitted_at: i64,
}

#[derive(Queryable)]
pub struct ApplicationEntity {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub experience: String,
    pub specialization: String,
    pub portfolio: Option<String>,
    pub bio: String,
    pub status: i16,
    pub submitted_at: i64,
}

#[derive(Insertable, Queryable)]
#[diesel(table_name = application_images)]
pub struct ApplicationImage {
    pub application_id: String,
    pub pos: i32,
    pub url: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = photographer_profiles, treat_none_as_null = true)]
pub struct NewPhotographerProfile<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub bio: &'a str,
    pub specialization: String,
    pub country: Option<&'a str>,
    pub avatar_url: Option<&'a str>,
    pub availability: i16,
    pub verified: bool,
}

#[derive(Queryable)]
pub struct PhotographerProfileEntity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub bio: String,
    pub specialization: String,
    pub country: Option<String>,
    pub avatar_url: Option<String>,
    pub availability: i16,
    pub verified: bool,
}

#[derive(Insertable)]
#[diesel(table_name = photos)]
pub struct NewPhoto<'a> {
    pub id: &'a str,
    pub photographer_id: &'a str,
    pub url: &'a str,
    pub caption: &'a str,
    pub approved: bool,
    pub likes: i64,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct PhotoEntity {
    pub id: String,
    pub photographer_id: String,
    pub url: String,
    pub caption: String,
    pub approved: bool,
    pub likes: i64,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = photo_likes)]
pub struct NewLike<'a> {
    pub user_id: &'a str,
    pub photo_id: &'a str,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = photo_comments)]
pub struct NewComment<'a> {
    pub id: &'a str,
    pub photo_id: &'a str,
    pub user_id: &'a str,
    pub text: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct CommentEntity {
    pub id: String,
    pub photo_id: String,
    pub user_id: String,
    pub text: String,
    pub created_at: i64,
}
