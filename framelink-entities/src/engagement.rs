use crate::{id::*, time::*};

/// The existence of a like means that the user
/// currently likes the photo.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub user_id    : Id,
    pub photo_id   : Id,
    pub created_at : Timestamp,
}

/// Comments are append-only and never edited.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id         : Id,
    pub photo_id   : Id,
    pub user_id    : Id,
    pub text       : String,
    pub created_at : Timestamp,
}
