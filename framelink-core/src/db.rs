use crate::repositories::*;

pub trait Db:
    UserRepo + ApplicationRepo + PhotographerProfileRepo + PhotoRepo + LikeRepo + CommentRepository
{
}

impl<T> Db for T where
    T: UserRepo
        + ApplicationRepo
        + PhotographerProfileRepo
        + PhotoRepo
        + LikeRepo
        + CommentRepository
{
}
