pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{application_builder::*, photo_builder::*, profile_builder::*, user_builder::*};

pub mod user_builder {

    use super::*;
    use crate::{id::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.user.name = name.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = email.into();
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn country(mut self, country: Option<&str>) -> Self {
            self.user.country = country.map(Into::into);
            self
        }
        pub fn active(mut self, active: bool) -> Self {
            self.user.active = active;
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            let id = Id::new();
            UserBuild {
                user: User {
                    email: format!("{id}@example.com"),
                    id,
                    name: "".into(),
                    role: Role::User,
                    country: None,
                    active: true,
                },
            }
        }
    }
}

pub mod application_builder {

    use super::*;
    use crate::{application::*, id::*, time::*};

    #[derive(Debug)]
    pub struct ApplicationBuild {
        application: Application,
    }

    impl ApplicationBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.application.id = id.into();
            self
        }
        pub fn user_id(mut self, user_id: &str) -> Self {
            self.application.user_id = user_id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.application.name = name.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.application.email = email.into();
            self
        }
        pub fn experience(mut self, experience: Experience) -> Self {
            self.application.experience = experience;
            self
        }
        pub fn specialization(mut self, specialization: Specialization) -> Self {
            self.application.specialization = specialization;
            self
        }
        pub fn bio(mut self, bio: &str) -> Self {
            self.application.bio = bio.into();
            self
        }
        pub fn images(mut self, images: &[&str]) -> Self {
            self.application.images = images.iter().map(|url| url.parse().unwrap()).collect();
            self
        }
        pub fn status(mut self, status: ApplicationStatus) -> Self {
            self.application.status = status;
            self
        }
        pub fn submitted_at(mut self, submitted_at: Timestamp) -> Self {
            self.application.submitted_at = submitted_at;
            self
        }
        pub fn finish(self) -> Application {
            self.application
        }
    }

    impl Builder for Application {
        type Build = ApplicationBuild;
        fn build() -> ApplicationBuild {
            ApplicationBuild {
                application: Application {
                    id: Id::new(),
                    user_id: Id::new(),
                    name: "".into(),
                    email: "".into(),
                    experience: Experience::OneToTwoYears,
                    specialization: Specialization::Portrait,
                    portfolio: None,
                    bio: "".into(),
                    images: vec![],
                    status: ApplicationStatus::Pending,
                    submitted_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod photo_builder {

    use super::*;
    use crate::{id::*, photo::*, time::*};

    #[derive(Debug)]
    pub struct PhotoBuild {
        photo: Photo,
    }

    impl PhotoBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.photo.id = id.into();
            self
        }
        pub fn photographer_id(mut self, photographer_id: &str) -> Self {
            self.photo.photographer_id = photographer_id.into();
            self
        }
        pub fn url(mut self, url: &str) -> Self {
            self.photo.url = url.parse().unwrap();
            self
        }
        pub fn caption(mut self, caption: &str) -> Self {
            self.photo.caption = caption.into();
            self
        }
        pub fn approved(mut self, approved: bool) -> Self {
            self.photo.approved = approved;
            self
        }
        pub fn likes(mut self, likes: u64) -> Self {
            self.photo.likes = likes;
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.photo.created_at = created_at;
            self
        }
        pub fn finish(self) -> Photo {
            self.photo
        }
    }

    impl Builder for Photo {
        type Build = PhotoBuild;
        fn build() -> PhotoBuild {
            PhotoBuild {
                photo: Photo {
                    id: Id::new(),
                    photographer_id: Id::new(),
                    url: "https://images.example.com/photo.jpg".parse().unwrap(),
                    caption: "".into(),
                    approved: false,
                    likes: 0,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod profile_builder {

    use super::*;
    use crate::{application::Specialization, id::*, profile::*};

    #[derive(Debug)]
    pub struct PhotographerProfileBuild {
        profile: PhotographerProfile,
    }

    impl PhotographerProfileBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.profile.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.profile.name = name.into();
            self
        }
        pub fn bio(mut self, bio: &str) -> Self {
            self.profile.bio = bio.into();
            self
        }
        pub fn specialization(mut self, specialization: Specialization) -> Self {
            self.profile.specialization = specialization;
            self
        }
        pub fn country(mut self, country: Option<&str>) -> Self {
            self.profile.country = country.map(Into::into);
            self
        }
        pub fn availability(mut self, availability: Availability) -> Self {
            self.profile.availability = availability;
            self
        }
        pub fn verified(mut self, verified: bool) -> Self {
            self.profile.verified = verified;
            self
        }
        pub fn finish(self) -> PhotographerProfile {
            self.profile
        }
    }

    impl Builder for PhotographerProfile {
        type Build = PhotographerProfileBuild;
        fn build() -> PhotographerProfileBuild {
            PhotographerProfileBuild {
                profile: PhotographerProfile {
                    id: Id::new(),
                    name: "".into(),
                    email: "".into(),
                    bio: "".into(),
                    specialization: Specialization::Portrait,
                    country: None,
                    avatar_url: None,
                    availability: Availability::Available,
                    verified: true,
                },
            }
        }
    }
}
