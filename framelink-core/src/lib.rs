pub mod authorization;
pub mod db;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use framelink_entities::{
        application::*, engagement::*, id::*, photo::*, profile::*, time::*, url::Url, user::*,
    };
}
