#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # framelink-entities
//!
//! Reusable, agnostic domain entities for FrameLink.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic like the review workflow.

pub mod application;
pub mod engagement;
pub mod id;
pub mod photo;
pub mod profile;
pub mod time;
pub mod user;
pub mod url {
    pub use url::{ParseError, Url};
}

#[cfg(any(test, feature = "builders"))]
pub mod builders;
