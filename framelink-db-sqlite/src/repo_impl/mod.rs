// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};
use num_traits::ToPrimitive as _;
use std::{fmt::Display, str::FromStr};

use framelink_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod application;
mod comment;
mod like;
mod photo;
mod profile;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

// Updates and deletes of a single row by its primary key
fn expect_single_row(affected_rows: usize) -> Result<()> {
    match affected_rows {
        0 => Err(repo::Error::NotFound),
        1 => Ok(()),
        _ => Err(anyhow!("{affected_rows} rows affected instead of 1").into()),
    }
}

fn load_timestamp(millis: i64) -> Result<Timestamp> {
    Timestamp::try_from_millis(millis).map_err(|err| repo::Error::Other(err.into()))
}

fn load_url(url: &str) -> Result<Url> {
    url.parse()
        .map_err(|err| anyhow!("Invalid URL '{url}': {err}").into())
}

fn load_parsed<T>(value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .parse()
        .map_err(|err| anyhow!("Invalid value '{value}': {err}").into())
}

fn load_count(count: i64) -> Result<u64> {
    count
        .to_u64()
        .ok_or_else(|| anyhow!("Invalid count: {count}").into())
}

fn store_count(count: u64) -> Result<i64> {
    count
        .to_i64()
        .ok_or_else(|| anyhow!("Count out of range: {count}").into())
}
