use duration_str::deserialize_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("framelink.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub applications: Option<Applications>,
    pub statistics: Option<Statistics>,
}

impl Config {
    pub fn try_default() -> Result<Self, toml::de::Error> {
        toml::from_str(DEFAULT_CONFIG_FILE)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u8,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Applications {
    pub allow_concurrent_pending: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Statistics {
    #[serde(deserialize_with = "deserialize_duration")]
    pub recent_window: Duration,
}
