use anyhow::{anyhow, Result};
use framelink_core::usecases::ApplicationPolicy;
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "framelink.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub applications: Applications,
    pub statistics: Statistics,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::debug!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    raw::Config::try_default()?
                }
                _ => return Err(err.into()),
            },
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct Applications {
    pub policy: ApplicationPolicy,
}

pub struct Statistics {
    pub recent_window: Duration,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            applications,
            statistics,
        } = from;

        // Missing sections are taken from the default configuration
        let defaults = raw::Config::try_default()?;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db
            .or(defaults.db)
            .ok_or_else(|| anyhow!("Missing DB configuration"))?;
        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::Applications {
            allow_concurrent_pending,
        } = applications
            .or(defaults.applications)
            .ok_or_else(|| anyhow!("Missing applications configuration"))?;
        let applications = Applications {
            policy: ApplicationPolicy {
                allow_concurrent_pending,
            },
        };

        let raw::Statistics { recent_window } = statistics
            .or(defaults.statistics)
            .ok_or_else(|| anyhow!("Missing statistics configuration"))?;
        let statistics = Statistics { recent_window };

        Ok(Self {
            db,
            applications,
            statistics,
        })
    }
}
