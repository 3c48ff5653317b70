use std::{
    fs,
    io::{self, Read as _},
    path::{Path, PathBuf},
};

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    adapters::json::{self, from_json, to_json},
    config::Config,
};
use framelink_application::{cache::ClientCache, prelude as flows, sqlite};
use framelink_core::{entities as e, usecases};

#[derive(Parser)]
#[command(name = "framelink", version, about = "Moderation core of the FrameLink marketplace")]
pub struct Cli {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// SQLite database (overrides the configuration)
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Manage user accounts
    #[command(subcommand)]
    User(UserCommand),

    /// Apply for and review photographer applications
    #[command(subcommand)]
    Application(ApplicationCommand),

    /// Submit and moderate photos
    #[command(subcommand)]
    Photo(PhotoCommand),

    /// Like or unlike a photo
    Like {
        #[arg(long = "as", value_name = "ACCOUNT_ID")]
        account: String,
        photo_id: String,
    },

    /// Comment on a photo
    Comment {
        #[arg(long = "as", value_name = "ACCOUNT_ID")]
        account: String,
        photo_id: String,
        text: String,
    },

    /// List the comments of a photo, oldest first
    Comments { photo_id: String },

    /// Edit the own photographer profile (JSON from a file or stdin)
    Profile {
        #[arg(long = "as", value_name = "ACCOUNT_ID")]
        account: String,
        #[arg(long = "json", value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Search the photographer directory
    Photographers {
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        specialization: Option<e::Specialization>,
        #[arg(long)]
        availability: Option<e::Availability>,
    },

    /// Aggregate marketplace statistics
    Stats {
        /// Aggregate a JSON snapshot instead of the database
        #[arg(long, value_name = "FILE")]
        snapshot: Option<PathBuf>,
    },

    /// Recompute like counters from the stored likes
    ReconcileLikes { photo_id: Option<String> },
}

#[derive(Subcommand)]
enum UserCommand {
    /// Register an account of the identity provider
    Register {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        country: Option<String>,
    },
    /// List all accounts
    List,
    /// Allow a user to sign in again
    Activate {
        #[arg(long = "as", value_name = "ACCOUNT_ID")]
        account: String,
        user_id: String,
    },
    /// Lock a user out
    Deactivate {
        #[arg(long = "as", value_name = "ACCOUNT_ID")]
        account: String,
        user_id: String,
    },
}

#[derive(Subcommand)]
enum ApplicationCommand {
    /// Submit an application form (JSON from a file or stdin)
    Submit {
        #[arg(long = "json", value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// List applications
    List {
        #[arg(long, value_name = "USER_ID")]
        user: Option<String>,
    },
    /// List applications that await a decision
    Pending {
        #[arg(long = "as", value_name = "ACCOUNT_ID")]
        account: String,
    },
    /// Approve or reject an application
    Decide {
        #[arg(long = "as", value_name = "ACCOUNT_ID")]
        account: String,
        application_id: String,
        decision: e::Decision,
    },
}

#[derive(Subcommand)]
enum PhotoCommand {
    /// Add a photo to the moderation queue
    Submit {
        #[arg(long = "as", value_name = "ACCOUNT_ID")]
        account: String,
        #[arg(long)]
        url: e::Url,
        #[arg(long)]
        caption: String,
    },
    /// List the moderation queue
    Pending {
        #[arg(long = "as", value_name = "ACCOUNT_ID")]
        account: String,
    },
    /// List approved photos, newest first
    Feed {
        #[arg(long, value_name = "USER_ID")]
        photographer: Option<String>,
    },
    /// Publish or delete a photo
    Moderate {
        #[arg(long = "as", value_name = "ACCOUNT_ID")]
        account: String,
        photo_id: String,
        decision: e::Decision,
    },
}

pub fn run() -> Result<()> {
    let Cli {
        config,
        db_url,
        command,
    } = Cli::parse();

    let mut cfg = Config::try_load_from_file_or_default(config)?;
    if let Some(db_url) = db_url {
        cfg.db.conn_sqlite = db_url;
    }

    if let Command::Stats {
        snapshot: Some(file),
    } = &command
    {
        let value: serde_json::Value = read_json(Some(file.as_path()))?;
        let snapshot = from_json::snapshot(json::RawSnapshot::from_json(&value));
        let stats = usecases::aggregate_statistics(
            &snapshot.as_statistics_input(),
            e::Timestamp::now(),
            cfg.statistics.recent_window,
        );
        return print_json(&to_json::statistics(stats));
    }

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections =
        sqlite::Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    match command {
        Command::User(cmd) => run_user_command(&connections, cmd),
        Command::Application(cmd) => run_application_command(&connections, &cfg, cmd),
        Command::Photo(cmd) => run_photo_command(&connections, &cfg, cmd),
        Command::Like { account, photo_id } => {
            let toggle = flows::toggle_like(&connections, &account, &photo_id)?;
            print_json(&to_json::like_toggle(toggle))
        }
        Command::Comment {
            account,
            photo_id,
            text,
        } => {
            let comment = flows::add_comment(
                &connections,
                usecases::NewComment {
                    user_id: account.into(),
                    photo_id: photo_id.into(),
                    text,
                },
            )?;
            print_json(&json::Comment::from(comment))
        }
        Command::Comments { photo_id } => {
            let comments = flows::comments_of_photo(&connections, &photo_id)?;
            print_json(&into_json::<_, json::Comment>(comments))
        }
        Command::Profile { account, file } => {
            let update = from_json::try_profile_update(read_json(file.as_deref())?)?;
            let profile = flows::update_own_profile(&connections, &account, update)?;
            print_json(&json::PhotographerProfile::from(profile))
        }
        Command::Photographers {
            country,
            specialization,
            availability,
        } => {
            let filter = usecases::PhotographerFilter {
                country,
                specialization,
                availability,
            };
            let entries = flows::search_photographers(&connections, &filter)?;
            let entries: Vec<_> = entries.into_iter().map(to_json::directory_entry).collect();
            print_json(&entries)
        }
        Command::Stats { snapshot: _ } => {
            let stats = flows::load_statistics(
                &connections,
                e::Timestamp::now(),
                cfg.statistics.recent_window,
            )?;
            print_json(&to_json::statistics(stats))
        }
        Command::ReconcileLikes { photo_id } => match photo_id {
            Some(photo_id) => {
                let likes = flows::reconcile_likes(&connections, &photo_id)?;
                print_json(&serde_json::json!({ "id": photo_id, "likes": likes }))
            }
            None => {
                let fixed = flows::reconcile_all_likes(&connections)?;
                print_json(&serde_json::json!({ "fixed": fixed }))
            }
        },
    }
}

fn run_user_command(connections: &sqlite::Connections, cmd: UserCommand) -> Result<()> {
    match cmd {
        UserCommand::Register {
            id,
            name,
            email,
            country,
        } => {
            let user = flows::register_user(
                connections,
                usecases::NewUser {
                    id: id.into(),
                    name,
                    email,
                    country,
                },
            )?;
            print_json(&json::User::from(user))
        }
        UserCommand::List => {
            let users = flows::all_users(connections)?;
            print_json(&into_json::<_, json::User>(users))
        }
        UserCommand::Activate { account, user_id } => {
            let user = flows::set_user_active(connections, &account, &user_id, true)?;
            print_json(&json::User::from(user))
        }
        UserCommand::Deactivate { account, user_id } => {
            let user = flows::set_user_active(connections, &account, &user_id, false)?;
            print_json(&json::User::from(user))
        }
    }
}

fn run_application_command(
    connections: &sqlite::Connections,
    cfg: &Config,
    cmd: ApplicationCommand,
) -> Result<()> {
    match cmd {
        ApplicationCommand::Submit { file } => {
            let new_application = from_json::try_new_application(read_json(file.as_deref())?)?;
            let application =
                flows::submit_application(connections, new_application, cfg.applications.policy)?;
            print_json(&json::Application::from(application))
        }
        ApplicationCommand::List { user } => {
            let applications = match user {
                Some(user_id) => flows::applications_of_user(connections, &user_id)?,
                None => flows::all_applications(connections)?,
            };
            print_json(&into_json::<_, json::Application>(applications))
        }
        ApplicationCommand::Pending { account } => {
            let applications = flows::pending_applications(connections, &account)?;
            print_json(&into_json::<_, json::Application>(applications))
        }
        ApplicationCommand::Decide {
            account,
            application_id,
            decision,
        } => {
            let application =
                flows::decide_application(connections, &account, &application_id, decision)?;
            print_json(&json::Application::from(application))
        }
    }
}

fn run_photo_command(
    connections: &sqlite::Connections,
    cfg: &Config,
    cmd: PhotoCommand,
) -> Result<()> {
    match cmd {
        PhotoCommand::Submit {
            account,
            url,
            caption,
        } => {
            let photo = flows::submit_photo(
                connections,
                usecases::NewPhoto {
                    photographer_id: account.into(),
                    url,
                    caption,
                },
            )?;
            print_json(&json::Photo::from(photo))
        }
        PhotoCommand::Pending { account } => {
            let photos = flows::pending_photos(connections, &account)?;
            print_json(&into_json::<_, json::Photo>(photos))
        }
        PhotoCommand::Feed { photographer } => {
            let photos = match photographer {
                Some(id) => flows::approved_photos_of_photographer(connections, &id)?,
                None => flows::public_feed(connections)?,
            };
            print_json(&into_json::<_, json::Photo>(photos))
        }
        PhotoCommand::Moderate {
            account,
            photo_id,
            decision,
        } => {
            let mut cache = ClientCache::open(
                connections.clone(),
                account.into(),
                cfg.applications.policy,
                cfg.statistics.recent_window,
            )?;
            let moderation = cache.moderate_photo(&photo_id, decision)?;
            print_json(&to_json::moderation(moderation))
        }
    }
}

fn into_json<T, J: From<T>>(items: Vec<T>) -> Vec<J> {
    items.into_iter().map(J::from).collect()
}

/// Reads JSON from a file or from stdin if no file is given.
fn read_json<T: DeserializeOwned>(file: Option<&Path>) -> Result<T> {
    let input = match file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            input
        }
    };
    Ok(serde_json::from_str(&input)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
