use rocket::fairing::AdHoc;
use sqlx::{mysql::MySqlPoolOptions, MySql, Pool};

use crate::auth::{Authenticator, MySqlAuthenticator};
use crate::cmp::{channels::Channel, teams::Team};
use crate::config::{ConnectionDetails, SettingsError};

#[derive(Debug, thiserror::Error)]
pub enum SqlDatabaseError {
    #[error("invalid connection details: {0}")]
    InvalidConnectionDetails(#[from] SettingsError),
    #[error("cannot connect to MySQL pool: {0}")]
    Unreachable(#[from] sqlx::Error),
}

/// Read access to the team and channel tables.
///
/// Both listings are full, unfiltered reads with no ordering contract; the
/// caller renders rows in the order they come back.
#[rocket::async_trait]
pub trait Directory: Send + Sync {
    async fn list_teams(&self) -> Result<Vec<Team>, sqlx::Error>;
    async fn list_channels(&self) -> Result<Vec<Channel>, sqlx::Error>;
}

pub struct MySqlDirectory {
    pool: Pool<MySql>,
}

impl MySqlDirectory {
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }
}

#[rocket::async_trait]
impl Directory for MySqlDirectory {
    async fn list_teams(&self) -> Result<Vec<Team>, sqlx::Error> {
        let rows = sqlx::query("SELECT `id`, `name` FROM `Team`;")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Team::from_row).collect()
    }

    async fn list_channels(&self) -> Result<Vec<Channel>, sqlx::Error> {
        let rows = sqlx::query("SELECT `id`, `name` FROM `Channel`;")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Channel::from_row).collect()
    }
}

pub async fn init_database(details: &ConnectionDetails) -> Result<Pool<MySql>, SqlDatabaseError> {
    let url = details.database_url()?;
    let pool = MySqlPoolOptions::new().connect(url.as_str()).await?;
    Ok(pool)
}

/// Connects the pool on ignite and manages the MySQL-backed [`Directory`]
/// and [`Authenticator`]. Launch is aborted when the pool cannot be opened.
pub fn stage(details: ConnectionDetails) -> AdHoc {
    AdHoc::try_on_ignite("MySQL directory", |rocket| async move {
        match init_database(&details).await {
            Ok(pool) => {
                log::info!("connected to MySQL at {}", details.target());
                let directory: Box<dyn Directory> = Box::new(MySqlDirectory::new(pool.clone()));
                let authenticator: Box<dyn Authenticator> = Box::new(MySqlAuthenticator::new(pool));
                Ok(rocket.manage(directory).manage(authenticator))
            }
            Err(err) => {
                log::error!("cannot prepare database connection to {}: {err}", details.target());
                Err(rocket)
            }
        }
    })
}
