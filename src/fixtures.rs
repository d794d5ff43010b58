//! In-memory collaborators for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::auth::{Authenticator, Viewer};
use crate::cmp::{channels::Channel, teams::Team};
use crate::database::Directory;

/// Serves fixed listings and counts how many were requested.
#[derive(Clone)]
pub struct MemoryDirectory {
    teams: Vec<Team>,
    channels: Vec<Channel>,
    fail: bool,
    queries: Arc<AtomicUsize>,
}

impl MemoryDirectory {
    pub fn new(teams: Vec<Team>, channels: Vec<Channel>) -> Self {
        Self { teams, channels, fail: false, queries: Arc::new(AtomicUsize::new(0)) }
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::new(vec![], vec![]) }
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn record(&self) -> Result<(), sqlx::Error> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(sqlx::Error::PoolTimedOut)
        } else {
            Ok(())
        }
    }
}

#[rocket::async_trait]
impl Directory for MemoryDirectory {
    async fn list_teams(&self) -> Result<Vec<Team>, sqlx::Error> {
        self.record()?;
        Ok(self.teams.clone())
    }

    async fn list_channels(&self) -> Result<Vec<Channel>, sqlx::Error> {
        self.record()?;
        Ok(self.channels.clone())
    }
}

/// Maps raw tokens to viewers; `broken` fails every lookup.
#[derive(Default)]
pub struct MemoryAuthenticator {
    sessions: HashMap<String, Viewer>,
    broken: bool,
}

impl MemoryAuthenticator {
    pub fn with_session(mut self, token: &str, viewer: Viewer) -> Self {
        self.sessions.insert(token.to_string(), viewer);
        self
    }

    pub fn broken() -> Self {
        Self { broken: true, ..Self::default() }
    }
}

#[rocket::async_trait]
impl Authenticator for MemoryAuthenticator {
    async fn resolve_viewer(&self, token: &str) -> Result<Option<Viewer>, sqlx::Error> {
        if self.broken {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(self.sessions.get(token).cloned())
    }
}
