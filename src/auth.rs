use chrono::Utc;
use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};
use sha3::{Digest, Sha3_256};
use sqlx::{MySql, Pool, Row};

use crate::cmp::errors::Error;
use crate::config::ShellSettings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The signed-in user, with the profile fields the header shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub id: UserId,
    pub name: String,
    pub avatar_url: Option<String>,
}

impl Viewer {
    /// Up to two uppercase initials, used when the avatar image is missing.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect();

        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }
}

/// Session tokens are stored as their SHA3-256 hex digest.
pub fn token_digest(token: &str) -> String {
    let mut hasher = Sha3_256::new();
    hasher.update(token.as_bytes());
    let hash = hasher.finalize();

    format!("{:x}", hash)
}

#[rocket::async_trait]
pub trait Authenticator: Send + Sync {
    /// `None` when the token matches no live session.
    async fn resolve_viewer(&self, token: &str) -> Result<Option<Viewer>, sqlx::Error>;
}

pub struct MySqlAuthenticator {
    pool: Pool<MySql>,
}

impl MySqlAuthenticator {
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }
}

#[rocket::async_trait]
impl Authenticator for MySqlAuthenticator {
    async fn resolve_viewer(&self, token: &str) -> Result<Option<Viewer>, sqlx::Error> {
        let row = sqlx::query(
            "SELECT u.`id`, u.`name`, u.`avatar_url` FROM `Session` s \
             JOIN `User` u ON u.`id` = s.`user_id` \
             WHERE s.`token_hash` = ? AND s.`expires_at` > ?;",
        )
        .bind(token_digest(token))
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else { return Ok(None) };

        Ok(Some(Viewer {
            id: UserId::new(row.try_get::<String, _>("id")?),
            name: row.try_get::<String, _>("name")?,
            avatar_url: row.try_get::<Option<String>, _>("avatar_url")?,
        }))
    }
}

/// Request guard resolving the session cookie to a viewer.
///
/// A request without the cookie, or with a stale token, yields
/// `Session(None)`. A failing lookup is an error, so routes take this guard
/// as `Result<Session, Error>` to answer with the JSON error body.
#[derive(Debug)]
pub struct Session(pub Option<Viewer>);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Session {
    type Error = Error;

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let (Some(settings), Some(authenticator)) = (
            req.rocket().state::<ShellSettings>(),
            req.rocket().state::<Box<dyn Authenticator>>(),
        ) else {
            let err = Error::new(
                Status::InternalServerError,
                "Authentication is not configured".to_string(),
                "Contact the administrator".to_string(),
            );
            return Outcome::Error((err.status(), err));
        };

        let token = match req.cookies().get(&settings.session_cookie) {
            Some(cookie) => cookie.value().to_string(),
            None => return Outcome::Success(Session(None)),
        };

        match authenticator.resolve_viewer(&token).await {
            Ok(viewer) => Outcome::Success(Session(viewer)),
            Err(err) => {
                log::error!("session lookup failed: {err}");
                let err = Error::from(err);
                Outcome::Error((err.status(), err))
            }
        }
    }
}
