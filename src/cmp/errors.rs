use std::io::Cursor;

use rocket::http::{ContentType, Status};
use rocket::response::{self, Responder};
use rocket::{Request, Response};
use serde::Serializer;

/// JSON error body returned by every route: the status code, what went
/// wrong and what the caller can do about it.
#[derive(Debug, serde::Serialize)]
pub struct Error {
    #[serde(serialize_with = "status_code")]
    status: Status,
    message: String,
    solution: String,
}

fn status_code<S: Serializer>(status: &Status, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(status.code)
}

impl Error {
    pub fn new(status: Status, message: String, solution: String) -> Self {
        Self { status, message, solution }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    fn body(&self) -> String {
        serde_json::to_string(&self).unwrap_or("{}".to_string())
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => Error::new(
                Status::ServiceUnavailable,
                "Unable to acquire intern connection".to_string(),
                "Retry later".to_string(),
            ),
            _ => Error::new(
                Status::InternalServerError,
                "Cannot read from the database".to_string(),
                "Retry later, then contact the administrator".to_string(),
            ),
        }
    }
}

impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let body = self.body();
        Response::build()
            .sized_body(body.len(), Cursor::new(body))
            .header(ContentType::JSON)
            .status(self.status)
            .ok()
    }
}
