//! The page shell wrapped around every `/<team>/...` page.
//!
//! Rendering is two steps: [`resolve`] decides whether a viewer is signed in
//! and, only then, loads teams and channels; [`render`] turns the result into
//! markup around the nested page content. The second step is pure.

pub mod nav;
pub mod path;
pub mod ui;
mod view;

use maud::Markup;
use rocket::futures::future;

use crate::auth::Viewer;
use crate::cmp::{channels::Channel, teams::Team};
use crate::database::Directory;

/// Per-render inputs that do not come from the database.
#[derive(Debug, Clone, Copy)]
pub struct ShellContext<'a> {
    pub brand: &'a str,
    pub sign_in_url: &'a str,
    pub team_slug: &'a str,
    pub stylesheet: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellState {
    Unauthenticated,
    Authenticated {
        viewer: Viewer,
        teams: Vec<Team>,
        channels: Vec<Channel>,
    },
}

/// Loads what the authenticated layout needs. Without a viewer nothing is
/// queried; otherwise both listings must succeed.
pub async fn resolve(viewer: Option<Viewer>, directory: &dyn Directory) -> Result<ShellState, sqlx::Error> {
    let Some(viewer) = viewer else {
        return Ok(ShellState::Unauthenticated);
    };

    let (teams, channels) = future::try_join(directory.list_teams(), directory.list_channels()).await?;

    Ok(ShellState::Authenticated { viewer, teams, channels })
}

/// The full HTML document. `content` is placed as-is below the header; it is
/// dropped for the sign-in page.
pub fn render(ctx: &ShellContext<'_>, state: &ShellState, content: Markup) -> Markup {
    view::page(ctx, state, content)
}
