use std::process::exit;

use auth::Session;
use cmp::errors::Error;
use config::{Settings, ShellSettings};
use database::Directory;
use maud::Markup;
use rocket::http::ContentType;
use rocket::{Build, Rocket, State};
use shell::ShellContext;
use theme::Theme;

#[macro_use]
extern crate rocket;

mod auth;
mod cmp;
mod config;
mod database;
mod pages;
mod shell;
mod theme;

#[cfg(test)]
mod fixtures;

async fn render_page(
    team_slug: &str,
    session: Result<Session, Error>,
    directory: &dyn Directory,
    settings: &ShellSettings,
    content: Markup,
) -> Result<Markup, Error> {
    let Session(viewer) = session?;

    match &viewer {
        Some(viewer) => log::debug!("rendering /{team_slug} for {}", viewer.id.as_str()),
        None => log::debug!("no session for /{team_slug}, showing sign-in"),
    }

    let state = shell::resolve(viewer, directory).await.map_err(|err| {
        log::error!("cannot load teams and channels: {err}");
        Error::from(err)
    })?;

    let ctx = ShellContext {
        brand: &settings.brand,
        sign_in_url: &settings.sign_in_url,
        team_slug,
        stylesheet: Theme::HREF,
    };

    Ok(shell::render(&ctx, &state, content))
}

#[get("/<team_slug>")]
async fn team_home(
    team_slug: String,
    session: Result<Session, Error>,
    directory: &State<Box<dyn Directory>>,
    settings: &State<ShellSettings>,
) -> Result<Markup, Error> {
    let content = pages::team_home(&team_slug);
    render_page(&team_slug, session, &**directory.inner(), settings, content).await
}

#[get("/<team_slug>/<channel_name>")]
async fn channel_page(
    team_slug: String,
    channel_name: String,
    session: Result<Session, Error>,
    directory: &State<Box<dyn Directory>>,
    settings: &State<ShellSettings>,
) -> Result<Markup, Error> {
    let content = pages::channel(&channel_name);
    render_page(&team_slug, session, &**directory.inner(), settings, content).await
}

#[get("/assets/shell.css")]
fn stylesheet(theme: &State<Theme>) -> (ContentType, String) {
    (ContentType::CSS, theme.stylesheet().to_string())
}

/// Routes, theme and shell settings. The directory and authenticator are
/// managed separately: by the database stage in production, by fixtures in
/// tests.
fn build_rocket(settings: &Settings) -> Rocket<Build> {
    rocket::build()
        .manage(Theme::init(&settings.theme))
        .manage(settings.shell.clone())
        .mount("/", routes![team_home, channel_page, stylesheet])
}

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    // rocket's logger is not installed before ignite
    let path = Settings::locate();
    let settings = match Settings::load(&path) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("\x1b[31mCannot load settings: {err}\x1b[0m");
            exit(2)
        }
    };

    let _rocket = build_rocket(&settings)
        .attach(database::stage(settings.connection.clone()))
        .launch()
        .await?;

    Ok(())
}
