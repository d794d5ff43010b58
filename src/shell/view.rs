use maud::{html, Markup, DOCTYPE};

use super::nav::{MenuEntry, NavAction, ACCOUNT_MENU, EVENT_ACTIONS};
use super::path::{channel_path, team_path};
use super::ui::{self, Size, Variant};
use super::{ShellContext, ShellState};
use crate::auth::Viewer;
use crate::cmp::{channels::Channel, teams::Team};

pub(super) fn page(ctx: &ShellContext<'_>, state: &ShellState, content: Markup) -> Markup {
    let body = match state {
        ShellState::Unauthenticated => sign_in(ctx),
        ShellState::Authenticated { viewer, teams, channels } => html! {
            div.page {
                div.container {
                    div.layout {
                        (sidebar(ctx, teams, channels))
                        (content_region(viewer, content))
                    }
                }
            }
        },
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (ctx.brand) }
                link rel="stylesheet" href=(ctx.stylesheet);
            }
            body {
                (body)
            }
        }
    }
}

fn sign_in(ctx: &ShellContext<'_>) -> Markup {
    html! {
        div.sign-in-screen {
            form.sign-in method="get" action=(ctx.sign_in_url) {
                h1 { "Sign in" }
                p { "to continue to " (ctx.brand) }
                input type="hidden" name="redirect_url" value=(team_path(ctx.team_slug));
                (ui::submit_button(Variant::Default, Size::Default, html! { "Continue" }))
            }
        }
    }
}

fn sidebar(ctx: &ShellContext<'_>, teams: &[Team], channels: &[Channel]) -> Markup {
    html! {
        aside.sidebar {
            div.brand {
                p.brand-label { (ctx.brand) }
            }
            div.sections {
                div.section {
                    h2.section-title { "Events" }
                    div.stack {
                        @for action in EVENT_ACTIONS {
                            (nav_action(action))
                        }
                    }
                }
                div.section {
                    h2.section-title { "Channels" }
                    (ui::scroll_area(channel_list(ctx.team_slug, channels)))
                }
                div.section {
                    h2.section-title { "Teams" }
                    (ui::scroll_area(team_list(teams)))
                }
            }
        }
    }
}

fn channel_list(team_slug: &str, channels: &[Channel]) -> Markup {
    html! {
        div.stack.channel-list {
            @for channel in channels {
                @if let Some(href) = channel_path(team_slug, &channel.name) {
                    (ui::link_button(
                        &href,
                        Variant::Ghost,
                        Size::Sm,
                        "full-width font-normal",
                        html! { (ui::icon("hash")) (channel.name) },
                    ))
                }
            }
        }
    }
}

fn team_list(teams: &[Team]) -> Markup {
    html! {
        div.stack.team-list {
            @for team in teams {
                (ui::button(
                    team_variant(team),
                    Size::Sm,
                    false,
                    "full-width font-normal",
                    html! { (team.name) },
                ))
            }
        }
    }
}

fn team_variant(team: &Team) -> Variant {
    if team.is_highlighted() {
        Variant::Subtle
    } else {
        Variant::Ghost
    }
}

/// Unavailable actions render as disabled buttons, never as links.
fn nav_action(action: &NavAction) -> Markup {
    let body = html! { (ui::icon(action.icon)) (action.label) };
    ui::button(Variant::Ghost, Size::Sm, !action.enabled, "full-width", body)
}

fn content_region(viewer: &Viewer, content: Markup) -> Markup {
    html! {
        div.content {
            div.content-inner {
                div.header {
                    div.viewer-name {
                        h3 { (viewer.name) }
                    }
                    (account_menu(viewer))
                }
                (content)
            }
        }
    }
}

fn account_menu(viewer: &Viewer) -> Markup {
    let trigger = ui::avatar(
        viewer.avatar_url.as_deref(),
        &format!("@{}", viewer.name),
        &viewer.initials(),
    );
    ui::dropdown("Account menu", trigger, menu_entries(ACCOUNT_MENU))
}

fn menu_entries(entries: &[MenuEntry]) -> Markup {
    html! {
        @for entry in entries {
            @match entry {
                MenuEntry::Label(text) => {
                    (ui::menu_label(text))
                }
                MenuEntry::Separator => {
                    (ui::menu_separator())
                }
                MenuEntry::Group(inner) => {
                    div.menu-group role="group" { (menu_entries(inner)) }
                }
                MenuEntry::Item(item) => {
                    (ui::menu_item(item.icon, item.label, item.shortcut, item.enabled))
                }
                MenuEntry::Submenu { label, icon, entries } => {
                    (ui::submenu(icon, label, menu_entries(entries)))
                }
            }
        }
    }
}
