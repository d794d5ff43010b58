//! Page bodies nested inside the shell.

use maud::{html, Markup};

pub fn team_home(team_slug: &str) -> Markup {
    html! {
        section.page-body {
            h1 { (team_slug) }
            p { "Pick a channel from the sidebar." }
        }
    }
}

pub fn channel(channel_name: &str) -> Markup {
    html! {
        section.page-body {
            h1 { "#" (channel_name) }
        }
    }
}
