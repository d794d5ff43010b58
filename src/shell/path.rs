//! Link paths for team and channel pages.
//!
//! A path is `/<team>` or `/<team>/<channel>`; each segment is
//! percent-encoded so a name can never add or remove a segment. An empty
//! channel name has no path: `/<team>/` would land on the team page.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Bytes that may not appear raw in a path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

fn segment(raw: &str) -> String {
    match raw {
        "." => "%2E".to_string(),
        ".." => "%2E%2E".to_string(),
        _ => utf8_percent_encode(raw, SEGMENT).to_string(),
    }
}

pub fn team_path(team_slug: &str) -> String {
    format!("/{}", segment(team_slug))
}

pub fn channel_path(team_slug: &str, channel_name: &str) -> Option<String> {
    if channel_name.is_empty() {
        return None;
    }
    Some(format!("{}/{}", team_path(team_slug), segment(channel_name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_pass_through() {
        assert_eq!(team_path("acme"), "/acme");
        assert_eq!(channel_path("acme", "general").as_deref(), Some("/acme/general"));
        assert_eq!(channel_path("acme", "dev-ops_2").as_deref(), Some("/acme/dev-ops_2"));
    }

    #[test]
    fn separators_stay_inside_their_segment() {
        assert_eq!(channel_path("acme", "a/b").as_deref(), Some("/acme/a%2Fb"));
        assert_eq!(channel_path("ac me", "what?#").as_deref(), Some("/ac%20me/what%3F%23"));
        assert_eq!(channel_path("acme", "100%").as_deref(), Some("/acme/100%25"));
    }

    #[test]
    fn dot_segments_are_escaped() {
        assert_eq!(channel_path("acme", "..").as_deref(), Some("/acme/%2E%2E"));
        assert_eq!(channel_path(".", "general").as_deref(), Some("/%2E/general"));
        assert_eq!(channel_path("acme", ".hidden").as_deref(), Some("/acme/.hidden"));
    }

    #[test]
    fn empty_channel_name_has_no_path() {
        assert_eq!(channel_path("acme", ""), None);
        assert_eq!(channel_path("acme", " ").as_deref(), Some("/acme/%20"));
    }

    #[test]
    fn non_ascii_is_utf8_encoded() {
        assert_eq!(channel_path("acme", "café").as_deref(), Some("/acme/caf%C3%A9"));
    }
}
