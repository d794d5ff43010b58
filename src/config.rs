use std::fs;
use std::path::{Path, PathBuf};

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;

pub const CONFIG_ENV: &str = "BIVROST_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "bivrost.json";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("cannot read settings file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings document: {0}")]
    Invalid(#[from] serde_json::Error),
    #[error("missing connection detail `{0}`")]
    MissingConnectionDetail(&'static str),
}

/// Startup settings, read once from a JSON document.
///
/// ```json
/// {
///   "connection": { "sql_user": "bivrost", "sql_password": "...", "sql_host": "localhost", "sql_database": "bivrost" },
///   "shell": { "brand": "Bivrost", "sign_in_url": "/sign-in", "session_cookie": "__session" },
///   "theme": { "font_family": "Inter" }
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub connection: ConnectionDetails,
    pub shell: ShellSettings,
    pub theme: ThemeSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConnectionDetails {
    pub sql_user: Option<String>,
    pub sql_password: Option<String>,
    pub sql_host: Option<String>,
    pub sql_database: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShellSettings {
    pub brand: String,
    pub sign_in_url: String,
    pub session_cookie: String,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            brand: "Bivrost".to_string(),
            sign_in_url: "/sign-in".to_string(),
            session_cookie: "__session".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    pub font_family: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self { font_family: "Inter".to_string() }
    }
}

impl Settings {
    /// Settings path from `BIVROST_CONFIG`, falling back to `bivrost.json`.
    pub fn locate() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let raw = fs::read_to_string(path).map_err(|source| SettingsError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl ConnectionDetails {
    pub fn database_url(&self) -> Result<String, SettingsError> {
        let user = required(&self.sql_user, "sql_user")?;
        let password = required(&self.sql_password, "sql_password")?;
        let host = required(&self.sql_host, "sql_host")?;
        let database = required(&self.sql_database, "sql_database")?;

        Ok(format!(
            "mysql://{u}:{p}@{h}/{d}",
            u = utf8_percent_encode(user, NON_ALPHANUMERIC),
            p = utf8_percent_encode(password, NON_ALPHANUMERIC),
            h = host,
            d = database,
        ))
    }

    /// `host/database`, safe to log.
    pub fn target(&self) -> String {
        format!(
            "{}/{}",
            self.sql_host.as_deref().unwrap_or("?"),
            self.sql_database.as_deref().unwrap_or("?")
        )
    }
}

fn required<'a>(value: &'a Option<String>, key: &'static str) -> Result<&'a str, SettingsError> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(SettingsError::MissingConnectionDetail(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_default_when_absent() {
        let settings = Settings::parse("{}").unwrap();

        assert_eq!(settings.shell.brand, "Bivrost");
        assert_eq!(settings.shell.session_cookie, "__session");
        assert_eq!(settings.theme.font_family, "Inter");
        assert!(settings.connection.sql_host.is_none());
    }

    #[test]
    fn partial_shell_section_keeps_other_defaults() {
        let settings = Settings::parse(r#"{ "shell": { "brand": "Acme Chat" } }"#).unwrap();

        assert_eq!(settings.shell.brand, "Acme Chat");
        assert_eq!(settings.shell.sign_in_url, "/sign-in");
    }

    #[test]
    fn database_url_escapes_credentials() {
        let settings = Settings::parse(
            r#"{ "connection": { "sql_user": "chat", "sql_password": "p@ss:word", "sql_host": "db:3306", "sql_database": "bivrost" } }"#,
        )
        .unwrap();

        assert_eq!(
            settings.connection.database_url().unwrap(),
            "mysql://chat:p%40ss%3Aword@db:3306/bivrost"
        );
        assert_eq!(settings.connection.target(), "db:3306/bivrost");
    }

    #[test]
    fn database_url_names_missing_detail() {
        let settings = Settings::parse(
            r#"{ "connection": { "sql_user": "chat", "sql_password": "", "sql_host": "db" } }"#,
        )
        .unwrap();

        match settings.connection.database_url() {
            Err(SettingsError::MissingConnectionDetail(key)) => assert_eq!(key, "sql_password"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn malformed_document_is_rejected() {
        assert!(matches!(Settings::parse("{ connection"), Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn missing_file_is_reported_with_path() {
        let err = Settings::load(Path::new("/nonexistent/bivrost.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/bivrost.json"));
    }
}
