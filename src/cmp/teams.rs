use sqlx::mysql::MySqlRow;
use sqlx::Row;

/// The team that gets the highlighted style in the sidebar.
pub const HIGHLIGHTED_TEAM: &str = "Personal";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: String,
    pub name: String,
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }

    pub fn from_row(row: &MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get::<String, _>("id")?,
            name: row.try_get::<String, _>("name")?,
        })
    }

    pub fn is_highlighted(&self) -> bool {
        self.name == HIGHLIGHTED_TEAM
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_name_is_highlighted() {
        assert!(Team::new("1", "Personal").is_highlighted());
        assert!(!Team::new("2", "personal").is_highlighted());
        assert!(!Team::new("3", "Personal ").is_highlighted());
        assert!(!Team::new("4", "Acme").is_highlighted());
    }
}
