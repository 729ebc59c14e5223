use std::{env, path::PathBuf};

/// Which storage backend the process uses. Chosen once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Embedded SQLite file inside the data directory.
    Sqlite { data_dir: PathBuf },
    /// Networked Postgres reached through a connection string.
    Postgres { url: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string from `POSTGRES_URL` or `DATABASE_URL`.
    pub database_url: Option<String>,
    /// Directory holding the SQLite file (default: "data")
    pub data_dir: PathBuf,
    /// Include error details in 500 responses (`APP_ENV=development`)
    pub expose_error_details: bool,
    /// Base URL of the Notion API (default: "https://api.notion.com/v1")
    pub notion_api_url: String,
    /// Value sent in the `Notion-Version` header (default: "2022-06-28")
    pub notion_version: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `POSTGRES_URL` / `DATABASE_URL` - selects the Postgres backend when set
    /// - `NOTEBOARD_DATA_DIR` - SQLite data directory (default: "data")
    /// - `APP_ENV` - `development` exposes error details in responses
    /// - `NOTION_API_URL` - Notion API base URL
    /// - `NOTION_VERSION` - Notion API version header
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any variable source.
    ///
    /// Blank values count as unset, so an empty `POSTGRES_URL` falls through
    /// to `DATABASE_URL`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            database_url: var("POSTGRES_URL").or_else(|| var("DATABASE_URL")),
            data_dir: var("NOTEBOARD_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data")),
            expose_error_details: var("APP_ENV")
                .map(|v| v.eq_ignore_ascii_case("development"))
                .unwrap_or(false),
            notion_api_url: var("NOTION_API_URL")
                .unwrap_or_else(|| "https://api.notion.com/v1".to_string()),
            notion_version: var("NOTION_VERSION").unwrap_or_else(|| "2022-06-28".to_string()),
        }
    }

    /// The storage backend implied by this configuration.
    ///
    /// A connection string wins; otherwise notes live in SQLite.
    pub fn storage_backend(&self) -> StorageBackend {
        match &self.database_url {
            Some(url) => StorageBackend::Postgres { url: url.clone() },
            None => StorageBackend::Sqlite {
                data_dir: self.data_dir.clone(),
            },
        }
    }
}
