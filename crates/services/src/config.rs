use std::path::{Path, PathBuf};

use training_core::model::PROGRESS_SLOT_KEY;

use crate::error::ConfigError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://training.sqlite3";
pub const MEMORY_DATABASE_URL: &str = "sqlite::memory:";

/// Where progress is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    database_url: String,
    slot_key: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            slot_key: PROGRESS_SLOT_KEY.to_owned(),
        }
    }
}

impl TrackerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given database URL or file path.
    ///
    /// Relative file paths are resolved against the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidDatabaseUrl` for a blank value.
    pub fn with_database_url(mut self, raw: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ConfigError::InvalidDatabaseUrl { raw });
        }
        self.database_url = normalize_sqlite_url(raw);
        Ok(self)
    }

    /// Override the durable slot key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptySlotKey` for a blank key.
    pub fn with_slot_key(mut self, key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::EmptySlotKey);
        }
        self.slot_key = key;
        Ok(self)
    }

    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    #[must_use]
    pub fn slot_key(&self) -> &str {
        &self.slot_key
    }
}

/// Turn a path or `sqlite:` URL into an absolute `sqlite://` URL.
#[must_use]
pub fn normalize_sqlite_url(raw: String) -> String {
    if raw == MEMORY_DATABASE_URL || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim();
    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

/// Ensure the database file and its parent directory exist.
///
/// # Errors
///
/// Returns `ConfigError` if the URL has no file path or the file cannot be created.
pub fn prepare_sqlite_file(db_url: &str) -> Result<(), ConfigError> {
    if db_url == MEMORY_DATABASE_URL || db_url.contains("mode=memory") {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ConfigError::InvalidDatabaseUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ConfigError::InvalidDatabaseUrl {
            raw: db_url.to_string(),
        });
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_versioned_slot() {
        let config = TrackerConfig::default();
        assert_eq!(config.slot_key(), "trainingPlanProgress_v2");
        assert_eq!(config.database_url(), DEFAULT_DATABASE_URL);
    }

    #[test]
    fn normalizes_relative_paths() {
        let url = normalize_sqlite_url("sqlite:data/progress.sqlite3".into());
        assert!(url.starts_with("sqlite:///") || url.starts_with("sqlite://"));
        assert!(url.ends_with("data/progress.sqlite3"));
        assert!(Path::new(url.trim_start_matches("sqlite://")).is_absolute());
    }

    #[test]
    fn keeps_memory_and_full_urls() {
        assert_eq!(normalize_sqlite_url("sqlite::memory:".into()), "sqlite::memory:");
        assert_eq!(
            normalize_sqlite_url("sqlite:///tmp/x.db".into()),
            "sqlite:///tmp/x.db"
        );
    }

    #[test]
    fn rejects_blank_values() {
        assert!(matches!(
            TrackerConfig::new().with_database_url("  "),
            Err(ConfigError::InvalidDatabaseUrl { .. })
        ));
        assert!(matches!(
            TrackerConfig::new().with_slot_key(""),
            Err(ConfigError::EmptySlotKey)
        ));
    }

    #[test]
    fn prepare_creates_parent_dirs_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("nested").join("progress.sqlite3");
        let url = format!("sqlite://{}", file.display());

        prepare_sqlite_file(&url).unwrap();
        assert!(file.exists());
        prepare_sqlite_file(&url).unwrap();
    }

    #[test]
    fn prepare_rejects_non_sqlite_urls() {
        assert!(prepare_sqlite_file("postgres://x").is_err());
        assert!(prepare_sqlite_file(MEMORY_DATABASE_URL).is_ok());
    }
}
