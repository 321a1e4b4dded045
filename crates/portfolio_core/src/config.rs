//! Storage configuration for the portfolio stores.
//!
//! # Responsibility
//! - Describe where backing files should live and where to go when that
//!   location is not writable.
//! - Read overrides from the process environment.
//!
//! # Invariants
//! - A config is a plain value; nothing here touches the filesystem.
//! - Blank environment values are treated as unset.

use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "PORTFOLIO_DATA_DIR";
pub const FALLBACK_DIR_ENV: &str = "PORTFOLIO_FALLBACK_DIR";
pub const DEFAULT_PROJECT_DB_FILE: &str = "projects.db";
pub const DEFAULT_CONTACT_DB_FILE: &str = "contacts.db";

const FALLBACK_SUBDIR: &str = "portfolio";

/// Backing-file layout for both stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Directory tried first for every backing file.
    pub preferred_dir: PathBuf,
    /// Directory used when `preferred_dir` cannot be written.
    pub fallback_dir: PathBuf,
    /// File name of the projects database inside the resolved directory.
    pub project_db_file: String,
    /// File name of the contacts database inside the resolved directory.
    pub contact_db_file: String,
}

impl StorageConfig {
    /// Creates a config rooted at `preferred_dir` with default file names and
    /// the process temp directory as fallback.
    pub fn new(preferred_dir: impl Into<PathBuf>) -> Self {
        Self {
            preferred_dir: preferred_dir.into(),
            fallback_dir: default_fallback_dir(),
            project_db_file: DEFAULT_PROJECT_DB_FILE.to_string(),
            contact_db_file: DEFAULT_CONTACT_DB_FILE.to_string(),
        }
    }

    /// Builds a config from `PORTFOLIO_DATA_DIR` / `PORTFOLIO_FALLBACK_DIR`.
    ///
    /// Without `PORTFOLIO_DATA_DIR` the current working directory is preferred.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Replaces the fallback directory.
    pub fn with_fallback_dir(mut self, fallback_dir: impl Into<PathBuf>) -> Self {
        self.fallback_dir = fallback_dir.into();
        self
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let preferred_dir = non_blank(lookup(DATA_DIR_ENV))
            .map(PathBuf::from)
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));

        let mut config = Self::new(preferred_dir);
        if let Some(fallback) = non_blank(lookup(FALLBACK_DIR_ENV)) {
            config.fallback_dir = PathBuf::from(fallback);
        }
        config
    }
}

/// Returns `<temp>/portfolio`.
pub fn default_fallback_dir() -> PathBuf {
    std::env::temp_dir().join(FALLBACK_SUBDIR)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}
