//! Backing-file path resolution strategies.
//!
//! # Responsibility
//! - Turn a database file name into a full path in a writable directory.
//! - Degrade to a fallback directory instead of failing when the preferred
//!   directory cannot be written.
//!
//! # Invariants
//! - Resolution runs on every call; nothing is cached between calls, so a
//!   directory that becomes writable (or stops being writable) is noticed on
//!   the next operation.
//! - `FallbackResolver` only fails when both directories fail the probe.

use super::{DbError, DbResult};
use crate::config::StorageConfig;
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

const PROBE_PREFIX: &str = ".portfolio-write-probe-";

/// Strategy deciding which file a store opens.
pub trait PathResolver {
    /// Returns the full path for `file_name`, creating directories as needed.
    fn resolve(&self, file_name: &str) -> DbResult<PathBuf>;
}

/// Always resolves inside one directory; no fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedDirResolver {
    dir: PathBuf,
}

impl FixedDirResolver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl PathResolver for FixedDirResolver {
    fn resolve(&self, file_name: &str) -> DbResult<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|source| DbError::Io {
            path: self.dir.clone(),
            source,
        })?;
        Ok(self.dir.join(file_name))
    }
}

/// Prefers one directory and falls back to another when it is not writable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackResolver {
    preferred: PathBuf,
    fallback: PathBuf,
}

impl FallbackResolver {
    pub fn new(preferred: impl Into<PathBuf>, fallback: impl Into<PathBuf>) -> Self {
        Self {
            preferred: preferred.into(),
            fallback: fallback.into(),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.preferred_dir.clone(), config.fallback_dir.clone())
    }

    pub fn preferred(&self) -> &Path {
        &self.preferred
    }

    pub fn fallback(&self) -> &Path {
        &self.fallback
    }
}

impl PathResolver for FallbackResolver {
    fn resolve(&self, file_name: &str) -> DbResult<PathBuf> {
        let preferred_err = match probe_writable(&self.preferred) {
            Ok(()) => return Ok(self.preferred.join(file_name)),
            Err(err) => err,
        };

        warn!(
            "event=path_fallback module=db status=start preferred={} fallback={} error={}",
            self.preferred.display(),
            self.fallback.display(),
            preferred_err
        );

        match probe_writable(&self.fallback) {
            Ok(()) => Ok(self.fallback.join(file_name)),
            Err(fallback_err) => {
                warn!(
                    "event=path_fallback module=db status=error fallback={} error={}",
                    self.fallback.display(),
                    fallback_err
                );
                Err(DbError::NoWritableLocation {
                    preferred: self.preferred.clone(),
                    fallback: self.fallback.clone(),
                })
            }
        }
    }
}

/// Creates `dir` if needed and proves a file can be created inside it.
///
/// The probe file is removed when the handle drops.
pub fn probe_writable(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    let probe = tempfile::Builder::new()
        .prefix(PROBE_PREFIX)
        .tempfile_in(dir)?;
    probe.close()
}
