//! Showcase project store.
//!
//! # Responsibility
//! - Create the `projects` table and seed it on first run.
//! - Validate and insert projects; list them in id order.
//!
//! # Invariants
//! - Seeding happens only when the table is observed empty, and the count
//!   check plus seed inserts share one immediate transaction.
//! - `list_all` returns rows ordered by ascending id.

use super::StoreLocation;
use crate::config::StorageConfig;
use crate::db::paths::{FallbackResolver, PathResolver};
use crate::db::schema::ensure_projects_table;
use crate::db::DbResult;
use crate::model::project::{NewProject, Project, ProjectId};
use crate::repo::project_repo::{ProjectRepository, SqliteProjectRepository};
use crate::repo::RepoResult;
use log::{info, warn};
use rusqlite::TransactionBehavior;
use std::path::PathBuf;
use std::time::Instant;

/// Fixed example project inserted into an empty table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedProject {
    pub title: &'static str,
    pub description: &'static str,
    pub image_file_name: &'static str,
}

pub const SEED_PROJECTS: &[SeedProject] = &[
    SeedProject {
        title: "Sign Language Recognition using Deep Learning",
        description: "Real-time translator using Python, OpenCV, Mediapipe, TensorFlow, scikit-learn, CNN; achieved 99% accuracy; Springer published.",
        image_file_name: "sign.webp",
    },
    SeedProject {
        title: "Decentro Vault: Decentralized Banking System",
        description: "Decentralized banking with MetaMask wallet integration and secure transaction protocols for crypto management.",
        image_file_name: "block.webp",
    },
];

/// Store owning the `projects` table of one backing file.
#[derive(Debug, Clone)]
pub struct ProjectStore<R = FallbackResolver> {
    location: StoreLocation<R>,
}

impl ProjectStore<FallbackResolver> {
    /// Builds a store using the config's preferred/fallback directories.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(
            FallbackResolver::from_config(config),
            config.project_db_file.clone(),
        )
    }
}

impl<R: PathResolver> ProjectStore<R> {
    pub fn new(resolver: R, file_name: impl Into<String>) -> Self {
        Self {
            location: StoreLocation::new(resolver, file_name),
        }
    }

    /// Resolves the backing file this store would open right now.
    pub fn db_path(&self) -> DbResult<PathBuf> {
        self.location.db_path()
    }

    /// Creates the table if absent and seeds it when empty.
    ///
    /// Returns the number of seed rows inserted (0 on every run after the
    /// first).
    pub fn initialize(&self) -> RepoResult<usize> {
        let mut conn = self.location.open(ensure_projects_table)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let seeded = {
            let repo = SqliteProjectRepository::try_new(&tx)?;
            if repo.count_projects()? == 0 {
                for seed in SEED_PROJECTS {
                    let project =
                        NewProject::new(seed.title, seed.description, seed.image_file_name)?;
                    repo.insert_project(&project)?;
                }
                SEED_PROJECTS.len()
            } else {
                0
            }
        };
        tx.commit()?;

        info!("event=seed_insert module=store status=ok table=projects inserted={seeded}");
        Ok(seeded)
    }

    /// Validates and inserts one project, returning its new id.
    ///
    /// # Errors
    /// - `RepoError::Validation` when a field is empty after trimming; nothing
    ///   is written.
    /// - `RepoError::Db` when the backing file cannot be opened or written.
    pub fn insert(
        &self,
        title: impl AsRef<str>,
        description: impl AsRef<str>,
        image_file_name: impl AsRef<str>,
    ) -> RepoResult<ProjectId> {
        let project = match NewProject::new(title, description, image_file_name) {
            Ok(project) => project,
            Err(err) => {
                warn!(
                    "event=project_insert module=store status=rejected missing={}",
                    err.missing_fields().join(",")
                );
                return Err(err.into());
            }
        };
        self.insert_new(&project)
    }

    /// Inserts an already validated project.
    pub fn insert_new(&self, project: &NewProject) -> RepoResult<ProjectId> {
        let started_at = Instant::now();
        let conn = self.location.open(ensure_projects_table)?;
        let id = SqliteProjectRepository::try_new(&conn)?.insert_project(project)?;
        info!(
            "event=project_insert module=store status=ok id={} duration_ms={}",
            id,
            started_at.elapsed().as_millis()
        );
        Ok(id)
    }

    /// Returns every project ordered by ascending id.
    pub fn list_all(&self) -> RepoResult<Vec<Project>> {
        let conn = self.location.open(ensure_projects_table)?;
        SqliteProjectRepository::try_new(&conn)?.list_projects()
    }
}
