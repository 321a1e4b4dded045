//! Data layer for the portfolio site.
//! This crate is the single source of truth for the project showcase and
//! contact log invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use config::StorageConfig;
pub use db::paths::{FallbackResolver, FixedDirResolver, PathResolver};
pub use db::{DbError, DbResult};
pub use logging::{init_logging, logging_status, LogLevel, LogSettings, LoggingError};
pub use model::contact::{Contact, ContactId, NewContact, StoredPassword};
pub use model::project::{NewProject, Project, ProjectId};
pub use model::ValidationError;
pub use repo::contact_repo::{ContactRepository, SqliteContactRepository};
pub use repo::project_repo::{ProjectRepository, SqliteProjectRepository};
pub use repo::{RepoError, RepoResult};
pub use store::contact_store::ContactStore;
pub use store::project_store::{ProjectStore, SeedProject, SEED_PROJECTS};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
