//! Contact submission store.
//!
//! # Invariants
//! - No seed rows; `initialize` only creates the table.
//! - `count()` always equals `list_all().len()` for the same file state.

use super::StoreLocation;
use crate::config::StorageConfig;
use crate::db::paths::{FallbackResolver, PathResolver};
use crate::db::schema::ensure_contacts_table;
use crate::db::DbResult;
use crate::model::contact::{Contact, ContactId, NewContact};
use crate::repo::contact_repo::{ContactRepository, SqliteContactRepository};
use crate::repo::RepoResult;
use log::{info, warn};
use std::path::PathBuf;
use std::time::Instant;

/// Store owning the `contacts` table of one backing file.
#[derive(Debug, Clone)]
pub struct ContactStore<R = FallbackResolver> {
    location: StoreLocation<R>,
}

impl ContactStore<FallbackResolver> {
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(
            FallbackResolver::from_config(config),
            config.contact_db_file.clone(),
        )
    }
}

impl<R: PathResolver> ContactStore<R> {
    pub fn new(resolver: R, file_name: impl Into<String>) -> Self {
        Self {
            location: StoreLocation::new(resolver, file_name),
        }
    }

    pub fn db_path(&self) -> DbResult<PathBuf> {
        self.location.db_path()
    }

    /// Creates the `contacts` table if it does not exist.
    pub fn initialize(&self) -> RepoResult<()> {
        self.location.open(ensure_contacts_table)?;
        Ok(())
    }

    /// Validates and inserts one submission, returning its new id.
    ///
    /// Email format and password strength are not checked here.
    pub fn insert(
        &self,
        first_name: impl AsRef<str>,
        last_name: impl AsRef<str>,
        email: impl AsRef<str>,
        password: impl AsRef<str>,
    ) -> RepoResult<ContactId> {
        let contact = match NewContact::new(first_name, last_name, email, password) {
            Ok(contact) => contact,
            Err(err) => {
                warn!(
                    "event=contact_insert module=store status=rejected missing={}",
                    err.missing_fields().join(",")
                );
                return Err(err.into());
            }
        };
        self.insert_new(&contact)
    }

    /// Inserts an already validated submission.
    pub fn insert_new(&self, contact: &NewContact) -> RepoResult<ContactId> {
        let started_at = Instant::now();
        let conn = self.location.open(ensure_contacts_table)?;
        let id = SqliteContactRepository::try_new(&conn)?.insert_contact(contact)?;
        info!(
            "event=contact_insert module=store status=ok id={} duration_ms={}",
            id,
            started_at.elapsed().as_millis()
        );
        Ok(id)
    }

    /// Returns every submission, newest first.
    pub fn list_all(&self) -> RepoResult<Vec<Contact>> {
        let conn = self.location.open(ensure_contacts_table)?;
        SqliteContactRepository::try_new(&conn)?.list_contacts()
    }

    /// Returns the number of stored submissions.
    pub fn count(&self) -> RepoResult<usize> {
        let conn = self.location.open(ensure_contacts_table)?;
        SqliteContactRepository::try_new(&conn)?.count_contacts()
    }
}
