//! Store entry points used by presentation callers.
//!
//! # Responsibility
//! - Bind each table to a backing-file resolution strategy.
//! - Open a fresh connection per operation and release it before returning.
//!
//! # Invariants
//! - No connection or row state outlives a single call.
//! - Validation runs before any filesystem or SQLite work.
//! - Every operation makes sure its table exists first, so calling `insert`
//!   or `list_all` before `initialize` never fails on a missing table.

pub mod contact_store;
pub mod project_store;

use crate::db::paths::PathResolver;
use crate::db::{open_db, DbResult};
use crate::repo::RepoResult;
use log::debug;
use rusqlite::Connection;
use std::path::PathBuf;

type EnsureTable = fn(&Connection) -> DbResult<()>;

/// Backing-file location shared by both stores.
#[derive(Debug, Clone)]
struct StoreLocation<R> {
    resolver: R,
    file_name: String,
}

impl<R: PathResolver> StoreLocation<R> {
    fn new(resolver: R, file_name: impl Into<String>) -> Self {
        Self {
            resolver,
            file_name: file_name.into(),
        }
    }

    fn db_path(&self) -> DbResult<PathBuf> {
        self.resolver.resolve(&self.file_name)
    }

    fn open(&self, ensure_table: EnsureTable) -> RepoResult<Connection> {
        let path = self.db_path()?;
        debug!(
            "event=store_open module=store status=start path={}",
            path.display()
        );
        let conn = open_db(&path)?;
        ensure_table(&conn)?;
        Ok(conn)
    }
}
