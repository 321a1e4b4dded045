//! Repository layer abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Define per-table data access contracts.
//! - Keep SQL details out of the store layer.
//!
//! # Invariants
//! - Write paths only accept validated `New*` inputs.
//! - Read paths reject rows that violate the non-empty field rule instead of
//!   masking them.

pub mod contact_repo;
pub mod project_repo;

use crate::db::schema::table_exists;
use crate::db::DbError;
use crate::model::ValidationError;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for record persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Db(DbError),
    MissingRequiredTable(&'static str),
    InvalidData(String),
}

impl RepoError {
    /// Returns whether the caller can fix this by resubmitting different input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` has not been created")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::MissingRequiredTable(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

fn ensure_table_ready(conn: &Connection, table: &'static str) -> RepoResult<()> {
    if !table_exists(conn, table)? {
        return Err(RepoError::MissingRequiredTable(table));
    }
    Ok(())
}

fn count_to_usize(count: i64, table: &str) -> RepoResult<usize> {
    usize::try_from(count)
        .map_err(|_| RepoError::InvalidData(format!("negative row count {count} in {table}")))
}
