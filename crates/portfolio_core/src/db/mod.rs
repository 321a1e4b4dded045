//! SQLite storage bootstrap, schema setup and backing-file resolution.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the portfolio stores.
//! - Create the `projects` and `contacts` tables when absent.
//! - Decide where backing files live (`paths`).
//!
//! # Invariants
//! - Schema setup is create-if-absent and never destructive to existing rows.
//! - Store code must not read/write rows before its table exists.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod open;
pub mod paths;
pub mod schema;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    NoWritableLocation {
        preferred: PathBuf,
        fallback: PathBuf,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Io { path, source } => {
                write!(f, "storage directory `{}` unusable: {source}", path.display())
            }
            Self::NoWritableLocation {
                preferred,
                fallback,
            } => write!(
                f,
                "no writable storage location: preferred `{}` and fallback `{}` both failed",
                preferred.display(),
                fallback.display()
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Io { source, .. } => Some(source),
            Self::NoWritableLocation { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
