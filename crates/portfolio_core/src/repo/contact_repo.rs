//! Contact repository contract and SQLite implementation.
//!
//! # Invariants
//! - Listing is newest first: `created_at DESC`, then `id DESC` for rows
//!   stamped within the same millisecond.
//! - `count_contacts` and `list_contacts` read the same table without filters,
//!   so their results always agree.

use super::{count_to_usize, ensure_table_ready, RepoError, RepoResult};
use crate::db::schema::CONTACTS_TABLE;
use crate::model::contact::{Contact, ContactId, NewContact, StoredPassword};
use rusqlite::{params, Connection, Row};

const CONTACT_SELECT_SQL: &str = "SELECT
    id,
    first_name,
    last_name,
    email,
    password,
    created_at
FROM contacts";

/// Repository interface for contact submissions.
pub trait ContactRepository {
    fn insert_contact(&self, contact: &NewContact) -> RepoResult<ContactId>;
    fn list_contacts(&self) -> RepoResult<Vec<Contact>>;
    fn count_contacts(&self) -> RepoResult<usize>;
}

/// SQLite-backed contact repository.
pub struct SqliteContactRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContactRepository<'conn> {
    /// Wraps a connection whose `contacts` table already exists.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, CONTACTS_TABLE)?;
        Ok(Self { conn })
    }
}

impl ContactRepository for SqliteContactRepository<'_> {
    fn insert_contact(&self, contact: &NewContact) -> RepoResult<ContactId> {
        self.conn.execute(
            "INSERT INTO contacts (first_name, last_name, email, password)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                contact.first_name(),
                contact.last_name(),
                contact.email(),
                contact.password().as_stored(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn list_contacts(&self) -> RepoResult<Vec<Contact>> {
        let mut stmt = self.conn.prepare(&format!(
            "{CONTACT_SELECT_SQL} ORDER BY created_at DESC, id DESC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut contacts = Vec::new();

        while let Some(row) = rows.next()? {
            contacts.push(parse_contact_row(row)?);
        }

        Ok(contacts)
    }

    fn count_contacts(&self) -> RepoResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM contacts;", [], |row| row.get(0))?;
        count_to_usize(count, CONTACTS_TABLE)
    }
}

fn parse_contact_row(row: &Row<'_>) -> RepoResult<Contact> {
    let contact = Contact {
        id: row.get("id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        email: row.get("email")?,
        password: StoredPassword::from_stored(row.get("password")?),
        created_at: row.get("created_at")?,
    };
    if !contact.has_required_fields() {
        return Err(RepoError::InvalidData(format!(
            "blank required field in contacts row {}",
            contact.id
        )));
    }
    Ok(contact)
}
