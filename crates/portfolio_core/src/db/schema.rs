//! Create-if-absent table definitions.
//!
//! # Invariants
//! - Every statement is `IF NOT EXISTS`; running it on a populated database
//!   leaves existing rows untouched.
//! - Identifiers use `AUTOINCREMENT` so a deleted row's id is never handed out
//!   again.

use super::DbResult;
use log::info;
use rusqlite::Connection;

pub const PROJECTS_TABLE: &str = "projects";
pub const CONTACTS_TABLE: &str = "contacts";

const PROJECTS_SQL: &str = include_str!("schema/projects.sql");
const CONTACTS_SQL: &str = include_str!("schema/contacts.sql");

/// Creates the `projects` table when it does not exist yet.
pub fn ensure_projects_table(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(PROJECTS_SQL)?;
    info!("event=schema_init module=db status=ok table={PROJECTS_TABLE}");
    Ok(())
}

/// Creates the `contacts` table (and its listing index) when absent.
pub fn ensure_contacts_table(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(CONTACTS_SQL)?;
    info!("event=schema_init module=db status=ok table={CONTACTS_TABLE}");
    Ok(())
}

/// Returns whether a table with the given name exists.
pub fn table_exists(conn: &Connection, table_name: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table_name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

#[cfg(test)]
mod tests {
    use super::{ensure_contacts_table, ensure_projects_table, table_exists};
    use crate::db::open_db_in_memory;

    #[test]
    fn ensure_tables_is_repeatable() {
        let conn = open_db_in_memory().unwrap();
        assert!(!table_exists(&conn, "projects").unwrap());

        ensure_projects_table(&conn).unwrap();
        ensure_projects_table(&conn).unwrap();
        ensure_contacts_table(&conn).unwrap();
        ensure_contacts_table(&conn).unwrap();

        assert!(table_exists(&conn, "projects").unwrap());
        assert!(table_exists(&conn, "contacts").unwrap());
    }

    #[test]
    fn ensure_table_keeps_existing_rows() {
        let conn = open_db_in_memory().unwrap();
        ensure_contacts_table(&conn).unwrap();
        conn.execute(
            "INSERT INTO contacts (first_name, last_name, email, password)
             VALUES ('a', 'b', 'c', 'd');",
            [],
        )
        .unwrap();

        ensure_contacts_table(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM contacts;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
