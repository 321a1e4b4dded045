//! Project repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Insert and list rows of the `projects` table.
//!
//! # Invariants
//! - Listing is ordered by `id ASC`.
//! - Rows with blank required fields surface as `RepoError::InvalidData`.

use super::{count_to_usize, ensure_table_ready, RepoError, RepoResult};
use crate::db::schema::PROJECTS_TABLE;
use crate::model::project::{NewProject, Project, ProjectId};
use rusqlite::{params, Connection, Row};

const PROJECT_SELECT_SQL: &str = "SELECT
    id,
    Title,
    Description,
    ImageFileName,
    CreatedAt
FROM projects";

/// Repository interface for showcase projects.
pub trait ProjectRepository {
    fn insert_project(&self, project: &NewProject) -> RepoResult<ProjectId>;
    fn list_projects(&self) -> RepoResult<Vec<Project>>;
    fn count_projects(&self) -> RepoResult<usize>;
}

/// SQLite-backed project repository.
pub struct SqliteProjectRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProjectRepository<'conn> {
    /// Wraps a connection whose `projects` table already exists.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, PROJECTS_TABLE)?;
        Ok(Self { conn })
    }
}

impl ProjectRepository for SqliteProjectRepository<'_> {
    fn insert_project(&self, project: &NewProject) -> RepoResult<ProjectId> {
        self.conn.execute(
            "INSERT INTO projects (Title, Description, ImageFileName) VALUES (?1, ?2, ?3);",
            params![
                project.title(),
                project.description(),
                project.image_file_name()
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn list_projects(&self) -> RepoResult<Vec<Project>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROJECT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut projects = Vec::new();

        while let Some(row) = rows.next()? {
            projects.push(parse_project_row(row)?);
        }

        Ok(projects)
    }

    fn count_projects(&self) -> RepoResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM projects;", [], |row| row.get(0))?;
        count_to_usize(count, PROJECTS_TABLE)
    }
}

fn parse_project_row(row: &Row<'_>) -> RepoResult<Project> {
    let project = Project {
        id: row.get("id")?,
        title: row.get("Title")?,
        description: row.get("Description")?,
        image_file_name: row.get("ImageFileName")?,
        created_at: row.get("CreatedAt")?,
    };
    if !project.has_required_fields() {
        return Err(RepoError::InvalidData(format!(
            "blank required field in projects row {}",
            project.id
        )));
    }
    Ok(project)
}
