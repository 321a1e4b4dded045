//! Showcase project record.
//!
//! # Invariants
//! - `title`, `description` and `image_file_name` are non-empty and trimmed.
//! - `id` is assigned by storage, strictly increasing, never reused.
//! - `image_file_name` is a logical name; it is not checked against disk.

use super::{is_filled, RequiredFields, ValidationError};
use serde::{Deserialize, Serialize};

/// Storage-assigned project identifier.
pub type ProjectId = i64;

const PROJECT_FIELDS: &[&str] = &["title", "description", "image_file_name"];

/// Persisted showcase entry.
///
/// Serialized with the storage column names used by the listing pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "ImageFileName")]
    pub image_file_name: String,
    /// UTC `YYYY-MM-DD HH:MM:SS.SSS`, assigned by storage.
    #[serde(rename = "CreatedAt")]
    pub created_at: String,
}

impl Project {
    /// Returns whether every required text field is filled.
    pub fn has_required_fields(&self) -> bool {
        is_filled(&self.title) && is_filled(&self.description) && is_filled(&self.image_file_name)
    }
}

/// Validated insert input for a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    title: String,
    description: String,
    image_file_name: String,
}

impl NewProject {
    /// Trims every field and rejects the input if any of them ends up empty.
    ///
    /// Callers holding an absent form value pass `""`.
    pub fn new(
        title: impl AsRef<str>,
        description: impl AsRef<str>,
        image_file_name: impl AsRef<str>,
    ) -> Result<Self, ValidationError> {
        let mut fields = RequiredFields::new(PROJECT_FIELDS);
        let title = fields.take("title", title.as_ref());
        let description = fields.take("description", description.as_ref());
        let image_file_name = fields.take("image_file_name", image_file_name.as_ref());
        fields.finish()?;

        Ok(Self {
            title,
            description,
            image_file_name,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_file_name(&self) -> &str {
        &self.image_file_name
    }
}
