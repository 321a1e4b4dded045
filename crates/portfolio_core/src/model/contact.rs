//! Contact submission record.
//!
//! # Invariants
//! - `first_name`, `last_name`, `email` and `password` are non-empty and
//!   trimmed. Email format and password strength are the caller's concern.
//! - The password is stored exactly as submitted (after trimming). This is a
//!   known weakness; `StoredPassword` is the only type that carries it into
//!   storage so a hashing step can be added there without touching callers.

use super::{is_filled, RequiredFields, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

/// Storage-assigned contact identifier.
pub type ContactId = i64;

const CONTACT_FIELDS: &[&str] = &["first_name", "last_name", "email", "password"];

/// Password value as it is written to the `contacts.password` column.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredPassword(String);

impl StoredPassword {
    /// Converts a submitted password into its stored form.
    ///
    /// Currently the identity transform: the plaintext is kept.
    pub fn from_submitted(submitted: &str) -> Self {
        Self(submitted.to_string())
    }

    /// Wraps a value read back from storage.
    pub(crate) fn from_stored(stored: String) -> Self {
        Self(stored)
    }

    pub fn as_stored(&self) -> &str {
        &self.0
    }
}

impl Debug for StoredPassword {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("StoredPassword(<redacted>)")
    }
}

/// Persisted contact submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: StoredPassword,
    /// UTC `YYYY-MM-DD HH:MM:SS.SSS`, assigned by storage.
    pub created_at: String,
}

impl Contact {
    /// Returns whether every required text field is filled.
    pub fn has_required_fields(&self) -> bool {
        is_filled(&self.first_name)
            && is_filled(&self.last_name)
            && is_filled(&self.email)
            && is_filled(self.password.as_stored())
    }
}

/// Validated insert input for a contact submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    first_name: String,
    last_name: String,
    email: String,
    password: StoredPassword,
}

impl NewContact {
    /// Trims every field and rejects the input if any of them ends up empty.
    pub fn new(
        first_name: impl AsRef<str>,
        last_name: impl AsRef<str>,
        email: impl AsRef<str>,
        password: impl AsRef<str>,
    ) -> Result<Self, ValidationError> {
        let mut fields = RequiredFields::new(CONTACT_FIELDS);
        let first_name = fields.take("first_name", first_name.as_ref());
        let last_name = fields.take("last_name", last_name.as_ref());
        let email = fields.take("email", email.as_ref());
        let password = fields.take("password", password.as_ref());
        fields.finish()?;

        Ok(Self {
            first_name,
            last_name,
            email,
            password: StoredPassword::from_submitted(&password),
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &StoredPassword {
        &self.password
    }
}
