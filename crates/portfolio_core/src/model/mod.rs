//! Record types for the project showcase and the contact log.
//!
//! # Responsibility
//! - Define persisted record shapes and validated insert inputs.
//! - Own the trim-then-require rule shared by both stores.
//!
//! # Invariants
//! - `New*` inputs can only be built through validating constructors, so a
//!   value that reaches SQL always has every required field non-empty after
//!   trimming.
//! - Persisted records are read-only snapshots; no update path exists.

pub mod contact;
pub mod project;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Insert input rejected before touching storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields were empty after trimming.
    MissingFields {
        /// Every field the entity requires, in declaration order.
        required: &'static [&'static str],
        /// The subset that was empty.
        missing: Vec<&'static str>,
    },
}

impl ValidationError {
    /// Names of the fields that failed validation.
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            Self::MissingFields { missing, .. } => missing,
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields { required, missing } => write!(
                f,
                "all fields ({}) are required; missing: {}",
                required.join(", "),
                missing.join(", ")
            ),
        }
    }
}

impl Error for ValidationError {}

/// Collects trimmed field values and remembers which ones came out empty.
pub(crate) struct RequiredFields {
    required: &'static [&'static str],
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub(crate) fn new(required: &'static [&'static str]) -> Self {
        Self {
            required,
            missing: Vec::new(),
        }
    }

    /// Returns the trimmed value, recording `name` when it is empty.
    pub(crate) fn take(&mut self, name: &'static str, value: &str) -> String {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.missing.push(name);
        }
        trimmed.to_string()
    }

    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        if self.missing.is_empty() {
            return Ok(());
        }
        Err(ValidationError::MissingFields {
            required: self.required,
            missing: self.missing,
        })
    }
}

/// Returns whether a persisted value would pass insert validation.
pub(crate) fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}
