//! User record domain model.
//!
//! # Responsibility
//! - Define the canonical roster entry and the editable field subset.
//! - Parse and label the role selection.
//! - Provide the fixed seed roster every session starts from.
//!
//! # Invariants
//! - `id` is assigned by the store and never changes after creation.
//! - `active` starts as `false` for every newly created record.
//! - Field text is stored as given; no validation beyond presence.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned identifier of one record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = u64;

/// Wire value of the student role.
pub const ROLE_STUDENT: &str = "student";
/// Wire value of the professor role.
pub const ROLE_PROFESSOR: &str = "professor";

/// Role assigned to a roster entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Professor,
}

impl Role {
    /// Stable lowercase id, also used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => ROLE_STUDENT,
            Self::Professor => ROLE_PROFESSOR,
        }
    }

    /// Capitalized label shown in the role selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Professor => "Professor",
        }
    }

    /// All selectable roles in selector order.
    pub fn all() -> [Role; 2] {
        [Self::Student, Self::Professor]
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses an optional role from selector input.
///
/// `none`, `unset` and blank input map to `Ok(None)`. Matching is
/// case-insensitive.
pub fn parse_role(value: &str) -> Result<Option<Role>, RoleParseError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "none" | "unset" => Ok(None),
        ROLE_STUDENT => Ok(Some(Role::Student)),
        ROLE_PROFESSOR => Ok(Some(Role::Professor)),
        _ => Err(RoleParseError::UnsupportedRole(value.trim().to_string())),
    }
}

/// Role parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleParseError {
    UnsupportedRole(String),
}

impl Display for RoleParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedRole(value) => write!(
                f,
                "unsupported role `{value}`; expected student|professor|none"
            ),
        }
    }
}

impl Error for RoleParseError {}

/// Editable subset of a record, as submitted by the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFields {
    pub first: String,
    pub last: String,
    pub email: String,
    pub role: Option<Role>,
}

impl RecordFields {
    pub fn new(
        first: impl Into<String>,
        last: impl Into<String>,
        email: impl Into<String>,
        role: Option<Role>,
    ) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
            email: email.into(),
            role,
        }
    }
}

/// One roster entry.
///
/// Serialized field order is part of the debug dump contract:
/// `id, first, last, email, role, active`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub first: String,
    pub last: String,
    pub email: String,
    pub role: Option<Role>,
    pub active: bool,
}

impl Record {
    /// Creates an inactive record from submitted fields.
    pub fn new(id: RecordId, fields: RecordFields) -> Self {
        Self {
            id,
            first: fields.first,
            last: fields.last,
            email: fields.email,
            role: fields.role,
            active: false,
        }
    }

    /// Overwrites the editable fields in place.
    ///
    /// `id` and `active` are left untouched.
    pub fn apply(&mut self, fields: RecordFields) {
        self.first = fields.first;
        self.last = fields.last;
        self.email = fields.email;
        self.role = fields.role;
    }

    /// Flips the active flag and returns the new value.
    pub fn toggle_active(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }
}

/// Returns the fixed roster every session starts with (ids `0..=2`).
pub fn seed_records() -> Vec<Record> {
    vec![
        Record::new(
            0,
            RecordFields::new("Joe", "Bloggs", "joe@bloggs.com", Some(Role::Student)),
        ),
        Record::new(
            1,
            RecordFields::new("Ben", "Bitdiddle", "ben@cuny.edu", Some(Role::Student)),
        ),
        Record::new(
            2,
            RecordFields::new(
                "Alissa P",
                "Hacker",
                "missalissa@cuny.edu",
                Some(Role::Professor),
            ),
        ),
    ]
}
