//! Employee domain model.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const FIELD_NAME: &str = "name";
pub const FIELD_DEPARTMENT: &str = "department";

/// A single roster entry.
///
/// Records carry no identifier: they are ordered by position in the roster
/// and compared by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Employee {
    /// Display name (required)
    pub name: String,
    /// Department the employee belongs to (required)
    pub department: String,
    /// Job title, may be empty
    #[serde(default)]
    pub role: String,
}

impl Employee {
    pub fn new(
        name: impl Into<String>,
        department: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            department: department.into(),
            role: role.into(),
        }
    }
}

/// Renders the list row text: `"<name> - <department> - <role>"`.
impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} - {}", self.name, self.department, self.role)
    }
}
