//! Display rows.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::employee::Employee;

pub const NO_MATCH_TEXT: &str = "No match found";
pub const NO_EMPLOYEES_IN_DEPARTMENT_TEXT: &str = "No employees in this department";

/// One line of the rendered employee list.
///
/// The sentinel variants stand in for an empty search or filter result.
/// They are not roster data and carry no record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Row {
    Employee(Employee),
    NoMatch,
    NoEmployeesInDepartment,
}

impl Row {
    /// The record behind this row, `None` for sentinels.
    pub fn as_employee(&self) -> Option<&Employee> {
        match self {
            Row::Employee(employee) => Some(employee),
            Row::NoMatch | Row::NoEmployeesInDepartment => None,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.as_employee().is_none()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Row::Employee(employee) => write!(f, "{employee}"),
            Row::NoMatch => f.write_str(NO_MATCH_TEXT),
            Row::NoEmployeesInDepartment => f.write_str(NO_EMPLOYEES_IN_DEPARTMENT_TEXT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_have_no_record() {
        assert!(Row::NoMatch.is_sentinel());
        assert!(Row::NoEmployeesInDepartment.as_employee().is_none());
        assert_eq!(Row::NoMatch.to_string(), "No match found");
        assert_eq!(
            Row::NoEmployeesInDepartment.to_string(),
            "No employees in this department"
        );
    }

    #[test]
    fn test_employee_row_text() {
        let row = Row::Employee(Employee::new("Saba", "IT", "Web Developer"));
        assert!(!row.is_sentinel());
        assert_eq!(row.to_string(), "Saba - IT - Web Developer");
    }
}
