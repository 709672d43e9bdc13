//! Roster domain model.

use serde::{Deserialize, Serialize};

use crate::employee::{validate_required, Employee};
use crate::error::Result;

/// The ordered sequence of employee records.
///
/// Insertion order is significant: it is the order of the plain list view.
/// The only mutation is appending a validated record at the end.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// The records a fresh installation starts with.
    pub fn seed() -> Self {
        Self::from(vec![
            Employee::new("Sava", "IT", "Senior Web Developer"),
            Employee::new("Saba", "IT", "Web Developer"),
            Employee::new("Irakli", "HR", "Manager"),
        ])
    }

    /// Validates `employee` and appends it at the end.
    ///
    /// On validation failure the roster is left exactly as it was.
    pub fn try_append(&mut self, employee: Employee) -> Result<()> {
        validate_required(&employee)?;
        self.employees.push(employee);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    pub fn as_slice(&self) -> &[Employee] {
        &self.employees
    }

    pub fn last(&self) -> Option<&Employee> {
        self.employees.last()
    }

    pub fn into_vec(self) -> Vec<Employee> {
        self.employees
    }
}

impl From<Vec<Employee>> for Roster {
    fn from(employees: Vec<Employee>) -> Self {
        Self { employees }
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.employees.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_order() {
        let roster = Roster::seed();
        let names: Vec<&str> = roster.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Sava", "Saba", "Irakli"]);
    }

    #[test]
    fn test_append_valid_record_goes_last() {
        let mut roster = Roster::seed();
        let nino = Employee::new("Nino", "Finance", "Accountant");

        roster.try_append(nino.clone()).unwrap();

        assert_eq!(roster.len(), 4);
        assert_eq!(roster.last(), Some(&nino));
    }

    #[test]
    fn test_rejected_append_leaves_roster_unchanged() {
        let mut roster = Roster::seed();
        let before = roster.clone();

        let err = roster
            .try_append(Employee::new("", "IT", "Intern"))
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(roster, before);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let roster = Roster::from(vec![Employee::new("Irakli", "HR", "Manager")]);
        let json = serde_json::to_string(&roster).unwrap();
        assert_eq!(json, r#"[{"name":"Irakli","department":"HR","role":"Manager"}]"#);
    }
}
