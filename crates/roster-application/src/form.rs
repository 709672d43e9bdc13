//! Draft state of the "Add New Employee" form.

use serde::{Deserialize, Serialize};

use roster_core::employee::Employee;

/// One of the three form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Department,
    Role,
}

impl FormField {
    /// Placeholder shown in the empty input.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Department => "Department",
            FormField::Role => "Role",
        }
    }
}

/// What the user has typed into the form so far.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmployeeForm {
    pub name: String,
    pub department: String,
    pub role: String,
}

impl EmployeeForm {
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Department => self.department = value,
            FormField::Role => self.role = value,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Department => &self.department,
            FormField::Role => &self.role,
        }
    }

    pub fn to_employee(&self) -> Employee {
        Employee::new(&self.name, &self.department, &self.role)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
