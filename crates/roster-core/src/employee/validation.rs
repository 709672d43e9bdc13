//! Presence checks for new employee records.

use super::model::{Employee, FIELD_DEPARTMENT, FIELD_NAME};
use crate::error::{Result, RosterError};

/// Returns the names of required fields that are empty, in form order.
///
/// Only the empty string counts as missing; whitespace is a value.
pub fn missing_required_fields(employee: &Employee) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if employee.name.is_empty() {
        missing.push(FIELD_NAME);
    }
    if employee.department.is_empty() {
        missing.push(FIELD_DEPARTMENT);
    }
    missing
}

/// Fails with [`RosterError::Validation`] when `name` or `department` is empty.
pub fn validate_required(employee: &Employee) -> Result<()> {
    let missing = missing_required_fields(employee);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(RosterError::validation(missing))
    }
}
