//! Persisted employee record and roster snapshot codec.

use serde::{Deserialize, Serialize};

use roster_core::employee::{missing_required_fields, Employee};
use roster_core::error::{Result, RosterError};
use roster_core::roster::Roster;

/// One element of the persisted JSON array.
///
/// `role` may be absent or `null` in stored data and is read as empty.
/// Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecordDto {
    pub name: String,
    pub department: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl EmployeeRecordDto {
    /// Converts into the domain model, rejecting records without a name or department.
    fn into_domain(self, index: usize, slot: &str) -> Result<Employee> {
        let employee = Employee::new(self.name, self.department, self.role.unwrap_or_default());
        let missing = missing_required_fields(&employee);
        if missing.is_empty() {
            Ok(employee)
        } else {
            Err(RosterError::corrupt_snapshot(
                slot,
                format!("record {} has empty {}", index, missing.join(" and ")),
            ))
        }
    }
}

impl From<&Employee> for EmployeeRecordDto {
    fn from(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            department: employee.department.clone(),
            role: Some(employee.role.clone()),
        }
    }
}

/// Parses a slot value into a roster.
///
/// Anything other than a JSON array of well-formed records is rejected as a
/// whole with [`RosterError::CorruptSnapshot`]; no partial roster is returned.
pub fn decode_roster(slot: &str, raw: &str) -> Result<Roster> {
    let records: Vec<EmployeeRecordDto> = serde_json::from_str(raw)
        .map_err(|e| RosterError::corrupt_snapshot(slot, e.to_string()))?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_domain(index, slot))
        .collect::<Result<Vec<_>>>()
        .map(Roster::from)
}

/// Serializes a roster as a compact JSON array of records.
pub fn encode_roster(roster: &Roster) -> Result<String> {
    let records: Vec<EmployeeRecordDto> = roster.iter().map(EmployeeRecordDto::from).collect();
    Ok(serde_json::to_string(&records)?)
}
