//! Data transfer objects for persisted data.
//!
//! DTOs describe the on-disk shape; domain models are produced from them
//! only after validation.

mod employee;

pub use employee::{decode_roster, encode_roster, EmployeeRecordDto};
