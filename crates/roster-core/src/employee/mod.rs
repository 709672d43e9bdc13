//! Employee domain module.
//!
//! # Module Structure
//!
//! - `model`: The employee record
//! - `validation`: Presence checks applied at the add boundary

mod model;
mod validation;

pub use model::{Employee, FIELD_DEPARTMENT, FIELD_NAME};
pub use validation::{missing_required_fields, validate_required};
