//! View derivation for the employee list.
//!
//! A view is a pure function of the roster and the current [`ViewState`]:
//! nothing in this module touches storage.
//!
//! # Module Structure
//!
//! - `state`: The view state machine and the actions driving it
//! - `row`: Display rows, including the sentinel rows
//! - `collation`: Name ordering used by the sorted view
//! - `selector`: Matching predicates and row selection

mod collation;
mod row;
mod selector;
mod state;

#[cfg(test)]
mod proptests;

pub use collation::locale_compare;
pub use row::{Row, NO_EMPLOYEES_IN_DEPARTMENT_TEXT, NO_MATCH_TEXT};
pub use selector::{
    contains_folded, filter_by_department, search_by_name, select_rows, sort_by_name,
};
pub use state::{ViewAction, ViewMode, ViewState};
