//! Application layer for the roster editor.
//!
//! Coordinates the domain model and the persistence layer for one editing
//! session: the [`RosterController`] owns all session state and is the only
//! thing a front end talks to.

pub mod controller;
pub mod form;
pub mod roster_store;
pub mod session;

pub use controller::{Feedback, RosterController, Screen, UiEvent};
pub use form::{EmployeeForm, FormField};
pub use roster_store::RosterStore;
pub use session::open_file_session;
