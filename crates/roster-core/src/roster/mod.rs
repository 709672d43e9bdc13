//! Roster domain module.
//!
//! # Module Structure
//!
//! - `model`: The ordered employee sequence and its seed set
//! - `repository`: Persistence contract implemented by the infrastructure layer

mod model;
mod repository;

pub use model::Roster;
pub use repository::RosterRepository;
