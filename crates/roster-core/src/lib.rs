//! Domain layer for the roster editor.
//!
//! Holds the employee record, the roster, and the pure view derivation.
//! Persistence is abstracted behind [`roster::RosterRepository`].

pub mod config;
pub mod employee;
pub mod error;
pub mod roster;
pub mod view;

// Re-export common error type
pub use error::{Result, RosterError};
