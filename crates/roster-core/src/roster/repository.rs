//! Roster repository trait.
//!
//! Defines the interface for roster persistence operations.

use super::model::Roster;
use crate::error::Result;

/// An abstract repository for the persisted roster snapshot.
///
/// The whole roster is stored as a single value: every save overwrites the
/// previous snapshot, there are no partial updates.
///
/// # Implementation Notes
///
/// Implementations must validate the stored shape on load and report a
/// mismatch as [`RosterError::CorruptSnapshot`](crate::error::RosterError::CorruptSnapshot)
/// instead of handing back partially valid data.
pub trait RosterRepository: Send + Sync {
    /// Reads the stored roster.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Roster))`: A valid snapshot was found
    /// - `Ok(None)`: Nothing has been stored yet
    /// - `Err(RosterError)`: The snapshot is unreadable or malformed
    fn load(&self) -> Result<Option<Roster>>;

    /// Replaces the stored snapshot with `roster`.
    fn save(&self, roster: &Roster) -> Result<()>;
}
