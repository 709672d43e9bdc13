//! The live roster and its write-through persistence.

use std::sync::Arc;

use roster_core::employee::Employee;
use roster_core::error::Result;
use roster_core::roster::{Roster, RosterRepository};

/// Owns the in-memory roster for a session and keeps the repository in step.
///
/// Every successful mutation is followed by a full save, so the stored
/// snapshot always equals [`RosterStore::roster`].
pub struct RosterStore {
    repository: Arc<dyn RosterRepository>,
    roster: Roster,
}

impl RosterStore {
    /// Loads the stored roster and persists it straight back.
    ///
    /// Falls back to [`Roster::seed`] when nothing is stored or the stored
    /// snapshot is rejected as corrupt. Any other load error is returned.
    pub fn open(repository: Arc<dyn RosterRepository>) -> Result<Self> {
        let roster = match repository.load() {
            Ok(Some(roster)) => {
                tracing::info!(records = roster.len(), "Loaded stored roster");
                roster
            }
            Ok(None) => {
                tracing::info!("No stored roster, starting from seed");
                Roster::seed()
            }
            Err(err) if err.is_corrupt_snapshot() => {
                tracing::warn!(error = %err, "Stored roster rejected, starting from seed");
                Roster::seed()
            }
            Err(err) => return Err(err),
        };

        let store = Self { repository, roster };
        store.persist()?;
        Ok(store)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Appends a validated record and saves the result.
    ///
    /// A validation failure returns before anything is written. If the save
    /// fails the in-memory roster keeps its previous contents.
    pub fn append(&mut self, employee: Employee) -> Result<()> {
        let mut next = self.roster.clone();
        next.try_append(employee)?;

        self.repository.save(&next)?;
        self.roster = next;
        tracing::info!(records = self.roster.len(), "Employee added");
        Ok(())
    }

    /// Overwrites the stored snapshot with the current roster.
    pub fn persist(&self) -> Result<()> {
        self.repository.save(&self.roster)
    }
}
