//! Slot-backed RosterRepository implementation.

use std::sync::Arc;

use roster_core::config::DEFAULT_SLOT_KEY;
use roster_core::error::Result;
use roster_core::roster::{Roster, RosterRepository};

use crate::dto::{decode_roster, encode_roster};
use crate::storage::SlotStore;

/// Stores the whole roster as one JSON string under a single slot key.
///
/// Responsibilities:
/// - Read/write the slot through a [`SlotStore`]
/// - Validate the stored shape on load (via the DTO codec)
///
/// Does NOT:
/// - Fall back to the seed roster (that is the session's decision)
/// - Know how the slot store persists its data
pub struct SlotRosterRepository {
    store: Arc<dyn SlotStore>,
    slot_key: String,
}

impl SlotRosterRepository {
    /// Creates a repository on the default `employees` slot.
    pub fn new(store: Arc<dyn SlotStore>) -> Self {
        Self::with_slot_key(store, DEFAULT_SLOT_KEY)
    }

    pub fn with_slot_key(store: Arc<dyn SlotStore>, slot_key: impl Into<String>) -> Self {
        Self {
            store,
            slot_key: slot_key.into(),
        }
    }

    pub fn slot_key(&self) -> &str {
        &self.slot_key
    }
}

impl RosterRepository for SlotRosterRepository {
    fn load(&self) -> Result<Option<Roster>> {
        let raw = match self.store.get_item(&self.slot_key)? {
            // An empty slot value counts as nothing stored.
            Some(raw) if !raw.is_empty() => raw,
            _ => {
                tracing::debug!(slot = %self.slot_key, "Roster slot is empty");
                return Ok(None);
            }
        };

        let roster = decode_roster(&self.slot_key, &raw)?;
        tracing::debug!(slot = %self.slot_key, records = roster.len(), "Roster slot loaded");
        Ok(Some(roster))
    }

    fn save(&self, roster: &Roster) -> Result<()> {
        let raw = encode_roster(roster)?;
        self.store.set_item(&self.slot_key, &raw)?;
        tracing::debug!(slot = %self.slot_key, records = roster.len(), "Roster slot saved");
        Ok(())
    }
}
