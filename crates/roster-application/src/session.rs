//! Session composition root.

use std::sync::Arc;

use roster_core::config::RosterConfig;
use roster_core::error::Result;
use roster_infrastructure::{FileSlotStore, RosterPaths, SlotRosterRepository};

use crate::controller::RosterController;

/// Wires the file-backed slot store, the roster repository and the
/// controller for one session.
///
/// `config.storage.file` wins over the path resolved from `paths`.
pub fn open_file_session(paths: &RosterPaths, config: &RosterConfig) -> Result<RosterController> {
    let storage_file = match &config.storage.file {
        Some(file) => file.clone(),
        None => paths.storage_file()?,
    };
    tracing::info!(
        path = %storage_file.display(),
        slot = %config.storage.slot_key,
        "Opening roster session"
    );

    let store = Arc::new(FileSlotStore::new(storage_file));
    let repository = SlotRosterRepository::with_slot_key(store, config.storage.slot_key.clone());
    RosterController::open(Arc::new(repository))
}
