//! Storage layer for atomic files and key-value slots.

mod atomic_json;
mod slot_store;

pub use atomic_json::{AtomicJsonError, AtomicJsonFile};
pub use slot_store::{FileSlotStore, MemorySlotStore, SlotStore};
