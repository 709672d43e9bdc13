pub mod config_service;
pub mod dto;
pub mod paths;
pub mod slot_roster_repository;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::paths::RosterPaths;
pub use crate::slot_roster_repository::SlotRosterRepository;
pub use crate::storage::{FileSlotStore, MemorySlotStore, SlotStore};
