//! Atomic JSON file operations.
//!
//! Every write goes to a fresh temp file in the target's directory and is
//! renamed over the target. Writers, and whole read-modify-write cycles,
//! are serialized by an `fs2` lock on a sidecar file that outlives them.

use fs2::FileExt;
use serde::{de::DeserializeOwned, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write as IoWrite};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use roster_core::RosterError;

/// Errors that can occur during atomic JSON operations.
#[derive(Debug)]
pub enum AtomicJsonError {
    /// File I/O error.
    IoError(std::io::Error),
    /// JSON serialization/deserialization error.
    JsonError(serde_json::Error),
    /// File locking error.
    LockError(String),
}

impl std::fmt::Display for AtomicJsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtomicJsonError::IoError(e) => write!(f, "I/O error: {}", e),
            AtomicJsonError::JsonError(e) => write!(f, "JSON error: {}", e),
            AtomicJsonError::LockError(e) => write!(f, "Lock error: {}", e),
        }
    }
}

impl std::error::Error for AtomicJsonError {}

impl From<std::io::Error> for AtomicJsonError {
    fn from(e: std::io::Error) -> Self {
        AtomicJsonError::IoError(e)
    }
}

impl From<serde_json::Error> for AtomicJsonError {
    fn from(e: serde_json::Error) -> Self {
        AtomicJsonError::JsonError(e)
    }
}

impl From<AtomicJsonError> for RosterError {
    fn from(err: AtomicJsonError) -> Self {
        match err {
            AtomicJsonError::IoError(e) => e.into(),
            AtomicJsonError::JsonError(e) => RosterError::storage(format!(
                "Key-value store file is not a JSON object of strings: {}",
                e
            )),
            AtomicJsonError::LockError(e) => RosterError::storage(e),
        }
    }
}

/// A handle to a JSON file that is replaced atomically on every save.
///
/// Writers serialize on a sidecar lock file (`<name>.lock` next to the data
/// file). The lock file is created on first use and never removed: unlinking
/// it would let a late writer lock a fresh inode while an earlier one still
/// holds the old.
pub struct AtomicJsonFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicJsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and deserializes the file.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: Successfully loaded and deserialized
    /// - `Ok(None)`: File doesn't exist or is blank
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<T>, AtomicJsonError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Replaces the file contents with `data` under the writer lock.
    pub fn save(&self, data: &T) -> Result<(), AtomicJsonError> {
        let _lock = WriterLock::acquire(&self.path)?;
        self.replace(data)
    }

    /// Performs a locked read-modify-write.
    ///
    /// `default_value` stands in for a missing file. Changes made by `f` are
    /// written back only when it returns `Ok(())`.
    pub fn update<F>(&self, default_value: T, f: F) -> Result<(), AtomicJsonError>
    where
        F: FnOnce(&mut T) -> Result<(), AtomicJsonError>,
    {
        let _lock = WriterLock::acquire(&self.path)?;

        let mut data = self.load()?.unwrap_or(default_value);
        f(&mut data)?;
        self.replace(&data)
    }

    /// Writes a uniquely named temp file beside the target, syncs it, and
    /// renames it over the target. Caller holds the writer lock.
    fn replace(&self, data: &T) -> Result<(), AtomicJsonError> {
        let parent = parent_dir(&self.path);
        fs::create_dir_all(parent)?;

        let json_string = serde_json::to_string_pretty(data)?;

        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(json_string.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)
            .map_err(|e| AtomicJsonError::IoError(e.error))?;

        Ok(())
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn lock_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".lock");
    path.with_file_name(name)
}

/// Exclusive advisory lock on the sidecar lock file, held until drop.
struct WriterLock {
    file: File,
}

impl WriterLock {
    fn acquire(path: &Path) -> Result<Self, AtomicJsonError> {
        fs::create_dir_all(parent_dir(path))?;

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(lock_path(path))?;

        file.lock_exclusive().map_err(|e| {
            AtomicJsonError::LockError(format!("Failed to acquire lock: {}", e))
        })?;

        Ok(WriterLock { file })
    }
}

impl Drop for WriterLock {
    fn drop(&mut self) {
        // Closing the handle releases the lock as well.
        let _ = FileExt::unlock(&self.file);
    }
}
