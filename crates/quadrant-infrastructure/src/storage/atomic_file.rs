//! Atomic file operations with ACID guarantees.
//!
//! Provides a thin layer for safe concurrent access to small TOML and JSON
//! documents (settings, the local key-value store).

use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use quadrant_core::error::QuadrantError;

/// Errors that can occur during atomic file operations.
#[derive(Debug)]
pub enum AtomicFileError {
    /// File I/O error.
    IoError(std::io::Error),
    /// The document could not be parsed or serialized.
    FormatError {
        format: &'static str,
        message: String,
    },
    /// File locking error.
    LockError(String),
}

impl std::fmt::Display for AtomicFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtomicFileError::IoError(e) => write!(f, "I/O error: {}", e),
            AtomicFileError::FormatError { format, message } => {
                write!(f, "{} error: {}", format, message)
            }
            AtomicFileError::LockError(e) => write!(f, "Lock error: {}", e),
        }
    }
}

impl std::error::Error for AtomicFileError {}

impl From<std::io::Error> for AtomicFileError {
    fn from(e: std::io::Error) -> Self {
        AtomicFileError::IoError(e)
    }
}

impl From<AtomicFileError> for QuadrantError {
    fn from(e: AtomicFileError) -> Self {
        match e {
            AtomicFileError::IoError(e) => QuadrantError::from(e),
            AtomicFileError::FormatError { format, message } => {
                QuadrantError::Serialization { format: format.to_string(), message }
            }
            AtomicFileError::LockError(message) => QuadrantError::storage(message),
        }
    }
}

/// On-disk encoding of an [`AtomicFile`].
pub trait FileFormat {
    const NAME: &'static str;

    fn encode<T: Serialize>(data: &T) -> Result<String, AtomicFileError>;

    fn decode<T: DeserializeOwned>(content: &str) -> Result<T, AtomicFileError>;
}

/// Pretty-printed TOML.
pub struct Toml;

impl FileFormat for Toml {
    const NAME: &'static str = "TOML";

    fn encode<T: Serialize>(data: &T) -> Result<String, AtomicFileError> {
        toml::to_string_pretty(data).map_err(|e| format_error::<Self>(e))
    }

    fn decode<T: DeserializeOwned>(content: &str) -> Result<T, AtomicFileError> {
        toml::from_str(content).map_err(|e| format_error::<Self>(e))
    }
}

/// Pretty-printed JSON.
pub struct Json;

impl FileFormat for Json {
    const NAME: &'static str = "JSON";

    fn encode<T: Serialize>(data: &T) -> Result<String, AtomicFileError> {
        serde_json::to_string_pretty(data).map_err(|e| format_error::<Self>(e))
    }

    fn decode<T: DeserializeOwned>(content: &str) -> Result<T, AtomicFileError> {
        serde_json::from_str(content).map_err(|e| format_error::<Self>(e))
    }
}

fn format_error<F: FileFormat>(e: impl std::fmt::Display) -> AtomicFileError {
    AtomicFileError::FormatError {
        format: F::NAME,
        message: e.to_string(),
    }
}

/// A handle to an atomic file with ACID guarantees.
///
/// Provides:
/// - **Atomicity**: Updates are all-or-nothing via tmp file + atomic rename
/// - **Consistency**: Schema validation on load/save
/// - **Isolation**: File locking prevents concurrent modifications
/// - **Durability**: Explicit fsync before rename
pub struct AtomicFile<T, F> {
    path: PathBuf,
    _phantom: PhantomData<fn() -> (T, F)>,
}

/// An atomic TOML file.
pub type AtomicTomlFile<T> = AtomicFile<T, Toml>;

/// An atomic JSON file.
pub type AtomicJsonFile<T> = AtomicFile<T, Json>;

impl<T, F> AtomicFile<T, F>
where
    T: Serialize + DeserializeOwned,
    F: FileFormat,
{
    /// Creates a new atomic file handle.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the file and deserializes it.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: Successfully loaded and deserialized
    /// - `Ok(None)`: File doesn't exist or is empty
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<T>, AtomicFileError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        F::decode(&content).map(Some)
    }

    /// Saves data to the file atomically.
    ///
    /// Uses a temporary file + atomic rename to ensure durability.
    pub fn save(&self, data: &T) -> Result<(), AtomicFileError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = F::encode(data)?;

        // Write to temporary file in the same directory
        let tmp_path = self.get_temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(content.as_bytes())?;

        // Ensure data is written to disk
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    /// Performs a transactional update with file locking.
    ///
    /// The update function receives a mutable reference to the current data
    /// (or `default_value` when the file doesn't exist). If it returns
    /// `Ok(())`, the changes are atomically written back to the file.
    pub fn update<U>(&self, default_value: T, f: U) -> Result<(), AtomicFileError>
    where
        U: FnOnce(&mut T) -> Result<(), AtomicFileError>,
    {
        let _lock = self.acquire_lock()?;

        let mut data = self.load()?.unwrap_or(default_value);

        f(&mut data)?;

        self.save(&data)?;

        Ok(())
    }

    /// Gets a temporary file path for atomic writes.
    fn get_temp_path(&self) -> Result<PathBuf, AtomicFileError> {
        let parent = self.path.parent().ok_or_else(|| {
            AtomicFileError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no parent directory",
            ))
        })?;

        let file_name = self.path.file_name().ok_or_else(|| {
            AtomicFileError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no file name",
            ))
        })?;

        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(parent.join(tmp_name))
    }

    fn acquire_lock(&self) -> Result<FileLock, AtomicFileError> {
        FileLock::acquire(&self.path)
    }
}

/// An exclusive lock guard, released when dropped.
///
/// The lock file itself is left in place: removing it would let a second
/// writer lock a fresh inode while a third still holds the old one.
struct FileLock {
    file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self, AtomicFileError> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        fs2::FileExt::lock_exclusive(&file)
            .map_err(|e| AtomicFileError::LockError(format!("Failed to acquire lock: {}", e)))?;

        Ok(FileLock { file })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs2::FileExt::unlock(&self.file);
    }
}
