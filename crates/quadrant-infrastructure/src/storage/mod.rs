//! Storage layer for atomic file operations.

mod atomic_file;

pub use atomic_file::{
    AtomicFile, AtomicFileError, AtomicJsonFile, AtomicTomlFile, FileFormat, Json, Toml,
};
