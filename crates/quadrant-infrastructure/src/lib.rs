pub mod key_value;
pub mod local_cache;
pub mod paths;
pub mod settings;
pub mod storage;

pub use crate::key_value::{FileKeyValueStore, MemoryKeyValueStore};
pub use crate::local_cache::LocalCache;
pub use crate::paths::QuadrantPaths;
