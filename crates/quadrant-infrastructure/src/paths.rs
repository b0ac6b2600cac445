//! Unified path management for local survey data.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/political-quadrant/       # Config directory
//! └── config.toml                     # Optional survey settings
//!
//! ~/.local/share/political-quadrant/  # Data directory
//! ├── store.json                      # Local key-value store
//! └── store.lock                      # Writer lock
//! ```
//!
//! Both directories follow the platform conventions of the `dirs` crate and
//! can be overridden individually.

use std::path::{Path, PathBuf};

use quadrant_core::error::{QuadrantError, Result};

const APP_DIR: &str = "political-quadrant";
const STORE_FILE: &str = "store.json";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuadrantPaths {
    data_dir: PathBuf,
    config_dir: PathBuf,
}

impl QuadrantPaths {
    /// Resolves the data and config directories.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Overrides the platform data directory
    /// * `config_dir` - Overrides the platform config directory
    ///
    /// # Errors
    ///
    /// Returns a config error when a directory is not overridden and the
    /// platform has no home directory.
    pub fn resolve(data_dir: Option<PathBuf>, config_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => dirs::data_dir()
                .ok_or_else(|| QuadrantError::config("Cannot find data directory"))?
                .join(APP_DIR),
        };
        let config_dir = match config_dir {
            Some(dir) => dir,
            None => dirs::config_dir()
                .ok_or_else(|| QuadrantError::config("Cannot find config directory"))?
                .join(APP_DIR),
        };
        Ok(Self {
            data_dir,
            config_dir,
        })
    }

    /// Paths rooted at a single directory, used by tests and portable setups.
    pub fn rooted(root: &Path) -> Self {
        Self {
            data_dir: root.to_path_buf(),
            config_dir: root.to_path_buf(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// The local key-value store document.
    pub fn store_file(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE)
    }

    /// The optional settings file.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_win() {
        let paths = QuadrantPaths::resolve(
            Some(PathBuf::from("/tmp/pq-data")),
            Some(PathBuf::from("/tmp/pq-config")),
        )
        .unwrap();
        assert_eq!(paths.store_file(), PathBuf::from("/tmp/pq-data/store.json"));
        assert_eq!(paths.config_file(), PathBuf::from("/tmp/pq-config/config.toml"));
    }

    #[test]
    fn test_rooted() {
        let paths = QuadrantPaths::rooted(Path::new("/srv/pq"));
        assert_eq!(paths.data_dir(), Path::new("/srv/pq"));
        assert_eq!(paths.config_file(), PathBuf::from("/srv/pq/config.toml"));
    }
}
