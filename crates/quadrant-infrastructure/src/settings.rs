//! Loading of the optional survey settings file.

use std::path::{Path, PathBuf};

use tokio::task;

use quadrant_core::config::SurveySettings;
use quadrant_core::error::{QuadrantError, Result};

use crate::storage::AtomicTomlFile;

/// Loads settings from `path`; a missing or empty file yields defaults.
pub async fn load_settings(path: &Path) -> Result<SurveySettings> {
    let path: PathBuf = path.to_path_buf();
    let loaded = task::spawn_blocking(move || {
        let file = AtomicTomlFile::<SurveySettings>::new(path.clone());
        file.load().map(|settings| (path, settings))
    })
    .await
    .map_err(|e| QuadrantError::internal(format!("Failed to join task: {}", e)))??;

    match loaded {
        (path, Some(settings)) => {
            tracing::debug!(path = %path.display(), "Loaded survey settings");
            Ok(settings)
        }
        (_, None) => Ok(SurveySettings::default()),
    }
}

/// Writes settings to `path`, creating parent directories.
pub async fn save_settings(path: &Path, settings: SurveySettings) -> Result<()> {
    let path = path.to_path_buf();
    task::spawn_blocking(move || AtomicTomlFile::<SurveySettings>::new(path).save(&settings))
        .await
        .map_err(|e| QuadrantError::internal(format!("Failed to join task: {}", e)))??;
    Ok(())
}
