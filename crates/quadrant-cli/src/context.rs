//! Wiring shared by every subcommand.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use tracing::warn;

use quadrant_application::ResultService;
use quadrant_core::config::SurveySettings;
use quadrant_infrastructure::settings::load_settings;
use quadrant_infrastructure::{FileKeyValueStore, QuadrantPaths};
use quadrant_interaction::instant_db::{DEFAULT_API_URL, InstantDbConfig};
use quadrant_interaction::InstantDbStore;

/// Storage and remote options common to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalOptions {
    /// InstantDB application id; results stay on this device when unset
    #[arg(long, global = true, env = "INSTANT_DB_APP_ID")]
    pub instant_db_app_id: Option<String>,

    #[arg(long, global = true, env = "INSTANT_DB_ADMIN_TOKEN", hide_env_values = true)]
    pub instant_db_admin_token: Option<String>,

    #[arg(long, global = true, env = "INSTANT_DB_API_URL", default_value = DEFAULT_API_URL)]
    pub instant_db_api_url: String,

    /// Remote request timeout in milliseconds
    #[arg(long, global = true, env = "REMOTE_TIMEOUT_MS", default_value = "10000")]
    pub remote_timeout_ms: u64,

    /// Directory holding the local result cache
    #[arg(long, global = true, env = "QUADRANT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Settings file (defaults to config.toml in the config directory)
    #[arg(long, global = true, env = "QUADRANT_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, env = "LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl GlobalOptions {
    pub fn remote_timeout(&self) -> Duration {
        Duration::from_millis(self.remote_timeout_ms)
    }

    pub fn instant_db(&self) -> InstantDbConfig {
        InstantDbConfig {
            app_id: self.instant_db_app_id.clone(),
            admin_token: self.instant_db_admin_token.clone(),
            api_url: self.instant_db_api_url.clone(),
            request_timeout: self.remote_timeout(),
        }
    }
}

pub struct CliContext {
    pub settings_path: PathBuf,
    pub settings: SurveySettings,
    pub results: Arc<ResultService>,
}

impl CliContext {
    /// Resolves paths, reads settings and builds the result service.
    ///
    /// An unreadable settings file is reported and replaced by defaults; a
    /// missing remote configuration yields a local-only service.
    pub async fn load(options: &GlobalOptions) -> Result<Self> {
        let paths = QuadrantPaths::resolve(options.data_dir.clone(), None)?;
        let settings_path = options
            .config
            .clone()
            .unwrap_or_else(|| paths.config_file());
        let settings = match load_settings(&settings_path).await {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Ignoring settings file {}: {}", settings_path.display(), e);
                SurveySettings::default()
            }
        };

        let remote = InstantDbStore::from_config(&options.instant_db());
        let local = Arc::new(FileKeyValueStore::new(paths.store_file()));
        let results = ResultService::new(remote, local)
            .with_save_limit(settings.save_limit())
            .with_remote_timeout(options.remote_timeout());

        Ok(Self {
            settings_path,
            settings,
            results: Arc::new(results),
        })
    }
}
