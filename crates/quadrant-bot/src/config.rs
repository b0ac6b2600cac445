//! Configuration for the Telegram bot
//!
//! CLI arguments and environment variable handling using clap.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use quadrant_application::conversation::DEFAULT_CHART_URL;
use quadrant_interaction::instant_db::{DEFAULT_API_URL, InstantDbConfig};

pub const DEFAULT_WEBHOOK_PORT: u16 = 3000;

/// Political Quadrant survey bot
#[derive(Parser, Debug, Clone)]
#[command(name = "quadrant-bot")]
#[command(about = "Telegram bot that runs the Political Quadrant survey")]
pub struct Args {
    /// Bot API token issued by @BotFather
    #[arg(long, env = "BOT_TOKEN", hide_env_values = true)]
    pub bot_token: Option<String>,

    /// InstantDB application id; results stay local when unset
    #[arg(long, env = "INSTANT_DB_APP_ID")]
    pub instant_db_app_id: Option<String>,

    /// InstantDB admin token
    #[arg(long, env = "INSTANT_DB_ADMIN_TOKEN", hide_env_values = true)]
    pub instant_db_admin_token: Option<String>,

    #[arg(long, env = "INSTANT_DB_API_URL", default_value = DEFAULT_API_URL)]
    pub instant_db_api_url: String,

    /// Remote request timeout in milliseconds
    #[arg(long, env = "REMOTE_TIMEOUT_MS", default_value = "10000")]
    pub remote_timeout_ms: u64,

    /// Public base URL; switches from long polling to webhook mode
    #[arg(long, env = "WEBHOOK_URL")]
    pub webhook_url: Option<String>,

    #[arg(long, env = "WEBHOOK_PATH", default_value = "/tg-webhook")]
    pub webhook_path: String,

    /// Port the webhook server listens on
    #[arg(long, env = "WEBHOOK_PORT")]
    pub webhook_port: Option<u16>,

    /// Platform-assigned port, used when WEBHOOK_PORT is unset
    #[arg(long, env = "PORT", hide = true)]
    pub port: Option<u16>,

    /// Long-poll duration in seconds
    #[arg(long, env = "BOT_POLL_TIMEOUT", default_value = "30")]
    pub poll_timeout_secs: u64,

    /// Ask only the first N questions (0 = all)
    #[arg(long, env = "BOT_QUESTIONS_LIMIT")]
    pub questions_limit: Option<usize>,

    /// Shorten the survey for manual testing
    #[arg(long, env = "BOT_TEST_MODE", default_value = "false")]
    pub test_mode: bool,

    /// Link shown under the result summary
    #[arg(long, env = "CHART_URL", default_value = DEFAULT_CHART_URL)]
    pub chart_url: String,

    /// Directory holding the local result cache
    #[arg(long, env = "QUADRANT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Settings file (defaults to config.toml in the config directory)
    #[arg(long, env = "QUADRANT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.token().is_none() {
            return Err("BOT_TOKEN is required".to_string());
        }

        if !self.webhook_path.starts_with('/') {
            return Err("WEBHOOK_PATH must start with '/'".to_string());
        }

        if let Some(url) = self.webhook_url() {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err("WEBHOOK_URL must be an http(s) URL".to_string());
            }
        }

        if self.remote_timeout_ms == 0 {
            return Err("REMOTE_TIMEOUT_MS must be greater than 0".to_string());
        }

        Ok(())
    }

    pub fn token(&self) -> Option<&str> {
        self.bot_token.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    pub fn webhook_url(&self) -> Option<&str> {
        self.webhook_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
    }

    /// Full URL registered with Telegram, if webhook mode is on.
    pub fn webhook_endpoint(&self) -> Option<String> {
        self.webhook_url()
            .map(|url| format!("{}{}", url.trim_end_matches('/'), self.webhook_path))
    }

    pub fn listen_addr(&self) -> SocketAddr {
        let port = self
            .webhook_port
            .or(self.port)
            .unwrap_or(DEFAULT_WEBHOOK_PORT);
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, port))
    }

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
