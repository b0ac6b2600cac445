//! quadrant-bot - Political Quadrant survey over Telegram

use std::sync::Arc;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quadrant_application::{ResultService, SurveyConversation};
use quadrant_bot::{Args, Dispatcher, polling, webhook};
use quadrant_core::config::{SurveySettings, resolve_questions_limit};
use quadrant_core::survey::{NicknamePolicy, SessionRegistry, SurveyFlow};
use quadrant_infrastructure::settings::load_settings;
use quadrant_infrastructure::{FileKeyValueStore, QuadrantPaths};
use quadrant_interaction::{InstantDbStore, TelegramClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    let log_level = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "quadrant_bot={0},quadrant_application={0},quadrant_infrastructure={0},quadrant_interaction={0},info",
                    log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = args.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }
    let Some(token) = args.token() else {
        std::process::exit(1);
    };

    let paths = QuadrantPaths::resolve(args.data_dir.clone(), None)?;
    let settings_path = args.config.clone().unwrap_or_else(|| paths.config_file());
    let settings = match load_settings(&settings_path).await {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Ignoring settings file {}: {}", settings_path.display(), e);
            SurveySettings::default()
        }
    };

    let questions_limit = resolve_questions_limit(
        args.questions_limit,
        args.test_mode,
        settings.limits.questions_limit,
    );
    let flow = Arc::new(SurveyFlow::new(
        questions_limit,
        settings.profile_limits(),
        NicknamePolicy::Truncate,
    ));

    let remote = InstantDbStore::from_config(&args.instant_db());
    let local = Arc::new(FileKeyValueStore::new(paths.store_file()));
    let results = Arc::new(
        ResultService::new(remote, local).with_remote_timeout(args.remote_timeout()),
    );

    info!("======================================");
    info!("  Political Quadrant survey bot");
    info!("======================================");
    info!("Mode: {}", if args.webhook_url().is_some() { "webhook" } else { "long polling" });
    info!("Questions: {}", flow.questions.len());
    info!("Remote store: {}", if results.is_remote_enabled() { "InstantDB" } else { "disabled (local only)" });
    info!("Data dir: {}", paths.data_dir().display());
    info!("======================================");

    let registry = Arc::new(SessionRegistry::init(flow));
    let conversation = Arc::new(
        SurveyConversation::new(Arc::clone(&registry), results).with_chart_url(args.chart_url.clone()),
    );
    let client = TelegramClient::new(token);
    let dispatcher = Arc::new(Dispatcher::new(client.clone(), conversation));

    let outcome = tokio::select! {
        result = run_transport(&args, client, dispatcher) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
            Ok(())
        }
    };

    let dropped = registry.dispose().await;
    info!(sessions = dropped, "Session registry disposed");

    if let Err(e) = &outcome {
        error!("Bot stopped: {}", e);
    }
    outcome
}

async fn run_transport(
    args: &Args,
    client: TelegramClient,
    dispatcher: Arc<Dispatcher>,
) -> anyhow::Result<()> {
    match args.webhook_endpoint() {
        Some(endpoint) => {
            client.set_webhook(&endpoint).await?;
            info!("Webhook registered");
            webhook::run(args.listen_addr(), args.webhook_path.clone(), dispatcher).await
        }
        None => polling::run(client, dispatcher, args.poll_timeout_secs).await,
    }
}
