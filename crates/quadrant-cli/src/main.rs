use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quadrant_application::conversation::DEFAULT_CHART_URL;
use quadrant_core::locale::Locale;
use quadrant_core::record::{SloganStyle, SloganWeight};

mod chart;
mod commands;
mod context;
mod input;

use commands::results::ResultsOptions;
use commands::survey::SurveyOptions;
use context::{CliContext, GlobalOptions};

#[derive(Parser)]
#[command(name = "quadrant")]
#[command(about = "Political Quadrant - take the survey and browse results", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the survey and save the result
    Survey {
        /// Survey language (ua or en); asked interactively when omitted
        #[arg(long, value_parser = parse_locale)]
        locale: Option<Locale>,

        /// Ask only the first N questions (0 = all)
        #[arg(long)]
        questions_limit: Option<usize>,

        /// Slogan color as #rgb or #rrggbb
        #[arg(long, value_parser = parse_color)]
        slogan_color: Option<String>,

        /// Show the slogan in bold
        #[arg(long)]
        slogan_bold: bool,

        /// Link shown under the result summary
        #[arg(long, env = "CHART_URL", default_value = DEFAULT_CHART_URL)]
        chart_url: String,
    },
    /// List all saved results
    Results {
        /// Language of quadrant labels
        #[arg(long, value_parser = parse_locale, default_value = "en")]
        locale: Locale,

        /// Also draw a text scatter chart
        #[arg(long)]
        chart: bool,
    },
    /// Inspect or create the settings file
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the effective settings
    Show,
    /// Write a settings file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn parse_locale(value: &str) -> Result<Locale, String> {
    Locale::from_button(value).ok_or_else(|| format!("unknown locale '{value}', expected ua or en"))
}

fn parse_color(value: &str) -> Result<String, String> {
    SloganStyle::parse_color(value).ok_or_else(|| format!("'{value}' is not a #rgb or #rrggbb color"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let log_level = cli.global.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let ctx = CliContext::load(&cli.global).await?;

    match cli.command {
        Commands::Survey {
            locale,
            questions_limit,
            slogan_color,
            slogan_bold,
            chart_url,
        } => {
            let slogan_style = (slogan_color.is_some() || slogan_bold).then(|| SloganStyle {
                color: slogan_color,
                weight: if slogan_bold {
                    SloganWeight::Bold
                } else {
                    SloganWeight::Normal
                },
            });
            let options = SurveyOptions {
                locale,
                questions_limit,
                slogan_style,
                chart_url,
            };
            commands::survey::run(&ctx, &options).await?;
        }
        Commands::Results { locale, chart } => {
            commands::results::run(&ctx.results, ResultsOptions { locale, chart }).await?;
        }
        Commands::Settings { action } => {
            let mut out = std::io::stdout();
            match action {
                SettingsAction::Show => {
                    commands::settings::show(&ctx.settings_path, &ctx.settings, &mut out)?
                }
                SettingsAction::Init { force } => {
                    commands::settings::init(&ctx.settings_path, force, &mut out).await?
                }
            }
        }
    }

    Ok(())
}
