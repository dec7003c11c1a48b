use std::io::{self, Write};

use anyhow::{anyhow, Context, Result};
use chrono::{Local, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use motus_agents::config::{AnalyticsConfig, NotionConfig, TwitterConfig, WeatherConfig};
use motus_agents::notion::NotionClient;
use motus_agents::social::DEFAULT_TREND_LOCATION;
use motus_agents::{analytics, health, inspect, social, weather, Report};

#[derive(Parser, Debug)]
#[command(
    name = "motus",
    version,
    about = "Fetch and summarise data from Notion, WeatherAPI, Twitter/X and Google Analytics"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    weather: WeatherConfig,

    #[command(flatten)]
    twitter: TwitterConfig,

    #[command(flatten)]
    analytics: AnalyticsConfig,

    #[command(flatten)]
    notion: NotionConfig,

    /// Report fatal errors to Sentry
    #[arg(long, env = "SENTRY_DSN", global = true, hide_env_values = true)]
    sentry_dsn: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// WeatherAPI forecasts
    #[command(subcommand)]
    Weather(WeatherCommand),
    /// Follower and tweet counts for the configured account
    Social,
    /// Trending topics for a location
    Trends {
        /// Yahoo! WOEID of the location (1 = worldwide)
        #[arg(default_value = DEFAULT_TREND_LOCATION)]
        location: String,
    },
    /// Sessions and pageviews from Google Analytics
    Analytics,
    /// Notion database reports
    #[command(subcommand)]
    Notion(NotionCommand),
    /// Print the daily health check-in form
    HealthCheckin,
}

#[derive(Subcommand, Debug)]
enum WeatherCommand {
    /// Tomorrow's forecast; exits non-zero on failure
    Tomorrow,
    /// Current conditions and a three-day outlook
    Current,
}

#[derive(Subcommand, Debug)]
enum NotionCommand {
    /// Print the property schema of the tasks and health tracker databases
    Schemas,
    /// Check that each configured database is readable
    Databases,
    /// Discover every database shared with the integration
    Connection,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    println!("{}", text);
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Weather(WeatherCommand::Tomorrow) => {
            let tomorrow = weather::fetch_tomorrow(&cli.weather)
                .await
                .context("Error fetching tomorrow's weather")?;
            print_json(&tomorrow)
        }
        Command::Weather(WeatherCommand::Current) => {
            print_json(&weather::fetch_current(&cli.weather).await)
        }
        Command::Social => {
            let result = social::fetch_metrics(&cli.twitter).await;
            print_json(&Report::from_result("socialFetcher", result, Utc::now()))
        }
        Command::Trends { location } => {
            let result = social::fetch_trends(&cli.twitter, &location).await;
            print_json(&Report::from_result("trendAnalyzer", result, Utc::now()))
        }
        Command::Analytics => {
            let result = analytics::fetch_traffic(&cli.analytics).await;
            print_json(&Report::from_result("analyticsFetcher", result, Utc::now()))
        }
        Command::Notion(command) => {
            let mut out = io::stdout().lock();
            match command {
                NotionCommand::Schemas => {
                    let client = NotionClient::new(&cli.notion)?;
                    let targets = cli.notion.schema_targets();
                    inspect::inspect_schemas(&client, &targets, &mut out).await?;
                }
                NotionCommand::Databases => {
                    let client = NotionClient::new(&cli.notion)?;
                    let targets = cli.notion.access_targets();
                    inspect::check_databases(&client, &targets, &mut out).await?;
                }
                NotionCommand::Connection => {
                    inspect::test_connection(&cli.notion, &mut out).await?
                }
            }
            out.flush()?;
            Ok(())
        }
        Command::HealthCheckin => {
            println!("{}", health::render_checkin_form(&Local::now()));
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    // a missing .env is fine; settings can come from the real environment
    if let Err(e) = &dotenv {
        if !e.not_found() {
            warn!("Could not load .env: {}", e);
        }
    }

    let _sentry = cli.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| anyhow!("Could not start async runtime: {}", e))?;

    let result = runtime.block_on(run(cli));
    if let Err(e) = &result {
        sentry::integrations::anyhow::capture_anyhow(e);
    }
    result
}
