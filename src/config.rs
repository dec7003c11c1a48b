//! Settings for each upstream API.
//!
//! Every field is a `--flag` with an environment fallback, so the structs are
//! filled once by clap at startup (after `.env` is loaded) and then handed to
//! the fetchers by reference.

use clap::Args;

use crate::error::{FetchError, Result};

pub const DEFAULT_WEATHER_API_URL: &str = "http://api.weatherapi.com/v1";
pub const DEFAULT_WEATHER_LOCATION: &str = "Chiang Mai,TH";
pub const DEFAULT_TWITTER_API_URL: &str = "https://api.twitter.com";
pub const DEFAULT_ANALYTICS_API_URL: &str = "https://analyticsreporting.googleapis.com";
pub const DEFAULT_NOTION_API_URL: &str = "https://api.notion.com";

#[derive(Args, Clone, Debug)]
pub struct WeatherConfig {
    /// WeatherAPI key
    #[arg(
        id = "weather_api_key",
        long = "weather-api-key",
        env = "WEATHER_API_KEY",
        global = true,
        hide_env_values = true,
    )]
    pub api_key: Option<String>,

    #[arg(
        id = "weather_api_url",
        long = "weather-api-url",
        env = "WEATHER_API_URL",
        global = true,
        default_value = DEFAULT_WEATHER_API_URL,
    )]
    pub api_url: String,

    /// City, "lat,lon" or any other WeatherAPI `q` value
    #[arg(
        id = "weather_location",
        long = "weather-location",
        env = "WEATHER_LOCATION",
        global = true,
        default_value = DEFAULT_WEATHER_LOCATION,
    )]
    pub location: String,
}

#[derive(Args, Clone, Debug)]
pub struct TwitterConfig {
    /// Twitter/X bearer token
    #[arg(
        id = "twitter_api_key",
        long = "twitter-api-key",
        env = "TWITTER_API_KEY",
        global = true,
        hide_env_values = true,
    )]
    pub api_key: Option<String>,

    #[arg(
        id = "twitter_api_url",
        long = "twitter-api-url",
        env = "TWITTER_API_URL",
        global = true,
        default_value = DEFAULT_TWITTER_API_URL,
    )]
    pub api_url: String,

    /// Numeric id of the account whose metrics are reported
    #[arg(id = "twitter_user_id", long = "twitter-user-id", env = "TWITTER_USER_ID", global = true)]
    pub user_id: Option<String>,
}

#[derive(Args, Clone, Debug)]
pub struct AnalyticsConfig {
    /// OAuth access token for the Analytics Reporting API
    #[arg(
        id = "analytics_token",
        long = "analytics-token",
        env = "GOOGLE_ANALYTICS_TOKEN",
        global = true,
        hide_env_values = true,
    )]
    pub token: Option<String>,

    #[arg(
        id = "analytics_api_url",
        long = "analytics-api-url",
        env = "GOOGLE_ANALYTICS_API_URL",
        global = true,
        default_value = DEFAULT_ANALYTICS_API_URL,
    )]
    pub api_url: String,

    #[arg(
        id = "analytics_view_id",
        long = "analytics-view-id",
        env = "GOOGLE_ANALYTICS_VIEW_ID",
        global = true,
    )]
    pub view_id: Option<String>,

    #[arg(
        id = "analytics_start_date",
        long = "analytics-start-date",
        global = true,
        default_value = "7daysAgo",
    )]
    pub start_date: String,

    #[arg(
        id = "analytics_end_date",
        long = "analytics-end-date",
        global = true,
        default_value = "today",
    )]
    pub end_date: String,
}

#[derive(Args, Clone, Debug)]
pub struct NotionConfig {
    /// Notion integration token
    #[arg(
        id = "notion_api_key",
        long = "notion-api-key",
        env = "NOTION_API_KEY",
        global = true,
        hide_env_values = true,
    )]
    pub api_key: Option<String>,

    #[arg(
        id = "notion_api_url",
        long = "notion-api-url",
        env = "NOTION_API_URL",
        global = true,
        default_value = DEFAULT_NOTION_API_URL,
    )]
    pub api_url: String,

    #[arg(id = "notion_tasks_db", long = "notion-tasks-db", env = "NOTION_TASKS_DB", global = true)]
    pub tasks_db: Option<String>,

    #[arg(
        id = "notion_health_tracker_db",
        long = "notion-health-tracker-db",
        env = "NOTION_HEALTH_TRACKER_DB",
        global = true,
    )]
    pub health_tracker_db: Option<String>,

    #[arg(
        id = "notion_daily_journal_db",
        long = "notion-daily-journal-db",
        env = "NOTION_DAILY_JOURNAL_DB",
        global = true,
    )]
    pub daily_journal_db: Option<String>,

    #[arg(
        id = "notion_projects_db",
        long = "notion-projects-db",
        env = "NOTION_PROJECTS_DB",
        global = true,
    )]
    pub projects_db: Option<String>,
}

/// A named database and its configured id, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseTarget {
    pub name: &'static str,
    pub id: Option<String>,
}

impl NotionConfig {
    /// Databases whose schemas the inspector prints.
    pub fn schema_targets(&self) -> Vec<DatabaseTarget> {
        vec![
            target("tasks", &self.tasks_db),
            target("healthTracker", &self.health_tracker_db),
        ]
    }

    /// Databases the access check walks through.
    pub fn access_targets(&self) -> Vec<DatabaseTarget> {
        vec![
            target("dailyJournal", &self.daily_journal_db),
            target("healthTracker", &self.health_tracker_db),
            target("projects", &self.projects_db),
            target("tasks", &self.tasks_db),
        ]
    }
}

fn target(name: &'static str, id: &Option<String>) -> DatabaseTarget {
    DatabaseTarget {
        name,
        // an empty variable in .env counts as unset
        id: id.clone().filter(|id| !id.trim().is_empty()),
    }
}

pub(crate) fn require<'a>(value: &'a Option<String>, var: &'static str) -> Result<&'a str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(FetchError::MissingConfig(var))
}

/// Shows only the first few characters of a secret.
pub fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(7).collect();
    if secret.chars().count() <= 7 {
        "*".repeat(secret.chars().count())
    } else {
        format!("{}…", visible)
    }
}
