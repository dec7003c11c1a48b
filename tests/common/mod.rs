#![allow(dead_code)]

use axum::Router;
use motus_agents::config::{
    AnalyticsConfig, NotionConfig, TwitterConfig, WeatherConfig, DEFAULT_WEATHER_LOCATION,
};
use serde_json::Value;
use tokio::net::TcpListener;

pub const API_KEY: &str = "test-key";

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind test server");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{}", addr)
}

/// A base URL nothing is listening on.
pub async fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}

pub fn fixture(json: &str) -> Value {
    serde_json::from_str(json).expect("valid fixture")
}

pub fn bearer_ok(headers: &axum::http::HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", API_KEY))
        .unwrap_or(false)
}

pub fn weather_config(api_url: &str) -> WeatherConfig {
    WeatherConfig {
        api_key: Some(API_KEY.to_string()),
        api_url: api_url.to_string(),
        location: DEFAULT_WEATHER_LOCATION.to_string(),
    }
}

pub fn twitter_config(api_url: &str) -> TwitterConfig {
    TwitterConfig {
        api_key: Some(API_KEY.to_string()),
        api_url: api_url.to_string(),
        user_id: Some("2244994945".to_string()),
    }
}

pub fn analytics_config(api_url: &str) -> AnalyticsConfig {
    AnalyticsConfig {
        token: Some(API_KEY.to_string()),
        api_url: api_url.to_string(),
        view_id: Some("123456".to_string()),
        start_date: "7daysAgo".to_string(),
        end_date: "today".to_string(),
    }
}

pub fn notion_config(api_url: &str) -> NotionConfig {
    NotionConfig {
        api_key: Some("secret_notion_test_key".to_string()),
        api_url: api_url.to_string(),
        tasks_db: None,
        health_tracker_db: None,
        daily_journal_db: None,
        projects_db: None,
    }
}
