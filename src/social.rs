use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::config::{require, TwitterConfig};
use crate::error::{FetchError, Result};
use crate::http::{build_client, send_json, trim_base};
use crate::models::{TrendPlace, UserResponse};

/// Worldwide, in Yahoo! WOEID terms.
pub const DEFAULT_TREND_LOCATION: &str = "1";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SocialMetrics {
    pub followers: u64,
    pub tweets: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrendSnapshot {
    /// Trend objects exactly as the API returned them.
    pub trends: Vec<Value>,
    pub location: String,
}

impl TryFrom<Vec<TrendPlace>> for TrendSnapshot {
    type Error = FetchError;

    fn try_from(places: Vec<TrendPlace>) -> Result<Self> {
        let place = places
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::UnexpectedShape("no trend places returned".into()))?;
        let location = place
            .locations
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::UnexpectedShape("trend place has no location".into()))?;

        Ok(TrendSnapshot {
            trends: place.trends,
            location: location.name,
        })
    }
}

pub struct TwitterClient {
    client: Client,
    base_url: String,
    bearer: String,
}

impl TwitterClient {
    pub fn new(config: &TwitterConfig) -> Result<Self> {
        let bearer = require(&config.api_key, "TWITTER_API_KEY")?.to_string();
        Ok(TwitterClient {
            client: build_client()?,
            base_url: trim_base(&config.api_url).to_string(),
            bearer,
        })
    }

    pub async fn user_metrics(&self, user_id: &str) -> Result<SocialMetrics> {
        let url = format!("{}/2/users/{}", self.base_url, user_id);
        info!("Fetching public metrics for user {}", user_id);

        let response: UserResponse = send_json(
            self.client
                .get(&url)
                .bearer_auth(&self.bearer)
                .query(&[("user.fields", "public_metrics")]),
        )
        .await?;

        let metrics = response.data.public_metrics;
        Ok(SocialMetrics {
            followers: metrics.followers_count,
            tweets: metrics.tweet_count,
        })
    }

    pub async fn trends(&self, location_id: &str) -> Result<TrendSnapshot> {
        let url = format!("{}/1.1/trends/place.json", self.base_url);
        info!("Fetching trends for location {}", location_id);

        let places: Vec<TrendPlace> = send_json(
            self.client
                .get(&url)
                .bearer_auth(&self.bearer)
                .query(&[("id", location_id)]),
        )
        .await?;

        places.try_into()
    }
}

pub async fn fetch_metrics(config: &TwitterConfig) -> Result<SocialMetrics> {
    let client = TwitterClient::new(config)?;
    let user_id = require(&config.user_id, "TWITTER_USER_ID")?;
    client.user_metrics(user_id).await
}

pub async fn fetch_trends(config: &TwitterConfig, location_id: &str) -> Result<TrendSnapshot> {
    TwitterClient::new(config)?.trends(location_id).await
}
