use reqwest::Client;
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::config::{require, AnalyticsConfig};
use crate::error::{FetchError, Result};
use crate::http::{build_client, send_json, trim_base};
use crate::models::BatchGetResponse;

/// Metric values stay as the strings the Reporting API returns.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrafficSummary {
    pub sessions: String,
    pub pageviews: String,
}

impl TryFrom<BatchGetResponse> for TrafficSummary {
    type Error = FetchError;

    fn try_from(response: BatchGetResponse) -> Result<Self> {
        let mut values = response
            .reports
            .into_iter()
            .next()
            .and_then(|report| report.data.totals.into_iter().next())
            .map(|totals| totals.values.into_iter())
            .ok_or_else(|| FetchError::UnexpectedShape("report has no totals".into()))?;

        match (values.next(), values.next()) {
            (Some(sessions), Some(pageviews)) => Ok(TrafficSummary { sessions, pageviews }),
            _ => Err(FetchError::UnexpectedShape(
                "totals are missing sessions or pageviews".into(),
            )),
        }
    }
}

pub async fn fetch_traffic(config: &AnalyticsConfig) -> Result<TrafficSummary> {
    let token = require(&config.token, "GOOGLE_ANALYTICS_TOKEN")?;
    let view_id = require(&config.view_id, "GOOGLE_ANALYTICS_VIEW_ID")?;
    let client: Client = build_client()?;

    let url = format!("{}/v4/reports:batchGet", trim_base(&config.api_url));
    // sessions first, pageviews second; TryFrom relies on this order
    let body = json!({
        "reportRequests": [{
            "viewId": view_id,
            "dateRanges": [{ "startDate": config.start_date, "endDate": config.end_date }],
            "metrics": [
                { "expression": "ga:sessions" },
                { "expression": "ga:pageviews" }
            ]
        }]
    });

    info!(
        "Fetching sessions and pageviews for view {} ({} to {})",
        view_id, config.start_date, config.end_date
    );

    let response: BatchGetResponse =
        send_json(client.post(&url).bearer_auth(token).json(&body)).await?;
    response.try_into()
}
