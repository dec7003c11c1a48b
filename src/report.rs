use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tracing::error;

use crate::error::FetchError;

/// JSON envelope printed by the marketing fetchers.
///
/// A success is the payload's own fields plus `timestamp`; a failure is
/// `{error, timestamp}`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Report<T> {
    Success {
        #[serde(flatten)]
        data: T,
        timestamp: String,
    },
    Failure {
        error: String,
        timestamp: String,
    },
}

impl<T> Report<T> {
    pub fn from_result(source: &str, result: Result<T, FetchError>, now: DateTime<Utc>) -> Self {
        let timestamp = iso_timestamp(now);
        match result {
            Ok(data) => Report::Success { data, timestamp },
            Err(e) => {
                error!("Error in {}: {}", source, e);
                Report::Failure {
                    error: e.to_string(),
                    timestamp,
                }
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Report::Success { .. })
    }
}

/// `2025-10-08T05:26:53.906Z`
pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[derive(Serialize)]
    struct Payload {
        followers: u64,
        tweets: u64,
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 8, 5, 26, 53).unwrap() + chrono::Duration::milliseconds(906)
    }

    #[test]
    fn success_flattens_payload() {
        let report = Report::from_result(
            "socialFetcher",
            Ok(Payload { followers: 10, tweets: 3 }),
            at(),
        );
        assert!(report.is_success());

        let text = serde_json::to_string(&report).unwrap();
        assert_eq!(
            text,
            r#"{"followers":10,"tweets":3,"timestamp":"2025-10-08T05:26:53.906Z"}"#
        );
    }

    #[test]
    fn failure_carries_message() {
        let report: Report<Payload> = Report::from_result(
            "socialFetcher",
            Err(FetchError::MissingConfig("TWITTER_API_KEY")),
            at(),
        );
        assert!(!report.is_success());

        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({
                "error": "TWITTER_API_KEY not found in environment variables",
                "timestamp": "2025-10-08T05:26:53.906Z"
            })
        );
    }
}
