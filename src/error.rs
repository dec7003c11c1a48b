use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

pub type Result<T, E = FetchError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0} not found in environment variables")]
    MissingConfig(&'static str),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message} (HTTP {status})")]
    Api {
        status: StatusCode,
        code: Option<String>,
        message: String,
    },

    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),

    #[error("could not parse response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("could not write report: {0}")]
    Output(#[from] std::io::Error),
}

impl FetchError {
    /// Builds an `Api` error from a non-2xx response body.
    ///
    /// Each provider nests its message differently: Notion uses a top-level
    /// `message`/`code`, WeatherAPI and Google use `error.message`, Twitter
    /// uses `detail` or `errors[0].message`.
    pub fn from_response_body(status: StatusCode, body: &str) -> Self {
        let json: Value = serde_json::from_str(body).unwrap_or(Value::Null);

        let message = [
            &json["message"],
            &json["error"]["message"],
            &json["detail"],
            &json["errors"][0]["message"],
            &json["error"],
        ]
        .into_iter()
        .find_map(|v| v.as_str())
        .map(String::from)
        .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));

        let code = json["code"]
            .as_str()
            .map(String::from)
            .or_else(|| json["error"]["status"].as_str().map(String::from));

        FetchError::Api {
            status,
            code,
            message,
        }
    }

    /// The provider's error code, if one was returned.
    pub fn code(&self) -> Option<&str> {
        match self {
            FetchError::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notion_error_body() {
        let body = r#"{"object":"error","status":401,"code":"unauthorized",
            "message":"API token is invalid."}"#;
        let err = FetchError::from_response_body(StatusCode::UNAUTHORIZED, body);

        assert_eq!(err.code(), Some("unauthorized"));
        assert_eq!(err.to_string(), "API token is invalid. (HTTP 401 Unauthorized)");
    }

    #[test]
    fn weatherapi_error_body() {
        let body = r#"{"error":{"code":1006,"message":"No matching location found."}}"#;
        let err = FetchError::from_response_body(StatusCode::BAD_REQUEST, body);

        assert_eq!(err.code(), None);
        assert!(err.to_string().starts_with("No matching location found."));
    }

    #[test]
    fn twitter_error_body() {
        let body =
            r#"{"title":"Unauthorized","type":"about:blank","status":401,"detail":"Unauthorized"}"#;
        let err = FetchError::from_response_body(StatusCode::UNAUTHORIZED, body);
        assert!(err.to_string().starts_with("Unauthorized"));
    }

    #[test]
    fn non_json_body_falls_back_to_status() {
        let err = FetchError::from_response_body(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert!(err
            .to_string()
            .starts_with("Request failed with status code 502"));
    }
}
