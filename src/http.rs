use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{FetchError, Result};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub fn build_client() -> Result<Client> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(20))
        .user_agent(USER_AGENT)
        .build()?)
}

/// Sends the request and decodes a 2xx JSON body into `T`.
///
/// Non-2xx responses become [`FetchError::Api`] with the provider's message.
pub async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let response = request.send().await?;
    let status = response.status();
    let url = response.url().path().to_string();
    let body = response.text().await?;

    debug!(%status, path = %url, bytes = body.len(), "upstream response");

    if !status.is_success() {
        return Err(FetchError::from_response_body(status, &body));
    }

    Ok(serde_json::from_str(&body)?)
}

pub fn trim_base(url: &str) -> &str {
    url.trim_end_matches('/')
}
