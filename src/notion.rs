use reqwest::{Client, RequestBuilder};
use serde_json::json;
use tracing::info;

use crate::config::{require, NotionConfig};
use crate::error::Result;
use crate::http::{build_client, send_json, trim_base};
use crate::models::{Database, SearchResponse};

pub const NOTION_VERSION: &str = "2022-06-28";

pub struct NotionClient {
    client: Client,
    base_url: String,
    token: String,
}

impl NotionClient {
    pub fn new(config: &NotionConfig) -> Result<Self> {
        let token = require(&config.api_key, "NOTION_API_KEY")?.to_string();
        Ok(NotionClient {
            client: build_client()?,
            base_url: trim_base(&config.api_url).to_string(),
            token,
        })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
    }

    pub async fn retrieve_database(&self, id: &str) -> Result<Database> {
        info!("Retrieving Notion database {}", id);
        let url = format!("{}/v1/databases/{}", self.base_url, id);
        send_json(self.authorized(self.client.get(&url))).await
    }

    /// Every database shared with the integration (first page of 100).
    pub async fn search_databases(&self) -> Result<Vec<Database>> {
        info!("Searching for Notion databases");
        let url = format!("{}/v1/search", self.base_url);
        let body = json!({
            "filter": { "property": "object", "value": "database" },
            "page_size": 100
        });

        let response: SearchResponse =
            send_json(self.authorized(self.client.post(&url)).json(&body)).await?;
        Ok(response.results)
    }
}
