//! Tavily web-search client.
//!
//! Talks to the Tavily `/search` REST endpoint. Results are normalized to
//! [`Source`] records with missing fields defaulted to empty strings; the
//! caller (the research loop's search step) handles failure by degrading to
//! an empty batch, so nothing here retries.

use async_trait::async_trait;
use deepscout_core::error::SearchError;
use deepscout_core::search::{SearchDepth, SearchProvider};
use deepscout_core::source::Source;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const TAVILY_API_URL: &str = "https://api.tavily.com";

/// A Tavily search client.
pub struct TavilyClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl TavilyClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, TAVILY_API_URL)
    }

    /// Point the client at a different endpoint (proxies, test servers).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: u32,
    search_depth: SearchDepth,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Source>,
}

#[async_trait]
impl SearchProvider for TavilyClient {
    fn name(&self) -> &str {
        "tavily"
    }

    async fn search(
        &self,
        query: &str,
        max_results: u32,
        depth: SearchDepth,
    ) -> std::result::Result<Vec<Source>, SearchError> {
        let url = format!("{}/search", self.base_url);

        debug!(query = %query, max_results, depth = %depth, "Sending search request");

        let response = self
            .client
            .post(&url)
            .json(&SearchRequest {
                api_key: &self.api_key,
                query,
                max_results,
                search_depth: depth,
            })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SearchError::Timeout(e.to_string())
                } else {
                    SearchError::Network(e.to_string())
                }
            })?;

        let status = response.status().as_u16();

        if status == 401 || status == 403 {
            return Err(SearchError::AuthenticationFailed(
                "Invalid Tavily API key".into(),
            ));
        }

        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Search provider returned error");
            return Err(SearchError::ApiError {
                status_code: status,
                message: error_body,
            });
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::MalformedResponse(format!("Failed to parse response: {e}")))?;

        Ok(parsed.results)
    }
}
