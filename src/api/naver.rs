use crate::config::Credentials;
use anyhow::Result;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

const NAVER_NEWS_URL: &str = "https://openapi.naver.com/v1/search/news.json";
const CLIENT_ID_HEADER: &str = "X-Naver-Client-Id";
const CLIENT_SECRET_HEADER: &str = "X-Naver-Client-Secret";

/// One entry of the search response's `items` array, as delivered.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RawItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub originallink: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "pubDate", default)]
    pub pub_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<RawItem>,
}

/// Why a keyword produced no items.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchFailure {
    #[error("HTTP {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unreadable response: {0}")]
    Decode(String),
}

/// Result of one keyword search. Failures are kept distinct from an empty
/// result even though the pipeline treats both as "no items".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Items(Vec<RawItem>),
    Failed(FetchFailure),
}

impl FetchOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }

    pub fn into_items(self) -> Vec<RawItem> {
        match self {
            FetchOutcome::Items(items) => items,
            FetchOutcome::Failed(_) => Vec::new(),
        }
    }
}

/// Anything that can answer a keyword search with raw items.
pub trait NewsSource: Send + Sync {
    fn fetch<'a>(
        &'a self,
        keyword: &'a str,
        page_size: u32,
    ) -> Pin<Box<dyn Future<Output = FetchOutcome> + Send + 'a>>;
}

/// Map a finished HTTP exchange to an outcome. Only 200 counts as success.
pub fn decode_response(status: StatusCode, body: &[u8]) -> FetchOutcome {
    if status != StatusCode::OK {
        return FetchOutcome::Failed(FetchFailure::Status(status.as_u16()));
    }
    match serde_json::from_slice::<SearchResponse>(body) {
        Ok(resp) => FetchOutcome::Items(resp.items),
        Err(e) => FetchOutcome::Failed(FetchFailure::Decode(e.to_string())),
    }
}

pub struct NaverClient {
    client: Client,
    credentials: Credentials,
    endpoint: String,
}

impl NaverClient {
    pub fn new(credentials: Credentials, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            credentials,
            endpoint: NAVER_NEWS_URL.to_string(),
        })
    }

    /// Point the client at a different search endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub async fn search(&self, keyword: &str, page_size: u32) -> FetchOutcome {
        let display = page_size.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("query", keyword), ("display", display.as_str()), ("sort", "date")])
            .header(CLIENT_ID_HEADER, &self.credentials.client_id)
            .header(CLIENT_SECRET_HEADER, &self.credentials.client_secret)
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                warn!(keyword, error = %e, "news search request failed");
                return FetchOutcome::Failed(FetchFailure::Transport(e.to_string()));
            }
        };

        let status = response.status();
        let body = match response.bytes().await {
            Ok(b) => b,
            Err(e) => {
                warn!(keyword, error = %e, "failed to read news search response");
                return FetchOutcome::Failed(FetchFailure::Transport(e.to_string()));
            }
        };

        let outcome = decode_response(status, &body);
        match &outcome {
            FetchOutcome::Items(items) => debug!(keyword, count = items.len(), "news search ok"),
            FetchOutcome::Failed(f) => warn!(keyword, failure = %f, "news search returned no items"),
        }
        outcome
    }
}

impl NewsSource for NaverClient {
    fn fetch<'a>(
        &'a self,
        keyword: &'a str,
        page_size: u32,
    ) -> Pin<Box<dyn Future<Output = FetchOutcome> + Send + 'a>> {
        Box::pin(self.search(keyword, page_size))
    }
}
