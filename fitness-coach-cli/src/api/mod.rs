use anyhow::{Context, Result};
use fitness_coach::models::{ResearchEntry, SearchResult};
use futures::future::join_all;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::SearchConfig;

mod error;
mod retry;

pub use error::SearchError;
pub use retry::RetryConfig;

/// Instant-answer payload; only the related topics are used
#[derive(Debug, Deserialize)]
struct InstantAnswer {
    #[serde(rename = "RelatedTopics", default)]
    related_topics: Vec<Topic>,
}

/// A related topic is either a direct result or a named group of results
#[derive(Debug, Deserialize)]
struct Topic {
    #[serde(rename = "Text")]
    text: Option<String>,
    #[serde(rename = "FirstURL")]
    first_url: Option<String>,
    #[serde(rename = "Topics", default)]
    topics: Vec<Topic>,
}

/// Best-effort web search backed by the DuckDuckGo instant answer API.
///
/// Failures never escape [`SearchClient::search`]: they are logged and turned
/// into a single error sentinel record.
pub struct SearchClient {
    client: Client,
    base_url: String,
    retry_config: RetryConfig,
}

impl SearchClient {
    /// Create a new search client
    pub fn new(config: &SearchConfig, retry_config: RetryConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            retry_config,
        })
    }

    /// Search for `query`, keeping at most `max_results` references
    pub async fn search(&self, query: &str, max_results: usize) -> Vec<SearchResult> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let outcome = self
            .retry_config
            .execute(|| self.fetch(query), SearchError::is_transient)
            .await;

        match outcome {
            Ok(mut results) => {
                results.truncate(max_results);
                tracing::debug!("Search {:?} returned {} results", query, results.len());
                results
            }
            Err(e) => {
                tracing::warn!("Search {:?} failed: {}", query, e);
                vec![SearchResult::error(e)]
            }
        }
    }

    /// Run several queries concurrently
    pub async fn research(&self, queries: &[String], max_results: usize) -> Vec<ResearchEntry> {
        let searches = queries.iter().map(|query| async move {
            ResearchEntry::new(query.clone(), self.search(query, max_results).await)
        });
        join_all(searches).await
    }

    async fn fetch(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let url = format!("{}/", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("no_redirect", "1"),
                ("no_html", "1"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SearchError::from_status(status, error_text));
        }

        let body = response.text().await?;
        let answer: InstantAnswer = serde_json::from_str(&body)
            .map_err(|e| SearchError::InvalidResponse(e.to_string()))?;

        let mut results = Vec::new();
        flatten_topics(&answer.related_topics, &mut results);
        Ok(results)
    }
}

/// Walk nested topic groups depth-first, collecting the direct results
fn flatten_topics(topics: &[Topic], results: &mut Vec<SearchResult>) {
    for topic in topics {
        if let Some(text) = &topic.text {
            results.push(SearchResult::new(
                text.clone(),
                "",
                topic.first_url.clone().unwrap_or_default(),
            ));
        }
        flatten_topics(&topic.topics, results);
    }
}
