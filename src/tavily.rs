//! Tavily web search client
//!
//! Fallback lookup tier. Issues a single search request per query and
//! prefers the synthesized answer field of the response; when the provider
//! does not synthesize one, the raw response payload is handed back so the
//! caller still has something to report.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::config::TavilyConfig;
use crate::error::{ProviderError, Result};
use crate::ports::WebSearchProvider;

/// Tavily API client
pub struct TavilyClient {
    client: Client,
    api_key: String,
    search_url: String,
}

impl TavilyClient {
    /// Create a new client from configuration
    pub fn new(config: &TavilyConfig) -> anyhow::Result<Self> {
        use anyhow::Context;

        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .user_agent("PlaceScout/0.1.0")
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            search_url: format!("{}/search", config.base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl WebSearchProvider for TavilyClient {
    async fn search(&self, query: &str) -> Result<String> {
        debug!("Tavily search: '{}'", query);
        let started = Instant::now();

        let request = wire::SearchRequest {
            query,
            topic: "general",
            include_answer: "advanced",
            api_key: &self.api_key,
        };

        let response = self
            .client
            .post(&self.search_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(format!("Tavily request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api(format!(
                "Tavily API error {}: {}",
                status, error_text
            )));
        }

        let payload: Value = response.json().await.map_err(|e| {
            ProviderError::Parse(format!("Failed to parse Tavily response: {}", e))
        })?;

        info!(
            "Tavily answered '{}' in {:.3}s",
            query,
            started.elapsed().as_secs_f64()
        );

        Ok(extract_answer(&payload))
    }
}

/// Pull the synthesized answer out of a search response, falling back to
/// the raw payload when the answer field is missing or blank.
fn extract_answer(payload: &Value) -> String {
    match payload.get("answer").and_then(Value::as_str) {
        Some(answer) if !answer.trim().is_empty() => answer.to_string(),
        _ => payload.to_string(),
    }
}

/// Tavily API request structures
mod wire {
    use serde::Serialize;

    /// Request body for the search endpoint
    #[derive(Debug, Serialize)]
    pub struct SearchRequest<'a> {
        pub query: &'a str,
        pub topic: &'a str,
        pub include_answer: &'a str,
        pub api_key: &'a str,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_answer_prefers_answer_field() {
        let payload = json!({
            "answer": "Paris has the Eiffel Tower and the Louvre.",
            "results": [{"title": "Paris travel guide"}]
        });
        assert_eq!(
            extract_answer(&payload),
            "Paris has the Eiffel Tower and the Louvre."
        );
    }

    #[test]
    fn test_extract_answer_falls_back_on_blank_answer() {
        let payload = json!({"answer": "   ", "results": []});
        let text = extract_answer(&payload);
        assert!(text.contains("results"));
    }

    #[test]
    fn test_extract_answer_falls_back_on_missing_answer() {
        let payload = json!({"results": [{"title": "Transit in Tokyo"}]});
        let text = extract_answer(&payload);
        assert!(text.contains("Transit in Tokyo"));
    }

    #[test]
    fn test_search_request_serializes_all_fields() {
        let request = wire::SearchRequest {
            query: "activities in and around Rome",
            topic: "general",
            include_answer: "advanced",
            api_key: "tavily_test_key_123",
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["query"], "activities in and around Rome");
        assert_eq!(body["topic"], "general");
        assert_eq!(body["include_answer"], "advanced");
        assert_eq!(body["api_key"], "tavily_test_key_123");
    }

    #[test]
    fn test_client_creation_appends_search_path() {
        let config = TavilyConfig {
            base_url: "https://api.tavily.com/".to_string(),
            ..TavilyConfig::default()
        };
        let client = TavilyClient::new(&config).unwrap();
        assert_eq!(client.search_url, "https://api.tavily.com/search");
    }
}
