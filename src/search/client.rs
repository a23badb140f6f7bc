//! HTTP client for the search endpoint
//!
//! The endpoint contract is `GET <endpoint>?q=<url-encoded query>` returning
//! `200 OK` with a JSON array of title strings, in relevance order.

use std::time::Duration;

use thiserror::Error;

use crate::error::ReelfindError;

/// Errors that can occur while fetching suggestions
///
/// None of these are surfaced to the user; a failed fetch clears the
/// suggestion list and is written to the debug log.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Request failed or timed out before a response arrived
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-2xx status
    #[error("Search endpoint returned HTTP {code}")]
    Api { code: u16 },

    /// Body was not a JSON array of strings
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Client for the suggestion endpoint
#[derive(Debug, Clone)]
pub struct SearchClient {
    endpoint: String,
    http: reqwest::Client,
}

impl SearchClient {
    /// Create a client with a per-request timeout
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, ReelfindError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ReelfindError::Endpoint(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.to_string(),
            http,
        })
    }

    /// Fetch suggestions for a query
    ///
    /// The query is sent URL-encoded as the `q` parameter.
    pub async fn fetch(&self, query: &str) -> Result<Vec<String>, SearchError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Api {
                code: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        parse_suggestions(&body)
    }
}

/// Parse a response body into a list of suggestions
///
/// Anything other than a JSON array of strings is malformed. Order is
/// preserved; the endpoint returns titles in relevance order.
pub fn parse_suggestions(body: &str) -> Result<Vec<String>, SearchError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| SearchError::MalformedResponse(e.to_string()))?;

    let items = value
        .as_array()
        .ok_or_else(|| SearchError::MalformedResponse("expected a JSON array".to_string()))?;

    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                SearchError::MalformedResponse("expected an array of strings".to_string())
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
