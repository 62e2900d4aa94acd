//! HTTP client for the remote search API

use reqwest::Client;
use thiserror::Error;

use crate::backend::types::SearchResponse;

/// Any way a search can go wrong. The UI collapses all of these into one
/// fixed message; `Display` exists for the diagnostic log.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search failed: server returned {0}")]
    Status(reqwest::StatusCode),
    #[error("search failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client for the search endpoint. Cheap to clone; the inner reqwest client
/// shares its connection pool across clones.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    base_url: String,
}

impl SearchClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch one result page for `query`.
    ///
    /// The query is percent-encoded by reqwest's pair serializer. Missing or
    /// zero-valued envelope fields are normalized the way the service's own
    /// consumers treat them: no results means an empty page, `page` floors
    /// at 1, and an absent echo of the query falls back to the input.
    pub async fn search(&self, query: &str, page: u32) -> Result<SearchResponse, SearchError> {
        let url = format!("{}/search", self.base_url);
        let page_param = page.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[("q", query), ("page", page_param.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SearchError::Status(response.status()));
        }

        let mut body: SearchResponse = response.json().await?;
        if body.page == 0 {
            body.page = 1;
        }
        if body.query.is_empty() {
            body.query = query.to_string();
        }
        Ok(body)
    }
}
