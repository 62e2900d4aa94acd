//! Wire types for the remote search API
//!
//! Field names follow what the search service marshals (Go-style exported
//! names on result items, lowercase on the envelope), so everything here is
//! renamed or defaulted rather than shaped to taste.

use serde::{Deserialize, Serialize};

/// One hit as produced by the search service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "DocID", default)]
    pub doc_id: Option<i64>,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Content", default)]
    pub content: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
}

/// Envelope for one result page. `total` counts matches across all pages,
/// independent of how many items this page carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub query: String,
}
