//! Search session state and its transition function
//!
//! The session is a plain snapshot plus a reducer: the UI feeds it actions
//! and dispatches whatever request the reducer hands back. Nothing in here
//! touches a widget, so the whole search lifecycle is testable headless.

use crate::backend::types::{SearchResponse, SearchResult};

/// Fixed message shown for any failed search request.
pub const SEARCH_ERROR_MESSAGE: &str = "Failed to fetch results. Please try again.";

/// Where the session currently is in the request lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No query issued yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    Success,
    Failed,
}

/// A search the caller must dispatch to the backend.
///
/// `seq` ties the eventual completion action back to this request; the
/// reducer ignores completions that are not for the latest issued `seq`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: String,
    pub page: u32,
}

#[derive(Debug, Clone)]
pub enum Action {
    /// User submitted the search input.
    SubmitQuery(String),
    /// User picked a page in the pagination row.
    ChangePage(u32),
    RequestSucceeded { seq: u64, response: SearchResponse },
    RequestFailed { seq: u64 },
}

/// Complete UI-visible state for the current search interaction.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub query: String,
    pub page: u32,
    pub phase: Phase,
    pub error: Option<String>,
    pub results: Vec<SearchResult>,
    pub total: u64,
    seq: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            phase: Phase::Idle,
            error: None,
            results: Vec::new(),
            total: 0,
            seq: 0,
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// True once a search has been issued; gates the "no results" notice.
    pub fn query_issued(&self) -> bool {
        !self.query.is_empty()
    }

    /// Apply an action, returning the request to dispatch (if any).
    ///
    /// Blank queries never transition. Completion actions whose `seq` is
    /// not the latest issued one are stale and leave the state untouched,
    /// so overlapping requests resolve newest-wins rather than by arrival
    /// order. A failed request keeps the previous results on screen; only
    /// the error banner changes.
    pub fn apply(&mut self, action: Action) -> Option<SearchRequest> {
        match action {
            Action::SubmitQuery(query) => {
                if query.trim().is_empty() {
                    return None;
                }
                self.query = query;
                self.page = 1;
                self.begin_request()
            }
            Action::ChangePage(page) => {
                if self.query.trim().is_empty() {
                    return None;
                }
                self.page = page.max(1);
                self.begin_request()
            }
            Action::RequestSucceeded { seq, response } => {
                if seq == self.seq {
                    self.results = response.results;
                    self.total = response.total;
                    self.error = None;
                    self.phase = Phase::Success;
                }
                None
            }
            Action::RequestFailed { seq } => {
                if seq == self.seq {
                    self.error = Some(SEARCH_ERROR_MESSAGE.to_string());
                    self.phase = Phase::Failed;
                }
                None
            }
        }
    }

    fn begin_request(&mut self) -> Option<SearchRequest> {
        self.error = None;
        self.phase = Phase::Loading;
        self.seq += 1;
        Some(SearchRequest {
            seq: self.seq,
            query: self.query.clone(),
            page: self.page,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(results: Vec<SearchResult>, total: u64) -> SearchResponse {
        SearchResponse {
            results,
            total,
            page: 1,
            query: "cats".to_string(),
        }
    }

    fn result(url: &str) -> SearchResult {
        SearchResult {
            doc_id: None,
            url: url.to_string(),
            title: None,
            content: None,
            description: None,
        }
    }

    #[test]
    fn test_blank_query_is_ignored() {
        let mut session = SessionState::new();
        assert!(session.apply(Action::SubmitQuery("   ".to_string())).is_none());
        assert_eq!(session.phase, Phase::Idle);
        assert!(!session.query_issued());
    }

    #[test]
    fn test_submit_resets_page_and_clears_error() {
        let mut session = SessionState::new();
        session.page = 3;
        session.query = "dogs".to_string();
        session.error = Some(SEARCH_ERROR_MESSAGE.to_string());

        let request = session.apply(Action::SubmitQuery("cats".to_string()));
        let request = request.expect("non-blank query must issue a request");
        assert_eq!(request.query, "cats");
        assert_eq!(request.page, 1);
        assert_eq!(session.page, 1);
        assert!(session.error.is_none());
        assert!(session.is_loading());
    }

    #[test]
    fn test_success_populates_results_and_clears_loading() {
        let mut session = SessionState::new();
        let request = session.apply(Action::SubmitQuery("cats".to_string())).unwrap();

        session.apply(Action::RequestSucceeded {
            seq: request.seq,
            response: response(vec![result("https://a.example"), result("https://b.example")], 25),
        });

        assert_eq!(session.phase, Phase::Success);
        assert!(!session.is_loading());
        assert_eq!(session.results.len(), 2);
        assert_eq!(session.total, 25);
    }

    #[test]
    fn test_failure_sets_fixed_message_and_keeps_results() {
        let mut session = SessionState::new();
        let request = session.apply(Action::SubmitQuery("cats".to_string())).unwrap();
        session.apply(Action::RequestSucceeded {
            seq: request.seq,
            response: response(vec![result("https://a.example")], 12),
        });

        let request = session.apply(Action::ChangePage(2)).unwrap();
        assert_eq!(request.page, 2);
        session.apply(Action::RequestFailed { seq: request.seq });

        assert_eq!(session.phase, Phase::Failed);
        assert!(!session.is_loading());
        assert_eq!(session.error.as_deref(), Some(SEARCH_ERROR_MESSAGE));
        assert_eq!(session.results.len(), 1);
        assert_eq!(session.total, 12);
    }

    #[test]
    fn test_change_page_without_query_is_ignored() {
        let mut session = SessionState::new();
        assert!(session.apply(Action::ChangePage(2)).is_none());
        assert_eq!(session.phase, Phase::Idle);
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut session = SessionState::new();
        let first = session.apply(Action::SubmitQuery("cats".to_string())).unwrap();
        let second = session.apply(Action::SubmitQuery("dogs".to_string())).unwrap();
        assert!(second.seq > first.seq);

        // The superseded request resolving must not touch the state.
        session.apply(Action::RequestSucceeded {
            seq: first.seq,
            response: response(vec![result("https://stale.example")], 99),
        });
        assert!(session.is_loading());
        assert!(session.results.is_empty());

        session.apply(Action::RequestSucceeded {
            seq: second.seq,
            response: response(vec![result("https://fresh.example")], 7),
        });
        assert_eq!(session.phase, Phase::Success);
        assert_eq!(session.results[0].url, "https://fresh.example");
        assert_eq!(session.total, 7);
    }

    #[test]
    fn test_stale_failure_is_ignored() {
        let mut session = SessionState::new();
        let first = session.apply(Action::SubmitQuery("cats".to_string())).unwrap();
        let second = session.apply(Action::ChangePage(2)).unwrap();

        session.apply(Action::RequestFailed { seq: first.seq });
        assert!(session.is_loading());
        assert!(session.error.is_none());

        session.apply(Action::RequestFailed { seq: second.seq });
        assert_eq!(session.phase, Phase::Failed);
    }
}
