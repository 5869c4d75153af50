use crate::mvi::UiState;
use crate::provider::{MovieDetail, SearchResultItem};

/// Maximum number of remembered search terms.
pub const HISTORY_CAPACITY: usize = 10;

/// Everything the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    /// Term of the last successful search; load-more pages continue it.
    pub query: String,
    /// Results of every page fetched so far, in arrival order.
    pub movies: Vec<SearchResultItem>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_results: u64,
    /// `current_page < total_pages`, recomputed on every page.
    pub has_more: bool,
    /// First-page search or detail fetch in flight.
    pub loading: bool,
    /// Subsequent page in flight.
    pub loading_more: bool,
    pub error: Option<String>,
    pub selected_detail: Option<MovieDetail>,
    /// Most recent first, unique, at most [`HISTORY_CAPACITY`] entries.
    pub history: Vec<String>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            movies: Vec::new(),
            current_page: 1,
            total_pages: 1,
            total_results: 0,
            has_more: false,
            loading: false,
            loading_more: false,
            error: None,
            selected_detail: None,
            history: Vec::new(),
        }
    }
}

impl UiState for SearchState {}

impl SearchState {
    /// Reset pagination and results to the empty session values.
    pub(crate) fn reset_results(&mut self) {
        self.movies.clear();
        self.total_results = 0;
        self.current_page = 1;
        self.total_pages = 1;
        self.has_more = false;
    }

    /// Whether a load-more request may start now.
    pub fn can_load_more(&self) -> bool {
        self.has_more && !self.loading_more
    }
}

/// Put `term` at the front of `history`, dropping any older copy and
/// trimming to capacity. Blank terms are ignored.
pub fn push_history(history: &mut Vec<String>, term: &str) {
    let term = term.trim();
    if term.is_empty() {
        return;
    }
    history.retain(|existing| existing != term);
    history.insert(0, term.to_string());
    history.truncate(HISTORY_CAPACITY);
}
