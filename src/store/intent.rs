use crate::mvi::Intent;
use crate::provider::{MovieDetail, SearchResultItem};

/// Every way the search state can change.
///
/// The three request kinds each have a started/succeeded/failed triple;
/// the rest are synchronous user mutations.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchIntent {
    SearchStarted,
    SearchSucceeded {
        term: String,
        movies: Vec<SearchResultItem>,
        total_results: u64,
    },
    SearchFailed {
        message: String,
    },

    LoadMoreStarted,
    LoadMoreSucceeded {
        page: u32,
        movies: Vec<SearchResultItem>,
        total_results: u64,
    },
    LoadMoreFailed {
        message: String,
    },

    DetailsStarted,
    DetailsSucceeded(Box<MovieDetail>),
    DetailsFailed {
        message: String,
    },

    ClearResults,
    ClearError,
    SetQuery(String),
    ClearSelectedDetail,
    AddToHistory(String),
    ClearHistory,
}

impl Intent for SearchIntent {}
