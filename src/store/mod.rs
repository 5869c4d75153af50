//! Search state store.
//!
//! [`MovieStore`] owns the single [`SearchState`] of a session. State only
//! changes through [`SearchReducer`]; the async operations bracket one
//! proxy request with a started intent and a succeeded/failed intent.
//!
//! The state lives in a `tokio::sync::watch` channel: observers call
//! [`MovieStore::subscribe`] and are woken after every applied intent.
//! The channel is never borrowed across a network await, so overlapping
//! operations interleave freely and whichever result lands last wins.

pub mod messages;

mod intent;
mod reducer;
mod state;

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::client::MovieApi;
use crate::mvi::Reducer;
use crate::provider::ProviderReply;

pub use intent::SearchIntent;
pub use reducer::SearchReducer;
pub use state::{push_history, SearchState, HISTORY_CAPACITY};

/// How an async store operation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Preconditions not met; no state change and no request.
    Skipped,
    /// Request succeeded and its result was applied.
    Fulfilled,
    /// Request (or its fail-fast check) failed; `error` was set.
    Rejected,
}

/// Cloneable handle to the session's search state.
#[derive(Clone)]
pub struct MovieStore {
    state: Arc<watch::Sender<SearchState>>,
    api: Arc<dyn MovieApi>,
}

impl MovieStore {
    pub fn new(api: Arc<dyn MovieApi>) -> Self {
        let (state, _) = watch::channel(SearchState::default());
        Self {
            state: Arc::new(state),
            api,
        }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// Receiver notified after every state change.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// Apply one intent through the reducer and notify observers.
    pub fn dispatch(&self, intent: SearchIntent) {
        self.state.send_modify(|state| {
            *state = SearchReducer::reduce(std::mem::take(state), intent);
        });
    }

    /// Search for `term`, replacing the current results with page 1.
    ///
    /// Blank terms are ignored without touching state.
    pub async fn search(&self, term: &str) -> Completion {
        let term = term.trim();
        if term.is_empty() {
            debug!("Ignoring blank search term");
            return Completion::Skipped;
        }

        self.dispatch(SearchIntent::SearchStarted);
        debug!(term, "Searching movies");

        let outcome = match self.api.search(term, 1).await {
            Ok(ProviderReply::Found(page)) => SearchIntent::SearchSucceeded {
                term: term.to_string(),
                movies: page.items,
                total_results: page.total_results,
            },
            Ok(ProviderReply::Rejected(message)) => SearchIntent::SearchFailed {
                message: message.unwrap_or_else(|| messages::NO_MOVIES_FOUND.to_string()),
            },
            Err(err) => {
                warn!(error = %err, term, "Search error");
                SearchIntent::SearchFailed {
                    message: messages::SEARCH_FAILED.to_string(),
                }
            }
        };
        self.finish(outcome)
    }

    /// Fetch the page after `current_page` for the stored query and append it.
    ///
    /// Skipped when there is nothing more or a page is already in flight.
    pub async fn load_more(&self) -> Completion {
        let Some((query, current_page, total_pages)) = self.begin_load_more() else {
            debug!("Load more ignored");
            return Completion::Skipped;
        };

        if query.is_empty() || current_page >= total_pages {
            return self.finish(SearchIntent::LoadMoreFailed {
                message: messages::NOTHING_TO_LOAD.to_string(),
            });
        }

        let next_page = current_page + 1;
        debug!(query = %query, page = next_page, "Loading more movies");

        let outcome = match self.api.search(&query, next_page).await {
            Ok(ProviderReply::Found(page)) => SearchIntent::LoadMoreSucceeded {
                page: next_page,
                movies: page.items,
                total_results: page.total_results,
            },
            Ok(ProviderReply::Rejected(message)) => SearchIntent::LoadMoreFailed {
                message: message.unwrap_or_else(|| messages::NO_MORE_MOVIES.to_string()),
            },
            Err(err) => {
                warn!(error = %err, query = %query, page = next_page, "Load more error");
                SearchIntent::LoadMoreFailed {
                    message: messages::LOAD_MORE_FAILED.to_string(),
                }
            }
        };
        self.finish(outcome)
    }

    /// Fetch the full record for `id` and make it the selected detail.
    pub async fn get_details(&self, id: &str) -> Completion {
        self.dispatch(SearchIntent::DetailsStarted);
        debug!(id, "Fetching movie details");

        let outcome = match self.api.details(id).await {
            Ok(ProviderReply::Found(detail)) => SearchIntent::DetailsSucceeded(Box::new(detail)),
            Ok(ProviderReply::Rejected(message)) => SearchIntent::DetailsFailed {
                message: message.unwrap_or_else(|| messages::MOVIE_NOT_FOUND.to_string()),
            },
            Err(err) => {
                warn!(error = %err, id, "Movie details error");
                SearchIntent::DetailsFailed {
                    message: messages::DETAILS_FAILED.to_string(),
                }
            }
        };
        self.finish(outcome)
    }

    pub fn clear_results(&self) {
        self.dispatch(SearchIntent::ClearResults);
    }

    pub fn clear_error(&self) {
        self.dispatch(SearchIntent::ClearError);
    }

    pub fn set_query(&self, query: impl Into<String>) {
        self.dispatch(SearchIntent::SetQuery(query.into()));
    }

    pub fn clear_selected_detail(&self) {
        self.dispatch(SearchIntent::ClearSelectedDetail);
    }

    pub fn add_to_history(&self, term: impl Into<String>) {
        self.dispatch(SearchIntent::AddToHistory(term.into()));
    }

    pub fn clear_history(&self) {
        self.dispatch(SearchIntent::ClearHistory);
    }

    /// Check the load-more guard and mark the page as in flight in one step,
    /// so two racing triggers cannot both pass.
    fn begin_load_more(&self) -> Option<(String, u32, u32)> {
        let mut request = None;
        self.state.send_if_modified(|state| {
            if !state.can_load_more() {
                return false;
            }
            request = Some((state.query.clone(), state.current_page, state.total_pages));
            *state = SearchReducer::reduce(std::mem::take(state), SearchIntent::LoadMoreStarted);
            true
        });
        request
    }

    fn finish(&self, outcome: SearchIntent) -> Completion {
        let completion = match outcome {
            SearchIntent::SearchFailed { .. }
            | SearchIntent::LoadMoreFailed { .. }
            | SearchIntent::DetailsFailed { .. } => Completion::Rejected,
            _ => Completion::Fulfilled,
        };
        self.dispatch(outcome);
        completion
    }
}

impl std::fmt::Debug for MovieStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovieStore")
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}
