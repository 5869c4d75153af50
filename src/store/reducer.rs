use crate::mvi::Reducer;
use crate::provider::total_pages;
use crate::store::intent::SearchIntent;
use crate::store::state::{push_history, SearchState};

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::SearchStarted | SearchIntent::DetailsStarted => {
                state.loading = true;
                state.error = None;
            }
            SearchIntent::SearchSucceeded {
                term,
                movies,
                total_results,
            } => {
                state.loading = false;
                state.movies = movies;
                state.total_results = total_results;
                state.current_page = 1;
                state.total_pages = total_pages(total_results);
                state.has_more = state.current_page < state.total_pages;
                push_history(&mut state.history, &term);
                state.query = term;
            }
            SearchIntent::SearchFailed { message } => {
                state.loading = false;
                state.error = Some(message);
                state.reset_results();
            }

            SearchIntent::LoadMoreStarted => {
                state.loading_more = true;
                state.error = None;
            }
            SearchIntent::LoadMoreSucceeded {
                page,
                movies,
                total_results,
            } => {
                state.loading_more = false;
                state.movies.extend(movies);
                state.current_page = page;
                state.total_results = total_results;
                // total_pages stays as set by the first page.
                state.has_more = page < state.total_pages;
            }
            SearchIntent::LoadMoreFailed { message } => {
                state.loading_more = false;
                state.error = Some(message);
            }

            SearchIntent::DetailsSucceeded(detail) => {
                state.loading = false;
                state.selected_detail = Some(*detail);
            }
            SearchIntent::DetailsFailed { message } => {
                state.loading = false;
                state.error = Some(message);
            }

            SearchIntent::ClearResults => {
                state.error = None;
                state.reset_results();
            }
            SearchIntent::ClearError => state.error = None,
            SearchIntent::SetQuery(query) => state.query = query,
            SearchIntent::ClearSelectedDetail => state.selected_detail = None,
            SearchIntent::AddToHistory(term) => push_history(&mut state.history, &term),
            SearchIntent::ClearHistory => state.history.clear(),
        }
        state
    }
}
