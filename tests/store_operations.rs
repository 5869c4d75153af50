mod common;

use std::sync::Arc;
use std::time::Duration;

use common::fake_api::FakeApi;
use common::page;
use movie_search::client::ApiError;
use movie_search::provider::{MovieDetail, ProviderReply, SearchResultItem};
use movie_search::store::{messages, Completion, MovieStore, HISTORY_CAPACITY};

fn store_with(api: &Arc<FakeApi>) -> MovieStore {
    MovieStore::new(api.clone())
}

#[tokio::test]
async fn search_success_populates_results() {
    let api = Arc::new(FakeApi::new());
    api.push_search(Ok(ProviderReply::Found(page("b", 10, 42))));
    let store = store_with(&api);

    assert_eq!(store.search("Batman").await, Completion::Fulfilled);

    let state = store.snapshot();
    assert_eq!(state.movies.len(), 10);
    assert_eq!(state.total_results, 42);
    assert_eq!(state.current_page, 1);
    assert_eq!(state.total_pages, 5);
    assert!(state.has_more);
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.query, "Batman");
    assert_eq!(state.history, vec!["Batman".to_string()]);
    assert_eq!(api.search_calls(), vec![("Batman".to_string(), 1)]);
}

#[tokio::test]
async fn provider_rejection_sets_message_and_resets() {
    let api = Arc::new(FakeApi::new());
    api.push_search(Ok(ProviderReply::Found(page("b", 10, 42))))
        .push_search(Ok(ProviderReply::Rejected(Some("Movie not found!".to_string()))));
    let store = store_with(&api);

    store.search("batman").await;
    assert_eq!(store.search("zzzzqqq").await, Completion::Rejected);

    let state = store.snapshot();
    assert_eq!(state.error.as_deref(), Some("Movie not found!"));
    assert!(state.movies.is_empty());
    assert_eq!(state.total_results, 0);
    assert_eq!(state.current_page, 1);
    assert_eq!(state.total_pages, 1);
    assert!(!state.has_more);
    assert!(!state.loading);
}

#[tokio::test]
async fn rejection_without_message_uses_default() {
    let api = Arc::new(FakeApi::new());
    api.push_search(Ok(ProviderReply::Rejected(None)));
    let store = store_with(&api);

    store.search("nothing").await;
    assert_eq!(store.snapshot().error.as_deref(), Some(messages::NO_MOVIES_FOUND));
}

#[tokio::test]
async fn transport_failure_uses_connectivity_message() {
    let api = Arc::new(FakeApi::new());
    api.push_search(Err(ApiError::Status(502)));
    let store = store_with(&api);

    assert_eq!(store.search("batman").await, Completion::Rejected);
    let state = store.snapshot();
    assert_eq!(
        state.error.as_deref(),
        Some("Failed to fetch movies. Please check your connection and try again.")
    );
    assert!(state.movies.is_empty());
    assert!(!state.loading);
    assert!(state.history.is_empty());
}

#[tokio::test]
async fn blank_search_is_a_no_op() {
    let api = Arc::new(FakeApi::new());
    let store = store_with(&api);
    let before = store.snapshot();

    assert_eq!(store.search("   ").await, Completion::Skipped);
    assert_eq!(store.search("").await, Completion::Skipped);

    assert_eq!(store.snapshot(), before);
    assert!(api.search_calls().is_empty());
}

#[tokio::test]
async fn search_term_is_trimmed() {
    let api = Arc::new(FakeApi::new());
    api.push_search(Ok(ProviderReply::Found(page("a", 3, 3))));
    let store = store_with(&api);

    store.search("  alien ").await;
    assert_eq!(api.search_calls(), vec![("alien".to_string(), 1)]);
    assert_eq!(store.snapshot().history, vec!["alien".to_string()]);
}

#[tokio::test]
async fn load_more_appends_next_page() {
    let api = Arc::new(FakeApi::new());
    api.push_search(Ok(ProviderReply::Found(page("a", 10, 25))))
        .push_search(Ok(ProviderReply::Found(page("b", 10, 25))))
        .push_search(Ok(ProviderReply::Found(page("c", 5, 25))));
    let store = store_with(&api);

    store.search("matrix").await;
    assert_eq!(store.load_more().await, Completion::Fulfilled);
    assert_eq!(store.load_more().await, Completion::Fulfilled);

    let state = store.snapshot();
    assert_eq!(state.movies.len(), 25);
    assert_eq!(state.movies[10].id, "b0");
    assert_eq!(state.current_page, 3);
    assert!(!state.has_more);

    // exhausted: ignored without a request
    assert_eq!(store.load_more().await, Completion::Skipped);
    assert_eq!(
        api.search_calls(),
        vec![
            ("matrix".to_string(), 1),
            ("matrix".to_string(), 2),
            ("matrix".to_string(), 3)
        ]
    );
}

#[tokio::test]
async fn load_more_without_search_is_a_no_op() {
    let api = Arc::new(FakeApi::new());
    let store = store_with(&api);

    assert_eq!(store.load_more().await, Completion::Skipped);
    assert!(api.search_calls().is_empty());
    assert!(store.snapshot().error.is_none());
}

#[tokio::test]
async fn load_more_failure_keeps_results() {
    let api = Arc::new(FakeApi::new());
    api.push_search(Ok(ProviderReply::Found(page("a", 10, 30))))
        .push_search(Err(ApiError::Status(500)));
    let store = store_with(&api);

    store.search("heat").await;
    assert_eq!(store.load_more().await, Completion::Rejected);

    let state = store.snapshot();
    assert_eq!(state.error.as_deref(), Some(messages::LOAD_MORE_FAILED));
    assert_eq!(state.movies.len(), 10);
    assert_eq!(state.current_page, 1);
    assert!(!state.loading_more);
    assert!(state.has_more);
}

#[tokio::test]
async fn load_more_rejection_relays_provider_message() {
    let api = Arc::new(FakeApi::new());
    api.push_search(Ok(ProviderReply::Found(page("a", 10, 30))))
        .push_search(Ok(ProviderReply::Rejected(Some("Too many results.".to_string()))));
    let store = store_with(&api);

    store.search("heat").await;
    assert_eq!(store.load_more().await, Completion::Rejected);

    let state = store.snapshot();
    assert_eq!(state.error.as_deref(), Some("Too many results."));
    assert_eq!(state.movies.len(), 10);
    assert!(!state.loading_more);
}

#[tokio::test]
async fn load_more_rejection_without_message_uses_default() {
    let api = Arc::new(FakeApi::new());
    api.push_search(Ok(ProviderReply::Found(page("a", 10, 30))))
        .push_search(Ok(ProviderReply::Rejected(None)));
    let store = store_with(&api);

    store.search("heat").await;
    assert_eq!(store.load_more().await, Completion::Rejected);

    let state = store.snapshot();
    assert_eq!(state.error.as_deref(), Some(messages::NO_MORE_MOVIES));
    assert_eq!(state.movies.len(), 10);
    assert_eq!(state.current_page, 1);
    assert!(!state.loading_more);
}

#[tokio::test]
async fn load_more_with_empty_query_fails_without_request() {
    let api = Arc::new(FakeApi::new());
    api.push_search(Ok(ProviderReply::Found(page("a", 10, 30))));
    let store = store_with(&api);

    store.search("heat").await;
    store.set_query("");
    assert_eq!(store.load_more().await, Completion::Rejected);

    let state = store.snapshot();
    assert_eq!(state.error.as_deref(), Some(messages::NOTHING_TO_LOAD));
    assert!(!state.loading_more);
    assert_eq!(state.movies.len(), 10);
    assert_eq!(api.search_calls(), vec![("heat".to_string(), 1)]);
}

#[tokio::test]
async fn racing_load_more_issues_one_request() {
    let api = Arc::new(FakeApi::new().with_delay(Duration::from_millis(50)));
    api.push_search(Ok(ProviderReply::Found(page("a", 10, 30))))
        .push_search(Ok(ProviderReply::Found(page("b", 10, 30))));
    let store = store_with(&api);
    store.search("heat").await;

    let (first, second) = tokio::join!(store.load_more(), store.load_more());

    let mut outcomes = [first, second];
    outcomes.sort_by_key(|c| *c == Completion::Fulfilled);
    assert_eq!(outcomes, [Completion::Skipped, Completion::Fulfilled]);
    assert_eq!(api.search_calls().len(), 2);
    assert_eq!(store.snapshot().movies.len(), 20);
}

#[tokio::test]
async fn history_is_capped_and_deduplicated() {
    let api = Arc::new(FakeApi::new());
    let store = store_with(&api);

    for n in 0..12 {
        store.add_to_history(format!("term {n}"));
    }
    store.add_to_history("term 5");

    let history = store.snapshot().history;
    assert_eq!(history.len(), HISTORY_CAPACITY);
    assert_eq!(history[0], "term 5");
    assert_eq!(history.iter().filter(|t| *t == "term 5").count(), 1);
    assert_eq!(history[1], "term 11");

    store.clear_history();
    assert!(store.snapshot().history.is_empty());
}

#[tokio::test]
async fn details_success_and_clear() {
    let api = Arc::new(FakeApi::new());
    let detail = MovieDetail {
        summary: SearchResultItem {
            id: "tt0096895".to_string(),
            title: "Batman".to_string(),
            year: "1989".to_string(),
            ..SearchResultItem::default()
        },
        runtime: Some("126 min".to_string()),
        ..MovieDetail::default()
    };
    api.push_details(Ok(ProviderReply::Found(detail.clone())));
    let store = store_with(&api);

    assert_eq!(store.get_details("tt0096895").await, Completion::Fulfilled);
    let state = store.snapshot();
    assert_eq!(state.selected_detail, Some(detail));
    assert!(!state.loading);

    store.clear_selected_detail();
    assert!(store.snapshot().selected_detail.is_none());
    assert_eq!(api.detail_calls(), 1);
}

#[tokio::test]
async fn details_failures() {
    let api = Arc::new(FakeApi::new());
    api.push_details(Ok(ProviderReply::Rejected(None)))
        .push_details(Err(ApiError::Status(500)));
    let store = store_with(&api);

    store.get_details("tt0").await;
    assert_eq!(store.snapshot().error.as_deref(), Some(messages::MOVIE_NOT_FOUND));

    store.get_details("tt0").await;
    let state = store.snapshot();
    assert_eq!(state.error.as_deref(), Some(messages::DETAILS_FAILED));
    assert!(state.selected_detail.is_none());
    assert!(!state.loading);
}

#[tokio::test]
async fn clear_results_keeps_history() {
    let api = Arc::new(FakeApi::new());
    api.push_search(Ok(ProviderReply::Found(page("a", 10, 30))));
    let store = store_with(&api);
    store.search("heat").await;

    store.clear_results();

    let state = store.snapshot();
    assert!(state.movies.is_empty());
    assert_eq!(state.total_results, 0);
    assert!(!state.has_more);
    assert_eq!(state.history, vec!["heat".to_string()]);
}

#[tokio::test]
async fn subscribers_see_loading_phase() {
    let api = Arc::new(FakeApi::new().with_delay(Duration::from_millis(50)));
    api.push_search(Ok(ProviderReply::Found(page("a", 1, 1))));
    let store = store_with(&api);
    let mut changes = store.subscribe();

    let task = {
        let store = store.clone();
        tokio::spawn(async move { store.search("heat").await })
    };

    changes.changed().await.unwrap();
    assert!(changes.borrow_and_update().loading);

    assert_eq!(task.await.unwrap(), Completion::Fulfilled);
    assert!(!store.snapshot().loading);
}
