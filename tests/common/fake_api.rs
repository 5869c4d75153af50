//! Scripted `MovieApi` for store tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use movie_search::client::{ApiError, MovieApi};
use movie_search::provider::{MovieDetail, ProviderReply, SearchPage};

pub type SearchOutcome = Result<ProviderReply<SearchPage>, ApiError>;
pub type DetailOutcome = Result<ProviderReply<MovieDetail>, ApiError>;

/// Answers from queues; records every search as `(query, page)`.
#[derive(Default)]
pub struct FakeApi {
    searches: Mutex<VecDeque<SearchOutcome>>,
    details: Mutex<VecDeque<DetailOutcome>>,
    search_calls: Mutex<Vec<(String, u32)>>,
    detail_calls: AtomicUsize,
    delay: Option<Duration>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn push_search(&self, outcome: SearchOutcome) -> &Self {
        self.searches.lock().unwrap().push_back(outcome);
        self
    }

    pub fn push_details(&self, outcome: DetailOutcome) -> &Self {
        self.details.lock().unwrap().push_back(outcome);
        self
    }

    pub fn search_calls(&self) -> Vec<(String, u32)> {
        self.search_calls.lock().unwrap().clone()
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MovieApi for FakeApi {
    async fn search(&self, query: &str, page: u32) -> SearchOutcome {
        self.search_calls
            .lock()
            .unwrap()
            .push((query.to_string(), page));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.searches
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected search call")
    }

    async fn details(&self, _id: &str) -> DetailOutcome {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.details
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected details call")
    }
}
