//! Pure view composition.
//!
//! [`compose`] turns the store snapshot plus local UI state into a
//! [`Screen`] of plain strings. Rendering only lays those out, so all the
//! text decisions are testable without a terminal.

use crate::provider::{MovieDetail, SearchResultItem};
use crate::store::SearchState;
use crate::ui::app::Focus;

pub const SKELETON_ROWS: usize = 8;
pub const SEARCHING: &str = "Searching for movies...";
pub const LOADING_MORE: &str = "Loading more movies...";
pub const END_OF_RESULTS: &str = "That's all folks! No more movies to load.";
pub const NO_IMAGE: &str = "No Image Available";

/// Borrowed inputs to [`compose`].
pub struct ViewModel<'a> {
    pub state: &'a SearchState,
    pub input: &'a str,
    pub focus: Focus,
    pub selected: usize,
    pub history_selected: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub input: String,
    pub input_focused: bool,
    pub history: Vec<HistoryChip>,
    pub status: Vec<StatusLine>,
    pub results: ResultsView,
    pub detail: Option<DetailView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryChip {
    pub term: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    Searching,
    Error(String),
    Summary(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    Empty,
    Skeleton(usize),
    List {
        rows: Vec<ResultRow>,
        selected: Option<usize>,
        footer: Option<&'static str>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub title: String,
    pub meta: String,
    pub poster: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub headline: String,
    pub rating: String,
    pub plot: String,
    pub facts: Vec<(&'static str, String)>,
    pub poster: String,
}

pub fn compose(model: &ViewModel<'_>) -> Screen {
    let state = model.state;

    Screen {
        input: model.input.to_string(),
        input_focused: model.focus == Focus::Search,
        history: compose_history(model),
        status: compose_status(state),
        results: compose_results(state, model),
        detail: state.selected_detail.as_ref().map(compose_detail),
    }
}

fn compose_history(model: &ViewModel<'_>) -> Vec<HistoryChip> {
    let focused = model.focus == Focus::History;
    model
        .state
        .history
        .iter()
        .enumerate()
        .map(|(idx, term)| HistoryChip {
            term: term.clone(),
            selected: focused && idx == model.history_selected,
        })
        .collect()
}

fn compose_status(state: &SearchState) -> Vec<StatusLine> {
    let mut lines = Vec::new();
    if state.loading {
        lines.push(StatusLine::Searching);
    }
    if let Some(error) = &state.error {
        lines.push(StatusLine::Error(error.clone()));
    }
    if state.total_results > 0 {
        lines.push(StatusLine::Summary(results_summary(state)));
    }
    lines
}

/// `Found N results`, plus `(Page p of t)` when there is more than one page.
pub fn results_summary(state: &SearchState) -> String {
    if state.total_pages > 1 {
        format!(
            "Found {} results (Page {} of {})",
            state.total_results, state.current_page, state.total_pages
        )
    } else {
        format!("Found {} results", state.total_results)
    }
}

fn compose_results(state: &SearchState, model: &ViewModel<'_>) -> ResultsView {
    if state.loading {
        return ResultsView::Skeleton(SKELETON_ROWS);
    }
    if state.movies.is_empty() {
        return ResultsView::Empty;
    }

    let footer = if state.loading_more {
        Some(LOADING_MORE)
    } else if !state.has_more {
        Some(END_OF_RESULTS)
    } else {
        None
    };
    let selected = (model.focus == Focus::Results)
        .then(|| model.selected.min(state.movies.len() - 1));

    ResultsView::List {
        rows: state.movies.iter().map(result_row).collect(),
        selected,
        footer,
    }
}

fn result_row(item: &SearchResultItem) -> ResultRow {
    let meta = match item.media_type.as_deref() {
        Some(kind) if !kind.is_empty() => format!("{} · {}", item.year, kind),
        _ => item.year.clone(),
    };
    ResultRow {
        title: item.title.clone(),
        meta,
        poster: poster_label(item.poster_url()),
    }
}

fn poster_label(url: Option<&str>) -> String {
    url.unwrap_or(NO_IMAGE).to_string()
}

fn compose_detail(detail: &MovieDetail) -> DetailView {
    let field = |value: &Option<String>| value.clone().unwrap_or_default();
    let headline = [
        Some(detail.summary.year.clone()),
        detail.runtime.clone(),
        detail.genre.clone(),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" │ ");

    let rating = match (&detail.rating, &detail.rated) {
        (Some(score), Some(rated)) => format!("★ {}/10  {}", score, rated),
        (Some(score), None) => format!("★ {}/10", score),
        (None, Some(rated)) => rated.clone(),
        (None, None) => String::new(),
    };

    DetailView {
        title: detail.title().to_string(),
        headline,
        rating,
        plot: field(&detail.plot),
        facts: vec![
            ("Director", field(&detail.director)),
            ("Cast", field(&detail.cast)),
            ("Country", field(&detail.country)),
            ("Language", field(&detail.language)),
        ],
        poster: poster_label(detail.poster_url()),
    }
}
