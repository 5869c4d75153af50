use tokio::sync::mpsc;

use crate::store::SearchState;
use crate::ui::boundary::ErrorBoundary;
use crate::ui::scroll::{InfiniteScroll, ScrollTrigger};
use crate::ui::view::{compose, Screen, ViewModel};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Search,
    History,
    Results,
}

/// Store operations requested by the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Search(String),
    LoadMore,
    Details(String),
    ClearError,
    ClearSelectedDetail,
    ClearHistory,
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

pub struct App {
    should_quit: bool,
    focus: Focus,
    input: String,
    /// Latest store snapshot.
    state: SearchState,
    selected: usize,
    history_selected: usize,
    generation: u64,
    scroll: InfiniteScroll,
    boundary: ErrorBoundary,
    commands: Option<UiCommandSender>,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: Focus::Search,
            input: String::new(),
            state: SearchState::default(),
            selected: 0,
            history_selected: 0,
            generation: 0,
            scroll: InfiniteScroll::default(),
            boundary: ErrorBoundary::default(),
            commands: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.commands = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn boundary(&self) -> &ErrorBoundary {
        &self.boundary
    }

    pub fn has_detail(&self) -> bool {
        self.state.selected_detail.is_some()
    }

    /// Compose the screen inside the error boundary.
    pub fn compose(&mut self) -> Option<Screen> {
        let model = ViewModel {
            state: &self.state,
            input: &self.input,
            focus: self.focus,
            selected: self.selected,
            history_selected: self.history_selected,
        };
        self.boundary.contain(|| compose(&model))
    }

    pub fn retry_view(&mut self) {
        self.boundary.reset();
    }

    /// New store snapshot arrived.
    pub fn on_state(&mut self, state: SearchState) {
        self.state = state;
        self.clamp_selection();
        self.maybe_load_more();
    }

    pub fn push_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    /// Submit the search box. Blank input is ignored.
    pub fn submit_input(&mut self) {
        let term = self.input.trim().to_string();
        if term.is_empty() {
            return;
        }
        self.start_search(term);
    }

    /// Re-run the highlighted history term.
    pub fn submit_history(&mut self) {
        let Some(term) = self.state.history.get(self.history_selected).cloned() else {
            return;
        };
        self.input = term.clone();
        self.start_search(term);
    }

    fn start_search(&mut self, term: String) {
        self.generation += 1;
        self.selected = 0;
        self.send(UiCommand::Search(term));
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Search if !self.state.history.is_empty() => Focus::History,
            Focus::Search | Focus::History if !self.state.movies.is_empty() => Focus::Results,
            _ => Focus::Search,
        };
    }

    pub fn focus_search(&mut self) {
        self.focus = Focus::Search;
    }

    pub fn move_history_selection(&mut self, delta: isize) {
        let len = self.state.history.len();
        if len == 0 {
            return;
        }
        self.history_selected = step(self.history_selected, delta, len);
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.state.movies.len();
        if len == 0 {
            return;
        }
        self.selected = step(self.selected, delta, len);
        self.maybe_load_more();
    }

    pub fn open_selected(&mut self) {
        let Some(movie) = self.state.movies.get(self.selected) else {
            return;
        };
        let id = movie.id.clone();
        self.send(UiCommand::Details(id));
    }

    pub fn close_detail(&mut self) {
        self.send(UiCommand::ClearSelectedDetail);
    }

    pub fn dismiss_error(&mut self) {
        if self.state.error.is_some() {
            self.send(UiCommand::ClearError);
        }
    }

    pub fn clear_history(&mut self) {
        self.history_selected = 0;
        self.send(UiCommand::ClearHistory);
        if self.focus == Focus::History {
            self.focus = Focus::Search;
        }
    }

    /// Manual retry for pagination; bypasses the scroll trigger.
    pub fn load_more(&mut self) {
        if self.state.can_load_more() {
            self.send(UiCommand::LoadMore);
        }
    }

    fn maybe_load_more(&mut self) {
        let trigger = ScrollTrigger {
            generation: self.generation,
            page: self.state.current_page,
            near_end: self.focus == Focus::Results
                && ScrollTrigger::near_end(self.selected, self.state.movies.len()),
            has_more: self.state.has_more,
            busy: self.state.loading || self.state.loading_more,
        };
        if self.scroll.poll(trigger) {
            self.send(UiCommand::LoadMore);
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.state.movies.len().saturating_sub(1));
        self.history_selected = self
            .history_selected
            .min(self.state.history.len().saturating_sub(1));
        if self.focus == Focus::Results && self.state.movies.is_empty() {
            self.focus = Focus::Search;
        }
        if self.focus == Focus::History && self.state.history.is_empty() {
            self.focus = Focus::Search;
        }
    }

    fn send(&self, command: UiCommand) {
        let Some(sender) = &self.commands else {
            return;
        };
        if let Err(err) = sender.try_send(command) {
            tracing::warn!(error = %err, "Dropped UI command");
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn step(current: usize, delta: isize, len: usize) -> usize {
    let next = current as isize + delta;
    next.clamp(0, len as isize - 1) as usize
}
