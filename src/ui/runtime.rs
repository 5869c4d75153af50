use std::io;
use std::sync::mpsc as std_mpsc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch};

use crate::store::{MovieStore, SearchState};
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

const COMMAND_BUFFER: usize = 64;

/// Run the terminal client until the user quits.
///
/// Blocks the calling thread; store work is spawned on `handle`.
pub fn run(store: MovieStore, handle: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    let mut app = App::new();
    app.set_command_sender(command_tx);
    app.on_state(store.snapshot());

    let watcher = handle.spawn(forward_store_changes(store.subscribe(), events.sender()));
    let dispatcher = handle.spawn(dispatch_commands(store, command_rx));

    loop {
        let screen = app.compose();
        terminal.draw(|frame| draw(frame, &app, screen.as_ref()))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::StoreChanged(state)) => app.on_state(*state),
            Ok(AppEvent::Resize(cols, rows)) => tracing::debug!(cols, rows, "Terminal resized"),
            Ok(AppEvent::Tick) => {}
            Err(std_mpsc::RecvTimeoutError::Timeout) => {}
            Err(std_mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    dispatcher.abort();
    watcher.abort();
    drop(guard);
    Ok(())
}

/// Executes UI commands against the store. Network operations run as
/// their own tasks so a slow page never blocks later commands.
async fn dispatch_commands(store: MovieStore, mut commands: mpsc::Receiver<UiCommand>) {
    while let Some(command) = commands.recv().await {
        tracing::debug!(?command, "UI command");
        match command {
            UiCommand::Search(term) => {
                let store = store.clone();
                tokio::spawn(async move {
                    store.search(&term).await;
                });
            }
            UiCommand::LoadMore => {
                let store = store.clone();
                tokio::spawn(async move {
                    store.load_more().await;
                });
            }
            UiCommand::Details(id) => {
                let store = store.clone();
                tokio::spawn(async move {
                    store.get_details(&id).await;
                });
            }
            UiCommand::ClearError => store.clear_error(),
            UiCommand::ClearSelectedDetail => store.clear_selected_detail(),
            UiCommand::ClearHistory => store.clear_history(),
        }
    }
}

async fn forward_store_changes(
    mut changes: watch::Receiver<SearchState>,
    events: std_mpsc::Sender<AppEvent>,
) {
    while changes.changed().await.is_ok() {
        let state = changes.borrow_and_update().clone();
        if events.send(AppEvent::StoreChanged(Box::new(state))).is_err() {
            break;
        }
    }
}
