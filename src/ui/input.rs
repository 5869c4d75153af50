use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Focus};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    // Fallback view only answers to retry and quit
    if app.boundary().has_fault() {
        match key.code {
            KeyCode::Char('r') => app.retry_view(),
            KeyCode::Char('q') => app.request_quit(),
            _ => {}
        }
        return;
    }

    if app.has_detail() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            app.close_detail();
        }
        return;
    }

    if key.code == KeyCode::Tab {
        app.cycle_focus();
        return;
    }

    match app.focus() {
        Focus::Search => match key.code {
            KeyCode::Enter => app.submit_input(),
            KeyCode::Backspace => app.pop_char(),
            KeyCode::Esc => app.dismiss_error(),
            KeyCode::Down if !app.state().movies.is_empty() => app.cycle_focus(),
            KeyCode::Char(ch) => app.push_char(ch),
            _ => {}
        },
        Focus::History => match key.code {
            KeyCode::Left | KeyCode::Up => app.move_history_selection(-1),
            KeyCode::Right | KeyCode::Down => app.move_history_selection(1),
            KeyCode::Enter => app.submit_history(),
            KeyCode::Char('x') => app.clear_history(),
            KeyCode::Esc => app.focus_search(),
            _ => {}
        },
        Focus::Results => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
            KeyCode::PageUp => app.move_selection(-10),
            KeyCode::PageDown => app.move_selection(10),
            KeyCode::Enter => app.open_selected(),
            KeyCode::Char('m') => app.load_more(),
            KeyCode::Char('/') => app.focus_search(),
            KeyCode::Char('q') => app.request_quit(),
            KeyCode::Esc => {
                if app.state().error.is_some() {
                    app.dismiss_error();
                } else {
                    app.focus_search();
                }
            }
            _ => {}
        },
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
