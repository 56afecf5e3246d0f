//! Session table key handling.

use crossterm::event::{KeyCode, KeyEvent};

use crate::effects::UiEffect;
use crate::state::{Pane, TuiState};

/// Handles a key while the table pane has focus.
pub fn handle_key(tui: &mut TuiState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab => {
            tui.focus = Pane::Form;
            vec![]
        }
        KeyCode::Up | KeyCode::Char('k') => {
            tui.sessions.select_prev();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            tui.sessions.select_next();
            vec![]
        }
        KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('d') => remove_selected(tui),
        KeyCode::Enter => {
            if !tui.config.open_links {
                return vec![];
            }
            match tui.sessions.selected_row() {
                Some(row) => vec![UiEffect::OpenBrowser {
                    url: row.address.clone(),
                }],
                None => vec![],
            }
        }
        KeyCode::Char('q') => vec![UiEffect::Quit],
        _ => vec![],
    }
}

/// Optimistic removal: the row disappears now, the release request is
/// fire-and-forget. The table never waits on, or reports, its outcome.
fn remove_selected(tui: &mut TuiState) -> Vec<UiEffect> {
    match tui.sessions.remove_selected() {
        Some(row) => {
            let port = row.session.port;
            tracing::info!(port, "session row removed, releasing port");
            vec![UiEffect::ReleaseSession { port }]
        }
        None => vec![],
    }
}
