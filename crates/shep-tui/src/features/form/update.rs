//! Form key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::FormField;
use crate::common::TaskStarted;
use crate::effects::UiEffect;
use crate::state::{Pane, TuiState};

/// Handles a key while the form pane has focus.
pub fn handle_key(tui: &mut TuiState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Any edit clears the inline validation error.
    if !matches!(key.code, KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab) {
        tui.form.error = None;
    }

    match key.code {
        KeyCode::Tab => {
            if !tui.form.focus_next() {
                tui.focus = Pane::Sessions;
            }
            vec![]
        }
        KeyCode::BackTab => {
            if !tui.form.focus_prev() {
                tui.focus = Pane::Sessions;
            }
            vec![]
        }
        KeyCode::Down => {
            tui.form.focus_down();
            vec![]
        }
        KeyCode::Up => {
            tui.form.focus_up();
            vec![]
        }
        KeyCode::Enter => submit(tui),
        KeyCode::Right if tui.form.focus == FormField::Tool => {
            tui.form.set_tool(tui.form.tool.next());
            vec![]
        }
        KeyCode::Left if tui.form.focus == FormField::Tool => {
            tui.form.set_tool(tui.form.tool.prev());
            vec![]
        }
        KeyCode::Char(' ') if tui.form.focus == FormField::Tool => {
            tui.form.set_tool(tui.form.tool.next());
            vec![]
        }
        KeyCode::Backspace => {
            if let Some(text) = tui.form.focused_text_mut() {
                text.pop();
            }
            vec![]
        }
        KeyCode::Char(c) if !ctrl => {
            if let Some(text) = tui.form.focused_text_mut() {
                text.push(c);
            }
            vec![]
        }
        _ => vec![],
    }
}

/// Validates and serializes the form into exactly one register effect.
///
/// The guard is marked here, before the effect leaves the reducer, and is
/// cleared only by the matching completion event: repeated submits while a
/// request is in flight emit nothing.
fn submit(tui: &mut TuiState) -> Vec<UiEffect> {
    if tui.tasks.register.is_running() {
        return vec![];
    }

    match tui.form.serialize() {
        Ok(request) => {
            tui.form.error = None;
            let task = tui.task_seq.next_id();
            tui.tasks.register.on_started(&TaskStarted { id: task });
            tracing::debug!(tool = %request.tool, "submitting add request");
            vec![UiEffect::RegisterSession { task, request }]
        }
        Err(message) => {
            tui.form.error = Some(message);
            vec![]
        }
    }
}
