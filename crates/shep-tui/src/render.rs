//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a
//! ratatui frame, and never mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::text::truncate_with_ellipsis;
use crate::state::{AppState, TuiState};
use crate::{form, sessions};

/// Height of the status line at the bottom.
const STATUS_HEIGHT: u16 = 1;

/// Spinner frames for the busy indicator.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(form::form_height(state)),
            Constraint::Min(3),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    form::render_form(frame, state, chunks[0]);
    sessions::render_table(frame, state, chunks[1]);
    render_status_line(frame, state, chunks[2]);

    // Overlays draw on top of everything.
    if let Some(overlay) = &app.overlay {
        overlay.render(frame, area);
    }
}

fn render_status_line(frame: &mut Frame, state: &TuiState, area: Rect) {
    let left = format!(" {} ", state.config.service_url);

    let right = if state.tasks.register.is_running() {
        let spinner = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];
        format!("{spinner} registering… ")
    } else {
        "tab panes · enter submit/open · d remove · ctrl+c quit ".to_string()
    };

    let width = area.width as usize;
    let left = truncate_with_ellipsis(&left, width.saturating_sub(right.len() + 1));
    let padding = width.saturating_sub(left.len() + right.chars().count());

    let line = Line::from(vec![
        Span::styled(left, Style::default().fg(Color::DarkGray)),
        Span::raw(" ".repeat(padding)),
        Span::styled(right, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
