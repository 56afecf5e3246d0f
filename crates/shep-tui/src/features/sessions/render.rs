//! Session table rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};

use crate::state::{Pane, TuiState};

/// Renders the session table pane.
pub fn render_table(frame: &mut Frame, tui: &TuiState, area: Rect) {
    let focused = tui.focus == Pane::Sessions;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(format!(" sessions ({}) ", tui.sessions.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if tui.sessions.is_empty() {
        let placeholder =
            Paragraph::new("No sessions registered. Fill in the form and press Enter.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let header = Row::new(["project", "address", "path", "since"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = tui.sessions.rows().iter().map(|row| {
        let height = if row.session.path2.is_some() { 2 } else { 1 };
        Row::new(vec![
            Cell::from(row.session.name.clone()),
            Cell::from(row.address.clone()).style(Style::default().fg(Color::Blue)),
            Cell::from(row.session.display_path()),
            Cell::from(row.registered_at.format("%H:%M:%S").to_string()),
        ])
        .height(height)
    });

    let widths = [
        Constraint::Percentage(16),
        Constraint::Percentage(26),
        Constraint::Percentage(48),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut table_state = TableState::default().with_selected(Some(tui.sessions.selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}
