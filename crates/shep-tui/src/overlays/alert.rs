//! Warning overlay for failed add requests.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::OverlayUpdate;

/// State for the warning overlay.
///
/// Both failure shapes of the add path land here: the service being
/// unreachable, and the service answering with a message instead of a port.
#[derive(Debug, Clone)]
pub struct AlertState {
    pub message: String,
}

impl AlertState {
    /// Warning for a transport failure or empty response.
    pub fn service_down(service_url: &str) -> Self {
        Self {
            message: format!(
                "Cannot reach the shepherd service at {service_url}. Is it running?"
            ),
        }
    }

    /// Warning carrying the service's rejection message, verbatim.
    pub fn rejected(message: String) -> Self {
        Self { message }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter | KeyCode::Esc => OverlayUpdate::close(),
            KeyCode::Char('c') if ctrl => OverlayUpdate::close(),
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let width = 56.min(area.width.saturating_sub(4));
        // Rough wrap estimate to size the box to the message.
        let text_lines = (self.message.len() as u16 / width.saturating_sub(4).max(1)) + 1;
        let height = (text_lines + 4).min(area.height.saturating_sub(2));
        let popup = centered_rect(area, width, height);

        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Warning ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let body = Paragraph::new(self.message.as_str()).wrap(Wrap { trim: true });
        let body_area = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(1));
        frame.render_widget(body, body_area);

        let hint = Line::from(Span::styled(
            "enter dismiss",
            Style::default().fg(Color::DarkGray),
        ));
        let hint_area = Rect::new(inner.x, inner.y + inner.height.saturating_sub(1), inner.width, 1);
        frame.render_widget(Paragraph::new(hint), hint_area);
    }
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
