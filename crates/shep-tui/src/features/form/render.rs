//! Form rendering.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use shep_core::session::ToolKind;

use super::state::{FormField, FormState};
use crate::state::{Pane, TuiState};

const LABEL_WIDTH: usize = 13;

/// Renders the registration form pane.
pub fn render_form(frame: &mut Frame, tui: &TuiState, area: Rect) {
    let focused = tui.focus == Pane::Form;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" new session ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = &tui.form;
    let mut lines: Vec<Line<'_>> = form
        .fields()
        .iter()
        .map(|field| field_line(form, *field, focused))
        .collect();

    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn field_line(form: &FormState, field: FormField, pane_focused: bool) -> Line<'_> {
    let is_focused = pane_focused && form.focus == field;
    let marker = if is_focused { "> " } else { "  " };
    let label = format!("{:LABEL_WIDTH$}", field.label());

    let value_style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(Color::Yellow)),
        Span::styled(label, Style::default().fg(Color::DarkGray)),
    ];

    match field {
        FormField::Tool => spans.push(tool_value(form.tool, is_focused)),
        FormField::Name => spans.extend(text_value(&form.name, is_focused, value_style)),
        FormField::Path1 => spans.extend(text_value(&form.path1, is_focused, value_style)),
        FormField::Path2 => spans.extend(text_value(&form.path2, is_focused, value_style)),
    }

    Line::from(spans)
}

fn tool_value(tool: ToolKind, focused: bool) -> Span<'static> {
    if focused {
        Span::styled(
            format!("◂ {} ▸", tool.label()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw(tool.label())
    }
}

fn text_value<'a>(value: &'a str, focused: bool, style: Style) -> Vec<Span<'a>> {
    let mut spans = vec![Span::styled(value, style)];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
    }
    spans
}

/// Height the form pane needs, borders included.
pub fn form_height(tui: &TuiState) -> u16 {
    let fields = tui.form.fields().len() as u16;
    let error = u16::from(tui.form.error.is_some());
    fields + error + 2
}
