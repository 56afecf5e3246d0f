//! Session table state.

use chrono::{DateTime, Local};
use shep_core::session::Session;

/// One displayed row, mirroring a session the service confirmed.
#[derive(Debug, Clone)]
pub struct SessionRow {
    pub session: Session,
    /// Browser-openable address composed from the service host and the
    /// allocated port.
    pub address: String,
    pub registered_at: DateTime<Local>,
}

/// The ordered list of confirmed sessions.
///
/// Append order is confirmation order; there is no sorting and no
/// deduplication beyond the port uniqueness the service guarantees.
#[derive(Debug, Default)]
pub struct SessionTableState {
    rows: Vec<SessionRow>,
    pub selected: usize,
}

impl SessionTableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[SessionRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Appends a confirmed session at the end.
    pub fn append(&mut self, row: SessionRow) {
        self.rows.push(row);
    }

    pub fn selected_row(&self) -> Option<&SessionRow> {
        self.rows.get(self.selected)
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.rows.len() {
            self.selected += 1;
        }
    }

    /// Removes the selected row and returns it; the selection clamps to the
    /// remaining rows.
    pub fn remove_selected(&mut self) -> Option<SessionRow> {
        if self.selected >= self.rows.len() {
            return None;
        }
        let row = self.rows.remove(self.selected);
        if self.selected >= self.rows.len() && self.selected > 0 {
            self.selected -= 1;
        }
        Some(row)
    }
}
