//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── form: FormState            (fields, focus, tool-kind toggle)
//! │   ├── sessions: SessionTableState (confirmed rows, selection)
//! │   ├── tasks: Tasks                (in-flight request guard)
//! │   └── config: Config
//! └── overlay: Option<Overlay>        (modal warnings)
//! ```
//!
//! State is split between `TuiState` and `Option<Overlay>` so overlay key
//! handlers can borrow both without conflicts.

use shep_core::config::Config;

use crate::common::{TaskSeq, Tasks};
use crate::form::FormState;
use crate::overlays::Overlay;
use crate::sessions::SessionTableState;

/// Which pane currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Form,
    Sessions,
}

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            tui: TuiState::new(config),
            overlay: None,
        }
    }
}

/// TUI application state (non-overlay).
pub struct TuiState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Pane receiving keyboard input.
    pub focus: Pane,
    /// Registration form state.
    pub form: FormState,
    /// Confirmed session rows.
    pub sessions: SessionTableState,
    /// Task id sequence for async operations.
    pub task_seq: TaskSeq,
    /// Task lifecycle state; `tasks.register` is the submission guard.
    pub tasks: Tasks,
    /// Loaded configuration (service URL, timeouts).
    pub config: Config,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}

impl TuiState {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            focus: Pane::Form,
            form: FormState::new(),
            sessions: SessionTableState::new(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            config,
            spinner_frame: 0,
        }
    }
}
