//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only; the reducer itself never
//! performs I/O or spawns tasks.

use shep_core::client::RegisterRequest;

use crate::common::TaskId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Send an add-session request to the shepherd service.
    ///
    /// The reducer has already marked the register task active under `task`;
    /// the runtime reports completion through the inbox.
    RegisterSession {
        task: TaskId,
        request: RegisterRequest,
    },

    /// Send a release request for a removed row. Fire-and-forget: the row is
    /// gone from the table regardless of how this request ends.
    ReleaseSession { port: u16 },

    /// Open an address in the system browser.
    OpenBrowser { url: String },
}
