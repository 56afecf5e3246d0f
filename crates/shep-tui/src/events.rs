//! UI event types.
//!
//! Everything the reducer reacts to arrives as a `UiEvent`: terminal input,
//! timer ticks, and the results of async tasks delivered through the
//! runtime's inbox channel.

use shep_core::client::{RegisterOutcome, RegisterRequest};

use crate::common::{TaskCompleted, TaskKind};

#[derive(Debug)]
pub enum UiEvent {
    /// Periodic timer tick; drives the busy spinner.
    Tick,

    /// Raw terminal input.
    Terminal(crossterm::event::Event),

    /// A tracked task finished; carries the resulting event.
    ///
    /// The reducer clears the task's guard before applying the inner event,
    /// so the guard is held for exactly the request's lifetime.
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted,
    },

    /// Outcome of an add-session request, decoded at the network boundary.
    Registered {
        request: RegisterRequest,
        outcome: RegisterOutcome,
    },

    /// A release request finished. The row was removed when the request was
    /// issued; failures were already logged by the handler.
    Released { port: u16 },
}
