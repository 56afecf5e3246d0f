//! Form feature slice: field state, tool-kind toggle, key handling,
//! rendering.

pub mod render;
pub mod state;
pub mod update;

pub use render::{form_height, render_form};
pub use state::{FormField, FormState, INACTIVE_PATH_MARKER};
pub use update::handle_key;
