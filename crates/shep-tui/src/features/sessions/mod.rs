//! Session table feature slice: confirmed rows, selection, removal,
//! rendering.

pub mod render;
pub mod state;
pub mod update;

pub use render::render_table;
pub use state::{SessionRow, SessionTableState};
pub use update::handle_key;
