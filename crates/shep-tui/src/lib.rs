//! Full-screen session-registry TUI for shep.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
pub use features::{form, sessions};
pub use runtime::TuiRuntime;
use shep_core::client::ShepherdClient;
use shep_core::config::Config;

/// Runs the interactive session-registry view.
pub async fn run(config: &Config) -> Result<()> {
    // The session table requires a terminal to render.
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The session table requires a terminal.\n\
             Use `shep register` for non-interactive registration."
        );
    }

    let client = ShepherdClient::new(&config.service_url, config.request_timeout())?;

    // Print pre-TUI info to stderr (will be replaced by the alternate screen)
    let mut err = stderr();
    writeln!(err, "shep")?;
    writeln!(err, "Service: {}", client.base_url())?;
    err.flush()?;

    let mut runtime = TuiRuntime::new(config.clone(), client)?;
    runtime.run()?;

    Ok(())
}
