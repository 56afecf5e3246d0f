//! One-shot register/release commands for scripting.
//!
//! These speak the same service contract as the TUI, through the same
//! client, but print the outcome instead of mutating a table.

use anyhow::{Context, Result, bail};
use shep_core::client::{RegisterOutcome, RegisterRequest, ShepherdClient};
use shep_core::config::Config;
use shep_core::session::ToolKind;

pub async fn register(
    config: &Config,
    tool: ToolKind,
    name: &str,
    path1: &str,
    path2: Option<&str>,
) -> Result<()> {
    let request = RegisterRequest::new(tool, name, path1, path2);
    if request.path1.is_empty() {
        bail!("a primary path is required");
    }
    if tool.needs_second_path() && request.path2.is_none() {
        bail!("{tool} needs a second path (--path2)");
    }

    let client = client(config)?;
    match client.register(&request).await {
        RegisterOutcome::Registered(port) => {
            println!("{}", client.session_address(port));
            Ok(())
        }
        RegisterOutcome::ServiceDown => {
            bail!("cannot reach the shepherd service at {}", client.base_url())
        }
        RegisterOutcome::Rejected(message) => bail!("service rejected the request: {message}"),
    }
}

pub async fn release(config: &Config, port: u16) -> Result<()> {
    let client = client(config)?;
    client
        .release(port)
        .await
        .with_context(|| format!("release port {port}"))?;
    println!("released {port}");
    Ok(())
}

fn client(config: &Config) -> Result<ShepherdClient> {
    ShepherdClient::new(&config.service_url, config.request_timeout())
}
