//! Config management commands.

use anyhow::Result;
use shep_core::config::{Config, paths};

pub fn path() -> Result<()> {
    println!("{}", paths::config_path().display());
    Ok(())
}

pub fn init() -> Result<()> {
    let path = Config::init()?;
    println!("Created config at {}", path.display());
    Ok(())
}

pub fn set_url(url: &str) -> Result<()> {
    let path = Config::save_service_url(url.trim().trim_end_matches('/'))?;
    println!("Saved service_url to {}", path.display());
    Ok(())
}
