//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up garage CLI defaults.

use crate::config::Config;
use anyhow::Result;

/// Handle the configure command
pub fn handle(items_url: Option<String>, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config)?;
        return Ok(());
    }

    if let Some(url) = items_url {
        config.items_url = Some(url);
        config.save()?;
        println!("Items URL set to: {}", config.get_items_url());
    } else {
        println!("Usage: garage configure --items-url <URL>");
        println!("       garage configure --show");
    }

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) -> Result<()> {
    match &config.items_url {
        Some(url) => println!("Items URL: {}", url),
        None => println!("Items URL: {} (default)", config.get_items_url()),
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }

    Ok(())
}
