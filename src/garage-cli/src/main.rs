mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use config::Config;

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Catalog { command } => match command {
            CatalogCommand::Fetch { url, output } => {
                let config = Config::load()?;
                let url = url.as_deref().unwrap_or_else(|| config.get_items_url());
                commands::catalog::fetch(url, &output)?;
            }

            CatalogCommand::Build {
                input,
                output,
                category,
            } => {
                commands::catalog::build(&input, output.as_deref(), category.as_deref())?;
            }

            CatalogCommand::Slots => {
                commands::catalog::slots();
            }
        },

        Commands::Loadout { command } => match command {
            LoadoutCommand::Init { path } => {
                commands::loadout::init(&path)?;
            }

            LoadoutCommand::Set {
                path,
                slot,
                item,
                paint,
                team,
            } => {
                commands::loadout::set(&path, &slot, item, paint, team)?;
            }

            LoadoutCommand::Show { path } => {
                commands::loadout::show(&path)?;
            }
        },

        Commands::Configure { items_url, show } => {
            commands::configure::handle(items_url, show)?;
        }
    }

    Ok(())
}
