//! CLI argument definitions for garage
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "garage")]
#[command(about = "Item catalog and loadout tool for Rocket League bots", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Item catalog operations (fetch, build, slots)
    #[command(visible_alias = "c")]
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },

    /// Loadout file operations (init, set, show)
    #[command(visible_alias = "l")]
    Loadout {
        #[command(subcommand)]
        command: LoadoutCommand,
    },

    /// Configure default settings
    Configure {
        /// Set the default items dataset URL
        #[arg(long)]
        items_url: Option<String>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// Download the raw items dataset
    Fetch {
        /// Dataset URL (uses configured default if not provided)
        #[arg(long)]
        url: Option<String>,

        /// Where to write the downloaded CSV
        #[arg(short, long, default_value = "items.csv")]
        output: PathBuf,
    },

    /// Build the per-category catalog from a CSV dataset
    Build {
        /// Path to the items CSV
        input: PathBuf,

        /// Write JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only emit this category's bucket
        #[arg(long)]
        category: Option<String>,
    },

    /// List the selectable slots and the fields they control
    Slots,
}

/// Team side of a loadout file
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Team {
    #[default]
    Blue,
    Orange,
}

#[derive(Subcommand)]
pub enum LoadoutCommand {
    /// Create a new loadout file with default (zero) ids
    Init {
        /// Path of the loadout TOML to create
        path: PathBuf,
    },

    /// Set the item (and optionally paint) id for one slot
    Set {
        /// Path to the loadout TOML
        path: PathBuf,

        /// Slot name, e.g. "Body" or "Goal Explosion"
        #[arg(long)]
        slot: String,

        /// Item id from the catalog
        #[arg(long)]
        item: u32,

        /// Paint id, for paintable slots only
        #[arg(long)]
        paint: Option<u32>,

        /// Which team's loadout to edit
        #[arg(long, value_enum, default_value_t = Team::Blue)]
        team: Team,
    },

    /// Print the slots and chosen ids of a loadout file
    Show {
        /// Path to the loadout TOML
        path: PathBuf,
    },
}
