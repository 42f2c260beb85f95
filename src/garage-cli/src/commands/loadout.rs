//! Loadout command handlers
//!
//! Creating and editing the TOML loadout files the bot framework consumes.

use crate::cli::Team;
use anyhow::{bail, Context, Result};
use garage::{item_type_by_slot, LoadoutConfig, ITEM_TYPES};
use std::path::Path;

/// Handle `loadout init`
pub fn init(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("Refusing to overwrite existing loadout: {}", path.display());
    }

    LoadoutConfig::default()
        .save(path)
        .with_context(|| format!("Failed to create loadout at {}", path.display()))?;

    println!("Created {}", path.display());
    Ok(())
}

/// Handle `loadout set`
pub fn set(path: &Path, slot: &str, item: u32, paint: Option<u32>, team: Team) -> Result<()> {
    let Some(item_type) = item_type_by_slot(slot) else {
        let known: Vec<&str> = ITEM_TYPES.iter().map(|t| t.slot).collect();
        bail!("Unknown slot: {} (expected one of: {})", slot, known.join(", "));
    };

    let mut loadout = LoadoutConfig::load(path)
        .with_context(|| format!("Failed to load loadout from {}", path.display()))?;

    let team_index = match team {
        Team::Blue => 0,
        Team::Orange => 1,
    };
    let team_loadout = loadout.team_mut(team_index);
    team_loadout.set_item(item_type.item_field, item);

    if let Some(paint_id) = paint {
        match item_type.paint_field {
            Some(paint_field) => team_loadout.set_paint(paint_field, paint_id),
            None => bail!("Slot {} is not paintable", slot),
        }
    }

    loadout
        .save(path)
        .with_context(|| format!("Failed to save loadout to {}", path.display()))?;

    println!("Set {} = {} for {:?}", item_type.item_field, item, team);
    Ok(())
}

/// Handle `loadout show`
pub fn show(path: &Path) -> Result<()> {
    let loadout = LoadoutConfig::load(path)
        .with_context(|| format!("Failed to load loadout from {}", path.display()))?;

    for (label, team) in [("Blue", &loadout.blue), ("Orange", &loadout.orange)] {
        println!("[{}]", label);
        for item_type in ITEM_TYPES {
            let item = team.item_id(item_type.item_field);
            match item_type.paint_field {
                Some(paint_field) => println!(
                    "  {:<16} item {:<6} paint {}",
                    item_type.slot,
                    item,
                    team.paint_id(paint_field)
                ),
                None => println!("  {:<16} item {}", item_type.slot, item),
            }
        }
    }

    Ok(())
}
