//! # garage
//!
//! Rocket League bot loadout library - item catalog and loadout configuration.
//!
//! This library provides functionality to:
//! - Describe the selectable cosmetic slots and the loadout fields they fill
//! - Parse the flat in-game items dataset into a per-category catalog
//! - Disambiguate colliding display names and sort each category for display
//! - Read, edit, and write TOML loadout files consumed by the bot framework
//!
//! ## Example
//!
//! ```no_run
//! use std::fs;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let csv = fs::read_to_string("items.csv")?;
//! let catalog = garage::Catalog::from_csv(&csv, garage::ITEM_TYPES);
//!
//! // Every registered category is present, sorted by display name
//! for entry in catalog.entries("Wheels") {
//!     println!("{} = {}", entry.name, entry.id);
//! }
//!
//! // Write a chosen item into a loadout file
//! let mut loadout = garage::LoadoutConfig::default();
//! loadout.blue.set_item(garage::ItemField::Wheels, 1656);
//! loadout.save("loadout.toml")?;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod itemtypes;
pub mod loadout;

// Re-export commonly used items
#[doc(inline)]
pub use catalog::{Catalog, CatalogEntry, RawRow, EXCLUDED_IDS};
#[doc(inline)]
pub use itemtypes::{
    categories, item_type_by_slot, types_for_category, ItemField, ItemType, PaintField,
    ITEM_TYPES,
};
#[doc(inline)]
pub use loadout::{LoadoutConfig, LoadoutError, TeamLoadoutConfig, TeamPaintConfig};
