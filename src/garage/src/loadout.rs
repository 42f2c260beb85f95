//! Loadout configuration
//!
//! TOML-backed loadout records consumed by the bot framework. A loadout
//! file holds one item id per cosmetic slot for each team, plus the paint
//! ids for paintable slots. The catalog supplies the ids; these types
//! carry the chosen ones.

use crate::itemtypes::{ItemField, PaintField};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadoutError {
    #[error("Failed to read loadout file: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to write loadout file: {0}")]
    Write(#[source] std::io::Error),

    #[error("Failed to parse loadout TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize loadout TOML: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Paint ids for the paintable slots of one team
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamPaintConfig {
    pub car_paint_id: u32,
    pub decal_paint_id: u32,
    pub wheels_paint_id: u32,
    pub boost_paint_id: u32,
    pub antenna_paint_id: u32,
    pub hat_paint_id: u32,
    pub trails_paint_id: u32,
    pub goal_explosion_paint_id: u32,
}

/// Item ids for every cosmetic slot of one team
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamLoadoutConfig {
    pub team_color_id: u32,
    pub custom_color_id: u32,
    pub car_id: u32,
    pub decal_id: u32,
    pub wheels_id: u32,
    pub boost_id: u32,
    pub antenna_id: u32,
    pub hat_id: u32,
    pub paint_finish_id: u32,
    pub custom_finish_id: u32,
    pub engine_audio_id: u32,
    pub trails_id: u32,
    pub goal_explosion_id: u32,
    pub paint: TeamPaintConfig,
}

impl TeamLoadoutConfig {
    /// Write a chosen item id into the field a slot controls
    pub fn set_item(&mut self, field: ItemField, id: u32) {
        match field {
            ItemField::Car => self.car_id = id,
            ItemField::Decal => self.decal_id = id,
            ItemField::Wheels => self.wheels_id = id,
            ItemField::Boost => self.boost_id = id,
            ItemField::Antenna => self.antenna_id = id,
            ItemField::Hat => self.hat_id = id,
            ItemField::PaintFinish => self.paint_finish_id = id,
            ItemField::CustomFinish => self.custom_finish_id = id,
            ItemField::EngineAudio => self.engine_audio_id = id,
            ItemField::Trails => self.trails_id = id,
            ItemField::GoalExplosion => self.goal_explosion_id = id,
        }
    }

    /// Read the item id currently stored for a slot's field
    pub fn item_id(&self, field: ItemField) -> u32 {
        match field {
            ItemField::Car => self.car_id,
            ItemField::Decal => self.decal_id,
            ItemField::Wheels => self.wheels_id,
            ItemField::Boost => self.boost_id,
            ItemField::Antenna => self.antenna_id,
            ItemField::Hat => self.hat_id,
            ItemField::PaintFinish => self.paint_finish_id,
            ItemField::CustomFinish => self.custom_finish_id,
            ItemField::EngineAudio => self.engine_audio_id,
            ItemField::Trails => self.trails_id,
            ItemField::GoalExplosion => self.goal_explosion_id,
        }
    }

    /// Write a chosen paint id into the field a paintable slot controls
    pub fn set_paint(&mut self, field: PaintField, id: u32) {
        match field {
            PaintField::Car => self.paint.car_paint_id = id,
            PaintField::Decal => self.paint.decal_paint_id = id,
            PaintField::Wheels => self.paint.wheels_paint_id = id,
            PaintField::Boost => self.paint.boost_paint_id = id,
            PaintField::Antenna => self.paint.antenna_paint_id = id,
            PaintField::Hat => self.paint.hat_paint_id = id,
            PaintField::Trails => self.paint.trails_paint_id = id,
            PaintField::GoalExplosion => self.paint.goal_explosion_paint_id = id,
        }
    }

    /// Read the paint id currently stored for a slot's paint field
    pub fn paint_id(&self, field: PaintField) -> u32 {
        match field {
            PaintField::Car => self.paint.car_paint_id,
            PaintField::Decal => self.paint.decal_paint_id,
            PaintField::Wheels => self.paint.wheels_paint_id,
            PaintField::Boost => self.paint.boost_paint_id,
            PaintField::Antenna => self.paint.antenna_paint_id,
            PaintField::Hat => self.paint.hat_paint_id,
            PaintField::Trails => self.paint.trails_paint_id,
            PaintField::GoalExplosion => self.paint.goal_explosion_paint_id,
        }
    }
}

/// A full loadout file: one configuration per team
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadoutConfig {
    #[serde(rename = "blue_loadout")]
    pub blue: TeamLoadoutConfig,
    #[serde(rename = "orange_loadout")]
    pub orange: TeamLoadoutConfig,
}

impl LoadoutConfig {
    /// Load a loadout from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadoutError> {
        let contents = fs::read_to_string(path).map_err(LoadoutError::Read)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Save the loadout as TOML
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LoadoutError> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(LoadoutError::Write)
    }

    /// The loadout for one team, by team index (0 = blue, 1 = orange)
    pub fn team_mut(&mut self, team: u32) -> &mut TeamLoadoutConfig {
        if team == 0 {
            &mut self.blue
        } else {
            &mut self.orange
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itemtypes::ITEM_TYPES;

    #[test]
    fn test_set_item_round_trips_through_every_slot() {
        let mut team = TeamLoadoutConfig::default();
        for (i, item_type) in ITEM_TYPES.iter().enumerate() {
            let id = 100 + i as u32;
            team.set_item(item_type.item_field, id);
            assert_eq!(team.item_id(item_type.item_field), id);
            if let Some(paint_field) = item_type.paint_field {
                team.set_paint(paint_field, id + 1000);
                assert_eq!(team.paint_id(paint_field), id + 1000);
            }
        }
        assert_eq!(team.car_id, 100);
        assert_eq!(team.goal_explosion_id, 110);
        assert_eq!(team.paint.car_paint_id, 1100);
    }

    #[test]
    fn test_toml_round_trip() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("loadout.toml");

        let mut loadout = LoadoutConfig::default();
        loadout.blue.set_item(ItemField::Car, 23);
        loadout.blue.set_paint(PaintField::Car, 12);
        loadout.orange.set_item(ItemField::Wheels, 1656);

        loadout.save(&path)?;
        let reloaded = LoadoutConfig::load(&path)?;
        assert_eq!(reloaded, loadout);
        Ok(())
    }

    #[test]
    fn test_toml_uses_framework_key_names() -> anyhow::Result<()> {
        let mut loadout = LoadoutConfig::default();
        loadout.blue.set_item(ItemField::Car, 23);
        let toml = toml::to_string_pretty(&loadout)?;
        assert!(toml.contains("[blue_loadout]"));
        assert!(toml.contains("car_id = 23"));
        assert!(toml.contains("[blue_loadout.paint]"));
        assert!(toml.contains("car_paint_id = 0"));
        Ok(())
    }

    #[test]
    fn test_load_rejects_malformed_toml() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("loadout.toml");
        std::fs::write(&path, "blue_loadout = \"nope\"")?;
        assert!(matches!(LoadoutConfig::load(&path), Err(LoadoutError::Parse(_))));
        Ok(())
    }

    #[test]
    fn test_team_mut_indexing() {
        let mut loadout = LoadoutConfig::default();
        loadout.team_mut(0).car_id = 23;
        loadout.team_mut(1).car_id = 403;
        assert_eq!(loadout.blue.car_id, 23);
        assert_eq!(loadout.orange.car_id, 403);
    }
}
