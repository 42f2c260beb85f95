//! Item type registry
//!
//! Static table describing every selectable cosmetic slot: which raw
//! dataset category feeds it and which loadout/paint fields it controls.
//! This data is fixed at build time and never changes during a run.

use serde::{Deserialize, Serialize};

// ============================================================================
// Loadout fields
// ============================================================================

/// Loadout attribute a slot fills with the chosen item id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemField {
    Car,
    Decal,
    Wheels,
    Boost,
    Antenna,
    Hat,
    PaintFinish,
    CustomFinish,
    EngineAudio,
    Trails,
    GoalExplosion,
}

impl std::fmt::Display for ItemField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Car => write!(f, "car_id"),
            Self::Decal => write!(f, "decal_id"),
            Self::Wheels => write!(f, "wheels_id"),
            Self::Boost => write!(f, "boost_id"),
            Self::Antenna => write!(f, "antenna_id"),
            Self::Hat => write!(f, "hat_id"),
            Self::PaintFinish => write!(f, "paint_finish_id"),
            Self::CustomFinish => write!(f, "custom_finish_id"),
            Self::EngineAudio => write!(f, "engine_audio_id"),
            Self::Trails => write!(f, "trails_id"),
            Self::GoalExplosion => write!(f, "goal_explosion_id"),
        }
    }
}

/// Paint attribute a slot fills with the chosen paint id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaintField {
    Car,
    Decal,
    Wheels,
    Boost,
    Antenna,
    Hat,
    Trails,
    GoalExplosion,
}

impl std::fmt::Display for PaintField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Car => write!(f, "car_paint_id"),
            Self::Decal => write!(f, "decal_paint_id"),
            Self::Wheels => write!(f, "wheels_paint_id"),
            Self::Boost => write!(f, "boost_paint_id"),
            Self::Antenna => write!(f, "antenna_paint_id"),
            Self::Hat => write!(f, "hat_paint_id"),
            Self::Trails => write!(f, "trails_paint_id"),
            Self::GoalExplosion => write!(f, "goal_explosion_paint_id"),
        }
    }
}

// ============================================================================
// Slot descriptors
// ============================================================================

/// One selectable cosmetic slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemType {
    /// Human-facing slot name
    pub slot: &'static str,
    /// Category label used in the raw items dataset
    pub category: &'static str,
    /// Loadout field the chosen item id goes into
    pub item_field: ItemField,
    /// Paint field for the chosen paint id, if the slot is paintable
    pub paint_field: Option<PaintField>,
}

/// All selectable slots in display order.
///
/// Two slots may share one category: both finish slots draw from
/// `PaintFinish`, so catalog buckets are keyed by category, not by slot.
pub const ITEM_TYPES: &[ItemType] = &[
    ItemType {
        slot: "Body",
        category: "Body",
        item_field: ItemField::Car,
        paint_field: Some(PaintField::Car),
    },
    ItemType {
        slot: "Decal",
        category: "Skin",
        item_field: ItemField::Decal,
        paint_field: Some(PaintField::Decal),
    },
    ItemType {
        slot: "Wheels",
        category: "Wheels",
        item_field: ItemField::Wheels,
        paint_field: Some(PaintField::Wheels),
    },
    ItemType {
        slot: "Boost",
        category: "Boost",
        item_field: ItemField::Boost,
        paint_field: Some(PaintField::Boost),
    },
    ItemType {
        slot: "Antenna",
        category: "Antenna",
        item_field: ItemField::Antenna,
        paint_field: Some(PaintField::Antenna),
    },
    ItemType {
        slot: "Topper",
        category: "Hat",
        item_field: ItemField::Hat,
        paint_field: Some(PaintField::Hat),
    },
    ItemType {
        slot: "Primary Finish",
        category: "PaintFinish",
        item_field: ItemField::PaintFinish,
        paint_field: None,
    },
    ItemType {
        slot: "Accent Finish",
        category: "PaintFinish",
        item_field: ItemField::CustomFinish,
        paint_field: None,
    },
    ItemType {
        slot: "Engine Audio",
        category: "EngineAudio",
        item_field: ItemField::EngineAudio,
        paint_field: None,
    },
    ItemType {
        slot: "Trail",
        category: "SupersonicTrail",
        item_field: ItemField::Trails,
        paint_field: Some(PaintField::Trails),
    },
    ItemType {
        slot: "Goal Explosion",
        category: "GoalExplosion",
        item_field: ItemField::GoalExplosion,
        paint_field: Some(PaintField::GoalExplosion),
    },
];

/// Get a slot descriptor by its human-facing name
pub fn item_type_by_slot(slot: &str) -> Option<&'static ItemType> {
    ITEM_TYPES.iter().find(|t| t.slot == slot)
}

/// All slots fed by a given dataset category
pub fn types_for_category(category: &str) -> impl Iterator<Item = &'static ItemType> + '_ {
    ITEM_TYPES.iter().filter(move |t| t.category == category)
}

/// Distinct category labels in declaration order
pub fn categories() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::with_capacity(ITEM_TYPES.len());
    for t in ITEM_TYPES {
        if !out.contains(&t.category) {
            out.push(t.category);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_slot() {
        let body = item_type_by_slot("Body").unwrap();
        assert_eq!(body.category, "Body");
        assert_eq!(body.item_field, ItemField::Car);
        assert_eq!(body.paint_field, Some(PaintField::Car));

        assert!(item_type_by_slot("Spoiler").is_none());
    }

    #[test]
    fn test_finish_slots_share_category() {
        let finishes: Vec<_> = types_for_category("PaintFinish").collect();
        assert_eq!(finishes.len(), 2);
        assert_eq!(finishes[0].slot, "Primary Finish");
        assert_eq!(finishes[1].slot, "Accent Finish");
        assert!(finishes.iter().all(|t| t.paint_field.is_none()));
    }

    #[test]
    fn test_categories_distinct_in_order() {
        let cats = categories();
        // 11 slots, but the two finish slots collapse into one category
        assert_eq!(cats.len(), ITEM_TYPES.len() - 1);
        assert_eq!(cats[0], "Body");
        assert_eq!(cats.iter().filter(|c| **c == "PaintFinish").count(), 1);
    }

    #[test]
    fn test_field_display_matches_loadout_keys() {
        assert_eq!(ItemField::Car.to_string(), "car_id");
        assert_eq!(ItemField::GoalExplosion.to_string(), "goal_explosion_id");
        assert_eq!(PaintField::Hat.to_string(), "hat_paint_id");
    }
}
