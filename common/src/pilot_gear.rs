use serde::{Deserialize, Serialize};

use crate::{DamageValue, RangeValue, TagRef};

pub const PILOT_GEAR_PREFIX: &str = "pg_";

pub const GEAR_TYPE_WEAPON: &str = "weapon";
pub const GEAR_TYPE_ARMOR: &str = "armor";
pub const GEAR_TYPE_GEAR: &str = "gear";

/// Pilot equipment: a weapon, a hardsuit, or a piece of gear. The three
/// kinds share one record; kind-specific fields are only emitted when
/// populated.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PilotGear {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub gear_type: String,
    pub description: String,
    pub tags: Vec<TagRef>,
    // Weapon fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Vec<RangeValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage: Option<Vec<DamageValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
    // Armor fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hp_bonus: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub armor: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evasion: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edef: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<i64>,
    // Gear fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uses: Option<u32>,
}
