use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{LicenseTable, StatValue, TagRef};

pub const FRAME_PREFIX: &str = "mf_";

/// A mech frame record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub id: String,
    pub source: String,
    pub name: String,
    pub mechtype: Vec<String>,
    pub y_pos: String,
    pub description: String,
    pub mounts: Vec<String>,
    pub stats: FrameStats,
    pub traits: Vec<FrameTrait>,
    pub core_system: CoreSystem,
    pub data_type: String,
    pub aptitude: Map<String, Value>,
    /// Which gear unlocks at which rank of this frame's license. Used to
    /// attribute licensed gear while parsing; not part of the record.
    #[serde(skip)]
    pub license: LicenseTable,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            id: String::new(),
            source: String::new(),
            name: String::new(),
            mechtype: Vec::new(),
            y_pos: String::new(),
            description: String::new(),
            mounts: Vec::new(),
            stats: FrameStats::default(),
            traits: Vec::new(),
            core_system: CoreSystem::default(),
            data_type: "frame".to_string(),
            aptitude: Map::new(),
            license: LicenseTable::default(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameStats {
    pub size: StatValue,
    pub armor: i64,
    pub hp: i64,
    pub evasion: i64,
    pub edef: i64,
    pub heatcap: i64,
    pub repcap: i64,
    pub sensor_range: i64,
    pub tech_attack: i64,
    pub save: i64,
    pub speed: i64,
    pub sp: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameTrait {
    pub name: String,
    pub description: String,
}

/// A frame's core system. Passive effect and integrated mount only appear
/// on frames that have them.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreSystem {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passive_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passive_effect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integrated: Option<IntegratedRef>,
    pub active_name: String,
    pub active_effect: String,
    pub tags: Vec<TagRef>,
}

/// Reference to a weapon integrated into a core system.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegratedRef {
    pub id: String,
}
