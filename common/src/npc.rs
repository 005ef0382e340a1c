use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const NPC_CLASS_PREFIX: &str = "npcc_";
pub const NPC_TEMPLATE_PREFIX: &str = "npct_";
pub const NPC_FEATURE_PREFIX: &str = "npcf_";

/// An NPC class: flavor, tactics and per-tier stats, plus the ids of its
/// base and optional features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpcClass {
    pub id: String,
    pub name: String,
    pub role: String,
    pub info: NpcInfo,
    pub stats: NpcStats,
    pub base_features: Vec<String>,
    pub optional_features: Vec<String>,
    pub power: i64,
}

impl Default for NpcClass {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            role: String::new(),
            info: NpcInfo::default(),
            stats: NpcStats::default(),
            base_features: Vec::new(),
            optional_features: Vec::new(),
            power: 100,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcInfo {
    pub flavor: String,
    pub tactics: String,
}

/// Per-tier NPC stats. Each field holds one value per tier (1 to 3);
/// sizes are lists because some NPCs offer a choice, so cells stay
/// untyped JSON values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpcStats {
    pub armor: [Value; 3],
    pub hp: [Value; 3],
    pub evade: [Value; 3],
    pub edef: [Value; 3],
    pub heatcap: [Value; 3],
    pub speed: [Value; 3],
    pub sensor: [Value; 3],
    pub save: [Value; 3],
    pub hull: [Value; 3],
    pub agility: [Value; 3],
    pub systems: [Value; 3],
    pub engineering: [Value; 3],
    pub size: [Value; 3],
    pub activations: [Value; 3],
}

impl Default for NpcStats {
    fn default() -> Self {
        let zero = || [Value::from(0), Value::from(0), Value::from(0)];
        Self {
            armor: zero(),
            hp: zero(),
            evade: zero(),
            edef: zero(),
            heatcap: zero(),
            speed: zero(),
            sensor: zero(),
            save: zero(),
            hull: zero(),
            agility: zero(),
            systems: zero(),
            engineering: zero(),
            size: zero(),
            activations: [Value::from(1), Value::from(1), Value::from(1)],
        }
    }
}

impl NpcStats {
    /// Mutable access to a stat row by its output key.
    pub fn row_mut(&mut self, key: &str) -> Option<&mut [Value; 3]> {
        match key {
            "armor" => Some(&mut self.armor),
            "hp" => Some(&mut self.hp),
            "evade" => Some(&mut self.evade),
            "edef" => Some(&mut self.edef),
            "heatcap" => Some(&mut self.heatcap),
            "speed" => Some(&mut self.speed),
            "sensor" => Some(&mut self.sensor),
            "save" => Some(&mut self.save),
            "hull" => Some(&mut self.hull),
            "agility" => Some(&mut self.agility),
            "systems" => Some(&mut self.systems),
            "engineering" => Some(&mut self.engineering),
            "size" => Some(&mut self.size),
            "activations" => Some(&mut self.activations),
            _ => None,
        }
    }
}

/// An NPC template (GRUNT, VETERAN, ELITE, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub base_features: Vec<String>,
    pub optional_features: Vec<String>,
    pub power: i64,
}

impl Default for NpcTemplate {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            description: String::new(),
            base_features: Vec::new(),
            optional_features: Vec::new(),
            power: 20,
        }
    }
}

/// An NPC feature. The origin names the class or template the feature
/// was parsed from.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcFeature {
    pub id: String,
    pub name: String,
    pub origin: NpcFeatureOrigin,
    #[serde(rename = "type")]
    pub feature_type: String,
    pub effect: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcFeatureOrigin {
    #[serde(rename = "type")]
    pub origin_type: String,
    pub name: String,
    pub base: bool,
}
