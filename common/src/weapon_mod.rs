use serde::{Deserialize, Serialize};

use crate::TagRef;

pub const MOD_PREFIX: &str = "wm_";

/// A weapon mod record. `applied_to` lists the weapon types the mod can
/// be installed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponMod {
    pub id: String,
    pub name: String,
    pub sp: u32,
    pub applied_to: Vec<String>,
    pub tags: Vec<TagRef>,
    pub source: String,
    pub license: String,
    pub license_level: u32,
    pub effect: String,
    pub description: String,
    pub data_type: String,
}

impl Default for WeaponMod {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            sp: 0,
            applied_to: Vec::new(),
            tags: Vec::new(),
            source: String::new(),
            license: String::new(),
            license_level: 0,
            effect: String::new(),
            description: String::new(),
            data_type: "mod".to_string(),
        }
    }
}
