use serde::{Deserialize, Serialize};

use crate::TagRef;

pub const SYSTEM_PREFIX: &str = "ms_";

/// A mech system record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct System {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub system_type: String,
    pub sp: u32,
    pub tags: Vec<TagRef>,
    pub source: String,
    pub license: String,
    pub license_level: u32,
    pub effect: String,
    pub description: String,
    pub data_type: String,
    pub aptitude: String,
}

impl Default for System {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            system_type: "System".to_string(),
            sp: 0,
            tags: Vec::new(),
            source: String::new(),
            license: String::new(),
            license_level: 0,
            effect: String::new(),
            description: String::new(),
            data_type: "system".to_string(),
            aptitude: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let system = System::default();
        assert_eq!(system.system_type, "System");
        assert_eq!(system.data_type, "system");
    }
}
