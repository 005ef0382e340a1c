use serde::{Deserialize, Serialize};

pub const STATUS_PREFIX: &str = "sts_";

pub const STATUS_TYPE: &str = "Status";
pub const CONDITION_TYPE: &str = "Condition";

/// A status or condition entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub status_type: String,
    pub effects: String,
}

impl Default for Status {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            status_type: STATUS_TYPE.to_string(),
            effects: String::new(),
        }
    }
}
