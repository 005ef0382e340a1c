use serde::{Deserialize, Serialize};

pub const RESERVE_PREFIX: &str = "reserve_";

/// A downtime reserve.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reserve {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub reserve_type: String,
    pub label: String,
    pub description: String,
}
