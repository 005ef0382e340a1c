use serde::{Deserialize, Serialize};

pub const CORE_BONUS_PREFIX: &str = "cb_";

/// A manufacturer core bonus.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreBonus {
    pub id: String,
    pub name: String,
    pub source: String,
    pub effect: String,
    pub description: String,
}
