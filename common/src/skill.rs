use serde::{Deserialize, Serialize};

pub const SKILL_PREFIX: &str = "sk_";

/// A pilot skill trigger.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub description: String,
    pub detail: String,
    pub family: String,
}
