use serde::{Deserialize, Serialize};

pub const BACKGROUND_PREFIX: &str = "pbg_";

/// A pilot background.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
    pub id: String,
    pub name: String,
    pub description: String,
    pub triggers: String,
}
