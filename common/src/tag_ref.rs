use serde::{Deserialize, Serialize};

use crate::gen_id;

pub const TAG_PREFIX: &str = "tg_";

/// A reference to a gear tag, optionally carrying a numeric value
/// (e.g. `Reliable 2` becomes `{ id: "tg_reliable", val: 2 }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRef {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub val: Option<u32>,
}

impl TagRef {
    pub fn from_name(name: &str) -> Self {
        Self {
            id: gen_id(TAG_PREFIX, name),
            val: None,
        }
    }

    pub fn with_val(name: &str, val: u32) -> Self {
        Self {
            id: gen_id(TAG_PREFIX, name),
            val: Some(val),
        }
    }

    /// Whether a tag with the same id is already present. Only ids are
    /// compared; values are ignored.
    pub fn is_duplicate(&self, tags: &[TagRef]) -> bool {
        tags.iter().any(|t| t.id == self.id)
    }
}
