use serde::{Deserialize, Serialize};

/// A combat glossary entry. Glossary entries carry no id.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    pub name: String,
    pub description: String,
}
