use serde::{Deserialize, Serialize};

/// A gear tag definition. Tags listed under equipment-pattern headings
/// are marked `filter_ignore` so downstream tools can hide them from
/// filter lists.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub description: String,
    pub filter_ignore: bool,
}
