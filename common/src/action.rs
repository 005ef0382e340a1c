use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

pub const ACTION_PREFIX: &str = "act_";

/// A player action. `pilot` and `reserve` are only emitted when set.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub id: String,
    pub name: String,
    pub action_type: String,
    pub description: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pilot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserve: Option<bool>,
}

/// Fixed output ordering for action types.
const TYPE_ORDER: [&str; 7] = [
    "move",
    "overcharge",
    "quick",
    "full",
    "reaction",
    "free",
    "downtime",
];

/// Actions listed ahead of the alphabetical rest within their type.
const QUICK_ORDER: [&str; 6] = ["skirmish", "boost", "ram", "grapple", "quick tech", "hide"];
const FULL_ORDER: [&str; 3] = ["barrage", "full tech", "stabilize"];

fn type_index(action_type: &str) -> usize {
    TYPE_ORDER
        .iter()
        .position(|t| *t == action_type)
        .unwrap_or(TYPE_ORDER.len())
}

fn priority_index(action_type: &str, name: &str) -> Option<usize> {
    let order: &[&str] = match action_type {
        "quick" => &QUICK_ORDER,
        "full" => &FULL_ORDER,
        _ => return None,
    };
    order.iter().position(|n| *n == name.to_lowercase())
}

impl Action {
    /// Output ordering: by action type, then plain actions before reserve
    /// and pilot variants, then the fixed priority list, then name.
    pub fn output_order(&self, other: &Action) -> Ordering {
        type_index(&self.action_type)
            .cmp(&type_index(&other.action_type))
            .then_with(|| self.reserve.is_some().cmp(&other.reserve.is_some()))
            .then_with(|| self.pilot.is_some().cmp(&other.pilot.is_some()))
            .then_with(|| {
                match (
                    priority_index(&self.action_type, &self.name),
                    priority_index(&other.action_type, &other.name),
                ) {
                    (Some(a), Some(b)) => a.cmp(&b),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => self.name.cmp(&other.name),
                }
            })
    }
}
