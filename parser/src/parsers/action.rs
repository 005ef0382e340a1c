use compendium_common::{gen_id, Action, ACTION_PREFIX};

use crate::hunk::split_non_empty;
use crate::lines::combine_lines;
use crate::section::Anchor;
use crate::ParseError;

pub const ANCHOR: Anchor = Anchor {
    section: "actions",
    start: &[
        "DOWNTIME ACTIONS",
        "Downtime actions represent specific activities undertaken by",
        "Unlike skill checks, downtime actions have specific outcomes",
    ],
    end: &[
        "On each of your subsequent turns, you can continue to choose",
        "RELOAD (QUICK ACTION)",
        "When you RELOAD, you reload one Pilot Weapon with the LOADING",
    ],
};

/// Sub-section headers and the action type they assign. Pilot actions
/// keep whatever type their own header carries but are flagged.
const SUBSECTIONS: [(&str, &str); 6] = [
    ("DOWNTIME ACTIONS", "downtime"),
    ("QUICK ACTIONS", "quick"),
    ("FULL ACTIONS", "full"),
    ("OTHER ACTIONS", ""),
    ("REACTIONS", "reaction"),
    ("PILOT ACTIONS", ""),
];

const PILOT_SECTION: &str = "PILOT ACTIONS";
const EJECT_START: &str = "You can also EJECT";

/// Parser for the player action sections. Each hunk is one action; the
/// surrounding sub-section header provides the action type unless the
/// name line carries its own (`RELOAD (QUICK ACTION)`).
#[derive(Debug, Default)]
pub struct ActionParser;

impl ActionParser {
    pub fn parse_section(lines: &[String]) -> (Vec<Action>, Vec<ParseError>) {
        let mut actions = Vec::new();
        let mut warnings = Vec::new();
        let mut current_type = "";
        let mut pilot = false;
        for hunk in split_non_empty(lines) {
            if let Some((_, action_type)) = SUBSECTIONS
                .iter()
                .copied()
                .find(|(header, _)| hunk[0] == *header)
            {
                current_type = action_type;
                pilot = hunk[0] == PILOT_SECTION;
                if hunk.len() == 1 {
                    continue;
                }
            }
            // The MOUNT text carries the EJECT variant inline; split it
            // into its own action.
            let eject = hunk
                .iter()
                .position(|line| line.starts_with(EJECT_START))
                .filter(|&i| i > 0);
            let (own, eject_lines) = match eject {
                Some(i) => (&hunk[..i], Some(&hunk[i..])),
                None => (hunk, None),
            };
            match Self::parse_action(own, current_type, pilot) {
                Ok(action) => actions.push(action),
                Err(err) => warnings.push(err),
            }
            if let Some(eject_lines) = eject_lines {
                actions.push(Action {
                    id: gen_id(ACTION_PREFIX, "EJECT"),
                    name: "EJECT".to_string(),
                    action_type: current_type.to_string(),
                    detail: combine_lines(eject_lines),
                    pilot: pilot.then_some(true),
                    ..Action::default()
                });
            }
        }
        actions.sort_by(|a, b| a.output_order(b));
        (actions, warnings)
    }

    fn parse_action(
        hunk: &[String],
        current_type: &str,
        pilot: bool,
    ) -> Result<Action, ParseError> {
        let first = hunk.first().ok_or(ParseError::EmptyHunk { entity: "action" })?;
        let mut action_type = current_type.to_string();
        let name;
        if action_type.is_empty() {
            // A parenthesized kind on the name line wins: "RELOAD
            // (QUICK ACTION)".
            if let Some((head, kind)) = first.split_once('(') {
                name = head.trim().to_uppercase();
                action_type = kind
                    .split_whitespace()
                    .next()
                    .unwrap_or_default()
                    .to_lowercase()
                    .replace(')', "");
            } else {
                name = first.trim().to_uppercase();
            }
        } else {
            name = first.trim().to_uppercase();
        }

        let mut action = Action {
            name,
            action_type,
            pilot: pilot.then_some(true),
            ..Action::default()
        };
        if action.name == "OVERCHARGE" {
            action.action_type = "overcharge".to_string();
        }
        if action.name == "FREE ACTIONS" {
            action.name = "FREE ACTION".to_string();
            action.action_type = "free".to_string();
        }
        action.id = gen_id(ACTION_PREFIX, &action.name);
        action.detail = combine_lines(&hunk[1..]);
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_parse_section_assigns_types() {
        let section = lines(&[
            "QUICK ACTIONS",
            "",
            "BOOST",
            "Move your speed in any direction.",
            "",
            "FULL ACTIONS",
            "",
            "BARRAGE",
            "Attack with two weapons.",
        ]);
        let (actions, warnings) = ActionParser::parse_section(&section);
        assert!(warnings.is_empty());
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].name, "BOOST");
        assert_eq!(actions[0].action_type, "quick");
        assert_eq!(actions[1].name, "BARRAGE");
        assert_eq!(actions[1].action_type, "full");
    }

    #[test]
    fn test_inline_kind_wins_in_untyped_sections() {
        let section = lines(&[
            "PILOT ACTIONS",
            "",
            "RELOAD (QUICK ACTION)",
            "Reload one Pilot Weapon with the LOADING tag.",
        ]);
        let (actions, _) = ActionParser::parse_section(&section);
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].name, "RELOAD");
        assert_eq!(actions[0].action_type, "quick");
        assert_eq!(actions[0].pilot, Some(true));
    }

    #[test]
    fn test_eject_splits_into_its_own_action() {
        let section = lines(&[
            "QUICK ACTIONS",
            "",
            "MOUNT",
            "Climb into a mech.",
            "You can also EJECT, leaving the mech behind.",
        ]);
        let (actions, _) = ActionParser::parse_section(&section);
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].name, "EJECT");
        assert_eq!(actions[1].name, "MOUNT");
        assert!(actions[0].detail.starts_with("You can also EJECT"));
    }

    #[test]
    fn test_overcharge_gets_its_own_type() {
        let section = lines(&["OTHER ACTIONS", "", "OVERCHARGE", "Push the reactor."]);
        let (actions, _) = ActionParser::parse_section(&section);
        assert_eq!(actions[0].action_type, "overcharge");
    }
}
