use compendium_common::{gen_id, Status, CONDITION_TYPE, STATUS_PREFIX, STATUS_TYPE};

use crate::lines::{combine_lines, is_all_caps};
use crate::section::Anchor;

pub const ANCHOR: Anchor = Anchor {
    section: "statuses",
    start: &[
        "STATUSES AND CONDITIONS",
        "During combat, characters often inflict and receive",
        "Actions, talents, systems, and other effects can all inflict",
    ],
    end: &[
        "STUNNED",
        "STUNNED mechs cannot OVERCHARGE, move, or take any actions",
        "STUNNED mechs have a maximum of 5 EVASION, and automatically",
    ],
};

const SECTION_TITLE: &str = "STATUSES AND CONDITIONS";
const STATUS_HEADER: &str = "STATUSES";
const CONDITION_HEADER: &str = "CONDITIONS";

/// Parser for statuses and conditions. Each entry starts with an
/// all-caps name line; the `STATUSES` and `CONDITIONS` headers toggle
/// which type the following entries get.
#[derive(Debug, Default)]
pub struct StatusParser;

impl StatusParser {
    pub fn parse_section(lines: &[String]) -> Vec<Status> {
        let mut statuses = Vec::new();
        let cap_lines: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| is_all_caps(line))
            .map(|(i, _)| i)
            .collect();

        let mut is_status = true;
        for (n, &idx) in cap_lines.iter().enumerate() {
            let line = lines[idx].as_str();
            if line == SECTION_TITLE {
                continue;
            } else if line == STATUS_HEADER {
                is_status = true;
            } else if line == CONDITION_HEADER {
                is_status = false;
            } else {
                let end = cap_lines.get(n + 1).copied().unwrap_or(lines.len());
                let name = line.trim().to_string();
                statuses.push(Status {
                    id: gen_id(STATUS_PREFIX, &name),
                    name,
                    status_type: if is_status {
                        STATUS_TYPE.to_string()
                    } else {
                        CONDITION_TYPE.to_string()
                    },
                    effects: combine_lines(&lines[idx + 1..end]),
                });
            }
        }
        statuses
    }
}
