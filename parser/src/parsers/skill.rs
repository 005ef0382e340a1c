use compendium_common::{gen_id, Skill, SKILL_PREFIX};

use crate::lines::is_all_caps;
use crate::section::Anchor;

pub const ANCHOR: Anchor = Anchor {
    section: "skills",
    start: &[
        "ACT UNSEEN OR UNHEARD",
        "Get somewhere or do something without",
        "APPLY FISTS TO FACES",
    ],
    end: &[
        "Use force or threats to make someone",
        "WORD ON THE STREET",
        "Get gossip, news, or hearsay from the streets,",
    ],
};

/// Parser for pilot skill triggers: an all-caps name line followed by a
/// one-line description.
#[derive(Debug, Default)]
pub struct SkillParser;

impl SkillParser {
    pub fn parse_section(lines: &[String]) -> Vec<Skill> {
        let mut skills = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            if !is_all_caps(line) {
                continue;
            }
            let name = line.trim().to_string();
            let description = lines.get(i + 1).map(|l| l.trim().to_string()).unwrap_or_default();
            skills.push(Skill {
                id: gen_id(SKILL_PREFIX, &name),
                name,
                description,
                detail: String::new(),
                family: String::new(),
            });
        }
        skills
    }
}
