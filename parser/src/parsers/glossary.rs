use compendium_common::GlossaryEntry;

use crate::lines::is_all_caps;
use crate::section::Anchor;

pub const ANCHOR: Anchor = Anchor {
    section: "glossary",
    start: &[
        "COMBAT TERMINOLOGY",
        "ARMOR: All kinetic, energy, and explosive",
        "BONUS DAMAGE: Extra damage \u{2013} kinetic",
    ],
    end: &[
        "SPEED: The number of spaces a character",
        "TECH ATTACK: The statistic used to make",
        "THREAT: The maximum range at which",
    ],
};

/// Parser for the combat glossary: `TERM: description` lines.
#[derive(Debug, Default)]
pub struct GlossaryParser;

impl GlossaryParser {
    pub fn parse_section(lines: &[String]) -> Vec<GlossaryEntry> {
        let mut entries = Vec::new();
        for line in lines {
            if let Some(entry) = Self::parse_line(line) {
                entries.push(entry);
            }
        }
        entries
    }

    /// Parses one glossary line. Only lines whose part before the colon
    /// is all caps are terms.
    pub fn parse_line(line: &str) -> Option<GlossaryEntry> {
        let (name, description) = line.split_once(':')?;
        if !is_all_caps(name) {
            return None;
        }
        Some(GlossaryEntry {
            name: name.trim().to_string(),
            description: description.trim().to_string(),
        })
    }
}
