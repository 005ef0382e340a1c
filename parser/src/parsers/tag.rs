use compendium_common::{gen_id, Tag, TAG_PREFIX};

use crate::section::Anchor;

pub const ANCHOR: Anchor = Anchor {
    section: "tags",
    start: &[
        "HARM TYPE",
        "Weapons deal one of four types of damage - ",
        "- BURN X: On a hit, this weapon deals X",
    ],
    end: &[
        "- PERSONAL ARMOR: This gear offers protection in combat, ",
        "- GEAR: This is a tool, piece of equipment, ",
        "- SIDEARM: This weapon can be used to FIGHT ",
    ],
};

/// Headers bracketing the tag definitions that should be hidden from
/// filter lists (equipment patterns).
const FILTER_IGNORE: [&str; 2] = ["PATTERNS", "OTHER WEAPON TAGS"];

/// The `X` value placeholder and its normalized output form.
const VAL: (&str, &str) = (" X", " {VAL}");

/// Parser for gear tag definitions: `- NAME: description` lines.
#[derive(Debug, Default)]
pub struct TagParser;

impl TagParser {
    /// Walks a tag section. Only lines with a colon near the start are
    /// definitions; everything else is prose.
    pub fn parse_section(lines: &[String]) -> Vec<Tag> {
        let mut tags = Vec::new();
        let mut in_ignore = false;
        for line in lines {
            if !in_ignore && line.starts_with(FILTER_IGNORE[0]) {
                in_ignore = true;
            } else if in_ignore && line.starts_with(FILTER_IGNORE[1]) {
                in_ignore = false;
            }
            if !head(line, 40).contains(": ") {
                continue;
            }
            if let Some(mut tag) = Self::parse_line(line.trim()) {
                tag.filter_ignore = in_ignore;
                tags.push(tag);
            }
        }
        tags
    }

    /// Parses one `- NAME: description` line.
    pub fn parse_line(line: &str) -> Option<Tag> {
        let rest = line.strip_prefix("- ").unwrap_or(line);
        let (name, description) = rest.split_once(':')?;
        let mut name = name.to_string();
        // AP is named by its abbreviation, not the full text.
        let id = if name.contains("(AP)") {
            gen_id(TAG_PREFIX, "AP")
        } else {
            gen_id(TAG_PREFIX, &name)
        };
        let id = id.replace("_x", "");
        if name.contains(VAL.0) {
            name = name.replace(VAL.0, VAL.1);
        }
        let description = description.trim().replace(VAL.0, VAL.1);
        Some(Tag {
            id,
            name,
            description,
            filter_ignore: false,
        })
    }
}

/// The first `n` characters of a line, respecting char boundaries.
fn head(line: &str, n: usize) -> &str {
    match line.char_indices().nth(n) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_parse_line_with_value_placeholder() {
        let tag = TagParser::parse_line("- BURN X: On a hit, this weapon deals X burn.").unwrap();
        assert_eq!(tag.id, "tg_burn");
        assert_eq!(tag.name, "BURN {VAL}");
        assert_eq!(tag.description, "On a hit, this weapon deals {VAL} burn.");
    }

    #[test]
    fn test_parse_line_ap_special_case() {
        let tag = TagParser::parse_line("- ARMOR-PIERCING (AP): Ignores ARMOR.").unwrap();
        assert_eq!(tag.id, "tg_ap");
        assert_eq!(tag.name, "ARMOR-PIERCING (AP)");
    }

    #[test]
    fn test_section_marks_pattern_range() {
        let section = lines(&[
            "- LOADING: This weapon must be reloaded.",
            "PATTERNS",
            "- GRENADE: A thrown explosive.",
            "OTHER WEAPON TAGS",
            "- ORDNANCE: Fire before moving.",
        ]);
        let tags = TagParser::parse_section(&section);
        assert_eq!(tags.len(), 3);
        assert!(!tags[0].filter_ignore);
        assert!(tags[1].filter_ignore);
        assert!(!tags[2].filter_ignore);
    }

    #[test]
    fn test_section_skips_prose() {
        let section = lines(&[
            "Weapons and systems can have tags.",
            "- UNIQUE: Only one copy may be equipped.",
        ]);
        let tags = TagParser::parse_section(&section);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].id, "tg_unique");
    }
}
