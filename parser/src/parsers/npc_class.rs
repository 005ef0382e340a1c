use compendium_common::{
    gen_id, NpcClass, NpcFeature, StatValue, NPC_CLASS_PREFIX,
};
use serde_json::Value;

use crate::hunk::split_non_empty;
use crate::lines::combine_lines;
use crate::parsers::npc_feature::{FeatureOriginKind, NpcFeatureParser};
use crate::section::Anchor;
use crate::ParseError;

pub const ANCHOR: Anchor = Anchor {
    section: "npc classes",
    start: &[
        "Ace",
        "Striker",
        "The first person to embody the \u{201c}Ace\u{201d} archetype was Aisling",
    ],
    end: &[
        "Winged",
        "Trait",
        "The Monstrosity may fly whenever it moves,",
    ],
};

pub const ROLES: [&str; 6] = [
    "striker",
    "controller",
    "artillery",
    "defender",
    "support",
    "biological",
];

const TACTICS_TITLE: &str = "Tactics";
const STAT_TITLE: &str = "Stats";
const TIERS: [&str; 3] = ["Tier 1", "Tier 2", "Tier 3"];
const BASE_SYSTEMS: &str = "Base Systems";
const OPTIONAL_SYSTEMS: &str = "Optional Systems";

/// Parser for NPC classes and their features.
///
/// A class hunk is the name, a role line, flavor text until `Tactics`,
/// tactics until `Stats`, then per-tier stat lines. The hunks between
/// the `Base Systems` and `Optional Systems` markers are the class's
/// features.
#[derive(Debug, Default)]
pub struct NpcClassParser;

impl NpcClassParser {
    /// Whether a hunk opens a new NPC class: its second line is a role.
    pub fn is_class(hunk: &[String]) -> bool {
        hunk.len() >= 2 && ROLES.contains(&hunk[1].trim().to_lowercase().as_str())
    }

    pub fn parse_section(
        lines: &[String],
    ) -> (Vec<NpcClass>, Vec<NpcFeature>, Vec<ParseError>) {
        let mut classes: Vec<NpcClass> = Vec::new();
        let mut features = Vec::new();
        let mut warnings = Vec::new();
        let mut in_optional = false;
        for hunk in split_non_empty(lines) {
            if Self::is_class(hunk) {
                in_optional = false;
                match Self::parse(hunk) {
                    Ok(class) => classes.push(class),
                    Err(err) => warnings.push(err),
                }
            } else if hunk[0].trim() == BASE_SYSTEMS {
                in_optional = false;
            } else if hunk[0].trim() == OPTIONAL_SYSTEMS {
                in_optional = true;
            } else if let Some(class) = classes.last_mut() {
                match NpcFeatureParser::parse(
                    hunk,
                    FeatureOriginKind::Class,
                    &class.name,
                    !in_optional,
                ) {
                    Ok(feature) => {
                        if in_optional {
                            class.optional_features.push(feature.id.clone());
                        } else {
                            class.base_features.push(feature.id.clone());
                        }
                        features.push(feature);
                    }
                    Err(err) => warnings.push(err),
                }
            }
        }
        (classes, features, warnings)
    }

    pub fn parse(hunk: &[String]) -> Result<NpcClass, ParseError> {
        if hunk.len() < 2 {
            return Err(ParseError::HunkTooShort {
                entity: "npc class",
                name: hunk.first().map(|l| l.trim().to_string()).unwrap_or_default(),
                expected: 2,
                found: hunk.len(),
            });
        }
        let mut class = NpcClass {
            name: hunk[0].trim().to_uppercase(),
            role: hunk[1].trim().to_lowercase(),
            ..NpcClass::default()
        };
        class.id = gen_id(NPC_CLASS_PREFIX, &class.name);

        let tactics = hunk.iter().position(|line| line.trim() == TACTICS_TITLE);
        let stats = hunk
            .iter()
            .position(|line| line.trim() == STAT_TITLE)
            .ok_or_else(|| ParseError::MissingLandmark {
                entity: "npc class",
                name: class.name.clone(),
                landmark: STAT_TITLE,
            })?;
        let tactics = tactics.unwrap_or(stats);

        class.info.flavor = combine_lines(&hunk[2..tactics]);
        if tactics != stats {
            class.info.tactics = combine_lines(&hunk[tactics + 1..stats]);
        }

        Self::parse_stats(&mut class, &hunk[stats..])?;
        Ok(class)
    }

    fn parse_stats(class: &mut NpcClass, lines: &[String]) -> Result<(), ParseError> {
        let mut tier = None;
        for line in lines {
            let trimmed = line.trim();
            if let Some(t) = TIERS.iter().position(|t| trimmed == *t) {
                tier = Some(t);
                continue;
            }
            let Some((key, val)) = trimmed.split_once(':') else {
                continue;
            };
            let Some(tier) = tier else {
                return Err(ParseError::MissingLandmark {
                    entity: "npc class",
                    name: class.name.clone(),
                    landmark: "Tier 1",
                });
            };
            let key = Self::stat_key(key.trim()).ok_or_else(|| ParseError::UnknownStat {
                entity: "npc class",
                name: class.name.clone(),
                stat: key.trim().to_string(),
            })?;
            let cell = if key == "size" {
                Self::parse_size(val)
            } else {
                Self::parse_stat_value(val)
            };
            if let Some(row) = class.stats.row_mut(key) {
                row[tier] = cell;
            }
        }
        Ok(())
    }

    fn stat_key(raw: &str) -> Option<&'static str> {
        Some(match raw.to_lowercase().as_str() {
            "armor" => "armor",
            "hp" => "hp",
            "evasion" => "evade",
            "e-defense" => "edef",
            "heat cap" => "heatcap",
            "speed" => "speed",
            "sensors" => "sensor",
            "save target" => "save",
            "hull" => "hull",
            "agility" => "agility",
            "systems" => "systems",
            "engineering" => "engineering",
            "size" => "size",
            "activations" => "activations",
            _ => return None,
        })
    }

    /// Sizes are lists: `1 or 2` offers a choice, `1/2` is half size.
    fn parse_size(val: &str) -> Value {
        let mut parts = Vec::new();
        for option in val.split(" or ") {
            for part in option.split(',') {
                let part = part.trim();
                if part.is_empty() {
                    continue;
                }
                match StatValue::parse(part) {
                    Some(StatValue::Half) => parts.push(Value::from(0.5)),
                    Some(StatValue::Whole(n)) => parts.push(Value::from(n)),
                    None => parts.push(Value::from(part)),
                }
            }
        }
        Value::from(parts)
    }

    /// Plain stats: integers where possible, then floats, then the raw
    /// text.
    fn parse_stat_value(val: &str) -> Value {
        let cleaned = val.trim().replace('+', "").replace('\u{2013}', "-");
        if let Ok(n) = cleaned.parse::<i64>() {
            Value::from(n)
        } else if let Ok(f) = cleaned.parse::<f64>() {
            Value::from(f)
        } else {
            Value::from(cleaned)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    fn sample_section() -> Vec<String> {
        lines(&[
            "Ace",
            "Striker",
            "The first person to embody the archetype was a duelist.",
            "Tactics",
            "Aces harass and disrupt enemy lines.",
            "Stats",
            "Tier 1",
            "Armor: 0",
            "HP: 8",
            "Evasion: 12",
            "Size: 1/2 or 1",
            "Tier 2",
            "Armor: 0",
            "HP: 10",
            "Evasion: 14",
            "Size: 1/2 or 1",
            "Tier 3",
            "Armor: 1",
            "HP: 12",
            "Evasion: 16",
            "Size: 1/2 or 1",
            "",
            "Base Systems",
            "",
            "Afterburners",
            "Trait",
            "The Ace gains +2 Evasion while it moves at least 4 spaces.",
            "",
            "Optional Systems",
            "",
            "Lock-On Jammer",
            "System",
            "1/round, the Ace may clear LOCK ON as a free action.",
        ])
    }

    #[test]
    fn test_parse_section_builds_class_and_features() {
        let (classes, features, warnings) = NpcClassParser::parse_section(&sample_section());
        assert!(warnings.is_empty());
        assert_eq!(classes.len(), 1);
        let class = &classes[0];
        assert_eq!(class.id, "npcc_ace");
        assert_eq!(class.role, "striker");
        assert_eq!(class.info.tactics, "Aces harass and disrupt enemy lines.");
        assert_eq!(class.base_features, vec!["npcf_afterburners"]);
        assert_eq!(class.optional_features, vec!["npcf_lock_on_jammer"]);

        assert_eq!(features.len(), 2);
        assert_eq!(features[0].origin.name, "ACE");
        assert_eq!(features[0].origin.base, true);
        assert_eq!(features[1].origin.base, false);
        assert_eq!(features[1].feature_type, "System");
    }

    #[test]
    fn test_parse_stats_per_tier() {
        let (classes, _, _) = NpcClassParser::parse_section(&sample_section());
        let stats = &classes[0].stats;
        assert_eq!(stats.hp[0], Value::from(8));
        assert_eq!(stats.hp[2], Value::from(12));
        assert_eq!(stats.evade[1], Value::from(14));
        assert_eq!(stats.size[0], Value::from(vec![Value::from(0.5), Value::from(1)]));
        assert_eq!(stats.activations[0], Value::from(1));
    }

    #[test]
    fn test_stat_line_before_tier_is_an_error() {
        let section = lines(&["Ace", "Striker", "Flavor.", "Stats", "HP: 8"]);
        let (_, _, warnings) = NpcClassParser::parse_section(&section);
        assert_eq!(warnings.len(), 1);
    }
}
