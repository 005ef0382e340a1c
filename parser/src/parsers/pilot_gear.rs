use compendium_common::{
    gen_id, DamageAmount, DamageValue, PilotGear, RangeValue, GEAR_TYPE_ARMOR, GEAR_TYPE_GEAR,
    GEAR_TYPE_WEAPON, PILOT_GEAR_PREFIX,
};

use crate::hunk::split_hunks;
use crate::lines::{is_die_roll, title_case};
use crate::section::Anchor;
use crate::tagline::parse_tag_line;
use crate::ParseError;

pub const ANCHOR: Anchor = Anchor {
    section: "pilot gear",
    start: &[
        "PILOT GEAR",
        "On missions, pilots can take one set",
        "The names and descriptions given for pilot gear",
    ],
    end: &[
        "WILDERNESS SURVIVAL KIT",
        "Gear",
        "Contains many essentials for surviving in hostile environments:",
    ],
};

/// Landmark lines opening the three pilot gear sub-sections. Each
/// landmark is also the first entry of its sub-section.
const WEAPONS_SEC: &str = "Archaic melee";
const ARMOR_SEC: &str = "Light Hardsuit";
const GEAR_SEC: &str = "CORRECTIVE";

/// Line counts of the fixed-layout profiles.
const WEAPON_LINES: usize = 4;
const ARMOR_LINES: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq)]
enum SubSection {
    None,
    Weapons,
    Armor,
    Gear,
}

/// Parser for the pilot gear section: weapons, hardsuits and gear in
/// three fixed-layout sub-sections.
#[derive(Debug, Default)]
pub struct PilotGearParser;

impl PilotGearParser {
    pub fn parse_section(lines: &[String]) -> (Vec<PilotGear>, Vec<ParseError>) {
        let mut gear = Vec::new();
        let mut warnings = Vec::new();
        let mut section = SubSection::None;
        for hunk in split_hunks(lines) {
            // Check whether a new sub-section starts in this hunk.
            for line in hunk {
                if line == WEAPONS_SEC {
                    section = SubSection::Weapons;
                } else if line == ARMOR_SEC {
                    section = SubSection::Armor;
                } else if line == GEAR_SEC {
                    section = SubSection::Gear;
                }
            }
            let parsed = match section {
                SubSection::Weapons if hunk.len() == WEAPON_LINES => {
                    Some(Self::parse_weapon(hunk))
                }
                SubSection::Armor if hunk.len() == ARMOR_LINES => Some(Self::parse_armor(hunk)),
                SubSection::Gear if hunk.len() > 1 => Some(Self::parse_gear(hunk)),
                _ => None,
            };
            match parsed {
                Some(Ok(item)) => gear.push(item),
                Some(Err(err)) => warnings.push(err),
                None => {}
            }
        }
        (gear, warnings)
    }

    /// A pilot weapon profile: name, tags, threat/range line, damage
    /// line.
    fn parse_weapon(hunk: &[String]) -> Result<PilotGear, ParseError> {
        let name = title_case(hunk[0].trim());
        let mut item = PilotGear {
            id: gen_id(PILOT_GEAR_PREFIX, &name),
            name,
            gear_type: GEAR_TYPE_WEAPON.to_string(),
            ..PilotGear::default()
        };
        item.tags = parse_tag_line(&hunk[1]).tags;

        // Threat/range on the third line.
        let tokens: Vec<&str> = hunk[2].split_whitespace().collect();
        let range_type = match tokens.first() {
            Some(&"Threat") => "Threat",
            Some(&"Range") => "Range",
            _ => {
                return Err(ParseError::BadValue {
                    entity: "pilot weapon",
                    name: item.name,
                    value: hunk[2].clone(),
                })
            }
        };
        let val = tokens
            .get(1)
            .and_then(|t| t.parse::<u32>().ok())
            .ok_or_else(|| ParseError::BadValue {
                entity: "pilot weapon",
                name: item.name.clone(),
                value: hunk[2].clone(),
            })?;
        item.range = Some(vec![RangeValue {
            range_type: range_type.to_string(),
            val,
        }]);

        // Damage on the fourth line: "N type" entries, comma separated.
        let mut damage = Vec::new();
        for entry in hunk[3].split(',') {
            let tokens: Vec<&str> = entry.split_whitespace().collect();
            let (Some(raw_val), Some(raw_type)) = (tokens.first(), tokens.get(1)) else {
                return Err(ParseError::BadValue {
                    entity: "pilot weapon",
                    name: item.name.clone(),
                    value: entry.trim().to_string(),
                });
            };
            let damage_type = if raw_type.contains('*') {
                // A starred type means the buyer picks it.
                item.effect = Some("Player selects damage type at item creation.".to_string());
                "variable".to_string()
            } else {
                raw_type.to_lowercase()
            };
            let val = if let Ok(flat) = raw_val.parse::<u32>() {
                DamageAmount::Flat(flat)
            } else if is_die_roll(raw_val) {
                DamageAmount::Roll(raw_val.to_string())
            } else {
                return Err(ParseError::BadValue {
                    entity: "pilot weapon",
                    name: item.name.clone(),
                    value: raw_val.to_string(),
                });
            };
            damage.push(DamageValue { damage_type, val });
        }
        item.damage = Some(damage);
        Ok(item)
    }

    /// A hardsuit profile: name, tags, HP bonus, armor, evasion,
    /// e-defense, speed.
    fn parse_armor(hunk: &[String]) -> Result<PilotGear, ParseError> {
        let name = hunk[0].trim().to_string();
        let mut item = PilotGear {
            id: gen_id(PILOT_GEAR_PREFIX, &name),
            name,
            gear_type: GEAR_TYPE_ARMOR.to_string(),
            ..PilotGear::default()
        };
        item.tags = parse_tag_line(&hunk[1]).tags;

        item.hp_bonus = Some(if hunk[2].starts_with('+') {
            Self::parse_stat(&item.name, hunk[2].split(' ').next().unwrap_or_default().trim_start_matches('+'))?
        } else {
            0
        });
        item.armor = Some(Self::parse_stat(&item.name, &hunk[3])?);
        item.evasion = Some(Self::parse_stat(&item.name, &hunk[4])?);
        item.edef = Some(Self::parse_stat(&item.name, &hunk[5])?);
        item.speed = Some(Self::parse_stat(&item.name, &hunk[6])?);
        Ok(item)
    }

    /// A gear profile: name, tags, description lines.
    fn parse_gear(hunk: &[String]) -> Result<PilotGear, ParseError> {
        let name = hunk[0].trim().to_string();
        let mut item = PilotGear {
            id: gen_id(PILOT_GEAR_PREFIX, &name),
            name,
            gear_type: GEAR_TYPE_GEAR.to_string(),
            ..PilotGear::default()
        };
        let tags = parse_tag_line(&hunk[1]);
        item.tags = tags.tags;
        if tags.uses > 0 {
            item.uses = Some(tags.uses);
        }

        let mut description = hunk.get(2).map(|l| l.trim().to_string()).unwrap_or_default();
        for line in &hunk[3.min(hunk.len())..] {
            description.push_str("<br>");
            description.push_str(line.trim());
        }
        item.description = description;
        Ok(item)
    }

    fn parse_stat(name: &str, value: &str) -> Result<i64, ParseError> {
        value.trim().parse().map_err(|_| ParseError::BadValue {
            entity: "pilot armor",
            name: name.to_string(),
            value: value.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_parse_section_dispatches_by_subsection() {
        let section = lines(&[
            "Archaic melee",
            "-",
            "Threat 1",
            "1 Kinetic",
            "",
            "Light Hardsuit",
            "Personal Armor",
            "+2 HP",
            "0",
            "10",
            "10",
            "4",
            "",
            "CORRECTIVE",
            "Gear, Limited 3",
            "A patch of smart material that repairs damage.",
        ]);
        let (gear, warnings) = PilotGearParser::parse_section(&section);
        assert!(warnings.is_empty());
        assert_eq!(gear.len(), 3);

        let weapon = &gear[0];
        assert_eq!(weapon.id, "pg_archaic_melee");
        assert_eq!(weapon.name, "Archaic Melee");
        assert_eq!(weapon.gear_type, GEAR_TYPE_WEAPON);
        assert_eq!(weapon.range.as_ref().unwrap()[0].val, 1);
        assert_eq!(weapon.damage.as_ref().unwrap()[0].damage_type, "kinetic");

        let armor = &gear[1];
        assert_eq!(armor.gear_type, GEAR_TYPE_ARMOR);
        assert_eq!(armor.hp_bonus, Some(2));
        assert_eq!(armor.armor, Some(0));
        assert_eq!(armor.evasion, Some(10));
        assert_eq!(armor.edef, Some(10));
        assert_eq!(armor.speed, Some(4));

        let gear_item = &gear[2];
        assert_eq!(gear_item.gear_type, GEAR_TYPE_GEAR);
        assert_eq!(gear_item.uses, Some(3));
        assert!(gear_item.description.starts_with("A patch of smart material"));
    }

    #[test]
    fn test_variable_damage_sets_effect() {
        let section = lines(&[
            "Archaic melee",
            "-",
            "Threat 1",
            "1 Kinetic",
            "",
            "Medium signature",
            "Sidearm",
            "Range 5",
            "2 Kinetic*",
        ]);
        let (gear, _) = PilotGearParser::parse_section(&section);
        let signature = &gear[1];
        assert_eq!(signature.damage.as_ref().unwrap()[0].damage_type, "variable");
        assert_eq!(
            signature.effect.as_deref(),
            Some("Player selects damage type at item creation.")
        );
    }
}
