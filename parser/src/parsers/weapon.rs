use compendium_common::{
    gen_id, DamageAmount, DamageValue, LicenseTable, RangeValue, Weapon, WEAPON_PREFIX,
};

use crate::lines::{is_die_roll, join_lines_br};
use crate::tagline::parse_tag_line;
use crate::ParseError;

pub const RANGE_TYPES: [&str; 6] = ["Range", "Threat", "Line", "Cone", "Blast", "Burst"];
pub const DAMAGE_TYPES: [&str; 6] = ["Kinetic", "Explosive", "Energy", "Burn", "Heat", "Variable"];

pub const GMS_WEP_TABLE: &str = "GMS MECH WEAPONS";
const GMS_TYPES: [&str; 3] = ["Type-I", "Type-II", "Type-III"];
const GMS_T2_THERMAL: &str = "Thermal";
const EFFECT_SPLIT: &str = "---";

/// Shared descriptions for the GMS weapon table. The table preamble
/// describes the three weapon families; Type-II splits into charged
/// blades and thermal guns.
#[derive(Debug, Default, Clone)]
pub struct GmsWeaponDescs {
    pub type_i: String,
    pub charged: String,
    pub thermal: String,
    pub type_iii: String,
}

impl GmsWeaponDescs {
    /// Extracts the family descriptions from the weapon table hunk.
    pub fn from_table_hunk(hunk: &[String]) -> Self {
        let mut descs = Self::default();
        let intro = match hunk.get(1) {
            Some(line) => line.trim(),
            None => return descs,
        };
        // Checked longest marker first: "Type-III" contains "Type-I".
        for line in &hunk[1..] {
            if line.contains(GMS_TYPES[2]) {
                descs.type_iii = format!("{}<br>{}", intro, line.trim());
            } else if line.contains(GMS_TYPES[1]) {
                let line = line.trim();
                // Both descriptions start with the first sentence; the
                // rest splits at the thermal-gun marker.
                let period = line.find('.').map(|i| i + 1).unwrap_or(line.len());
                let div = line.find(GMS_T2_THERMAL).unwrap_or(line.len());
                let base = format!("{}<br>{}", intro, &line[..period]);
                descs.charged = format!("{}{}", base, &line[period..div.max(period)]);
                descs.thermal = format!("{} {}", base, &line[div.max(period)..]);
            } else if line.contains(GMS_TYPES[0]) {
                descs.type_i = format!("{}<br>{}", intro, line.trim());
            }
        }
        descs
    }

    /// Picks the family description for a GMS weapon by its name.
    pub fn for_weapon(&self, name: &str) -> String {
        let name = name.to_lowercase();
        if name.contains("charged") {
            self.charged.clone()
        } else if name.contains("thermal") {
            self.thermal.clone()
        } else if ["missile", "rocket", "launcher", "grenade"]
            .iter()
            .any(|kw| name.contains(kw))
        {
            self.type_iii.clone()
        } else {
            self.type_i.clone()
        }
    }
}

/// Parser for mech weapons.
///
/// A weapon hunk is the name, a `<Mount> <Type>[, tags]` line, a
/// bracketed stat line (`[Range 10] [2d6 Kinetic damage]`) and optional
/// description/effect text split on `---`.
#[derive(Debug, Default)]
pub struct WeaponParser;

impl WeaponParser {
    /// Whether a hunk is a weapon: some line carries a bracketed range
    /// or damage group.
    pub fn is_weapon(hunk: &[String]) -> bool {
        hunk.iter().any(|line| {
            line.contains('[')
                && line.contains(']')
                && (RANGE_TYPES.iter().any(|r| line.contains(r))
                    || DAMAGE_TYPES.iter().any(|d| line.contains(d)))
        })
    }

    pub fn parse(
        hunk: &[String],
        source: &str,
        license: Option<&LicenseTable>,
        gms: Option<&GmsWeaponDescs>,
    ) -> Result<Weapon, ParseError> {
        if hunk.len() < 3 {
            return Err(ParseError::HunkTooShort {
                entity: "weapon",
                name: hunk.first().map(|l| l.trim().to_string()).unwrap_or_default(),
                expected: 3,
                found: hunk.len(),
            });
        }
        let name = hunk[0].trim().to_string();
        let mut weapon = Weapon {
            id: gen_id(WEAPON_PREFIX, &name),
            name: name.clone(),
            source: source.to_string(),
            ..Weapon::default()
        };

        // Mount and type, with any tags after the first comma.
        let (head, tags) = match hunk[1].split_once(',') {
            Some((head, tags)) => (head, Some(tags)),
            None => (hunk[1].as_str(), None),
        };
        let mut head_words = head.split_whitespace();
        weapon.mount = head_words.next().unwrap_or_default().to_string();
        weapon.weapon_type = head_words.next().unwrap_or_default().to_string();
        if let Some(tags) = tags {
            let parsed = parse_tag_line(tags);
            weapon.sp = parsed.sp;
            weapon.tags = parsed.tags;
        }

        let stat_line = hunk
            .iter()
            .position(|line| line.contains('['))
            .ok_or_else(|| ParseError::MissingLandmark {
                entity: "weapon",
                name: name.clone(),
                landmark: "bracketed stat line",
            })?;
        let (range, damage) = Self::parse_stat_line(&name, &hunk[stat_line])?;
        weapon.range = range;
        weapon.damage = damage;

        // Remaining lines are description and effect.
        let rest = &hunk[stat_line + 1..];
        match gms {
            Some(gms) => {
                weapon.description = gms.for_weapon(&name);
                weapon.effect = join_lines_br(rest);
            }
            None => match rest.iter().position(|line| line == EFFECT_SPLIT) {
                Some(split) => {
                    weapon.description = join_lines_br(&rest[..split]);
                    weapon.effect = join_lines_br(&rest[split + 1..]);
                }
                None => weapon.effect = join_lines_br(rest),
            },
        }

        // Licensed weapons belong to the most recent frame's license.
        if let Some(table) = license {
            if let Some(level) = table.rank_of(&name) {
                weapon.license = table.frame_name.clone();
                weapon.license_level = level as u32;
            }
        }
        Ok(weapon)
    }

    /// Parses the `[...]` groups of a stat line into range and damage
    /// entries.
    fn parse_stat_line(
        name: &str,
        line: &str,
    ) -> Result<(Vec<RangeValue>, Vec<DamageValue>), ParseError> {
        let mut range = Vec::new();
        let mut damage = Vec::new();
        let mut rest = line;
        while let Some(open) = rest.find('[') {
            let Some(close) = rest[open..].find(']') else {
                break;
            };
            let group = &rest[open + 1..open + close];
            rest = &rest[open + close + 1..];

            let tokens: Vec<&str> = group.split_whitespace().collect();
            if let Some(range_type) = tokens
                .iter()
                .find_map(|t| RANGE_TYPES.iter().find(|r| *r == t))
            {
                let val = tokens
                    .iter()
                    .find_map(|t| t.parse::<u32>().ok())
                    .ok_or_else(|| ParseError::BadValue {
                        entity: "weapon",
                        name: name.to_string(),
                        value: group.to_string(),
                    })?;
                range.push(RangeValue {
                    range_type: range_type.to_string(),
                    val,
                });
            } else if let Some(damage_type) = tokens
                .iter()
                .find_map(|t| DAMAGE_TYPES.iter().find(|d| t.starts_with(*d)))
            {
                let val = tokens
                    .iter()
                    .find_map(|t| {
                        if let Ok(flat) = t.parse::<u32>() {
                            Some(DamageAmount::Flat(flat))
                        } else if is_die_roll(t) {
                            Some(DamageAmount::Roll(t.to_string()))
                        } else {
                            None
                        }
                    })
                    .ok_or_else(|| ParseError::BadValue {
                        entity: "weapon",
                        name: name.to_string(),
                        value: group.to_string(),
                    })?;
                damage.push(DamageValue {
                    damage_type: damage_type.to_lowercase(),
                    val,
                });
            }
        }
        Ok((range, damage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hunk(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_is_weapon() {
        let weapon = hunk(&["CHAIN AXE", "Main Melee", "[Threat 1] [1d6 Kinetic damage]"]);
        let system = hunk(&["TURRET DRONES", "2 SP, Unique, Drone", "Some effect."]);
        assert!(WeaponParser::is_weapon(&weapon));
        assert!(!WeaponParser::is_weapon(&system));
    }

    #[test]
    fn test_parse_weapon() {
        let hunk = hunk(&[
            "CHAIN AXE",
            "Main Melee, Loading",
            "[Threat 1] [1d6+2 Kinetic damage]",
            "A brutal boarding weapon.",
            "---",
            "On a critical hit, the target is IMPAIRED.",
        ]);
        let mut table = LicenseTable::new("BLACKBEARD");
        table.ranks[0] = vec!["chain axe".to_string()];

        let weapon = WeaponParser::parse(&hunk, "ips-n", Some(&table), None).unwrap();
        assert_eq!(weapon.id, "mw_chain_axe");
        assert_eq!(weapon.mount, "Main");
        assert_eq!(weapon.weapon_type, "Melee");
        assert_eq!(weapon.tags.len(), 1);
        assert_eq!(weapon.tags[0].id, "tg_loading");
        assert_eq!(weapon.range, vec![RangeValue { range_type: "Threat".to_string(), val: 1 }]);
        assert_eq!(
            weapon.damage,
            vec![DamageValue {
                damage_type: "kinetic".to_string(),
                val: DamageAmount::Roll("1d6+2".to_string()),
            }]
        );
        assert_eq!(weapon.description, "A brutal boarding weapon.");
        assert_eq!(weapon.effect, "On a critical hit, the target is IMPAIRED.");
        assert_eq!(weapon.license, "BLACKBEARD");
        assert_eq!(weapon.license_level, 1);
    }

    #[test]
    fn test_parse_gms_weapon_gets_table_description() {
        let table_hunk = hunk(&[
            "GMS MECH WEAPONS",
            "GMS weapons are reliable and widely available.",
            "Type-I (kinetic) weapons fire solid slugs.",
            "Type-II (energy) weapons come in two lines. Charged blades hold an arc. Thermal guns project plasma.",
            "Type-III (explosive) weapons deliver warheads.",
        ]);
        let descs = GmsWeaponDescs::from_table_hunk(&table_hunk);
        assert!(descs.type_i.ends_with("Type-I (kinetic) weapons fire solid slugs."));
        assert!(descs.type_iii.ends_with("Type-III (explosive) weapons deliver warheads."));
        assert!(descs.charged.contains("Charged blades hold an arc."));
        assert!(!descs.charged.contains("Thermal guns"));
        assert!(descs.thermal.contains("Thermal guns project plasma."));

        let weapon_hunk = hunk(&[
            "CHARGED BLADE",
            "Main Melee",
            "[Threat 1] [1d3+3 Energy damage]",
        ]);
        let weapon = WeaponParser::parse(&weapon_hunk, "gms", None, Some(&descs)).unwrap();
        assert_eq!(weapon.description, descs.charged);
        assert_eq!(weapon.license_level, 0);
    }

    #[test]
    fn test_parse_range_and_blast() {
        let hunk = hunk(&[
            "THERMAL LANCE",
            "Heavy Cannon",
            "[Range 10] [Blast 1] [2d6 Energy damage]",
        ]);
        let weapon = WeaponParser::parse(&hunk, "gms", None, None).unwrap();
        assert_eq!(weapon.range.len(), 2);
        assert_eq!(weapon.range[1].range_type, "Blast");
        assert_eq!(weapon.damage[0].val, DamageAmount::Roll("2d6".to_string()));
    }
}
