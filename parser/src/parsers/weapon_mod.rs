use compendium_common::{gen_id, LicenseTable, WeaponMod, MOD_PREFIX};

use crate::lines::join_lines_br;
use crate::tagline::parse_tag_line;
use crate::ParseError;

const MOD_MARKER: &str = "Mod";
const EFFECT_SPLIT: &str = "---";

/// Parser for weapon mods.
///
/// A mod hunk is the name, a `<N> SP, <Types> Mod[, tags]` line naming
/// the weapon types the mod applies to, and effect text with an
/// optional `---` description split.
#[derive(Debug, Default)]
pub struct ModParser;

impl ModParser {
    /// Whether a hunk is a weapon mod: the second line carries the
    /// `Mod` marker.
    pub fn is_mod(hunk: &[String]) -> bool {
        hunk.len() >= 2 && hunk[1].contains(MOD_MARKER)
    }

    pub fn parse(
        hunk: &[String],
        source: &str,
        license: Option<&LicenseTable>,
    ) -> Result<WeaponMod, ParseError> {
        if hunk.len() < 3 {
            return Err(ParseError::HunkTooShort {
                entity: "mod",
                name: hunk.first().map(|l| l.trim().to_string()).unwrap_or_default(),
                expected: 3,
                found: hunk.len(),
            });
        }
        let name = hunk[0].trim().to_string();
        let mut weapon_mod = WeaponMod {
            id: gen_id(MOD_PREFIX, &name),
            name: name.clone(),
            source: source.to_string(),
            ..WeaponMod::default()
        };

        // The cost line: "2 SP, Melee Mod, Unique". The segment ending in
        // "Mod" lists the applicable weapon types; everything after it is
        // plain tags.
        let mut tag_segments = Vec::new();
        for segment in hunk[1].split(',') {
            let segment = segment.trim();
            if let Some(types) = segment.strip_suffix(MOD_MARKER) {
                for applied in types.split('/') {
                    let applied = applied.trim();
                    if !applied.is_empty() {
                        weapon_mod.applied_to.push(applied.to_string());
                    }
                }
            } else {
                tag_segments.push(segment);
            }
        }
        let parsed = parse_tag_line(&tag_segments.join(", "));
        weapon_mod.sp = parsed.sp;
        weapon_mod.tags = parsed.tags;

        let rest = &hunk[2..];
        match rest.iter().position(|line| line == EFFECT_SPLIT) {
            Some(split) => {
                weapon_mod.description = join_lines_br(&rest[..split]);
                weapon_mod.effect = join_lines_br(&rest[split + 1..]);
            }
            None => weapon_mod.effect = join_lines_br(rest),
        }

        if let Some(table) = license {
            if let Some(level) = table.rank_of(&name) {
                weapon_mod.license = table.frame_name.clone();
                weapon_mod.license_level = level as u32;
            }
        }
        Ok(weapon_mod)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hunk(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_is_mod() {
        assert!(ModParser::is_mod(&hunk(&["STABILIZER", "2 SP, Ranged Mod"])));
        assert!(!ModParser::is_mod(&hunk(&["TURRET", "2 SP, Unique"])));
    }

    #[test]
    fn test_parse_mod() {
        let hunk = hunk(&[
            "THERMAL CHARGE",
            "2 SP, CQB/Rifle Mod, Unique",
            "A clamp-on accelerant feed.",
            "---",
            "The weapon gains +2 bonus damage on its first attack each scene.",
        ]);
        let mut table = LicenseTable::new("TORTUGA");
        table.ranks[2] = vec!["thermal charge".to_string()];

        let weapon_mod = ModParser::parse(&hunk, "ips-n", Some(&table)).unwrap();
        assert_eq!(weapon_mod.id, "wm_thermal_charge");
        assert_eq!(weapon_mod.sp, 2);
        assert_eq!(weapon_mod.applied_to, vec!["CQB", "Rifle"]);
        assert_eq!(weapon_mod.tags.len(), 1);
        assert_eq!(weapon_mod.tags[0].id, "tg_unique");
        assert_eq!(weapon_mod.description, "A clamp-on accelerant feed.");
        assert_eq!(weapon_mod.license, "TORTUGA");
        assert_eq!(weapon_mod.license_level, 3);
    }
}
