use compendium_common::{
    Action, Background, CoreBonus, Frame, GlossaryEntry, Manufacturer, NpcClass, NpcFeature,
    NpcTemplate, PilotGear, Reserve, Skill, Status, System, Tag, Talent, Weapon, WeaponMod,
};
use crate::parsers::system::FLIGHT_TYPE;

use crate::hunk::split_non_empty;
use crate::parsers::{
    action, background, frame, glossary, npc_class, npc_template, pilot_gear, reserve, skill,
    status, system, tag, talent, weapon, ActionParser, BackgroundParser, CoreBonusParser,
    FrameParser, GlossaryParser, GmsWeaponDescs, ManufacturerParser, ModParser, NpcClassParser,
    NpcTemplateParser, PilotGearParser, ReserveParser, SkillParser, StatusParser, SystemParser,
    TagParser, TalentParser, WeaponParser,
};
use crate::section::locate;
use crate::ParseError;

/// The result of extracting one entity family: where its section was
/// found, the records, and any hunk-level warnings.
#[derive(Debug)]
pub struct Extraction<T> {
    pub start: usize,
    pub end: usize,
    pub records: Vec<T>,
    pub warnings: Vec<ParseError>,
}

/// Everything the frames section yields. Manufacturers, core bonuses
/// and licensed gear live between the frame blocks, so the whole family
/// is extracted in one walk.
#[derive(Debug)]
pub struct FrameExtraction {
    pub start: usize,
    pub end: usize,
    pub frames: Vec<Frame>,
    pub manufacturers: Vec<Manufacturer>,
    pub core_bonuses: Vec<CoreBonus>,
    pub weapons: Vec<Weapon>,
    pub mods: Vec<WeaponMod>,
    pub systems: Vec<System>,
    pub warnings: Vec<ParseError>,
}

/// An NPC section extraction: the classes or templates plus the
/// features parsed out of their feature blocks.
#[derive(Debug)]
pub struct NpcExtraction<T> {
    pub start: usize,
    pub end: usize,
    pub records: Vec<T>,
    pub features: Vec<NpcFeature>,
    pub warnings: Vec<ParseError>,
}

pub fn talents(lines: &[String]) -> Result<Extraction<Talent>, ParseError> {
    let (start, end) = locate(lines, &talent::ANCHOR)?;
    let mut records = Vec::new();
    let mut warnings = Vec::new();
    for hunk in split_non_empty(&lines[start..=end]) {
        match TalentParser::parse(hunk) {
            Ok(talent) => records.push(talent),
            Err(err) => warnings.push(err),
        }
    }
    Ok(Extraction {
        start,
        end,
        records,
        warnings,
    })
}

pub fn tags(lines: &[String]) -> Result<Extraction<Tag>, ParseError> {
    let (start, end) = locate(lines, &tag::ANCHOR)?;
    Ok(Extraction {
        start,
        end,
        records: TagParser::parse_section(&lines[start..=end]),
        warnings: Vec::new(),
    })
}

pub fn skills(lines: &[String]) -> Result<Extraction<Skill>, ParseError> {
    let (start, end) = locate(lines, &skill::ANCHOR)?;
    Ok(Extraction {
        start,
        end,
        records: SkillParser::parse_section(&lines[start..=end]),
        warnings: Vec::new(),
    })
}

pub fn pilot_gear(lines: &[String]) -> Result<Extraction<PilotGear>, ParseError> {
    let (start, end) = locate(lines, &pilot_gear::ANCHOR)?;
    let (records, warnings) = PilotGearParser::parse_section(&lines[start..=end]);
    Ok(Extraction {
        start,
        end,
        records,
        warnings,
    })
}

pub fn statuses(lines: &[String]) -> Result<Extraction<Status>, ParseError> {
    let (start, end) = locate(lines, &status::ANCHOR)?;
    Ok(Extraction {
        start,
        end,
        records: StatusParser::parse_section(&lines[start..=end]),
        warnings: Vec::new(),
    })
}

pub fn actions(lines: &[String]) -> Result<Extraction<Action>, ParseError> {
    let (start, end) = locate(lines, &action::ANCHOR)?;
    let (records, warnings) = ActionParser::parse_section(&lines[start..=end]);
    Ok(Extraction {
        start,
        end,
        records,
        warnings,
    })
}

pub fn backgrounds(lines: &[String]) -> Result<Extraction<Background>, ParseError> {
    let (start, end) = locate(lines, &background::ANCHOR)?;
    let mut records = Vec::new();
    let mut warnings = Vec::new();
    for hunk in split_non_empty(&lines[start..=end]) {
        match BackgroundParser::parse(hunk) {
            Ok(background) => records.push(background),
            Err(err) => warnings.push(err),
        }
    }
    Ok(Extraction {
        start,
        end,
        records,
        warnings,
    })
}

pub fn glossary(lines: &[String]) -> Result<Extraction<GlossaryEntry>, ParseError> {
    let (start, end) = locate(lines, &glossary::ANCHOR)?;
    Ok(Extraction {
        start,
        end,
        records: GlossaryParser::parse_section(&lines[start..=end]),
        warnings: Vec::new(),
    })
}

pub fn reserves(lines: &[String]) -> Result<Extraction<Reserve>, ParseError> {
    let (start, end) = locate(lines, &reserve::ANCHOR)?;
    Ok(Extraction {
        start,
        end,
        records: ReserveParser::parse_section(&lines[start..=end]),
        warnings: Vec::new(),
    })
}

pub fn npc_classes(lines: &[String]) -> Result<NpcExtraction<NpcClass>, ParseError> {
    let (start, end) = locate(lines, &npc_class::ANCHOR)?;
    let (records, features, warnings) = NpcClassParser::parse_section(&lines[start..=end]);
    Ok(NpcExtraction {
        start,
        end,
        records,
        features,
        warnings,
    })
}

pub fn npc_templates(lines: &[String]) -> Result<NpcExtraction<NpcTemplate>, ParseError> {
    let (start, end) = locate(lines, &npc_template::ANCHOR)?;
    let (records, features, warnings) = NpcTemplateParser::parse_section(&lines[start..=end]);
    Ok(NpcExtraction {
        start,
        end,
        records,
        features,
        warnings,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GmsSubsection {
    None,
    Systems,
    Flight,
    Weapons,
}

/// Walks the frames section. Manufacturer headers set the source for
/// everything after them; GMS table headers switch the hunk
/// classification; every other hunk is a frame, core bonus block,
/// weapon, mod or system.
pub fn frames(lines: &[String]) -> Result<FrameExtraction, ParseError> {
    let (start, end) = locate(lines, &frame::ANCHOR)?;
    let mut out = FrameExtraction {
        start,
        end,
        frames: Vec::new(),
        manufacturers: Vec::new(),
        core_bonuses: Vec::new(),
        weapons: Vec::new(),
        mods: Vec::new(),
        systems: Vec::new(),
        warnings: Vec::new(),
    };

    let mut source = "NONE".to_string();
    let mut gms = GmsSubsection::None;
    let mut gms_descs = GmsWeaponDescs::default();

    for hunk in split_non_empty(&lines[start..=end]) {
        let first = hunk[0].as_str();

        // Track which subsection we're in.
        if let Some(info) = ManufacturerParser::info_for(first) {
            source = info.logo.to_string();
            gms = GmsSubsection::None;
        } else if first == system::GMS_SYSTEMS {
            gms = GmsSubsection::Systems;
        } else if first == system::GMS_FLIGHT {
            gms = GmsSubsection::Flight;
        } else if first == weapon::GMS_WEP_TABLE {
            gms = GmsSubsection::Weapons;
            gms_descs = GmsWeaponDescs::from_table_hunk(hunk);
        }

        // Determine what kind of data this hunk is for.
        if FrameParser::is_frame(hunk) {
            match FrameParser::parse(hunk) {
                Ok(frame) => out.frames.push(frame),
                Err(err) => out.warnings.push(err),
            }
        } else if ManufacturerParser::info_for(first).is_some() {
            match ManufacturerParser::parse(hunk) {
                Ok(mfr) => out.manufacturers.push(mfr),
                Err(err) => out.warnings.push(err),
            }
        } else if CoreBonusParser::is_core_bonus(hunk) {
            let (bonuses, mut warnings) = CoreBonusParser::parse_hunk(&source, hunk);
            out.core_bonuses.extend(bonuses);
            out.warnings.append(&mut warnings);
        } else if gms == GmsSubsection::Weapons {
            // GMS weapon table entries are short; anything longer is
            // table prose.
            if (3..=4).contains(&hunk.len()) {
                match WeaponParser::parse(hunk, &source, None, Some(&gms_descs)) {
                    Ok(weapon) => out.weapons.push(weapon),
                    Err(err) => out.warnings.push(err),
                }
            }
        } else if WeaponParser::is_weapon(hunk) {
            let license = out.frames.last().map(|f| &f.license);
            match WeaponParser::parse(hunk, &source, license, None) {
                Ok(weapon) => out.weapons.push(weapon),
                Err(err) => out.warnings.push(err),
            }
        } else if ModParser::is_mod(hunk) {
            let license = out.frames.last().map(|f| &f.license);
            match ModParser::parse(hunk, &source, license) {
                Ok(weapon_mod) => out.mods.push(weapon_mod),
                Err(err) => out.warnings.push(err),
            }
        } else if gms == GmsSubsection::Systems || gms == GmsSubsection::Flight {
            if hunk.len() >= 3 && first != system::GMS_FLIGHT {
                match SystemParser::parse(hunk, &source, None) {
                    Ok(mut system) => {
                        if gms == GmsSubsection::Flight {
                            system.system_type = FLIGHT_TYPE.to_string();
                        }
                        out.systems.push(system);
                    }
                    Err(err) => out.warnings.push(err),
                }
            }
        } else {
            let license = out.frames.last().map(|f| &f.license);
            match SystemParser::parse(hunk, &source, license) {
                Ok(system) => out.systems.push(system),
                Err(err) => out.warnings.push(err),
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_talents_missing_section_is_an_error() {
        let lines = lines(&["nothing", "relevant", "here"]);
        assert!(matches!(
            talents(&lines),
            Err(ParseError::SectionNotFound { .. })
        ));
    }

    #[test]
    fn test_frames_walk_classifies_hunks() {
        let section = lines(&[
            "GENERAL MASSIVE SYSTEMS",
            "Quote line.",
            "General Massive Systems - GMS for short - is the galactic-standard supplier of mechs.",
            "",
            "GMS GENERAL MARKET SYSTEMS",
            "",
            "PERSONALIZATIONS",
            "1 SP",
            "Your mech gains +2 HP.",
            "",
            "GMS MECH WEAPONS",
            "GMS weapons are reliable and widely available.",
            "Type-I (kinetic) weapons fire solid slugs.",
            "Type-II (energy) weapons come in two lines. Charged blades hold an arc. Thermal guns project plasma.",
            "Type-III (explosive) weapons deliver warheads.",
            "",
            "ASSAULT RIFLE",
            "Main Rifle",
            "[Range 10] [1d6 Kinetic damage]",
            "",
            "IPS-NORTHSTAR",
            "Sturdy hulls, honest work.",
            "IPS-Northstar (IPS-N) was created from the ashes of two shipping giants.",
            "",
            "IPS-N",
            "BLACKBEARD",
            "Striker",
            "A close-quarters brawler.",
            "CORE STATS",
            "Size: 1",
            "HP: 8",
            "TRAITS",
            "Pursue Prey",
            "When a character in line of sight moves, the Blackbeard may move toward them.",
            "MOUNTS",
            "- Main Mount",
            "CORE SYSTEM",
            "Chain of Command",
            "Unchained Fury",
            "Active (1CP), Quick Action",
            "Melee attacks deal +2 bonus damage.",
            "License I: Chain Axe",
            "",
            // The last weapon's text carries the section end anchor, as
            // in the book.
            "CHAIN AXE",
            "Main Melee",
            "[Threat 1] [1d6 Kinetic damage]",
            "A brutal boarding weapon.",
            "Wind Stance: This weapon gains reliable 2, threat 2",
            "---",
            "Forged in the fire of a dying star and perfectly balanced",
        ]);
        // Splice the anchor start in front.
        let mut full = lines_vec_start();
        full.extend(section);

        let extraction = frames(&full).unwrap();
        assert_eq!(extraction.manufacturers.len(), 2);
        assert_eq!(extraction.manufacturers[0].logo, "gms");
        assert_eq!(extraction.manufacturers[1].logo, "ips-n");
        assert_eq!(extraction.systems.len(), 1);
        assert_eq!(extraction.systems[0].source, "gms");
        assert_eq!(extraction.weapons.len(), 2);
        assert_eq!(extraction.weapons[0].name, "ASSAULT RIFLE");
        assert!(extraction.weapons[0].description.contains("Type-I"));
        assert_eq!(extraction.frames.len(), 2);
        assert_eq!(extraction.frames[1].name, "BLACKBEARD");
        assert_eq!(extraction.weapons[1].license, "BLACKBEARD");
        assert_eq!(extraction.weapons[1].license_level, 1);
    }

    fn lines_vec_start() -> Vec<String> {
        // The frame anchor start pattern, followed by a blank line so
        // the first real hunk stands alone.
        lines(&[
            "SSC",
            "ATLAS",
            "Striker",
            "A duelist frame.",
            "CORE STATS",
            "Size: 1/2",
            "HP: 6",
            "TRAITS",
            "Slippery",
            "The Atlas gains +1 Accuracy on evasion.",
            "MOUNTS",
            "- Main Mount",
            "CORE SYSTEM",
            "Gyro-Stabilized Core",
            "Lightning Step",
            "Active (1CP), Quick Action",
            "Teleport 3 spaces.",
            "License I: Warp Rifle",
            "",
        ])
    }
}
