use compendium_common::{
    gen_id, CoreSystem, Frame, FrameStats, IntegratedRef, LicenseTable, StatValue, FRAME_PREFIX,
    WEAPON_PREFIX,
};

use crate::lines::{combine_flavor_lines, combine_lines, title_case};
use crate::section::Anchor;
use crate::tagline::parse_tag_line;
use crate::ParseError;

pub const ANCHOR: Anchor = Anchor {
    section: "frames",
    start: &["SSC", "ATLAS", "Striker"],
    end: &[
        "Wind Stance: This weapon gains reliable 2, threat 2",
        "---",
        "Forged in the fire of a dying star and perfectly balanced",
    ],
};

const LICENSE: [&str; 4] = ["License", "License I: ", "License II: ", "License III: "];
const CORE_STATS: &str = "CORE STATS";
const TRAITS: &str = "TRAITS";
const MOUNTS: &str = "MOUNTS";
const CORE: &str = "CORE SYSTEM";
const CORE_ACTIVE: &str = "Active (1CP)";
const INTEGRATED: &str = "Integrated Mount: ";
const PASSIVE_SPLIT: &str = "---";

/// Parser for mech frames.
///
/// A frame hunk runs from the manufacturer line to the end of the
/// license table and must be continuous: source, name, optional one-word
/// role, description, CORE STATS, TRAITS, MOUNTS, CORE SYSTEM, license
/// rows.
#[derive(Debug, Default)]
pub struct FrameParser;

impl FrameParser {
    /// Whether a hunk is a frame block.
    pub fn is_frame(hunk: &[String]) -> bool {
        hunk.iter().any(|line| line == CORE_STATS)
    }

    pub fn parse(hunk: &[String]) -> Result<Frame, ParseError> {
        if hunk.len() < 3 {
            return Err(ParseError::HunkTooShort {
                entity: "frame",
                name: hunk.first().cloned().unwrap_or_default(),
                expected: 3,
                found: hunk.len(),
            });
        }
        let mut frame = Frame {
            source: hunk[0].trim().to_uppercase(),
            name: hunk[1].trim().to_uppercase(),
            ..Frame::default()
        };
        frame.id = gen_id(FRAME_PREFIX, &frame.name);

        // If the line after the name is a single word, it is the role and
        // the description starts one line later.
        let desc = if hunk[2].split(' ').count() == 1 { 3 } else { 2 };

        // Find the start of each subsection.
        let mut lic = 0;
        let mut stats = 0;
        let mut traits = 0;
        let mut mounts = 0;
        let mut core = 0;
        for (i, line) in hunk.iter().enumerate() {
            if lic == 0 && line.starts_with(LICENSE[0]) {
                lic = i;
            } else if stats == 0 && line == CORE_STATS {
                stats = i;
            } else if traits == 0 && line == TRAITS {
                traits = i;
            } else if mounts == 0 && line == MOUNTS {
                mounts = i;
            } else if core == 0 && line == CORE {
                core = i;
            }
        }
        for (landmark, found) in [
            (CORE_STATS, stats),
            (TRAITS, traits),
            (MOUNTS, mounts),
            (CORE, core),
        ] {
            if found == 0 {
                return Err(ParseError::MissingLandmark {
                    entity: "frame",
                    name: frame.name.clone(),
                    landmark,
                });
            }
        }

        // A frame with no role line is "Balanced".
        if desc == 2 {
            frame.mechtype.push("Balanced".to_string());
        } else {
            for role in hunk[2].split('/') {
                frame.mechtype.push(role.trim().to_string());
            }
        }

        frame.description = combine_flavor_lines(&hunk[desc..stats]);
        frame.stats = Self::parse_stats(&frame.name, &hunk[stats + 1..traits])?;

        // Traits are name/description line pairs.
        for pair in hunk[traits + 1..mounts].chunks_exact(2) {
            frame.traits.push(compendium_common::FrameTrait {
                name: pair[0].trim().to_string(),
                description: pair[1].trim().to_string(),
            });
        }

        for mount in &hunk[mounts + 1..core] {
            let mount = mount.trim().replace("- ", "");
            let mount = match mount.to_lowercase().find(" mount") {
                Some(end) => title_case(&mount[..end]),
                None => title_case(&mount),
            };
            if mount == "Flexible" {
                frame.mounts.push("Flex".to_string());
            } else {
                frame.mounts.push(mount);
            }
        }

        let core_lines = if lic != 0 {
            &hunk[core + 1..lic]
        } else {
            &hunk[core + 1..]
        };
        frame.core_system = Self::parse_core_system(&frame.name, core_lines)?;

        if lic != 0 {
            frame.license = Self::parse_license_table(&frame.name, &hunk[lic..]);
        }
        Ok(frame)
    }

    fn parse_stats(name: &str, lines: &[String]) -> Result<FrameStats, ParseError> {
        let mut stats = FrameStats::default();
        for line in lines {
            let (key, val) = line.split_once(':').ok_or_else(|| ParseError::BadValue {
                entity: "frame",
                name: name.to_string(),
                value: line.clone(),
            })?;
            let value = StatValue::parse(val).ok_or_else(|| ParseError::BadValue {
                entity: "frame",
                name: name.to_string(),
                value: val.trim().to_string(),
            })?;
            let slot = match key.trim().to_lowercase().as_str() {
                "size" => {
                    stats.size = value;
                    continue;
                }
                "armor" => &mut stats.armor,
                "hp" => &mut stats.hp,
                "evasion" => &mut stats.evasion,
                "e-defense" => &mut stats.edef,
                "heat cap" => &mut stats.heatcap,
                "repair cap" => &mut stats.repcap,
                "sensors" => &mut stats.sensor_range,
                "tech attack" => &mut stats.tech_attack,
                "save target" => &mut stats.save,
                "speed" => &mut stats.speed,
                "system points" | "sp" => &mut stats.sp,
                other => {
                    return Err(ParseError::UnknownStat {
                        entity: "frame",
                        name: name.to_string(),
                        stat: other.to_string(),
                    })
                }
            };
            match value {
                StatValue::Whole(n) => *slot = n,
                StatValue::Half => {
                    return Err(ParseError::BadValue {
                        entity: "frame",
                        name: name.to_string(),
                        value: "1/2".to_string(),
                    })
                }
            }
        }
        Ok(stats)
    }

    fn parse_core_system(name: &str, lines: &[String]) -> Result<CoreSystem, ParseError> {
        let mut core = CoreSystem::default();
        if lines.is_empty() {
            return Err(ParseError::EmptyHunk { entity: "core system" });
        }

        let mut act_start = None;
        let mut pass_start = None;
        let mut integrated_start = None;
        for (i, line) in lines.iter().enumerate() {
            if line.starts_with(CORE_ACTIVE) && i > 0 {
                act_start = Some(i - 1);
            }
            if line == PASSIVE_SPLIT {
                pass_start = Some(i + 1);
            }
            if line.starts_with(INTEGRATED) {
                integrated_start = Some(i);
            }
        }
        let act_start = act_start.ok_or(ParseError::MissingLandmark {
            entity: "frame",
            name: name.to_string(),
            landmark: CORE_ACTIVE,
        })?;

        // First line is always the core system's name.
        core.name = lines[0].trim().to_string();

        // If the next line isn't already a passive/active name, the core
        // system opens with a description.
        if pass_start != Some(1) && act_start != 1 {
            let desc_end = match (pass_start, integrated_start) {
                (Some(pass), _) => pass - 1,
                (None, Some(integrated)) => integrated,
                (None, None) => act_start,
            };
            core.description = combine_lines(&lines[1..desc_end.max(1)]);
        }

        if let Some(pass) = pass_start {
            if pass < act_start {
                let pass_sec = &lines[pass..act_start];
                core.passive_name = Some(pass_sec[0].trim().to_string());
                core.passive_effect = Some(combine_lines(&pass_sec[1..]));
            }
        }

        if integrated_start.is_some() {
            core.integrated = Some(IntegratedRef {
                id: format!("{}_integrated", gen_id(WEAPON_PREFIX, name)),
            });
        }

        let act_sec = &lines[act_start..];
        core.active_name = act_sec[0].trim().to_string();
        if act_sec.len() > 1 {
            // Line after the active name carries its tags.
            core.tags = parse_tag_line(act_sec[1].trim()).tags;
        }
        if act_sec.len() > 2 {
            core.active_effect = combine_lines(&act_sec[2..]);
        }
        Ok(core)
    }

    fn parse_license_table(name: &str, lines: &[String]) -> LicenseTable {
        let mut table = LicenseTable::new(name);
        for line in lines {
            for (rank, prefix) in LICENSE[1..].iter().enumerate() {
                if let Some(rest) = line.strip_prefix(prefix) {
                    table.ranks[rank] = rest
                        .split(',')
                        .map(|gear| gear.trim().to_lowercase())
                        .collect();
                }
            }
        }
        table
    }
}
