use compendium_common::{gen_id, LicenseTable, System, SYSTEM_PREFIX};

use crate::lines::join_lines_br;
use crate::tagline::parse_tag_line;
use crate::ParseError;

pub const GMS_SYSTEMS: &str = "GMS GENERAL MARKET SYSTEMS";
pub const GMS_FLIGHT: &str = "GMS FLIGHT SYSTEMS";
pub const FLIGHT_TYPE: &str = "Flight System";

const EFFECT_SPLIT: &str = "---";

/// Parser for mech systems: name, tag/SP line, then effect text. A
/// `---` line separates an optional description from the effect;
/// systems without the separator have no description.
#[derive(Debug, Default)]
pub struct SystemParser;

impl SystemParser {
    pub fn parse(
        hunk: &[String],
        source: &str,
        license: Option<&LicenseTable>,
    ) -> Result<System, ParseError> {
        if hunk.len() < 2 {
            return Err(ParseError::HunkTooShort {
                entity: "system",
                name: hunk.first().map(|l| l.trim().to_string()).unwrap_or_default(),
                expected: 2,
                found: hunk.len(),
            });
        }
        let name = hunk[0].trim().to_string();
        let mut system = System {
            id: gen_id(SYSTEM_PREFIX, &name),
            name: name.clone(),
            source: source.to_string(),
            ..System::default()
        };

        let tags = parse_tag_line(&hunk[1]);
        system.sp = tags.sp;
        system.tags = tags.tags;

        let rest = &hunk[2..];
        match rest.iter().position(|line| line == EFFECT_SPLIT) {
            Some(split) => {
                system.description = join_lines_br(&rest[..split]);
                system.effect = join_lines_br(&rest[split + 1..]);
            }
            None => system.effect = join_lines_br(rest),
        }

        if let Some(table) = license {
            if let Some(level) = table.rank_of(&name) {
                system.license = table.frame_name.clone();
                system.license_level = level as u32;
            }
        }
        Ok(system)
    }
}
