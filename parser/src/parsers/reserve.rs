use compendium_common::{gen_id, Reserve, RESERVE_PREFIX};

use crate::lines::{combine_lines, is_all_caps, title_case};
use crate::section::Anchor;

pub const ANCHOR: Anchor = Anchor {
    section: "reserves",
    start: &[
        "RESOURCES",
        "1-2 Access",
        "A keycard, invite, bribes or insider",
    ],
    end: &[
        "The ability to start the mission by dropping",
        "19-20 NHP Assistant ",
        "A non-human person (NHP) \u{2013} an advanced",
    ],
};

/// Parser for downtime reserves. Reserves are listed in d20 tables: a
/// `1-2 Name` roll line followed by description lines; all-caps headers
/// (`RESOURCES`, ...) set the reserve type for the entries below them.
#[derive(Debug, Default)]
pub struct ReserveParser;

impl ReserveParser {
    pub fn parse_section(lines: &[String]) -> Vec<Reserve> {
        let mut reserves = Vec::new();
        let mut reserve_type = String::new();

        // Collect the entry boundaries first: roll lines and headers.
        let mut i = 0;
        while i < lines.len() {
            let line = lines[i].trim();
            if is_all_caps(line) && !line.is_empty() {
                reserve_type = title_case(line.split_whitespace().next().unwrap_or_default());
                i += 1;
                continue;
            }
            if let Some(name) = Self::roll_line_name(line) {
                let label = line.split_whitespace().next().unwrap_or_default().to_string();
                // Description runs to the next roll line or header.
                let mut end = i + 1;
                while end < lines.len()
                    && Self::roll_line_name(lines[end].trim()).is_none()
                    && !is_all_caps(&lines[end])
                {
                    end += 1;
                }
                reserves.push(Reserve {
                    id: gen_id(RESERVE_PREFIX, &name),
                    name,
                    reserve_type: reserve_type.clone(),
                    label,
                    description: combine_lines(&lines[i + 1..end]),
                });
                i = end;
                continue;
            }
            i += 1;
        }
        reserves
    }

    /// The reserve name on a `1-2 Name` roll line, if the line is one.
    fn roll_line_name(line: &str) -> Option<String> {
        let (roll, name) = line.split_once(' ')?;
        let is_roll = roll
            .split('-')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()));
        if !is_roll || name.trim().is_empty() {
            return None;
        }
        Some(name.trim().to_string())
    }
}
