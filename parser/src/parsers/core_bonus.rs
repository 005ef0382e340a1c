use compendium_common::{gen_id, CoreBonus, CORE_BONUS_PREFIX};

use crate::lines::is_all_caps;
use crate::ParseError;

pub const CORE_BONUSES: &str = "CORE BONUSES";

/// Parser for manufacturer core bonuses. A core bonus hunk opens with a
/// `CORE BONUSES` header; each bonus inside is named by an all-caps line
/// followed by a description line and an effect line.
#[derive(Debug, Default)]
pub struct CoreBonusParser;

impl CoreBonusParser {
    /// Whether a hunk is a core bonus block.
    pub fn is_core_bonus(hunk: &[String]) -> bool {
        hunk.first().map_or(false, |line| line.contains(CORE_BONUSES))
    }

    pub fn parse_hunk(
        source: &str,
        hunk: &[String],
    ) -> (Vec<CoreBonus>, Vec<ParseError>) {
        let mut bonuses = Vec::new();
        let mut warnings = Vec::new();
        let text = &hunk[1..];

        // Find the all-caps name lines and split the text into one block
        // per bonus.
        let cap_lines: Vec<usize> = text
            .iter()
            .enumerate()
            .filter(|(_, line)| is_all_caps(line))
            .map(|(i, _)| i)
            .collect();
        for (n, &start) in cap_lines.iter().enumerate() {
            let end = cap_lines.get(n + 1).copied().unwrap_or(text.len());
            let block = &text[start..end];
            if block.len() < 3 {
                warnings.push(ParseError::HunkTooShort {
                    entity: "core bonus",
                    name: block.first().map(|l| l.trim().to_string()).unwrap_or_default(),
                    expected: 3,
                    found: block.len(),
                });
                continue;
            }
            let name = block[0].trim().to_string();
            bonuses.push(CoreBonus {
                id: gen_id(CORE_BONUS_PREFIX, &name),
                name,
                source: source.to_string(),
                description: block[1].trim().to_string(),
                effect: block[2].trim().to_string(),
            });
        }
        (bonuses, warnings)
    }
}
