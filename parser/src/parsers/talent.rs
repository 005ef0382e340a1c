use compendium_common::{gen_id, Talent, TalentRank, TALENT_PREFIX};

use crate::lines::combine_lines;
use crate::section::Anchor;
use crate::ParseError;

pub const ANCHOR: Anchor = Anchor {
    section: "talents",
    start: &[
        "ACE",
        "Every pilot brags about their abilities; ",
        "Whether you're a talented rookie",
    ],
    end: &[
        "- SABOT (2 charges): The attack ",
        "EFFICIENCY (RANK III): If you perform ",
        "",
    ],
};

const RANKS: [&str; 3] = [" (RANK I): ", " (RANK II): ", " (RANK III): "];

/// Parser for pilot talents. A talent hunk is the talent name, a short
/// description, and three rank lines carrying ` (RANK N): ` markers.
#[derive(Debug, Default)]
pub struct TalentParser;

impl TalentParser {
    pub fn parse(hunk: &[String]) -> Result<Talent, ParseError> {
        // Name is the first non-empty line.
        let name_line = hunk
            .iter()
            .position(|line| !line.trim().is_empty())
            .ok_or(ParseError::EmptyHunk { entity: "talent" })?;
        let name = hunk[name_line].trim().to_string();

        let mut rank_start: [Option<usize>; 3] = [None; 3];
        for (i, line) in hunk.iter().enumerate().skip(name_line + 1) {
            for (rank, marker) in RANKS.iter().enumerate() {
                if line.contains(marker) {
                    rank_start[rank] = Some(i);
                }
            }
        }
        let rank_start = [
            rank_start[0].ok_or(Self::missing(&name, RANKS[0]))?,
            rank_start[1].ok_or(Self::missing(&name, RANKS[1]))?,
            rank_start[2].ok_or(Self::missing(&name, RANKS[2]))?,
        ];

        // Description runs from the line after the name to rank I.
        let description = combine_lines(&hunk[name_line + 1..rank_start[0]]);

        let mut ranks = Vec::with_capacity(RANKS.len());
        for (i, marker) in RANKS.iter().enumerate() {
            let line = hunk[rank_start[i]].trim();
            let name_end = line.find(marker).unwrap_or(0);
            let mut rank_desc = line[name_end + marker.len()..].trim().to_string();
            // Later lines belong to this rank until the next one starts.
            let next_rank = if i < RANKS.len() - 1 {
                rank_start[i + 1]
            } else {
                hunk.len()
            };
            for line in &hunk[rank_start[i] + 1..next_rank] {
                // Bulleted points go on their own line.
                if line.starts_with("- ") {
                    rank_desc.push_str("<br>");
                } else {
                    rank_desc.push(' ');
                }
                rank_desc.push_str(line.trim());
            }
            ranks.push(TalentRank {
                name: line[..name_end].trim().to_string(),
                description: rank_desc,
            });
        }

        Ok(Talent {
            id: gen_id(TALENT_PREFIX, &name),
            name,
            description,
            ranks,
        })
    }

    fn missing(name: &str, landmark: &'static str) -> ParseError {
        ParseError::MissingLandmark {
            entity: "talent",
            name: name.to_string(),
            landmark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hunk(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_parse_talent() {
        let hunk = hunk(&[
            "ACE",
            "Every pilot brags about their abilities, but you have",
            "the skills to back it up.",
            "ACROBATICS (RANK I): While flying, you gain +1 Accuracy.",
            "AFTERBURNERS (RANK II): You may BOOST twice in a row.",
            "- While doing so you take 2 heat.",
            "SUPERSONIC (RANK III): Once per round, you may fly",
            "anywhere within your speed.",
        ]);

        let talent = TalentParser::parse(&hunk).unwrap();
        assert_eq!(talent.id, "t_ace");
        assert_eq!(talent.name, "ACE");
        assert_eq!(
            talent.description,
            "Every pilot brags about their abilities, but you have the skills to back it up."
        );
        assert_eq!(talent.ranks.len(), 3);
        assert_eq!(talent.ranks[0].name, "ACROBATICS");
        assert_eq!(talent.ranks[0].description, "While flying, you gain +1 Accuracy.");
        assert_eq!(
            talent.ranks[1].description,
            "You may BOOST twice in a row.<br>- While doing so you take 2 heat."
        );
        assert_eq!(talent.ranks[2].name, "SUPERSONIC");
        assert_eq!(
            talent.ranks[2].description,
            "Once per round, you may fly anywhere within your speed."
        );
    }

    #[test]
    fn test_empty_hunk() {
        assert_eq!(
            TalentParser::parse(&hunk(&[""])),
            Err(ParseError::EmptyHunk { entity: "talent" })
        );
    }

    #[test]
    fn test_missing_rank_marker() {
        let hunk = hunk(&["ACE", "Description.", "ACROBATICS (RANK I): Text."]);
        assert!(matches!(
            TalentParser::parse(&hunk),
            Err(ParseError::MissingLandmark { .. })
        ));
    }
}
