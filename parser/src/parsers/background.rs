use compendium_common::{gen_id, Background, BACKGROUND_PREFIX};

use crate::lines::combine_lines;
use crate::section::Anchor;
use crate::ParseError;

pub const ANCHOR: Anchor = Anchor {
    section: "backgrounds",
    start: &[
        "Celebrity",
        "Example triggers: Charm, Pull Rank,",
        "You were a figure in the public eye.",
    ],
    end: &[
        "Worker",
        "Example triggers: Word on the Street,",
        "At the end of the day, empire only functions",
    ],
};

/// Parser for pilot backgrounds: name line, example triggers line, then
/// description text whose trailing example sentence is italicized.
#[derive(Debug, Default)]
pub struct BackgroundParser;

impl BackgroundParser {
    pub fn parse(hunk: &[String]) -> Result<Background, ParseError> {
        if hunk.len() < 3 {
            return Err(ParseError::HunkTooShort {
                entity: "background",
                name: hunk.first().map(|l| l.trim().to_string()).unwrap_or_default(),
                expected: 3,
                found: hunk.len(),
            });
        }
        let name = hunk[0].trim().to_uppercase();
        let triggers = hunk[1].trim().to_string();

        let mut desc_lines = Vec::with_capacity(hunk.len() - 2);
        for line in &hunk[2..] {
            desc_lines.push(italicize_example(line.trim()));
        }

        Ok(Background {
            id: gen_id(BACKGROUND_PREFIX, &name),
            name,
            description: combine_lines(&desc_lines),
            triggers,
        })
    }
}

/// Wraps the example sentence at the end of a line in `<i>` tags. The
/// example starts after the last period (or colon, when present); lines
/// without either are wrapped whole.
fn italicize_example(line: &str) -> String {
    let split = if line.contains(':') {
        line.rfind('.').max(line.rfind(':'))
    } else {
        line.rfind('.')
    };
    // Skip the punctuation and the following space.
    let mut at = match split {
        Some(idx) => (idx + 2).min(line.len()),
        None => 0,
    };
    while at < line.len() && !line.is_char_boundary(at) {
        at += 1;
    }
    format!("{}<i>{}</i>", &line[..at], &line[at..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hunk(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_parse_background() {
        let hunk = hunk(&[
            "Celebrity",
            "Example triggers: Charm, Pull Rank, Lead or Inspire",
            "You were a figure in the public eye. Why did you leave it behind?",
        ]);
        let background = BackgroundParser::parse(&hunk).unwrap();
        assert_eq!(background.id, "pbg_celebrity");
        assert_eq!(background.name, "CELEBRITY");
        assert_eq!(
            background.triggers,
            "Example triggers: Charm, Pull Rank, Lead or Inspire"
        );
        assert_eq!(
            background.description,
            "You were a figure in the public eye. <i>Why did you leave it behind?</i>"
        );
    }

    #[test]
    fn test_line_without_period_is_wrapped_whole() {
        assert_eq!(italicize_example("no punctuation here"), "<i>no punctuation here</i>");
    }
}
