use compendium_common::{gen_id, Manufacturer, MANUFACTURER_PREFIX};

use crate::ParseError;

/// A known manufacturer: its title line, the prefix of the first
/// description line, and the logo key downstream renderers use.
#[derive(Debug, Clone, Copy)]
pub struct ManufacturerInfo {
    pub title: &'static str,
    pub desc_start: &'static str,
    pub logo: &'static str,
}

pub const MANUFACTURERS: [ManufacturerInfo; 5] = [
    ManufacturerInfo {
        title: "GENERAL MASSIVE SYSTEMS",
        desc_start: "General Massive Systems - GMS for short - is the galactic-standard supplier",
        logo: "gms",
    },
    ManufacturerInfo {
        title: "IPS-NORTHSTAR",
        desc_start: "IPS-Northstar (IPS-N) was created ",
        logo: "ips-n",
    },
    ManufacturerInfo {
        title: "SMITH-SHIMANO CORPRO",
        desc_start: "Smith-Shimano Corpro (SSC) is the second-oldest ",
        logo: "ssc",
    },
    ManufacturerInfo {
        title: "HORUS",
        desc_start: "HORUS is an oddity among the various pan-galactic",
        logo: "horus",
    },
    ManufacturerInfo {
        title: "HARRISON ARMORY",
        desc_start: "Harrison Armory enjoys a galaxy-wide reputation for the quality",
        logo: "ha",
    },
];

/// Parser for manufacturer entries: the title line, an italicized
/// quote, and description paragraphs.
#[derive(Debug, Default)]
pub struct ManufacturerParser;

impl ManufacturerParser {
    /// The manufacturer a title line belongs to, if any.
    pub fn info_for(line: &str) -> Option<&'static ManufacturerInfo> {
        MANUFACTURERS.iter().find(|m| line == m.title)
    }

    pub fn parse(hunk: &[String]) -> Result<Manufacturer, ParseError> {
        let first = hunk.first().ok_or(ParseError::EmptyHunk {
            entity: "manufacturer",
        })?;
        let info = Self::info_for(first).ok_or_else(|| ParseError::MissingLandmark {
            entity: "manufacturer",
            name: first.trim().to_string(),
            landmark: "known manufacturer title",
        })?;
        let name = first.trim().to_string();

        // Everything between the title and the first description line is
        // the quote.
        let desc = hunk
            .iter()
            .position(|line| line.starts_with(info.desc_start))
            .ok_or_else(|| ParseError::MissingLandmark {
                entity: "manufacturer",
                name: name.clone(),
                landmark: "description start",
            })?;

        let mut quote = String::from("<i>");
        for (i, line) in hunk[1..desc].iter().enumerate() {
            if i > 0 {
                quote.push_str("<br>");
            }
            quote.push_str(line.trim());
        }
        quote.push_str("</i>");

        let mut description = String::new();
        for line in &hunk[desc..] {
            if !description.is_empty() {
                description.push_str("<br><br>");
            }
            description.push_str(line.trim());
        }

        Ok(Manufacturer {
            id: gen_id(MANUFACTURER_PREFIX, &name),
            name,
            logo: info.logo.to_string(),
            color: String::new(),
            quote,
            description,
        })
    }
}
