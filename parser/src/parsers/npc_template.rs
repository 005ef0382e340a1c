use compendium_common::{gen_id, NpcFeature, NpcTemplate, NPC_TEMPLATE_PREFIX};

use crate::hunk::split_non_empty;
use crate::lines::combine_lines;
use crate::parsers::npc_feature::{FeatureOriginKind, NpcFeatureParser};
use crate::section::Anchor;
use crate::ParseError;

pub const ANCHOR: Anchor = Anchor {
    section: "npc templates",
    start: &[
        "Commander",
        "Commanders operate on a grand scale, controlling",
        "Template Features",
    ],
    end: &[
        "Treads or Hover",
        "Trait",
        "The Vehicle ignores difficult terrain.",
    ],
};

const TEMPLATE_FEATURES: &str = "template features";
const BASE_FEATURES: &str = "Base Features";
const OPTIONAL_FEATURES: &str = "Optional Features";

/// Fixed power ratings for the named templates.
const POWER: [(&str, i64); 5] = [
    ("GRUNT", -75),
    ("VETERAN", 50),
    ("ELITE", 100),
    ("COMMANDER", 50),
    ("ULTRA", 300),
];

/// Parser for NPC templates. A template hunk carries a `Template
/// Features` marker; the hunks that follow are its features until the
/// next template starts.
#[derive(Debug, Default)]
pub struct NpcTemplateParser;

impl NpcTemplateParser {
    /// Whether a hunk opens a new template.
    pub fn is_template(hunk: &[String]) -> bool {
        hunk.iter().any(|line| line.trim().to_lowercase() == TEMPLATE_FEATURES)
    }

    pub fn parse_section(
        lines: &[String],
    ) -> (Vec<NpcTemplate>, Vec<NpcFeature>, Vec<ParseError>) {
        let mut templates: Vec<NpcTemplate> = Vec::new();
        let mut features = Vec::new();
        let mut warnings = Vec::new();
        let mut in_optional = false;
        for hunk in split_non_empty(lines) {
            if Self::is_template(hunk) {
                in_optional = false;
                match Self::parse(hunk) {
                    Ok(template) => templates.push(template),
                    Err(err) => warnings.push(err),
                }
            } else if hunk[0].trim() == BASE_FEATURES {
                in_optional = false;
            } else if hunk[0].trim() == OPTIONAL_FEATURES {
                in_optional = true;
            } else if let Some(template) = templates.last_mut() {
                match NpcFeatureParser::parse(
                    hunk,
                    FeatureOriginKind::Template,
                    &template.name,
                    !in_optional,
                ) {
                    Ok(feature) => {
                        if in_optional {
                            template.optional_features.push(feature.id.clone());
                        } else {
                            template.base_features.push(feature.id.clone());
                        }
                        features.push(feature);
                    }
                    Err(err) => warnings.push(err),
                }
            }
        }
        (templates, features, warnings)
    }

    pub fn parse(hunk: &[String]) -> Result<NpcTemplate, ParseError> {
        let first = hunk.first().ok_or(ParseError::EmptyHunk {
            entity: "npc template",
        })?;
        let mut template = NpcTemplate {
            name: first.trim().to_uppercase(),
            ..NpcTemplate::default()
        };
        template.id = gen_id(NPC_TEMPLATE_PREFIX, &template.name);

        let marker = hunk
            .iter()
            .position(|line| line.trim().to_lowercase() == TEMPLATE_FEATURES)
            .ok_or_else(|| ParseError::MissingLandmark {
                entity: "npc template",
                name: template.name.clone(),
                landmark: "Template Features",
            })?;
        template.description = combine_lines(&hunk[1..marker]);

        if let Some((_, power)) = POWER.iter().find(|(name, _)| *name == template.name) {
            template.power = *power;
        }
        Ok(template)
    }
}
