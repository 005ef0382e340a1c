use compendium_common::{gen_id, NpcFeature, NpcFeatureOrigin, NPC_FEATURE_PREFIX};

use crate::lines::combine_lines;
use crate::ParseError;

/// Recognized feature kind lines. A hunk without one is a trait.
const KINDS: [&str; 5] = ["Trait", "System", "Weapon", "Tech", "Reaction"];

/// Whether a feature came from a class or a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureOriginKind {
    Class,
    Template,
}

impl FeatureOriginKind {
    fn as_str(self) -> &'static str {
        match self {
            FeatureOriginKind::Class => "Class",
            FeatureOriginKind::Template => "Template",
        }
    }
}

/// Parser for NPC features: the name line, an optional kind line
/// (`Trait`, `System`, ...), and effect text. The origin records which
/// class or template the feature belongs to.
#[derive(Debug, Default)]
pub struct NpcFeatureParser;

impl NpcFeatureParser {
    pub fn parse(
        hunk: &[String],
        origin: FeatureOriginKind,
        origin_name: &str,
        base: bool,
    ) -> Result<NpcFeature, ParseError> {
        if hunk.len() < 2 {
            return Err(ParseError::HunkTooShort {
                entity: "npc feature",
                name: hunk.first().map(|l| l.trim().to_string()).unwrap_or_default(),
                expected: 2,
                found: hunk.len(),
            });
        }
        let name = hunk[0].trim().to_string();
        let kind_line = hunk[1].trim();
        let (feature_type, effect_start) = match KINDS.iter().find(|k| kind_line == **k) {
            Some(kind) => (kind.to_string(), 2),
            None => ("Trait".to_string(), 1),
        };
        Ok(NpcFeature {
            id: gen_id(NPC_FEATURE_PREFIX, &name),
            name,
            origin: NpcFeatureOrigin {
                origin_type: origin.as_str().to_string(),
                name: origin_name.to_string(),
                base,
            },
            feature_type,
            effect: combine_lines(&hunk[effect_start..]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hunk(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_parse_feature_with_kind_line() {
        let feature = NpcFeatureParser::parse(
            &hunk(&["Afterburners", "Trait", "The Ace gains +2 Evasion."]),
            FeatureOriginKind::Class,
            "ACE",
            true,
        )
        .unwrap();
        assert_eq!(feature.id, "npcf_afterburners");
        assert_eq!(feature.feature_type, "Trait");
        assert_eq!(feature.origin.origin_type, "Class");
        assert_eq!(feature.origin.name, "ACE");
        assert!(feature.origin.base);
        assert_eq!(feature.effect, "The Ace gains +2 Evasion.");
    }

    #[test]
    fn test_parse_feature_without_kind_line() {
        let feature = NpcFeatureParser::parse(
            &hunk(&["Hunker Down", "The Commander digs in and gains cover."]),
            FeatureOriginKind::Template,
            "COMMANDER",
            false,
        )
        .unwrap();
        assert_eq!(feature.feature_type, "Trait");
        assert_eq!(feature.origin.origin_type, "Template");
        assert_eq!(feature.effect, "The Commander digs in and gains cover.");
    }
}
