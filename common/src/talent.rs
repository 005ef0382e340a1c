use serde::{Deserialize, Serialize};

pub const TALENT_PREFIX: &str = "t_";

/// A pilot talent with three ranks.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talent {
    pub id: String,
    pub name: String,
    pub description: String,
    pub ranks: Vec<TalentRank>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentRank {
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_fields() {
        let talent = Talent {
            id: "t_ace".to_string(),
            name: "ACE".to_string(),
            description: "Every pilot brags about their abilities.".to_string(),
            ranks: vec![
                TalentRank {
                    name: "Acrobatics".to_string(),
                    description: "You gain +1 Accuracy.".to_string(),
                },
                TalentRank {
                    name: "Afterburners".to_string(),
                    description: "You can BOOST twice.".to_string(),
                },
                TalentRank {
                    name: "Supersonic".to_string(),
                    description: "Once per round, fly anywhere.".to_string(),
                },
            ],
        };
        let json = serde_json::to_string(&talent).unwrap();
        let back: Talent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, talent);
    }
}
