use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::TagRef;

pub const WEAPON_PREFIX: &str = "mw_";

/// A mech weapon record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub id: String,
    pub name: String,
    pub mount: String,
    #[serde(rename = "type")]
    pub weapon_type: String,
    pub damage: Vec<DamageValue>,
    pub range: Vec<RangeValue>,
    pub tags: Vec<TagRef>,
    pub sp: u32,
    pub source: String,
    pub license: String,
    pub license_level: u32,
    pub effect: String,
    pub description: String,
    pub data_type: String,
    pub aptitude: String,
}

impl Default for Weapon {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            mount: String::new(),
            weapon_type: String::new(),
            damage: Vec::new(),
            range: Vec::new(),
            tags: Vec::new(),
            sp: 0,
            source: String::new(),
            license: String::new(),
            license_level: 0,
            effect: String::new(),
            description: String::new(),
            data_type: "weapon".to_string(),
            aptitude: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeValue {
    #[serde(rename = "type")]
    pub range_type: String,
    pub val: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageValue {
    #[serde(rename = "type")]
    pub damage_type: String,
    pub val: DamageAmount,
}

/// A damage amount: either a flat number or a die roll kept verbatim
/// (`"1d6+2"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DamageAmount {
    Flat(u32),
    Roll(String),
}

impl Serialize for DamageAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DamageAmount::Flat(n) => serializer.serialize_u32(*n),
            DamageAmount::Roll(s) => serializer.serialize_str(s),
        }
    }
}

struct DamageAmountVisitor;

impl Visitor<'_> for DamageAmountVisitor {
    type Value = DamageAmount;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number or a die roll string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<DamageAmount, E> {
        Ok(DamageAmount::Flat(v as u32))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<DamageAmount, E> {
        Ok(DamageAmount::Flat(v as u32))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<DamageAmount, E> {
        Ok(DamageAmount::Roll(v.to_string()))
    }
}

impl<'de> Deserialize<'de> for DamageAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DamageAmountVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_field_renamed() {
        let weapon = Weapon {
            id: "mw_chain_axe".to_string(),
            name: "CHAIN AXE".to_string(),
            mount: "Main".to_string(),
            weapon_type: "Melee".to_string(),
            ..Weapon::default()
        };
        let json = serde_json::to_value(&weapon).unwrap();
        assert_eq!(json["type"], "Melee");
        assert_eq!(json["data_type"], "weapon");
    }

    #[test]
    fn test_damage_amount_round_trip() {
        let damage = vec![
            DamageValue {
                damage_type: "kinetic".to_string(),
                val: DamageAmount::Flat(3),
            },
            DamageValue {
                damage_type: "explosive".to_string(),
                val: DamageAmount::Roll("1d6+2".to_string()),
            },
        ];
        let json = serde_json::to_string(&damage).unwrap();
        assert!(json.contains("\"val\":3"));
        assert!(json.contains("\"val\":\"1d6+2\""));
        let back: Vec<DamageValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, damage);
    }
}
