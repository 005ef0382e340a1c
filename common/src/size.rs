use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A stat value that is either a whole number or one half.
///
/// The rulebook writes half sizes as `1/2`; the JSON output carries them
/// as `0.5` while whole values stay integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatValue {
    Half,
    Whole(i64),
}

impl Default for StatValue {
    fn default() -> Self {
        StatValue::Whole(0)
    }
}

impl StatValue {
    /// Parses a stat token. `1/2` maps to `Half`, anything else must be
    /// an integer.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if token == "1/2" {
            return Some(StatValue::Half);
        }
        token.parse::<i64>().ok().map(StatValue::Whole)
    }
}

impl Serialize for StatValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StatValue::Half => serializer.serialize_f64(0.5),
            StatValue::Whole(n) => serializer.serialize_i64(*n),
        }
    }
}

struct StatValueVisitor;

impl Visitor<'_> for StatValueVisitor {
    type Value = StatValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer or 0.5")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<StatValue, E> {
        Ok(StatValue::Whole(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<StatValue, E> {
        Ok(StatValue::Whole(v as i64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<StatValue, E> {
        if v == 0.5 {
            Ok(StatValue::Half)
        } else if v.fract() == 0.0 {
            Ok(StatValue::Whole(v as i64))
        } else {
            Err(E::custom(format!("unexpected stat value {}", v)))
        }
    }
}

impl<'de> Deserialize<'de> for StatValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(StatValueVisitor)
    }
}
