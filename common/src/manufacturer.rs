use serde::{Deserialize, Serialize};

pub const MANUFACTURER_PREFIX: &str = "mfr_";

/// A manufacturer entry: quote, description and the logo key used by
/// downstream renderers.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub color: String,
    pub quote: String,
    pub description: String,
}
