/// A frame's license table: which gear unlocks at which license rank.
///
/// Rank rows hold lowercased gear names exactly as the license table in
/// the rulebook lists them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LicenseTable {
    pub frame_name: String,
    pub ranks: [Vec<String>; 3],
}

impl LicenseTable {
    pub fn new(frame_name: impl Into<String>) -> Self {
        Self {
            frame_name: frame_name.into(),
            ranks: Default::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.iter().all(|r| r.is_empty())
    }

    /// Looks up the 1-based license rank a piece of gear belongs to.
    /// Names are compared lowercased.
    pub fn rank_of(&self, name: &str) -> Option<usize> {
        let name = name.trim().to_lowercase();
        self.ranks
            .iter()
            .position(|rank| rank.iter().any(|gear| *gear == name))
            .map(|idx| idx + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_of() {
        let mut table = LicenseTable::new("BLACKBEARD");
        table.ranks[0] = vec!["synthetic muscle netting".to_string()];
        table.ranks[1] = vec!["chain axe".to_string(), "hunter lock".to_string()];

        assert_eq!(table.rank_of("Chain Axe"), Some(2));
        assert_eq!(table.rank_of("synthetic muscle netting"), Some(1));
        assert_eq!(table.rank_of("plasma torch"), None);
    }

    #[test]
    fn test_empty() {
        assert!(LicenseTable::new("ATLAS").is_empty());
    }
}
