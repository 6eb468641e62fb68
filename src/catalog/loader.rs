//! Load round catalogs from TOML

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::round::RoundDefinition;
use crate::core::error::Result;

/// Rounds baked into the crate: 21 PHP coercion scenarios
const BUILTIN_ROUNDS: &str = include_str!("../../data/rounds.toml");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    rounds: Vec<RoundDefinition>,
}

/// Shared, read-only collection of round definitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    rounds: Vec<RoundDefinition>,
}

impl Catalog {
    pub fn new(rounds: Vec<RoundDefinition>) -> Self {
        Self { rounds }
    }

    /// Parse a catalog from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(text)?;
        Ok(Self::new(file.rounds))
    }

    /// Load a catalog from a TOML file on disk
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// The catalog shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_ROUNDS)
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn rounds(&self) -> &[RoundDefinition] {
        &self.rounds
    }

    /// Look up a round by its catalog id
    pub fn get(&self, id: u32) -> Option<&RoundDefinition> {
        self.rounds.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_catalog() {
        let text = r#"
            [[rounds]]
            id = 1
            title = "The Null Integer"
            incoming_display = "null"
            incoming_type = "mixed"
            target_type = "int"
            context_code = "function processUser(int $userId): void"
            variable_name = "$userId"
            hammer_cast = "(int)"
            hammer_result_display = "0"
            hammer_feedback = "The door fits... but the user is gone!"
            hammer_debt = 20
            hammer_score = 0
            measure_action = "RequestPost::getIntOrNull('userId')"
            measure_feedback = "Safe."
            measure_score = 150
            explanation = "Casting null to 0 hides a missing value."
        "#;

        let catalog = Catalog::from_toml(text).unwrap();
        assert_eq!(catalog.len(), 1);

        let round = catalog.get(1).unwrap();
        assert_eq!(round.title, "The Null Integer");
        assert_eq!(round.hammer_debt, 20);
        assert!(!round.is_safe_hammer());
    }

    #[test]
    fn test_malformed_catalog_is_an_error() {
        assert!(Catalog::from_toml("[[rounds]]\nid = \"not a number\"").is_err());
    }
}
