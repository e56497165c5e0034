//! Rarity classification from filename markers

use serde::{Deserialize, Serialize};

/// One marker in the rarity table
///
/// A fragment whose file name contains `key` is labelled `val`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityRule {
    /// Substring marker searched for in the file name
    pub key: String,
    /// Rarity label attached on a match
    pub val: String,
}

impl RarityRule {
    /// Create a rule from a marker and its label
    pub fn new(key: impl Into<String>, val: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            val: val.into(),
        }
    }
}

/// Which rule wins when several markers occur in one file name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RarityMatch {
    /// Every rule is evaluated and the last match overwrites earlier ones
    #[default]
    Last,
    /// The first matching rule is kept
    First,
}

/// Ordered rarity rules plus the policy used to resolve multiple matches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RarityTable {
    rules: Vec<RarityRule>,
    policy: RarityMatch,
}

impl RarityTable {
    /// Create a table from rules in configured order
    pub const fn new(rules: Vec<RarityRule>, policy: RarityMatch) -> Self {
        Self { rules, policy }
    }

    /// Rules in configured order
    pub fn rules(&self) -> &[RarityRule] {
        &self.rules
    }

    /// Label for a file name, or `None` when no marker occurs in it
    pub fn classify(&self, file_name: &str) -> Option<&str> {
        let mut matches = self
            .rules
            .iter()
            .filter(|rule| file_name.contains(rule.key.as_str()));

        let rule = match self.policy {
            RarityMatch::Last => matches.last(),
            RarityMatch::First => matches.next(),
        };

        rule.map(|rule| rule.val.as_str())
    }
}
