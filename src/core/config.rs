//! Mutation rules for the variation generator
//!
//! The built-in tables are the defaults. Library callers can load an
//! alternative rule set from a `rules.toml` document; the CLI always uses
//! the built-in tables.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Character substitutions applied independently against the original username
pub const SUBSTITUTIONS: &[(char, char)] = &[
    (' ', '_'),
    ('%', '_'),
    ('@', 'a'),
    ('$', 's'),
    ('!', 'i'),
    ('3', 'e'),
    ('1', 'i'),
    ('0', 'o'),
    ('4', 'a'),
    ('5', 's'),
    ('7', 't'),
];

/// Numeric suffixes, appended with case variants of each base entry
pub const NUMERIC_SUFFIXES: &[&str] = &["123", "1234", "12345", "1", "01", "2024", "2025"];

/// Symbol affixes, used both as prefix and suffix
pub const SYMBOL_AFFIXES: &[&str] = &["!", "@", "#", "123!", "!123", "_123"];

/// Year strings, suffix only
pub const YEARS: &[&str] = &["2024", "2025", "23", "24", "25"];

/// A single `from -> to` character replacement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    pub from: char,
    pub to: char,
}

/// Tables driving variation generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MutationRules {
    /// Appended to every base entry, its lowercase and its capitalized form
    pub numeric_suffixes: Vec<String>,

    /// Added both before and after every base entry
    pub affixes: Vec<String>,

    /// Appended to every base entry as-is
    pub years: Vec<String>,

    // Arrays of tables must come after plain values in TOML output
    pub substitutions: Vec<Substitution>,
}

impl Default for MutationRules {
    fn default() -> Self {
        Self {
            numeric_suffixes: NUMERIC_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            affixes: SYMBOL_AFFIXES.iter().map(|s| s.to_string()).collect(),
            years: YEARS.iter().map(|s| s.to_string()).collect(),
            substitutions: SUBSTITUTIONS
                .iter()
                .map(|&(from, to)| Substitution { from, to })
                .collect(),
        }
    }
}

impl MutationRules {
    /// Parse rules from a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse mutation rules")
    }

    /// Load rules from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read rules file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid rules file: {}", path.display()))
    }

    /// Save rules to a TOML file with a short explanatory header
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_commented_toml()?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write rules file: {}", path.display()))?;
        Ok(())
    }

    fn to_commented_toml(&self) -> Result<String> {
        let toml_content = toml::to_string_pretty(self)?;

        let header = r#"# pass-variants mutation rules
#
# numeric_suffixes: appended to each base word, its lowercase and capitalized forms
# affixes:          added before and after each base word
# years:            appended to each base word
# substitutions:    single-character replacements, applied one at a time

"#;

        Ok(format!("{}{}", header, toml_content))
    }
}
