//! Variation generator
//!
//! Derives password candidates from a single username. The result for one
//! username is a sorted set; ordering across usernames is the wordlist's job.

use std::collections::BTreeSet;

use crate::core::config::MutationRules;

/// Generates password candidates from a username using a fixed rule set.
///
/// The generator holds only read-only tables, so a single instance can be
/// shared across threads and reused for any number of usernames.
#[derive(Debug, Clone, Default)]
pub struct VariationGenerator {
    rules: MutationRules,
}

impl VariationGenerator {
    pub fn new(rules: MutationRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &MutationRules {
        &self.rules
    }

    /// Returns every variation of `username`, sorted and deduplicated.
    ///
    /// Never fails: an empty username still yields the bare affixes,
    /// suffixes and years.
    pub fn generate(&self, username: &str) -> Vec<String> {
        let mut variations = BTreeSet::new();

        insert_case_forms(&mut variations, username);

        let cleaned = clean(username);
        if cleaned != username {
            insert_case_forms(&mut variations, &cleaned);
        }

        // Each key is applied alone against the original, never chained
        for sub in &self.rules.substitutions {
            if username.contains(sub.from) {
                let mut buf = [0u8; 4];
                let replaced = username.replace(sub.from, sub.to.encode_utf8(&mut buf));
                insert_case_forms(&mut variations, &replaced);
            }
        }

        let base: Vec<String> = variations.iter().cloned().collect();

        for word in &base {
            let lower = word.to_lowercase();
            let capitalized = capitalize(word);

            for suffix in &self.rules.numeric_suffixes {
                variations.insert(format!("{word}{suffix}"));
                variations.insert(format!("{lower}{suffix}"));
                variations.insert(format!("{capitalized}{suffix}"));
            }

            for affix in &self.rules.affixes {
                variations.insert(format!("{word}{affix}"));
                variations.insert(format!("{affix}{word}"));
            }

            for year in &self.rules.years {
                variations.insert(format!("{word}{year}"));
            }
        }

        if !username.is_empty() {
            let capitalized = capitalize(username);
            variations.insert(format!("{capitalized}123"));
            variations.insert(format!("{capitalized}1"));
        }

        variations.into_iter().collect()
    }
}

/// Generates variations with the built-in rules
pub fn generate(username: &str) -> Vec<String> {
    VariationGenerator::default().generate(username)
}

/// Uppercases the first character and lowercases the rest
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Drops every character that is not alphanumeric.
///
/// Uses the Unicode Alphabetic and Numeric properties, so combining vowel
/// signs such as U+093F are kept.
pub fn clean(s: &str) -> String {
    s.chars().filter(|c| c.is_alphanumeric()).collect()
}

fn insert_case_forms(set: &mut BTreeSet<String>, word: &str) {
    set.insert(word.to_string());
    set.insert(word.to_lowercase());
    set.insert(word.to_uppercase());
    set.insert(capitalize(word));
}
