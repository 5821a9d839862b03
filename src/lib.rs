//! pass-variants - Password candidate generator
//!
//! This crate turns a list of usernames into a deduplicated wordlist of
//! likely password candidates (case changes, character substitutions,
//! numeric and symbol affixes, years) for authorized security testing.

pub mod core;
