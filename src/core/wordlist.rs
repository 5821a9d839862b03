//! Batch wordlist building
//!
//! Reads usernames, runs the generator over each of them and merges the
//! per-username sets into a single list. Each per-username set is sorted,
//! but the merged list keeps first-occurrence order across usernames.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::error::WordlistError;
use crate::core::generator::VariationGenerator;

/// Variation count for one input username, before global dedup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsernameReport {
    pub username: String,
    pub variations: usize,
}

/// Result of processing a whole username list
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub usernames: Vec<UsernameReport>,
    /// Unique variations in first-occurrence order
    pub variations: Vec<String>,
}

impl BatchReport {
    pub fn total_unique(&self) -> usize {
        self.variations.len()
    }
}

/// Trimmed, non-blank lines of `content`. `\n`, `\r\n` and a lone `\r` all end a line.
pub fn parse_usernames(content: &str) -> Vec<String> {
    content
        .split(['\n', '\r'])
        .map(|line| line.trim_matches(is_padding))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

// Unicode whitespace plus the ASCII file/group/record/unit separators
fn is_padding(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Reads the username list, failing if it holds no usernames
pub fn load_usernames(path: &Path) -> Result<Vec<String>, WordlistError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| WordlistError::from_read_error(e, path))?;

    let usernames = parse_usernames(&content);
    if usernames.is_empty() {
        return Err(WordlistError::EmptyInput(path.to_path_buf()));
    }

    Ok(usernames)
}

/// Drops repeated entries, keeping the first occurrence of each
pub fn dedup_preserving_order<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Generates variations for every username and merges them
pub fn build_wordlist(generator: &VariationGenerator, usernames: &[String]) -> BatchReport {
    let mut reports = Vec::with_capacity(usernames.len());
    let mut combined = Vec::new();

    for username in usernames {
        let variations = generator.generate(username);
        reports.push(UsernameReport {
            username: username.clone(),
            variations: variations.len(),
        });
        combined.extend(variations);
    }

    BatchReport {
        usernames: reports,
        variations: dedup_preserving_order(combined),
    }
}

/// Writes one variation per line. A failure part way through can leave a truncated file.
pub fn write_wordlist(path: &Path, variations: &[String]) -> Result<(), WordlistError> {
    let to_error = |e| WordlistError::from_write_error(e, path);

    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    for variation in variations {
        writeln!(writer, "{}", variation).map_err(to_error)?;
    }
    writer.flush().map_err(to_error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generator::generate;
    use tempfile::TempDir;

    #[test]
    fn test_parse_usernames() {
        let content = "  admin  \n\n\tbob\r\n   \nuser1\n";

        assert_eq!(parse_usernames(content), vec!["admin", "bob", "user1"]);
    }

    #[test]
    fn test_parse_usernames_carriage_return_only() {
        assert_eq!(parse_usernames("alice\rbob\r"), vec!["alice", "bob"]);
        assert_eq!(parse_usernames("alice\r\nbob\rcarol\n"), vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn test_parse_usernames_strips_separator_controls() {
        assert_eq!(parse_usernames("\x1falice\x1f\n\x1c bob \x1d\n"), vec!["alice", "bob"]);
        // Separators inside a name are kept
        assert_eq!(parse_usernames("al\x1eice\n"), vec!["al\x1eice"]);
    }

    #[test]
    fn test_load_usernames() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.txt");
        std::fs::write(&path, "alice\n\nbob\n").unwrap();

        assert_eq!(load_usernames(&path).unwrap(), vec!["alice", "bob"]);
    }

    #[test]
    fn test_load_usernames_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.txt");
        std::fs::write(&path, "\n   \n\t\n").unwrap();

        let err = load_usernames(&path).unwrap_err();
        assert!(matches!(err, WordlistError::EmptyInput(_)));
    }

    #[test]
    fn test_load_usernames_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.txt");

        let err = load_usernames(&path).unwrap_err();
        assert!(matches!(err, WordlistError::InputNotFound(_)));
    }

    #[test]
    fn test_load_usernames_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.txt");
        std::fs::write(&path, [0xff, 0xfe, b'\n']).unwrap();

        let err = load_usernames(&path).unwrap_err();
        assert!(matches!(err, WordlistError::Io { .. }));
    }

    #[test]
    fn test_dedup_preserving_order() {
        let items = ["b", "a", "b", "c", "a"].map(String::from);

        assert_eq!(dedup_preserving_order(items), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_build_wordlist_overlap() {
        let generator = VariationGenerator::default();
        let usernames = vec!["admin".to_string(), "admin1".to_string()];

        let report = build_wordlist(&generator, &usernames);

        let first = generate("admin");
        let second = generate("admin1");
        assert_eq!(report.usernames[0].variations, first.len());
        assert_eq!(report.usernames[1].variations, second.len());

        // First username's sorted set leads, then only the new entries of the second
        assert_eq!(&report.variations[..first.len()], first.as_slice());
        let expected_tail: Vec<String> =
            second.into_iter().filter(|v| !first.contains(v)).collect();
        assert_eq!(&report.variations[first.len()..], expected_tail.as_slice());

        let unique: HashSet<_> = report.variations.iter().collect();
        assert_eq!(unique.len(), report.total_unique());
    }

    #[test]
    fn test_build_wordlist_identical_sets() {
        let generator = VariationGenerator::default();
        let usernames = vec!["admin".to_string(), "ADMIN".to_string()];

        let report = build_wordlist(&generator, &usernames);

        assert_eq!(report.variations, generate("admin"));
    }

    #[test]
    fn test_write_wordlist() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        let variations = vec!["b".to_string(), "a".to_string(), String::new()];

        write_wordlist(&path, &variations).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "b\na\n\n");
    }

    #[test]
    fn test_write_wordlist_missing_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.txt");

        let err = write_wordlist(&path, &["x".to_string()]).unwrap_err();
        assert!(matches!(err, WordlistError::Io { .. }));
    }
}
