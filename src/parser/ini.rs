//! INI version file parser
//!
//! Parses the remote version file format: `[section]` headers followed by
//! `key = value` (or `key: value`) entries, with `;`/`#` full-line
//! comments.
//!
//! Format example:
//! ```text
//! [release]
//! version = 1.2.3
//! date = 28-02-2024
//! ```
//!
//! Keys are case-insensitive (stored lowercased); section names are
//! matched exactly. Inline comments are not stripped, so everything after
//! the delimiter up to the end of the line belongs to the value.

use std::collections::HashMap;

use regex::Regex;

/// Parser for INI version files
pub struct IniParser {
    /// Regex for a section header: `[name]`
    section_re: Regex,
    /// Regex for an entry, split at the first `=` or `:`
    entry_re: Regex,
}

impl IniParser {
    pub fn new() -> Self {
        Self {
            // Match: [section name]
            section_re: Regex::new(r"^\[(?P<name>[^\]]+)\]$").unwrap(),
            // Match: key = value, key: value (value may be empty)
            entry_re: Regex::new(r"^(?P<key>[^=:]+?)\s*[=:]\s*(?P<value>.*)$").unwrap(),
        }
    }

    /// Parse `content` into a section/key/value document.
    ///
    /// An entry before the first section header and any non-blank line
    /// that is neither a comment, a header, nor an entry are errors.
    pub fn parse(&self, content: &str) -> Result<IniDocument, ParseError> {
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current_section: Option<String> = None;

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            if let Some(caps) = self.section_re.captures(line) {
                let name = caps["name"].trim().to_string();
                sections.entry(name.clone()).or_default();
                current_section = Some(name);
                continue;
            }

            // A malformed header must not fall through to entry matching
            if line.starts_with('[') {
                return Err(ParseError::InvalidLine {
                    line: index + 1,
                    text: line.to_string(),
                });
            }

            if let Some(caps) = self.entry_re.captures(line) {
                let Some(section) = &current_section else {
                    return Err(ParseError::EntryOutsideSection {
                        line: index + 1,
                        text: line.to_string(),
                    });
                };
                sections
                    .entry(section.clone())
                    .or_default()
                    .insert(caps["key"].to_lowercase(), caps["value"].trim().to_string());
                continue;
            }

            return Err(ParseError::InvalidLine {
                line: index + 1,
                text: line.to_string(),
            });
        }

        Ok(IniDocument { sections })
    }
}

impl Default for IniParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parsed INI document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniDocument {
    sections: HashMap<String, HashMap<String, String>>,
}

impl IniDocument {
    /// Look up the value stored under `section`/`key`.
    ///
    /// The key lookup is case-insensitive; the section lookup is not.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)?
            .get(&key.to_lowercase())
            .map(String::as_str)
    }
}

/// Error type for INI parsing
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    /// An entry appeared before any section header
    #[error("Entry outside of any section at line {line}: {text}")]
    EntryOutsideSection { line: usize, text: String },

    /// A non-blank line matched no known form
    #[error("Unparseable line {line}: {text}")]
    InvalidLine { line: usize, text: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(content: &str) -> Result<IniDocument, ParseError> {
        IniParser::new().parse(content)
    }

    #[rstest]
    #[case("[release]\nversion = 1.2.3\n", "release", "version", "1.2.3")]
    #[case("[release]\nversion: 1.2.3\n", "release", "version", "1.2.3")]
    #[case("[release]\nversion=1.2.3", "release", "version", "1.2.3")]
    #[case("[version_by_date]\ndate = 28-02-2024\n", "version_by_date", "date", "28-02-2024")]
    #[case("[release]\nVersion = 1.2.3\n", "release", "version", "1.2.3")]
    #[case("[release]\nversion = 1.2.3\n", "release", "VERSION", "1.2.3")]
    #[case("[release]\nempty =\n", "release", "empty", "")]
    fn parse_returns_stored_value_for_well_formed_documents(
        #[case] content: &str,
        #[case] section: &str,
        #[case] key: &str,
        #[case] expected: &str,
    ) {
        let document = parse(content).unwrap();

        assert_eq!(document.get(section, key), Some(expected));
    }

    #[test]
    fn parse_skips_comments_and_blank_lines() {
        let document = parse(
            "; top comment\n\n[release]\n# about the version\nversion = 1.2.3\n\n; trailing\n",
        )
        .unwrap();

        assert_eq!(document.get("release", "version"), Some("1.2.3"));
    }

    #[test]
    fn parse_keeps_inline_comment_as_part_of_the_value() {
        let document = parse("[release]\nversion = 1.2.3 ; not a comment\n").unwrap();

        assert_eq!(document.get("release", "version"), Some("1.2.3 ; not a comment"));
    }

    #[test]
    fn parse_splits_at_the_first_delimiter_only() {
        let document = parse("[paths]\nbase = https://example.com/v1\n").unwrap();

        assert_eq!(document.get("paths", "base"), Some("https://example.com/v1"));
    }

    #[test]
    fn parse_keeps_the_last_duplicate_entry() {
        let document = parse("[release]\nversion = 1.0.0\nversion = 2.0.0\n").unwrap();

        assert_eq!(document.get("release", "version"), Some("2.0.0"));
    }

    #[test]
    fn get_returns_none_for_missing_section_or_key() {
        let document = parse("[release]\nversion = 1.2.3\n").unwrap();

        assert_eq!(document.get("nope", "version"), None);
        assert_eq!(document.get("release", "nope"), None);
        assert_eq!(document.get("RELEASE", "version"), None);
    }

    #[test]
    fn parse_rejects_entry_before_any_section() {
        let result = parse("version = 1.2.3\n[release]\n");

        assert_eq!(
            result,
            Err(ParseError::EntryOutsideSection {
                line: 1,
                text: "version = 1.2.3".to_string(),
            })
        );
    }

    #[rstest]
    #[case("[release]\njust words\n", 2)]
    #[case("[release\nversion = 1.2.3\n", 1)]
    #[case("[release] trailing\nversion = 1.2.3\n", 1)]
    fn parse_rejects_unrecognizable_lines(#[case] content: &str, #[case] line: usize) {
        let result = parse(content);

        assert!(matches!(result, Err(ParseError::InvalidLine { line: l, .. }) if l == line));
    }

    #[test]
    fn parse_accepts_a_section_with_no_entries() {
        let document = parse("[empty]\n").unwrap();

        assert_eq!(document.get("empty", "anything"), None);
    }
}
