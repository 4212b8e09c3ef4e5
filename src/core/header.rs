//! Solution header parsing.
//!
//! Solution files open with a comment block such as:
//!
//! ```text
//! # 913. Cat and Mouse
//! # https://leetcode.com/problems/cat-and-mouse/
//! # Dynamic programming, game theory
//! # 05/12/2025
//! ```
//!
//! Every field is optional; a file without a header parses to the default.

use std::sync::LazyLock;

use regex::Regex;

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https://\S+").expect("url pattern is valid"));

static DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}$").expect("date pattern is valid"));

/// Metadata from the leading comment block of a source file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolutionHeader {
    pub title: Option<String>,
    /// Link to the original problem statement
    pub link: Option<String>,
    pub tags: Vec<String>,
    /// Solve date as written (`dd/mm/yyyy`)
    pub date: Option<String>,
}

impl SolutionHeader {
    /// Parse the leading comment block of `source`.
    pub fn parse(source: &str) -> Self {
        let mut header = Self::default();

        let comments = source
            .lines()
            .map(str::trim)
            .skip_while(|line| line.is_empty())
            .take_while(|line| line.starts_with('#'))
            .filter(|line| !line.starts_with("#!"))
            .map(|line| line.trim_start_matches('#').trim())
            .filter(|text| !text.is_empty());

        for text in comments {
            if let Some(url) = URL.find(text) {
                if header.link.is_none() {
                    header.link = Some(url.as_str().to_string());
                }
            } else if DATE.is_match(text) {
                header.date.get_or_insert_with(|| text.to_string());
            } else if header.title.is_none() {
                header.title = Some(text.to_string());
            } else if header.tags.is_empty() {
                header.tags = text
                    .split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(String::from)
                    .collect();
            }
        }

        header
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_header() {
        let source = "\n# 1239. Maximum Length\n# https://leetcode.com/problems/maximum-length\n# Dynamic programming, bitmask\n# 20/09/2025\n\ndef solve():\n    # https://not-the-link.example\n    pass\n";
        let header = SolutionHeader::parse(source);

        assert_eq!(header.title.as_deref(), Some("1239. Maximum Length"));
        assert_eq!(
            header.link.as_deref(),
            Some("https://leetcode.com/problems/maximum-length")
        );
        assert_eq!(header.tags, vec!["Dynamic programming", "bitmask"]);
        assert_eq!(header.date.as_deref(), Some("20/09/2025"));
    }

    #[test]
    fn test_link_inside_text() {
        let header = SolutionHeader::parse("# see https://open.kattis.com/problems/forest for details\n");
        assert_eq!(
            header.link.as_deref(),
            Some("https://open.kattis.com/problems/forest")
        );
        assert!(header.title.is_none());
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(SolutionHeader::parse("print(42)\n"), SolutionHeader::default());
        assert_eq!(SolutionHeader::parse(""), SolutionHeader::default());
    }

    #[test]
    fn test_shebang_is_ignored() {
        let header = SolutionHeader::parse("#!/usr/bin/env python3\n# Forest for the trees\n");
        assert_eq!(header.title.as_deref(), Some("Forest for the trees"));
    }
}
