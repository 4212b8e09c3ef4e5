//! Formatting utilities for titles and counts.

use crate::config::{platform_info, files::PAGE_SUFFIX};

/// Uppercase the first character.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Display title for an item name (`two-sum` → `Two Sum`).
///
/// A trailing page extension is dropped so flat page items read naturally.
pub fn display_title(name: &str) -> String {
    let name = name.strip_suffix(PAGE_SUFFIX).unwrap_or(name);
    name.split(['-', '_', ' '])
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Label for a platform directory.
pub fn platform_label(key: &str) -> String {
    platform_info(key)
        .map(|p| p.label.to_string())
        .unwrap_or_else(|| capitalize(key))
}

/// Item count with the platform's noun (`1 problem`, `12 scripts`).
pub fn count_label(count: usize, platform: &str) -> String {
    let noun = platform_info(platform).map(|p| p.noun).unwrap_or("items");
    if count == 1 {
        format!("1 {}", noun.strip_suffix('s').unwrap_or(noun))
    } else {
        format!("{} {}", count, noun)
    }
}

/// Subtitle of a detail page.
pub fn detail_subtitle(platform: &str) -> String {
    platform_info(platform)
        .map(|p| p.subtitle.to_string())
        .unwrap_or_else(|| format!("{} Solution", capitalize(platform)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title() {
        assert_eq!(display_title("two-sum"), "Two Sum");
        assert_eq!(display_title("catAndMouse"), "CatAndMouse");
        assert_eq!(display_title("Suspension Bridges"), "Suspension Bridges");
        assert_eq!(display_title("geometry.html"), "Geometry");
        assert_eq!(display_title(""), "");
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0, "leetcode"), "0 problems");
        assert_eq!(count_label(1, "leetcode"), "1 problem");
        assert_eq!(count_label(3, "vicutils"), "3 scripts");
        assert_eq!(count_label(2, "unknown"), "2 items");
    }

    #[test]
    fn test_platform_strings() {
        assert_eq!(platform_label("aoc"), "Advent of Code");
        assert_eq!(platform_label("codeforces"), "Codeforces");
        assert_eq!(detail_subtitle("vicutils"), "Utility Script");
        assert_eq!(detail_subtitle("kattis"), "Kattis Solution");
        assert_eq!(detail_subtitle("codeforces"), "Codeforces Solution");
    }
}
