//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The only value resolved at runtime is the backing repository, which is
//! inferred from the page location (see [`RepositoryPath`](crate::models::RepositoryPath)).

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the page header.
pub const APP_NAME: &str = "Python Solutions";

/// Tagline displayed under the platform grid title.
pub const APP_TAGLINE: &str = "Competitive programming solutions, visualized";

// =============================================================================
// Repository Configuration
// =============================================================================

/// Repository used when the page location does not name one.
pub const DEFAULT_REPOSITORY: &str = "Vic-Nas/PythonSolutions";

/// GitHub REST API base URL.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// GitHub web base URL (for "view on GitHub" links).
pub const GITHUB_WEB_BASE: &str = "https://github.com";

/// Branch used for GitHub tree/blob links.
pub const DEFAULT_BRANCH: &str = "main";

/// Precomputed manifest, served next to `index.html`.
pub const MANIFEST_URL: &str = "data.json";

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Accept header sent to the contents API.
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Maximum directory depth visited by the live scan (platform root = 0).
pub const LIVE_SCAN_MAX_DEPTH: usize = 4;

/// Allowed domains for "original problem" links.
/// Links to other domains are not rendered.
pub const ALLOWED_PROBLEM_DOMAINS: &[&str] = &[
    "leetcode.com",
    "kattis.com",
    "adventofcode.com",
    "codeforces.com",
    "hackerrank.com",
    "atcoder.jp",
    "projecteuler.net",
    "github.com",
];

// =============================================================================
// Cache Configuration
// =============================================================================

/// Cache configuration.
pub mod cache {
    /// sessionStorage key for the manifest cache.
    pub const MANIFEST_KEY: &str = "solutions_manifest";

    /// Lifetime of a cached directory listing in milliseconds (5 minutes).
    pub const FOLDER_TTL_MS: f64 = 5.0 * 60.0 * 1000.0;
}

// =============================================================================
// File Conventions
// =============================================================================

/// File naming conventions used to classify solution folders.
pub mod files {
    /// Suffix of the primary source file.
    pub const SOURCE_SUFFIX: &str = ".vn.py";

    /// Substring marking an alternate ("code golf") source variant.
    pub const ALTERNATE_MARKER: &str = ".shortest.";

    /// Suffix of a standalone interactive page.
    pub const PAGE_SUFFIX: &str = ".html";

    /// Sequence image pattern: marker, optional step, image extension.
    pub const SEQUENCE_IMAGE_PATTERN: &str = r"\.vn(?:\.(\d+))?\.png$";
}

// =============================================================================
// Platform Configuration
// =============================================================================

/// Display information for a known platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlatformInfo {
    /// Directory name at the repository root.
    pub key: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Noun used in item counts ("problems", "scripts").
    pub noun: &'static str,
    /// Subtitle shown on a detail page.
    pub subtitle: &'static str,
    /// Each page file at the platform root is an item of its own.
    pub flat: bool,
}

/// Platforms scanned when no manifest is available, in display order.
pub const PLATFORMS: &[PlatformInfo] = &[
    PlatformInfo {
        key: "leetcode",
        label: "LeetCode",
        noun: "problems",
        subtitle: "LeetCode Solution",
        flat: false,
    },
    PlatformInfo {
        key: "kattis",
        label: "Kattis",
        noun: "problems",
        subtitle: "Kattis Solution",
        flat: false,
    },
    PlatformInfo {
        key: "aoc",
        label: "Advent of Code",
        noun: "puzzles",
        subtitle: "Advent of Code Solution",
        flat: false,
    },
    PlatformInfo {
        key: "vicutils",
        label: "VicUtils",
        noun: "scripts",
        subtitle: "Utility Script",
        flat: true,
    },
];

/// Look up a known platform by directory name.
pub fn platform_info(key: &str) -> Option<&'static PlatformInfo> {
    PLATFORMS.iter().find(|p| p.key == key)
}

/// Whether the platform lists page files as individual items.
pub fn is_flat_platform(key: &str) -> bool {
    platform_info(key).is_some_and(|p| p.flat)
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

/// Viewport query under which the detail view always stacks.
pub const NARROW_VIEWPORT_QUERY: &str = "(max-width: 768px)";
