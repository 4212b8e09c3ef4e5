//! Hash-based routing.
//!
//! The URL fragment is the persisted navigation state:
//!
//! | Fragment                  | Route                            |
//! |---------------------------|----------------------------------|
//! | `""`                      | [`Route::Root`]                  |
//! | `kattis/two-pointers`     | [`Route::Folder`]                |
//! | `view/kattis/two-pointers`| [`Route::View`]                  |
//!
//! Segments are percent-encoded, so folder names with spaces survive. A
//! folder route whose first segment is literally `view` writes it as
//! `%76iew` so it cannot be read back as a detail route.

/// Literal prefix of detail fragments.
pub const VIEW_PREFIX: &str = "view/";

/// First folder segment that collides with [`VIEW_PREFIX`], and its escape.
const VIEW_SEGMENT: &str = "view";
const ESCAPED_VIEW_SEGMENT: &str = "%76iew";

/// Parsed URL fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Platform list: empty fragment
    Root,
    /// Folder listing: `a/b/c`
    Folder {
        /// Decoded path segments (never empty)
        path: Vec<String>,
    },
    /// Problem detail: `view/a/b/c`
    View {
        /// Decoded path segments (never empty)
        path: Vec<String>,
    },
}

impl Route {
    /// Parse a URL fragment (with or without the leading `#`).
    pub fn from_hash(hash: &str) -> Self {
        let fragment = hash.trim_start_matches('#').trim_start_matches('/');

        if let Some(rest) = fragment.strip_prefix(VIEW_PREFIX) {
            let path = split_segments(rest);
            return if path.is_empty() {
                Self::Root
            } else {
                Self::View { path }
            };
        }

        let path = split_segments(fragment);
        if path.is_empty() {
            Self::Root
        } else {
            Self::Folder { path }
        }
    }

    /// Build a folder route; an empty path is the root.
    pub fn folder(path: Vec<String>) -> Self {
        if path.is_empty() {
            Self::Root
        } else {
            Self::Folder { path }
        }
    }

    /// Build a detail route; an empty path is the root.
    pub fn view(path: Vec<String>) -> Self {
        if path.is_empty() {
            Self::Root
        } else {
            Self::View { path }
        }
    }

    /// Serialize to a fragment (without `#`).
    pub fn to_fragment(&self) -> String {
        match self {
            Self::Root => String::new(),
            Self::Folder { path } => {
                let fragment = join_segments(path);
                match fragment.strip_prefix(VIEW_SEGMENT) {
                    Some(rest) if rest.is_empty() || rest.starts_with('/') => {
                        format!("{}{}", ESCAPED_VIEW_SEGMENT, rest)
                    }
                    _ => fragment,
                }
            }
            Self::View { path } => format!("{}{}", VIEW_PREFIX, join_segments(path)),
        }
    }

    /// Serialize to a URL hash (with `#`).
    pub fn to_hash(&self) -> String {
        format!("#{}", self.to_fragment())
    }

    /// Path segments addressed by this route.
    pub fn path(&self) -> &[String] {
        match self {
            Self::Root => &[],
            Self::Folder { path } | Self::View { path } => path,
        }
    }

    pub fn is_view(&self) -> bool {
        matches!(self, Self::View { .. })
    }

    /// Route one level up: drop the last segment, or go to the root from a
    /// single-segment path.
    pub fn parent(&self) -> Self {
        match self {
            Self::Root => Self::Root,
            Self::Folder { path } | Self::View { path } => {
                Self::folder(path[..path.len().saturating_sub(1)].to_vec())
            }
        }
    }

    /// Get current route from browser URL
    pub fn current() -> Self {
        Self::from_hash(&crate::utils::dom::get_hash())
    }

    /// Write this route to the URL fragment.
    ///
    /// This fires `hashchange`, which is what re-renders the page.
    pub fn push(&self) {
        crate::utils::dom::set_hash(&self.to_hash());
    }
}

fn split_segments(fragment: &str) -> Vec<String> {
    fragment
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| {
            urlencoding::decode(s)
                .map(|d| d.into_owned())
                .unwrap_or_else(|_| s.to_string())
        })
        .collect()
}

fn join_segments(path: &[String]) -> String {
    path.iter()
        .map(|s| urlencoding::encode(s).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::from_hash(""), Route::Root);
        assert_eq!(Route::from_hash("#"), Route::Root);
        assert_eq!(Route::from_hash("#/"), Route::Root);
        assert_eq!(
            Route::from_hash("#kattis"),
            Route::Folder {
                path: segs(&["kattis"])
            }
        );
        assert_eq!(
            Route::from_hash("kattis/two-pointers/"),
            Route::Folder {
                path: segs(&["kattis", "two-pointers"])
            }
        );
        assert_eq!(
            Route::from_hash("#view/leetcode/two-sum"),
            Route::View {
                path: segs(&["leetcode", "two-sum"])
            }
        );
        assert_eq!(Route::from_hash("view/"), Route::Root);
    }

    #[test]
    fn test_percent_decoding() {
        assert_eq!(
            Route::from_hash("#view/kattis/Suspension%20Bridges"),
            Route::View {
                path: segs(&["kattis", "Suspension Bridges"])
            }
        );
        // Malformed escapes are kept verbatim
        assert_eq!(
            Route::from_hash("kattis/%E0%A4%A"),
            Route::Folder {
                path: segs(&["kattis", "%E0%A4%A"])
            }
        );
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(Route::Root.to_hash(), "#");
        assert_eq!(Route::folder(segs(&["kattis"])).to_fragment(), "kattis");
        assert_eq!(
            Route::view(segs(&["kattis", "Ball Bearings"])).to_fragment(),
            "view/kattis/Ball%20Bearings"
        );
    }

    #[test]
    fn test_fragment_round_trip_is_stable() {
        for fragment in [
            "",
            "kattis",
            "kattis/two-pointers",
            "view/kattis/two-pointers",
            "view/kattis/Suspension%20Bridges",
            "#/aoc/2025/07/",
        ] {
            let parsed = Route::from_hash(fragment);
            assert_eq!(Route::from_hash(&parsed.to_fragment()), parsed, "{fragment}");
        }
    }

    #[test]
    fn test_folder_named_view_is_escaped() {
        let folder = Route::folder(segs(&["view", "graphs"]));
        assert_eq!(folder.to_fragment(), "%76iew/graphs");
        assert_eq!(Route::from_hash(&folder.to_fragment()), folder);

        let alone = Route::folder(segs(&["view"]));
        assert_eq!(Route::from_hash(&alone.to_fragment()), alone);

        // Only the exact segment is escaped
        assert_eq!(Route::folder(segs(&["viewer"])).to_fragment(), "viewer");
        let detail = Route::view(segs(&["view", "graphs"]));
        assert_eq!(detail.to_fragment(), "view/view/graphs");
        assert_eq!(Route::from_hash(&detail.to_fragment()), detail);
    }

    #[test]
    fn test_parent() {
        let view = Route::view(segs(&["kattis", "two-pointers"]));
        assert_eq!(view.parent(), Route::folder(segs(&["kattis"])));
        assert_eq!(Route::folder(segs(&["kattis"])).parent(), Route::Root);
        assert_eq!(Route::Root.parent(), Route::Root);
    }
}
