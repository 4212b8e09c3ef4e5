//! Precomputed `data.json` manifest.
//!
//! Generated by the `manifest` binary from a local checkout, and consumed by
//! the browser in place of a recursive scan over the contents API.

use serde::{Deserialize, Serialize};

/// Root manifest structure.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Manifest {
    pub platforms: Vec<PlatformManifest>,
}

/// One top-level platform directory.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PlatformManifest {
    pub name: String,
    /// Card image, relative to the site root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Number of items in the platform (informational; recomputed on load).
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub tree: Vec<ManifestNode>,
}

/// A folder (or flat page file) below a platform.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ManifestNode {
    pub name: String,
    /// Directly contains at least one recognized solution file.
    #[serde(default)]
    pub has_files: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ManifestNode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_deserialization() {
        let json = r#"{
            "platforms": [
                {
                    "name": "kattis",
                    "image": "images/kattis.png",
                    "count": 1,
                    "tree": [
                        {"name": "two-pointers", "has_files": true},
                        {"name": "graphs", "has_files": false, "children": [
                            {"name": "bfs", "has_files": true}
                        ]}
                    ]
                },
                {"name": "leetcode"}
            ]
        }"#;
        let manifest: Manifest = serde_json::from_str(json).unwrap();

        assert_eq!(manifest.platforms.len(), 2);
        let kattis = &manifest.platforms[0];
        assert_eq!(kattis.image.as_deref(), Some("images/kattis.png"));
        assert_eq!(kattis.tree[1].children[0].name, "bfs");
        assert!(kattis.tree[0].children.is_empty());

        let leetcode = &manifest.platforms[1];
        assert_eq!(leetcode.count, 0);
        assert!(leetcode.tree.is_empty());
    }
}
