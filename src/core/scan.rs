//! Solution tree loading.
//!
//! The tree comes from the precomputed manifest when it is deployed, and
//! from a live walk over the contents API otherwise. The walk issues one
//! request at a time: [`RepositoryScan`] hands out the next directory to
//! list and folds each listing back into the tree.

use std::collections::VecDeque;

use leptos::logging::log;

use super::classify::{is_page_file, is_recognized_file};
use super::fetcher::ContentFetcher;
use super::tree::{NodeId, SolutionTree, TreeBuilder};
use crate::config::{LIVE_SCAN_MAX_DEPTH, PLATFORMS, PlatformInfo};
use crate::models::DirectoryEntry;

/// A directory waiting to be listed.
#[derive(Debug)]
struct PendingListing {
    node: NodeId,
    path: String,
    depth: usize,
    flat: bool,
}

/// Breadth-first walk over platform directories.
#[derive(Debug)]
pub struct RepositoryScan {
    builder: TreeBuilder,
    queue: VecDeque<PendingListing>,
    max_depth: usize,
}

impl RepositoryScan {
    pub fn new(platforms: &[PlatformInfo]) -> Self {
        Self::with_max_depth(platforms, LIVE_SCAN_MAX_DEPTH)
    }

    pub fn with_max_depth(platforms: &[PlatformInfo], max_depth: usize) -> Self {
        let mut builder = TreeBuilder::new();
        let queue = platforms
            .iter()
            .map(|platform| PendingListing {
                node: builder.add_platform(platform.key, None),
                path: platform.key.to_string(),
                depth: 0,
                flat: platform.flat,
            })
            .collect();

        Self {
            builder,
            queue,
            max_depth,
        }
    }

    /// Path of the next directory to list.
    pub fn next_path(&self) -> Option<&str> {
        self.queue.front().map(|p| p.path.as_str())
    }

    /// Fold the listing of [`next_path`](Self::next_path) into the tree.
    ///
    /// `None` (a failed request) leaves that subtree empty.
    pub fn apply(&mut self, listing: Option<Vec<DirectoryEntry>>) {
        let Some(pending) = self.queue.pop_front() else {
            return;
        };
        let Some(entries) = listing else {
            return;
        };

        for entry in entries.iter().filter(|e| e.is_file()) {
            if pending.depth == 0 {
                if pending.flat && is_page_file(&entry.name) {
                    self.builder.add_child(pending.node, &entry.name, true);
                }
            } else if is_recognized_file(&entry.name) {
                self.builder.mark_files(pending.node);
            }
        }

        if pending.depth >= self.max_depth {
            return;
        }

        for entry in entries.iter().filter(|e| e.is_dir() && !e.name.starts_with('.')) {
            let node = self.builder.add_child(pending.node, &entry.name, false);
            self.queue.push_back(PendingListing {
                node,
                path: format!("{}/{}", pending.path, entry.name),
                depth: pending.depth + 1,
                flat: false,
            });
        }
    }

    pub fn is_done(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn finish(self) -> SolutionTree {
        self.builder.build()
    }
}

/// Walk `platforms` over the contents API, one listing at a time.
pub async fn scan_repository(fetcher: &ContentFetcher, platforms: &[PlatformInfo]) -> SolutionTree {
    let mut scan = RepositoryScan::new(platforms);
    while let Some(path) = scan.next_path().map(str::to_string) {
        let listing = fetcher.fetch_directory(&path).await;
        scan.apply(listing);
    }
    scan.finish()
}

/// Load the solution tree: manifest first, live scan as fallback.
pub async fn load_tree(fetcher: &ContentFetcher) -> SolutionTree {
    if let Some(manifest) = fetcher.fetch_manifest().await {
        let tree = SolutionTree::from_manifest(&manifest);
        log!("Loaded {} items from manifest", tree.item_count());
        return tree;
    }

    log!("No manifest, scanning {} live", fetcher.repo());
    let tree = scan_repository(fetcher, PLATFORMS).await;
    log!("Scanned {} items", tree.item_count());
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryKind;

    fn dir(path: &str) -> DirectoryEntry {
        DirectoryEntry {
            kind: EntryKind::Dir,
            ..DirectoryEntry::file(path)
        }
    }

    fn segs(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    fn platforms() -> Vec<PlatformInfo> {
        ["kattis", "vicutils"]
            .iter()
            .filter_map(|k| crate::config::platform_info(k).copied())
            .collect()
    }

    #[test]
    fn test_scan_order_and_tree() {
        let mut scan = RepositoryScan::new(&platforms());

        assert_eq!(scan.next_path(), Some("kattis"));
        scan.apply(Some(vec![
            dir("kattis/two-pointers"),
            dir("kattis/.github"),
            DirectoryEntry::file("kattis/README.md"),
        ]));

        assert_eq!(scan.next_path(), Some("vicutils"));
        scan.apply(Some(vec![
            DirectoryEntry::file("vicutils/geometry.html"),
            DirectoryEntry::file("vicutils/helper.py"),
        ]));

        assert_eq!(scan.next_path(), Some("kattis/two-pointers"));
        scan.apply(Some(vec![
            DirectoryEntry::file("kattis/two-pointers/a.vn.py"),
            DirectoryEntry::file("kattis/two-pointers/a.vn.png"),
        ]));
        assert!(scan.is_done());

        let tree = scan.finish();
        assert!(tree.is_leaf(&segs(&["kattis", "two-pointers"])));
        assert!(tree.is_leaf(&segs(&["vicutils", "geometry.html"])));
        assert!(tree.lookup(&segs(&["kattis", ".github"])).is_none());
        assert!(tree.lookup(&segs(&["vicutils", "helper.py"])).is_none());
        assert_eq!(tree.item_count(), 2);
    }

    #[test]
    fn test_failed_listing_leaves_empty_subtree() {
        let mut scan = RepositoryScan::new(&platforms());
        scan.apply(None);
        scan.apply(Some(Vec::new()));
        assert!(scan.is_done());

        let tree = scan.finish();
        let kattis = tree.lookup(&segs(&["kattis"])).unwrap();
        assert_eq!(tree.node(kattis).item_count, 0);
        assert_eq!(tree.platforms().len(), 2);
    }

    #[test]
    fn test_depth_limit() {
        let mut scan = RepositoryScan::with_max_depth(&platforms()[..1], 1);
        scan.apply(Some(vec![dir("kattis/graphs")]));
        assert_eq!(scan.next_path(), Some("kattis/graphs"));
        scan.apply(Some(vec![
            dir("kattis/graphs/bfs"),
            DirectoryEntry::file("kattis/graphs/notes.txt"),
        ]));
        assert!(scan.is_done());

        let tree = scan.finish();
        assert!(tree.lookup(&segs(&["kattis", "graphs", "bfs"])).is_none());
        assert!(!tree.is_leaf(&segs(&["kattis", "graphs"])));
    }
}
