//! Indexed solution tree.
//!
//! Nodes live in one arena (`Vec`) and refer to each other by [`NodeId`].
//! Platforms are the root nodes. A `(parent, name)` index makes path
//! lookups a hash probe per segment instead of a scan over siblings.
//!
//! # Path Convention
//!
//! - Platform: `["kattis"]`
//! - Folder: `["kattis", "graphs", "bfs"]`
//! - Flat page item: `["vicutils", "geometry.html"]`

use std::collections::HashMap;

use crate::models::{Manifest, ManifestNode, PlatformManifest};

/// Index of a node in a [`SolutionTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A platform or folder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeNode {
    /// Name relative to the parent
    pub name: String,
    pub parent: Option<NodeId>,
    /// Children sorted by name
    pub children: Vec<NodeId>,
    /// Directly contains recognized solution files (a leaf item)
    pub has_files: bool,
    /// Leaf items in this subtree, including this node
    pub item_count: usize,
    /// Card image (platforms only)
    pub image: Option<String>,
}

/// Immutable solution tree. Build one with [`TreeBuilder`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolutionTree {
    nodes: Vec<TreeNode>,
    platforms: Vec<NodeId>,
    index: HashMap<(Option<NodeId>, String), NodeId>,
}

impl SolutionTree {
    /// Create an empty tree.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the tree described by a manifest.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let mut builder = TreeBuilder::new();

        for platform in &manifest.platforms {
            let root = builder.add_platform(&platform.name, platform.image.clone());
            // Iterative walk: (parent, nodes to insert under it)
            let mut stack: Vec<(NodeId, &[ManifestNode])> = vec![(root, &platform.tree)];
            while let Some((parent, nodes)) = stack.pop() {
                for node in nodes {
                    let id = builder.add_child(parent, &node.name, node.has_files);
                    if !node.children.is_empty() {
                        stack.push((id, &node.children));
                    }
                }
            }
        }

        builder.build()
    }

    /// Serialize the tree back to the manifest shape.
    pub fn to_manifest(&self) -> Manifest {
        Manifest {
            platforms: self
                .platforms
                .iter()
                .map(|&id| {
                    let node = self.node(id);
                    PlatformManifest {
                        name: node.name.clone(),
                        image: node.image.clone(),
                        count: node.item_count,
                        tree: node.children.iter().map(|&c| self.manifest_node(c)).collect(),
                    }
                })
                .collect(),
        }
    }

    fn manifest_node(&self, id: NodeId) -> ManifestNode {
        let node = self.node(id);
        ManifestNode {
            name: node.name.clone(),
            has_files: node.has_files,
            children: node.children.iter().map(|&c| self.manifest_node(c)).collect(),
        }
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    /// Checked access for ids that may come from an earlier tree.
    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    /// Platform nodes in display order.
    pub fn platforms(&self) -> &[NodeId] {
        &self.platforms
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    /// Resolve a path to a node.
    pub fn lookup(&self, path: &[String]) -> Option<NodeId> {
        let mut current: Option<NodeId> = None;
        for segment in path {
            current = Some(*self.index.get(&(current, segment.clone()))?);
        }
        current
    }

    /// Nodes listed under a path: platforms for the root, children otherwise.
    pub fn children_at(&self, path: &[String]) -> Option<&[NodeId]> {
        if path.is_empty() {
            return Some(&self.platforms);
        }
        self.lookup(path).map(|id| self.node(id).children.as_slice())
    }

    /// Whether the path resolves to a leaf item.
    pub fn is_leaf(&self, path: &[String]) -> bool {
        self.lookup(path).is_some_and(|id| self.node(id).has_files)
    }

    /// Full path of a node.
    pub fn path_of(&self, id: NodeId) -> Vec<String> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(id) = current {
            let node = self.node(id);
            path.push(node.name.clone());
            current = node.parent;
        }
        path.reverse();
        path
    }

    /// Total number of leaf items.
    pub fn item_count(&self) -> usize {
        self.platforms.iter().map(|&id| self.node(id).item_count).sum()
    }
}

/// Incremental [`SolutionTree`] construction.
///
/// Children must be added after their parent, which the arena relies on to
/// compute subtree counts in a single reverse pass.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    tree: SolutionTree,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or reuse) a platform root.
    pub fn add_platform(&mut self, name: &str, image: Option<String>) -> NodeId {
        let id = self.insert(None, name, false);
        if image.is_some() {
            self.tree.nodes[id.0].image = image;
        }
        id
    }

    /// Add (or reuse) a child node. Re-adding a name merges `has_files`.
    pub fn add_child(&mut self, parent: NodeId, name: &str, has_files: bool) -> NodeId {
        self.insert(Some(parent), name, has_files)
    }

    /// Mark an existing node as containing solution files.
    pub fn mark_files(&mut self, id: NodeId) {
        self.tree.nodes[id.0].has_files = true;
    }

    fn insert(&mut self, parent: Option<NodeId>, name: &str, has_files: bool) -> NodeId {
        let key = (parent, name.to_string());
        if let Some(&existing) = self.tree.index.get(&key) {
            self.tree.nodes[existing.0].has_files |= has_files;
            return existing;
        }

        let id = NodeId(self.tree.nodes.len());
        self.tree.nodes.push(TreeNode {
            name: name.to_string(),
            parent,
            children: Vec::new(),
            has_files,
            item_count: 0,
            image: None,
        });
        self.tree.index.insert(key, id);
        match parent {
            Some(p) => self.tree.nodes[p.0].children.push(id),
            None => self.tree.platforms.push(id),
        }
        id
    }

    /// Finish construction: sort children and compute subtree counts.
    pub fn build(mut self) -> SolutionTree {
        let names: Vec<String> = self.tree.nodes.iter().map(|n| n.name.to_lowercase()).collect();
        for node in &mut self.tree.nodes {
            node.children.sort_by(|a, b| names[a.0].cmp(&names[b.0]).then(a.cmp(b)));
        }

        for i in (0..self.tree.nodes.len()).rev() {
            let node = &self.tree.nodes[i];
            let count = usize::from(node.has_files)
                + node
                    .children
                    .iter()
                    .map(|c| self.tree.nodes[c.0].item_count)
                    .sum::<usize>();
            self.tree.nodes[i].item_count = count;
        }

        self.tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    fn sample_tree() -> SolutionTree {
        let mut b = TreeBuilder::new();
        let kattis = b.add_platform("kattis", Some("images/kattis.png".into()));
        b.add_child(kattis, "two-pointers", true);
        let graphs = b.add_child(kattis, "graphs", false);
        b.add_child(graphs, "bfs", true);
        b.add_child(graphs, "dfs", true);
        b.add_platform("leetcode", None);
        b.build()
    }

    #[test]
    fn test_lookup_and_paths() {
        let tree = sample_tree();

        let bfs = tree.lookup(&segs(&["kattis", "graphs", "bfs"])).unwrap();
        assert_eq!(tree.path_of(bfs), segs(&["kattis", "graphs", "bfs"]));
        assert!(tree.lookup(&segs(&["kattis", "missing"])).is_none());
        assert!(tree.lookup(&segs(&["graphs"])).is_none());
        assert!(tree.lookup(&[]).is_none());
    }

    #[test]
    fn test_recursive_counts() {
        let tree = sample_tree();
        let kattis = tree.lookup(&segs(&["kattis"])).unwrap();
        let graphs = tree.lookup(&segs(&["kattis", "graphs"])).unwrap();
        let leetcode = tree.lookup(&segs(&["leetcode"])).unwrap();

        assert_eq!(tree.node(kattis).item_count, 3);
        assert_eq!(tree.node(graphs).item_count, 2);
        assert_eq!(tree.node(leetcode).item_count, 0);
        assert_eq!(tree.item_count(), 3);
    }

    #[test]
    fn test_children_sorted_by_name() {
        let tree = sample_tree();
        let names: Vec<&str> = tree
            .children_at(&segs(&["kattis"]))
            .unwrap()
            .iter()
            .map(|&id| tree.node(id).name.as_str())
            .collect();
        assert_eq!(names, vec!["graphs", "two-pointers"]);
        assert_eq!(tree.children_at(&[]).unwrap().len(), 2);
    }

    #[test]
    fn test_leaf_detection() {
        let tree = sample_tree();
        assert!(tree.is_leaf(&segs(&["kattis", "two-pointers"])));
        assert!(!tree.is_leaf(&segs(&["kattis", "graphs"])));
        assert!(!tree.is_leaf(&segs(&["kattis", "nope"])));
    }

    #[test]
    fn test_duplicate_insert_merges() {
        let mut b = TreeBuilder::new();
        let p = b.add_platform("aoc", None);
        let day = b.add_child(p, "07", false);
        assert_eq!(b.add_child(p, "07", true), day);
        let tree = b.build();
        assert_eq!(tree.node(day).item_count, 1);
        assert_eq!(tree.children_at(&segs(&["aoc"])).unwrap().len(), 1);
    }

    #[test]
    fn test_manifest_conversion_keeps_structure() {
        let tree = sample_tree();
        let manifest = tree.to_manifest();

        assert_eq!(manifest.platforms[0].count, 3);
        assert_eq!(manifest.platforms[0].image.as_deref(), Some("images/kattis.png"));
        assert_eq!(SolutionTree::from_manifest(&manifest).to_manifest(), manifest);
    }

    #[test]
    fn test_empty_platform_from_manifest() {
        let manifest: Manifest =
            serde_json::from_str(r#"{"platforms": [{"name": "leetcode", "count": 7, "tree": []}]}"#)
                .unwrap();
        let tree = SolutionTree::from_manifest(&manifest);
        let leetcode = tree.platforms()[0];

        // Counts are recomputed, not trusted
        assert_eq!(tree.node(leetcode).item_count, 0);
        assert!(tree.children_at(&segs(&["leetcode"])).unwrap().is_empty());
    }
}
