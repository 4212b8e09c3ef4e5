//! Route ⇄ view-state resolution.
//!
//! [`resolve`] turns the parsed fragment into the screen to show, and
//! [`route_for`] picks the fragment for a navigation target. Both read the
//! tree only, so they run without a DOM.

use leptos::logging::warn;

use super::tree::SolutionTree;
use crate::models::{Route, ViewState};

/// Derive the view for `route`.
///
/// `tree` is `None` while the data is still loading; every route then maps
/// to [`ViewState::Loading`] and is resolved again once data arrives. With
/// data loaded, a detail route whose path is missing (or is not a leaf)
/// degrades to the folder view of the same path.
pub fn resolve(route: &Route, tree: Option<&SolutionTree>) -> ViewState {
    let Some(tree) = tree else {
        return ViewState::Loading;
    };

    match route {
        Route::Root => ViewState::PlatformList,
        Route::Folder { path } => ViewState::FolderList { path: path.clone() },
        Route::View { path } => match tree.lookup(path) {
            Some(node) if tree.node(node).has_files => ViewState::ProblemDetail {
                path: path.clone(),
                node,
            },
            Some(_) => ViewState::FolderList { path: path.clone() },
            None => {
                warn!("no item at '{}', showing folder view", path.join("/"));
                ViewState::FolderList { path: path.clone() }
            }
        },
    }
}

/// Route for navigating to `path`: leaves open the detail view, everything
/// else the folder view.
pub fn route_for(path: Vec<String>, tree: &SolutionTree) -> Route {
    if tree.is_leaf(&path) {
        Route::view(path)
    } else {
        Route::folder(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tree::TreeBuilder;

    fn segs(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    fn tree() -> SolutionTree {
        let mut b = TreeBuilder::new();
        let kattis = b.add_platform("kattis", None);
        b.add_child(kattis, "two-pointers", true);
        let graphs = b.add_child(kattis, "graphs", false);
        b.add_child(graphs, "Ball Bearings", true);
        b.add_platform("leetcode", None);
        b.build()
    }

    #[test]
    fn test_pending_data_is_loading() {
        let route = Route::from_hash("view/kattis/two-pointers");
        assert_eq!(resolve(&route, None), ViewState::Loading);
        assert_eq!(resolve(&Route::Root, None), ViewState::Loading);
    }

    #[test]
    fn test_missing_item_degrades_to_folder() {
        let tree = tree();
        let state = resolve(&Route::from_hash("view/leetcode/two-sum"), Some(&tree));
        assert_eq!(
            state,
            ViewState::FolderList {
                path: segs(&["leetcode", "two-sum"])
            }
        );
    }

    #[test]
    fn test_branch_behind_view_prefix_is_folder() {
        let tree = tree();
        let state = resolve(&Route::from_hash("view/kattis/graphs"), Some(&tree));
        assert_eq!(
            state,
            ViewState::FolderList {
                path: segs(&["kattis", "graphs"])
            }
        );
    }

    #[test]
    fn test_route_for_matches_leafness() {
        let tree = tree();
        for path in [
            segs(&["kattis"]),
            segs(&["kattis", "graphs"]),
            segs(&["kattis", "graphs", "Ball Bearings"]),
            segs(&["kattis", "two-pointers"]),
            segs(&["nowhere"]),
            segs(&["view", "graphs"]),
        ] {
            let route = route_for(path.clone(), &tree);
            let reparsed = Route::from_hash(&route.to_fragment());
            assert_eq!(reparsed.path(), path.as_slice());
            assert_eq!(reparsed.is_view(), tree.is_leaf(&path));
        }
        assert_eq!(route_for(Vec::new(), &tree), Route::Root);
    }

    #[test]
    fn test_resolution_is_stable_under_reserialization() {
        let tree = tree();
        for fragment in [
            "",
            "kattis",
            "kattis/graphs",
            "view/kattis/two-pointers",
            "view/kattis/graphs/Ball%20Bearings",
            "view/leetcode/two-sum",
        ] {
            let first = resolve(&Route::from_hash(fragment), Some(&tree));
            let route = match &first {
                ViewState::Loading | ViewState::PlatformList => Route::Root,
                ViewState::FolderList { path } => Route::folder(path.clone()),
                ViewState::ProblemDetail { path, .. } => Route::view(path.clone()),
            };
            let second = resolve(&Route::from_hash(&route.to_fragment()), Some(&tree));
            assert_eq!(first, second, "{fragment}");
        }
    }

    #[test]
    fn test_click_through_scenario() {
        let tree = tree();

        let root = Route::from_hash("");
        assert_eq!(resolve(&root, Some(&tree)), ViewState::PlatformList);

        let platform = route_for(segs(&["kattis"]), &tree);
        assert_eq!(platform.to_fragment(), "kattis");
        assert_eq!(
            resolve(&platform, Some(&tree)),
            ViewState::FolderList {
                path: segs(&["kattis"])
            }
        );

        let leaf = route_for(segs(&["kattis", "two-pointers"]), &tree);
        assert_eq!(leaf.to_fragment(), "view/kattis/two-pointers");
        let node = tree.lookup(&segs(&["kattis", "two-pointers"])).unwrap();
        assert_eq!(
            resolve(&Route::from_hash(&leaf.to_fragment()), Some(&tree)),
            ViewState::ProblemDetail {
                path: segs(&["kattis", "two-pointers"]),
                node
            }
        );
    }
}
