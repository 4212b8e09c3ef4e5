//! Folder grid.
//!
//! One card per immediate child of the current folder. Leaf children (folders
//! that directly hold solution files) carry a badge and open the detail view.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::is_flat_platform;
use crate::core::SolutionTree;
use crate::utils::format::{count_label, display_title, platform_label};

stylance::import_crate_style!(css, "src/components/folder.module.css");

/// Card data for one child folder.
#[derive(Clone, Debug, PartialEq)]
struct FolderCard {
    name: String,
    count: usize,
    is_leaf: bool,
    has_children: bool,
}

/// What the folder view shows for a path.
#[derive(Clone, Debug, PartialEq)]
enum FolderContents {
    /// Path is not in the tree
    Missing,
    Listing {
        /// The folder itself holds solution files
        is_leaf: bool,
        cards: Vec<FolderCard>,
    },
}

fn folder_contents(tree: &SolutionTree, path: &[String]) -> FolderContents {
    let Some(id) = tree.lookup(path) else {
        return FolderContents::Missing;
    };
    let node = tree.node(id);
    let cards = node
        .children
        .iter()
        .map(|&child| {
            let child = tree.node(child);
            FolderCard {
                name: child.name.clone(),
                count: child.item_count,
                is_leaf: child.has_files,
                has_children: !child.children.is_empty(),
            }
        })
        .collect();

    FolderContents::Listing {
        is_leaf: node.has_files,
        cards,
    }
}

/// Heading for a folder: platform label at the top level, title otherwise.
fn folder_heading(path: &[String]) -> String {
    match path {
        [] => String::new(),
        [platform] => platform_label(platform),
        [.., last] => display_title(last),
    }
}

#[component]
pub fn FolderList(path: Vec<String>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let platform = path.first().cloned().unwrap_or_default();
    let heading = folder_heading(&path);
    let location = path.join("/");

    let contents = {
        let path = path.clone();
        Memo::new(move |_| {
            ctx.tree.with(|tree| {
                tree.as_ref()
                    .map(|tree| folder_contents(tree, &path))
                    .unwrap_or(FolderContents::Missing)
            })
        })
    };

    let card_view = move |card: FolderCard, path: Vec<String>, platform: String| {
        let mut target = path;
        target.push(card.name.clone());
        let title = if is_flat_platform(&platform) && target.len() == 2 {
            display_title(&card.name)
        } else {
            card.name.clone()
        };
        let icon = if card.is_leaf { ic::FILE_CODE } else { ic::FOLDER };
        let location = target.join("/");

        view! {
            <button class=css::card on:click=move |_| ctx.navigate_to(target.clone())>
                <span class=css::cardIcon><Icon icon=icon /></span>
                <span class=css::cardBody>
                    <span class=css::cardTitle>{title}</span>
                    <span class=css::cardPath>{location}</span>
                </span>
                <span class=css::cardMeta>
                    {card.is_leaf.then(|| view! { <span class=css::badge>"Solution"</span> })}
                    {(card.has_children || !card.is_leaf).then(|| view! {
                        <span class=css::count>{count_label(card.count, &platform)}</span>
                    })}
                </span>
            </button>
        }
    };

    view! {
        <section>
            <header class=css::heading>
                <h2 class=css::title>{heading}</h2>
                <span class=css::location>{location}</span>
            </header>
            {move || match contents.get() {
                FolderContents::Missing => view! {
                    <p class=css::notice>"Error loading folder"</p>
                }.into_any(),
                FolderContents::Listing { is_leaf, cards } => {
                    let open_self = {
                        let path = path.clone();
                        is_leaf.then(|| view! {
                            <button
                                class=format!("{} {}", css::card, css::selfCard)
                                on:click=move |_| ctx.navigate_to(path.clone())
                            >
                                <span class=css::cardIcon><Icon icon=ic::FILE_CODE /></span>
                                <span class=css::cardBody>
                                    <span class=css::cardTitle>"Open solution"</span>
                                    <span class=css::cardPath>"Files in this folder"</span>
                                </span>
                                <span class=css::cardMeta>
                                    <span class=css::badge>"Solution"</span>
                                </span>
                            </button>
                        })
                    };
                    let empty = cards.is_empty() && !is_leaf;
                    view! {
                        <div class=css::grid>
                            {open_self}
                            {cards
                                .into_iter()
                                .map(|card| card_view(card, path.clone(), platform.clone()))
                                .collect_view()}
                        </div>
                        {empty.then(|| view! {
                            <p class=css::notice>"This folder is empty."</p>
                        })}
                    }.into_any()
                }
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TreeBuilder;

    fn segs(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    fn tree() -> SolutionTree {
        let mut b = TreeBuilder::new();
        let kattis = b.add_platform("kattis", None);
        let tp = b.add_child(kattis, "two-pointers", true);
        b.add_child(tp, "variant", true);
        b.add_child(kattis, "graphs", false);
        b.build()
    }

    #[test]
    fn test_folder_contents() {
        let tree = tree();
        let FolderContents::Listing { is_leaf, cards } = folder_contents(&tree, &segs(&["kattis"]))
        else {
            panic!("kattis should be listed");
        };

        assert!(!is_leaf);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].name, "graphs");
        assert!(!cards[0].is_leaf);
        assert_eq!(cards[1].count, 2);
        assert!(cards[1].is_leaf && cards[1].has_children);
    }

    #[test]
    fn test_missing_and_leaf_folders() {
        let tree = tree();
        assert_eq!(
            folder_contents(&tree, &segs(&["leetcode", "two-sum"])),
            FolderContents::Missing
        );
        assert!(matches!(
            folder_contents(&tree, &segs(&["kattis", "two-pointers"])),
            FolderContents::Listing { is_leaf: true, .. }
        ));
    }

    #[test]
    fn test_folder_heading() {
        assert_eq!(folder_heading(&segs(&["aoc"])), "Advent of Code");
        assert_eq!(folder_heading(&segs(&["aoc", "2025", "day-07"])), "Day 07");
    }
}
