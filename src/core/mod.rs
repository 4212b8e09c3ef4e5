//! Core logic of the solution browser.
//!
//! This module provides:
//! - [`SolutionTree`] arena built from the manifest or a live [`scan_repository`]
//! - [`ProblemItem`] classification and [`SolutionHeader`] parsing
//! - [`ContentFetcher`] with its [`FolderCache`]
//! - [`resolve`] from routes to view states, guarded by [`NavGeneration`]

pub mod cache;
mod classify;
mod detail;
pub mod error;
mod fetcher;
mod header;
mod navigation;
mod resolve;
mod scan;
mod tree;

pub use cache::{CachePolicy, FolderCache};
pub use classify::{
    DetailLayout, ProblemItem, ProblemKind, SequenceImage, image_step, is_page_file,
    is_recognized_file, is_source_file,
};
pub use detail::{DetailContent, assemble_detail, is_single_page};
pub use fetcher::ContentFetcher;
pub use header::SolutionHeader;
pub use navigation::{NavGeneration, NavToken};
pub use resolve::{resolve, route_for};
pub use scan::{RepositoryScan, load_tree, scan_repository};
pub use tree::{NodeId, SolutionTree, TreeBuilder, TreeNode};
