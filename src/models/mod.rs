//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`RepositoryPath`] - The GitHub repository being browsed
//! - [`DirectoryEntry`], [`RawFileRecord`] - Contents API records
//! - [`Manifest`] - Precomputed directory tree (`data.json`)
//! - [`Route`] - Hash-based navigation
//! - [`ViewState`] - The screen derived from route + data

mod contents;
mod manifest;
mod repository;
mod route;
mod view;

pub use contents::{DirectoryEntry, EntryKind, RawFileRecord};
pub use manifest::{Manifest, ManifestNode, PlatformManifest};
pub use repository::RepositoryPath;
pub use route::{Route, VIEW_PREFIX};
pub use view::ViewState;
