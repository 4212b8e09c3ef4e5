//! View state derived from the route and the loaded tree.

use crate::core::NodeId;

/// The screen currently displayed.
///
/// Never stored independently: it is recomputed from the URL fragment
/// whenever the fragment or the loaded data changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    /// Solution tree not loaded yet
    #[default]
    Loading,
    /// Platform grid (root)
    PlatformList,
    /// Child folders of `path`
    FolderList { path: Vec<String> },
    /// A resolved leaf item
    ProblemDetail { path: Vec<String>, node: NodeId },
}

impl ViewState {
    /// Path segments displayed by this view.
    pub fn path(&self) -> &[String] {
        match self {
            Self::Loading | Self::PlatformList => &[],
            Self::FolderList { path } | Self::ProblemDetail { path, .. } => path,
        }
    }
}
