//! Backing repository identification.
//!
//! The site is served from `https://<host>/<owner>/<name>/`, so the first two
//! path segments of the page location name the repository whose contents
//! are browsed. Anything shorter falls back to [`DEFAULT_REPOSITORY`].

use std::fmt;

use crate::config::{DEFAULT_BRANCH, DEFAULT_REPOSITORY, GITHUB_API_BASE, GITHUB_WEB_BASE};

/// GitHub repository as an `(owner, name)` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepositoryPath {
    pub owner: String,
    pub name: String,
}

impl RepositoryPath {
    /// Create a repository path from its parts.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Resolve the repository from a URL pathname (e.g. `/Vic-Nas/PythonSolutions/index.html`).
    pub fn from_pathname(pathname: &str) -> Self {
        let mut segments = pathname.split('/').filter(|s| !s.is_empty());
        match (segments.next(), segments.next()) {
            (Some(owner), Some(name)) => Self::new(owner, name),
            _ => Self::default(),
        }
    }

    /// Resolve the repository from the current browser location.
    pub fn current() -> Self {
        let pathname = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        Self::from_pathname(&pathname)
    }

    /// Contents API URL for a path inside the repository.
    pub fn contents_url(&self, path: &str) -> String {
        let path = path.trim_matches('/');
        let encoded = path
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        format!(
            "{}/repos/{}/{}/contents/{}",
            GITHUB_API_BASE, self.owner, self.name, encoded
        )
    }

    /// GitHub web URL for a directory.
    pub fn tree_url(&self, path: &str) -> String {
        format!(
            "{}/{}/{}/tree/{}/{}",
            GITHUB_WEB_BASE,
            self.owner,
            self.name,
            DEFAULT_BRANCH,
            path.trim_matches('/')
        )
    }

    /// GitHub web URL for a single file.
    pub fn blob_url(&self, path: &str) -> String {
        format!(
            "{}/{}/{}/blob/{}/{}",
            GITHUB_WEB_BASE,
            self.owner,
            self.name,
            DEFAULT_BRANCH,
            path.trim_matches('/')
        )
    }
}

impl Default for RepositoryPath {
    fn default() -> Self {
        let (owner, name) = DEFAULT_REPOSITORY
            .split_once('/')
            .unwrap_or((DEFAULT_REPOSITORY, ""));
        Self::new(owner, name)
    }
}

impl fmt::Display for RepositoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pathname() {
        assert_eq!(
            RepositoryPath::from_pathname("/octo/solutions/"),
            RepositoryPath::new("octo", "solutions")
        );
        assert_eq!(
            RepositoryPath::from_pathname("/octo/solutions/index.html"),
            RepositoryPath::new("octo", "solutions")
        );
    }

    #[test]
    fn test_fallback_to_default() {
        let default = RepositoryPath::from_pathname("/");
        assert_eq!(default.to_string(), "Vic-Nas/PythonSolutions");
        assert_eq!(RepositoryPath::from_pathname(""), default);
        assert_eq!(RepositoryPath::from_pathname("/index.html"), default);
    }

    #[test]
    fn test_contents_url_encodes_segments() {
        let repo = RepositoryPath::new("octo", "solutions");
        assert_eq!(
            repo.contents_url("kattis/Suspension Bridges"),
            "https://api.github.com/repos/octo/solutions/contents/kattis/Suspension%20Bridges"
        );
        assert_eq!(
            repo.contents_url("leetcode"),
            "https://api.github.com/repos/octo/solutions/contents/leetcode"
        );
    }

    #[test]
    fn test_web_urls() {
        let repo = RepositoryPath::new("octo", "solutions");
        assert_eq!(
            repo.tree_url("kattis/two-pointers"),
            "https://github.com/octo/solutions/tree/main/kattis/two-pointers"
        );
        assert_eq!(
            repo.blob_url("/vicutils/geometry.html"),
            "https://github.com/octo/solutions/blob/main/vicutils/geometry.html"
        );
    }
}
