//! GitHub contents API records.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// Kind of a contents API item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    /// Symlinks and submodules are listed but never browsed.
    #[serde(other)]
    Other,
}

/// One item of a directory listing.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct DirectoryEntry {
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub download_url: Option<String>,
}

impl DirectoryEntry {
    /// Build a file entry for a known repository path.
    pub fn file(path: &str) -> Self {
        let path = path.trim_matches('/');
        Self {
            name: path.rsplit('/').next().unwrap_or(path).to_string(),
            path: path.to_string(),
            kind: EntryKind::File,
            download_url: None,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// URL used to display the file in the page.
    ///
    /// Prefers the API's raw download URL and falls back to the
    /// repository-relative path, which resolves when the site is served
    /// from the repository itself.
    pub fn display_url(&self) -> String {
        self.download_url.clone().unwrap_or_else(|| self.site_url())
    }

    /// Repository-relative URL, for files served by the site itself.
    pub fn site_url(&self) -> String {
        self.path
            .split('/')
            .map(|s| urlencoding::encode(s).into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Single-file record returned by the contents API.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RawFileRecord {
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub encoding: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
}

impl RawFileRecord {
    /// Decode the payload into text.
    ///
    /// The API wraps base64 content at 60 columns; whitespace is stripped
    /// before decoding. Invalid UTF-8 is replaced rather than rejected.
    ///
    /// Files over 1 MB come back with encoding `none` and no payload; those
    /// (and any other empty non-base64 payload) decode to `None` and must be
    /// read from [`download_url`](Self::download_url) instead.
    pub fn decode_text(&self) -> Option<String> {
        match self.encoding.as_deref() {
            Some("none") => None,
            Some(_) if self.content.is_empty() => None,
            Some("base64") | None => {
                let compact: String = self
                    .content
                    .chars()
                    .filter(|c| !c.is_ascii_whitespace())
                    .collect();
                let bytes = STANDARD.decode(compact).ok()?;
                Some(String::from_utf8_lossy(&bytes).into_owned())
            }
            Some(_) => Some(self.content.clone()),
        }
    }

    /// Raw URL to read the file from when the payload was left out.
    pub fn raw_fallback_url(&self) -> Option<&str> {
        if self.decode_text().is_some() {
            return None;
        }
        self.download_url.as_deref().filter(|url| !url.is_empty())
    }
}
