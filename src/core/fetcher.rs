//! Contents API access for one repository.
//!
//! Every method converts failures into `None` after logging them, so views
//! can degrade instead of erroring.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::logging::warn;

use super::cache::{CachePolicy, FolderCache};
use crate::config::{MANIFEST_URL, cache};
use crate::models::{DirectoryEntry, Manifest, RawFileRecord, RepositoryPath};
use crate::utils::{self, fetch_content, fetch_github_json, fetch_json_cached};

/// Fetches listings and files for a repository, memoizing listings.
#[derive(Clone, Debug)]
pub struct ContentFetcher {
    repo: RepositoryPath,
    folders: Rc<RefCell<FolderCache>>,
}

impl ContentFetcher {
    pub fn new(repo: RepositoryPath) -> Self {
        Self::with_policy(
            repo,
            CachePolicy::Expiring {
                ttl_ms: cache::FOLDER_TTL_MS,
            },
        )
    }

    pub fn with_policy(repo: RepositoryPath, policy: CachePolicy) -> Self {
        Self {
            repo,
            folders: Rc::new(RefCell::new(FolderCache::new(policy))),
        }
    }

    pub fn repo(&self) -> &RepositoryPath {
        &self.repo
    }

    /// List a directory.
    ///
    /// Served from the folder cache while the cached listing is fresh.
    pub async fn fetch_directory(&self, path: &str) -> Option<Vec<DirectoryEntry>> {
        let now = utils::now_ms();
        if let Some(entries) = self.folders.borrow_mut().get(path, now) {
            return Some(entries);
        }

        let url = self.repo.contents_url(path);
        match fetch_github_json::<Vec<DirectoryEntry>>(&url).await {
            Ok(entries) => {
                self.folders
                    .borrow_mut()
                    .insert(path, entries.clone(), utils::now_ms());
                Some(entries)
            }
            Err(e) => {
                warn!("Failed to list '{}' in {}: {}", path, self.repo, e);
                None
            }
        }
    }

    /// Fetch the contents record of a single file.
    pub async fn fetch_file_content(&self, path: &str) -> Option<RawFileRecord> {
        let url = self.repo.contents_url(path);
        match fetch_github_json::<RawFileRecord>(&url).await {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Failed to fetch '{}' from {}: {}", path, self.repo, e);
                None
            }
        }
    }

    /// Fetch a file and decode it to text.
    ///
    /// Files too large for the contents API are read from their raw
    /// download URL.
    pub async fn fetch_text(&self, path: &str) -> Option<String> {
        let record = self.fetch_file_content(path).await?;
        if let Some(text) = record.decode_text() {
            return Some(text);
        }

        let Some(url) = record.raw_fallback_url() else {
            warn!(
                "Could not decode '{}' ({})",
                path,
                record.encoding.as_deref().unwrap_or("unknown encoding")
            );
            return None;
        };
        match fetch_content(url).await {
            Ok(text) => Some(text),
            Err(e) => {
                warn!("Failed to download '{}': {}", path, e);
                None
            }
        }
    }

    /// Load the precomputed manifest (cached for the session).
    pub async fn fetch_manifest(&self) -> Option<Manifest> {
        match fetch_json_cached::<Manifest>(MANIFEST_URL, cache::MANIFEST_KEY).await {
            Ok(manifest) => Some(manifest),
            Err(e) if e.is_not_found() => None,
            Err(e) => {
                warn!("Failed to load {}: {}", MANIFEST_URL, e);
                None
            }
        }
    }

    /// Drop every cached listing and the session copy of the manifest.
    pub fn clear_caches(&self) {
        self.folders.borrow_mut().clear();
        utils::cache::remove(cache::MANIFEST_KEY);
    }
}
