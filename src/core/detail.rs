//! Problem detail assembly.

use super::classify::{ProblemItem, is_page_file};
use super::fetcher::ContentFetcher;
use super::header::SolutionHeader;
use crate::config::is_flat_platform;

/// Everything the detail view renders for one item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailContent {
    /// `None` when the listing failed or holds no recognized files
    pub item: Option<ProblemItem>,
    /// Decoded primary source file. Page items load it too, since the
    /// header is read from it.
    pub source: Option<String>,
    pub header: SolutionHeader,
    /// Raw markup of the page file, for page items
    pub page_markup: Option<String>,
}

impl DetailContent {
    pub fn has_source(&self) -> bool {
        self.source.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Store the source text and parse its header.
    pub fn set_source(&mut self, source: Option<String>) {
        self.header = source
            .as_deref()
            .map(SolutionHeader::parse)
            .unwrap_or_default();
        self.source = source;
    }
}

/// Whether `path` names a single page file of a flat platform.
pub fn is_single_page(path: &[String]) -> bool {
    matches!(path, [platform, file] if is_flat_platform(platform) && is_page_file(file))
}

/// Fetch and classify the item at `path`.
pub async fn assemble_detail(fetcher: &ContentFetcher, path: &[String]) -> DetailContent {
    let mut content = DetailContent::default();

    if is_single_page(path) {
        content.item = Some(ProblemItem::single_page(path.to_vec()));
    } else if let Some(entries) = fetcher.fetch_directory(&path.join("/")).await {
        content.item = ProblemItem::from_listing(path.to_vec(), &entries);
    }

    let Some(item) = content.item.clone() else {
        return content;
    };

    if let Some(source) = item.primary_source() {
        let text = fetcher.fetch_text(&source.path).await;
        content.set_source(text);
    }
    if let Some(page) = item.page() {
        content.page_markup = fetcher.fetch_text(&page.path).await;
    }

    content
}
