//! Solution folder classification.
//!
//! A folder is a problem item when it directly contains at least one
//! recognized file:
//!
//! | Group  | Rule                                               |
//! |--------|----------------------------------------------------|
//! | page   | ends with `.html`                                  |
//! | image  | `<stem>.vn.png` or `<stem>.vn.<step>.png`           |
//! | source | ends with `.vn.py`, without the `.shortest.` marker |
//!
//! The item kind follows page > image > source precedence.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::files::{ALTERNATE_MARKER, PAGE_SUFFIX, SEQUENCE_IMAGE_PATTERN, SOURCE_SUFFIX};
use crate::models::DirectoryEntry;

static SEQUENCE_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(SEQUENCE_IMAGE_PATTERN).expect("sequence image pattern is valid")
});

/// Classification tag of a problem item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProblemKind {
    /// Has a standalone interactive page
    Page,
    /// Has step-by-step images
    ImageSequence,
    /// Source code only
    SourceOnly,
}

impl ProblemKind {
    /// Short badge label.
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Page => "HTML",
            Self::ImageSequence => "IMAGE",
            Self::SourceOnly => "CODE",
        }
    }
}

/// An image with its position in the sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceImage {
    pub entry: DirectoryEntry,
    /// Embedded step number (0 when absent, saturated when too large)
    pub step: u64,
}

/// How the detail view arranges its content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailLayout {
    /// The page file replaces the whole view
    Page,
    /// One image next to the source
    SideBySide,
    /// Images first (in step order), then the source
    Stacked,
}

/// A classified problem folder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemItem {
    pub path: Vec<String>,
    pub kind: ProblemKind,
    pub pages: Vec<DirectoryEntry>,
    pub images: Vec<SequenceImage>,
    pub sources: Vec<DirectoryEntry>,
}

impl ProblemItem {
    /// Classify a folder listing. Returns `None` when no file is recognized.
    pub fn from_listing(path: Vec<String>, entries: &[DirectoryEntry]) -> Option<Self> {
        let files: Vec<&DirectoryEntry> = entries.iter().filter(|e| e.is_file()).collect();

        let pages: Vec<DirectoryEntry> = files
            .iter()
            .filter(|e| is_page_file(&e.name))
            .map(|e| (*e).clone())
            .collect();

        let mut images: Vec<(SequenceImage, bool)> = files
            .iter()
            .filter_map(|e| {
                image_step(&e.name).map(|step| {
                    (
                        SequenceImage {
                            entry: (*e).clone(),
                            step: step.unwrap_or(0),
                        },
                        step.is_some(),
                    )
                })
            })
            .collect();
        // The unnumbered image is a cover once numbered steps exist
        if images.iter().any(|(_, numbered)| *numbered) {
            images.retain(|(_, numbered)| *numbered);
        }
        let mut images: Vec<SequenceImage> = images.into_iter().map(|(img, _)| img).collect();
        images.sort_by(|a, b| a.step.cmp(&b.step).then_with(|| a.entry.name.cmp(&b.entry.name)));

        let sources: Vec<DirectoryEntry> = files
            .iter()
            .filter(|e| is_source_file(&e.name))
            .map(|e| (*e).clone())
            .collect();

        let kind = if !pages.is_empty() {
            ProblemKind::Page
        } else if !images.is_empty() {
            ProblemKind::ImageSequence
        } else if !sources.is_empty() {
            ProblemKind::SourceOnly
        } else {
            return None;
        };

        Some(Self {
            path,
            kind,
            pages,
            images,
            sources,
        })
    }

    /// Item made of a single page file (flat platforms).
    pub fn single_page(path: Vec<String>) -> Self {
        let page = DirectoryEntry::file(&path.join("/"));
        Self {
            path,
            kind: ProblemKind::Page,
            pages: vec![page],
            images: Vec::new(),
            sources: Vec::new(),
        }
    }

    /// The main source file, if any.
    pub fn primary_source(&self) -> Option<&DirectoryEntry> {
        self.sources.first()
    }

    /// The page file shown instead of the code layout, if any.
    pub fn page(&self) -> Option<&DirectoryEntry> {
        self.pages.first()
    }

    /// Pick the detail layout.
    ///
    /// `narrow` forces stacking on small viewports.
    pub fn layout(&self, has_source_text: bool, narrow: bool) -> DetailLayout {
        match self.kind {
            ProblemKind::Page => DetailLayout::Page,
            ProblemKind::ImageSequence | ProblemKind::SourceOnly => {
                if self.images.len() == 1 && has_source_text && !narrow {
                    DetailLayout::SideBySide
                } else {
                    DetailLayout::Stacked
                }
            }
        }
    }
}

/// Whether the file name is a standalone page.
pub fn is_page_file(name: &str) -> bool {
    name.ends_with(PAGE_SUFFIX)
}

/// Whether the file name is a primary (non-alternate) source file.
pub fn is_source_file(name: &str) -> bool {
    name.ends_with(SOURCE_SUFFIX) && !name.contains(ALTERNATE_MARKER)
}

/// Step of a sequence image: `None` if not an image, `Some(None)` if unnumbered.
pub fn image_step(name: &str) -> Option<Option<u64>> {
    let caps = SEQUENCE_IMAGE.captures(name)?;
    Some(caps.get(1).map(|m| m.as_str().parse().unwrap_or(u64::MAX)))
}

/// Whether a file makes its folder a problem item.
pub fn is_recognized_file(name: &str) -> bool {
    is_page_file(name) || is_source_file(name) || image_step(name).is_some()
}
