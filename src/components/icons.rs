//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::core::ProblemKind;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight,
        LuExternalLink as ExternalLink, LuFileCode as FileCode, LuFolder as Folder,
        LuGithub as Github, LuGlobe as Page, LuHouse as Home, LuImage as FileImage,
        LuInfo as Info, LuLink as ProblemLink, LuRefreshCw as Refresh,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Refresh, BsBoxArrowUpRight as ExternalLink,
        BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight,
        BsFileEarmarkCode as FileCode, BsFileEarmarkImage as FileImage, BsFolderFill as Folder,
        BsGithub as Github, BsGlobe as Page, BsHouseFill as Home, BsInfoCircle as Info,
        BsLink45deg as ProblemLink,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(HOME, Home);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE_CODE, FileCode);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(PAGE, Page);
themed_icon!(PROBLEM_LINK, ProblemLink);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(GITHUB, Github);
themed_icon!(INFO, Info);
themed_icon!(REFRESH, Refresh);

/// Icon for a classified item.
pub fn for_kind(kind: ProblemKind) -> Icon {
    match kind {
        ProblemKind::Page => PAGE,
        ProblemKind::ImageSequence => FILE_IMAGE,
        ProblemKind::SourceOnly => FILE_CODE,
    }
}
