//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing and page layout (main entry point)
//! - [`platforms`] - Platform grid
//! - [`folder`] - Folder grid
//! - [`detail`] - Problem detail view
//! - [`breadcrumb`] - Path bar with clickable ancestors
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod breadcrumb;
pub mod detail;
pub mod folder;
pub mod icons;
pub mod loading;
pub mod platforms;
pub mod router;

pub use router::AppRouter;
