//! Browser for a repository of competitive programming solutions.
//!
//! The site runs entirely in the browser: it reads the repository through
//! the GitHub contents API (or a precomputed `data.json` manifest) and
//! renders platforms, folders and solutions behind hash routes.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use app::App;
