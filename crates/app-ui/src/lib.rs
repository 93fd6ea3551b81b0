//! User interface shell for Lumo
//!
//! This crate provides the display plumbing around the theming subsystem:
//! the declarative route table with per-route metadata, the redirect table,
//! and the application configuration (identity, logo, sidebar menu).
//!
//! Pages themselves are presentational and render from the datasets in
//! `app-data`; nothing here carries state beyond the current route.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod navigation;

// Re-export commonly used types
pub use config::{navigation_menu, AppConfig, Logo, MenuItem, ThemeOptions};
pub use navigation::{NavigationState, Route, Router, REDIRECTS};
