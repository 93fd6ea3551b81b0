//! Runtime theming for Lumo
//!
//! This crate keeps four persisted UI preferences — brand color, neutral
//! palette, corner radius, and font family — in agreement across three
//! places: an in-memory cell, the root presentation surface (attributes, CSS
//! custom properties, classes), and the key-value store. Changes converge
//! across concurrently running app instances that share the store.
//!
//! # Architecture
//!
//! - [`PreferenceStore`]: one per kind; a single apply pipeline serves local
//!   changes, initialization from storage, and externally observed changes.
//! - [`ThemeEngine`]: explicit composition of the four stores, created once
//!   by the application shell and passed by reference to consumers.
//! - [`PreferenceBridge`]: storage seam — load/save plus a bridge-wide
//!   change signal; [`KvBridge`] implements it over the sled store.
//! - [`RootSurface`]: the generalized document root that stylesheets and
//!   renderers consume.
//!
//! # Example
//!
//! ```rust,no_run
//! use theming::{KvBridge, RootSurface, ThemeEngine, Brand};
//! use storage::KvStore;
//!
//! # async fn run() -> Result<(), storage::KvError> {
//! let kv = KvStore::in_memory()?;
//! let engine = ThemeEngine::new(KvBridge::new(kv), Some(RootSurface::new()));
//! engine.ensure_initialized();
//! engine.set_brand(Brand::Emerald);
//! # Ok(())
//! # }
//! ```
//!
//! Failure policy: preference application always succeeds from the caller's
//! point of view. Persistence failures are logged and swallowed, invalid
//! stored values fall back to defaults, and a missing surface only skips
//! projection.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bridge;
pub mod engine;
pub mod palette;
pub mod preference;
pub mod store;
pub mod surface;

// Re-export commonly used types
pub use bridge::{KvBridge, PersistenceError, PreferenceBridge, StorageChange};
pub use engine::{ThemeEngine, ThemeSelection};
pub use palette::{Palette, SHADES};
pub use preference::{Brand, FontFamily, Neutral, PreferenceKind, Radius};
pub use store::{PreferenceStore, ThemeEvent, ThemePreference};
pub use surface::{RootSurface, SurfaceSnapshot};
