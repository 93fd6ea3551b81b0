//! Lumo application shell
//!
//! Composition root for the dashboard template: opens the key-value store,
//! wires the theming engine to it, and exposes the router, app configuration,
//! and datasets to whatever renders the pages.
//!
//! The interesting machinery lives in the member crates:
//!
//! - `theming` - the persisted, cross-instance-synchronized UI preferences
//! - `storage` - the sled-backed key-value store
//! - `app-ui` - route table and app configuration
//! - `app-data` - static datasets behind every page
//!
//! # Example
//!
//! ```rust,no_run
//! # async fn run() -> anyhow::Result<()> {
//! lumo::init_tracing();
//!
//! let app = lumo::App::bootstrap()?;
//! app.theme().set_brand(theming::Brand::Emerald);
//!
//! let route = app.router().resolve("/").expect("home resolves");
//! assert_eq!(route.title(), "Dashboard");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::sync::Arc;

use app_ui::{AppConfig, Router};
use storage::{KvConfig, KvStore};
use theming::{KvBridge, RootSurface, ThemeEngine};

// The page datasets, re-exported for renderers
pub use app_data as datasets;

/// The assembled application shell
pub struct App {
    config: AppConfig,
    router: Router,
    kv: KvStore,
    surface: Arc<RootSurface>,
    theme: ThemeEngine,
}

impl App {
    /// Assemble the shell over the default on-disk store
    ///
    /// Must be called inside a Tokio runtime; the theming engine spawns its
    /// change listeners during initialization.
    pub fn bootstrap() -> anyhow::Result<Self> {
        Self::bootstrap_with(KvConfig::default())
    }

    /// Assemble the shell over a store described by `config`
    pub fn bootstrap_with(config: KvConfig) -> anyhow::Result<Self> {
        let kv = KvStore::new(config)?;
        Self::assemble(kv)
    }

    /// Assemble the shell over an in-memory store (tests, demos)
    pub fn in_memory() -> anyhow::Result<Self> {
        let kv = KvStore::in_memory()?;
        Self::assemble(kv)
    }

    fn assemble(kv: KvStore) -> anyhow::Result<Self> {
        let surface = RootSurface::new();
        let theme = ThemeEngine::new(KvBridge::new(kv.clone()), Some(Arc::clone(&surface)));
        theme.ensure_initialized();

        tracing::info!("Lumo shell assembled");

        Ok(Self {
            config: AppConfig::default(),
            router: Router::new(),
            kv,
            surface,
            theme,
        })
    }

    /// Application identity and chrome
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The route table
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// The theming engine
    pub fn theme(&self) -> &ThemeEngine {
        &self.theme
    }

    /// The root presentation surface the theme projects onto
    pub fn surface(&self) -> &Arc<RootSurface> {
        &self.surface
    }

    /// Flush pending preference writes to disk
    pub fn flush(&self) -> Result<(), storage::KvError> {
        self.kv.flush()
    }
}

/// Install the global tracing subscriber, honoring `RUST_LOG`
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
