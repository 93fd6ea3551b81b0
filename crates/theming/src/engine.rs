//! Theme engine
//!
//! The engine is the composition point for the four preference stores. It is
//! built once at startup by the application shell and handed by reference to
//! every consumer; there is no implicit global. All stores share one bridge,
//! one surface, and one applied-change broadcast channel.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::broadcast;

use crate::bridge::PreferenceBridge;
use crate::preference::{Brand, FontFamily, Neutral, Radius};
use crate::store::{PreferenceStore, ThemeEvent};
use crate::surface::RootSurface;

/// Capacity of the applied-change broadcast channel
const EVENT_BUFFER: usize = 64;

/// The four current preference values, as one snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeSelection {
    /// Brand color
    pub brand: Brand,
    /// Neutral palette
    pub neutral: Neutral,
    /// Corner radius
    pub radius: Radius,
    /// Font family
    pub font: FontFamily,
}

/// Composition of the four preference stores
pub struct ThemeEngine {
    brand: PreferenceStore<Brand>,
    neutral: PreferenceStore<Neutral>,
    radius: PreferenceStore<Radius>,
    font: PreferenceStore<FontFamily>,
    events: broadcast::Sender<ThemeEvent>,
}

impl ThemeEngine {
    /// Create an engine over `bridge`, optionally attached to a surface
    ///
    /// The stores start at their defaults; call
    /// [`ensure_initialized`](Self::ensure_initialized) to load persisted
    /// values and start observing external changes.
    pub fn new(bridge: Arc<dyn PreferenceBridge>, surface: Option<Arc<RootSurface>>) -> Self {
        let (events, _) = broadcast::channel(EVENT_BUFFER);

        Self {
            brand: PreferenceStore::new(Arc::clone(&bridge), surface.clone(), events.clone()),
            neutral: PreferenceStore::new(Arc::clone(&bridge), surface.clone(), events.clone()),
            radius: PreferenceStore::new(Arc::clone(&bridge), surface.clone(), events.clone()),
            font: PreferenceStore::new(bridge, surface, events.clone()),
            events,
        }
    }

    /// Initialize all four stores; idempotent
    ///
    /// Must be called inside a Tokio runtime (listener tasks are spawned).
    pub fn ensure_initialized(&self) {
        self.brand.ensure_initialized();
        self.neutral.ensure_initialized();
        self.radius.ensure_initialized();
        self.font.ensure_initialized();
    }

    /// Attach (or replace) the presentation surface on every store and
    /// project the current values onto it
    pub fn attach_surface(&self, surface: Arc<RootSurface>) {
        self.brand.attach_surface(Arc::clone(&surface));
        self.neutral.attach_surface(Arc::clone(&surface));
        self.radius.attach_surface(Arc::clone(&surface));
        self.font.attach_surface(surface);
    }

    /// Current brand color
    pub fn brand(&self) -> Brand {
        self.brand.value()
    }

    /// Apply a brand color
    pub fn set_brand(&self, brand: Brand) {
        self.brand.apply(brand);
    }

    /// Current neutral palette
    pub fn neutral(&self) -> Neutral {
        self.neutral.value()
    }

    /// Apply a neutral palette
    pub fn set_neutral(&self, neutral: Neutral) {
        self.neutral.apply(neutral);
    }

    /// Current corner radius
    pub fn radius(&self) -> Radius {
        self.radius.value()
    }

    /// Apply a corner radius
    pub fn set_radius(&self, radius: Radius) {
        self.radius.apply(radius);
    }

    /// Current font family
    pub fn font(&self) -> FontFamily {
        self.font.value()
    }

    /// Apply a font family
    pub fn set_font(&self, font: FontFamily) {
        self.font.apply(font);
    }

    /// All four current values as one snapshot
    pub fn selection(&self) -> ThemeSelection {
        ThemeSelection {
            brand: self.brand(),
            neutral: self.neutral(),
            radius: self.radius(),
            font: self.font(),
        }
    }

    /// The brand store, for consumers that hold a single dimension
    pub fn brand_store(&self) -> &PreferenceStore<Brand> {
        &self.brand
    }

    /// The neutral store
    pub fn neutral_store(&self) -> &PreferenceStore<Neutral> {
        &self.neutral
    }

    /// The radius store
    pub fn radius_store(&self) -> &PreferenceStore<Radius> {
        &self.radius
    }

    /// The font store
    pub fn font_store(&self) -> &PreferenceStore<FontFamily> {
        &self.font
    }

    /// Subscribe to applied-change events
    pub fn subscribe(&self) -> broadcast::Receiver<ThemeEvent> {
        self.events.subscribe()
    }

    /// Wait for the next applied-change event
    ///
    /// Returns `None` on timeout or when the channel closes.
    pub async fn wait_for_update(&self, timeout: Duration) -> Option<ThemeEvent> {
        let mut rx = self.subscribe();

        tokio::select! {
            result = rx.recv() => result.ok(),
            _ = tokio::time::sleep(timeout) => None,
        }
    }
}
