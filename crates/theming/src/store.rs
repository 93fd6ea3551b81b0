//! Preference stores
//!
//! One [`PreferenceStore`] per preference kind keeps three places in
//! agreement: the in-memory cell, the root surface, and persisted storage.
//! A single apply pipeline serves user-driven changes, initialization from
//! storage, and changes observed from other running instances, so the result
//! is the same no matter which path a value arrives through.
//!
//! Failure policy: persistence failures are logged and swallowed, invalid
//! values fall back to the kind's default, and a missing surface skips
//! projection while the cell and storage still update. Applying never fails
//! from the caller's point of view.

use std::fmt::Display;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::broadcast;

use crate::bridge::PreferenceBridge;
use crate::preference::{Brand, FontFamily, Neutral, PreferenceKind, Radius};
use crate::surface::RootSurface;

/// Notification that a preference was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeEvent {
    /// The preference kind that changed
    pub kind: PreferenceKind,
    /// The applied value, in canonical string form
    pub value: String,
}

/// A preference value that knows how to project itself onto the surface
pub trait ThemePreference:
    Copy + Eq + Default + Display + FromStr + Send + Sync + 'static
{
    /// The kind this value belongs to
    const KIND: PreferenceKind;

    /// Write this value's representation onto the root surface
    ///
    /// Must fully overwrite whatever a previous value of the same kind left
    /// behind; projecting the same value twice is a no-op.
    fn project(&self, surface: &RootSurface);
}

impl ThemePreference for Brand {
    const KIND: PreferenceKind = PreferenceKind::Brand;

    fn project(&self, surface: &RootSurface) {
        match self {
            Brand::Default => surface.remove_attribute("data-brand"),
            other => surface.set_attribute("data-brand", other.as_str()),
        }

        match self.palette() {
            Some(palette) => {
                for (stop, color) in palette.entries() {
                    surface.set_property(&format!("--color-primary-{stop}"), color);
                    surface.set_property(&format!("--ui-color-primary-{stop}"), color);
                }
                surface.set_property("--ui-primary", palette.s500);
            }
            // Palette-less brands clear the shade properties so nothing from
            // a previous brand survives; the stylesheet takes over.
            None => {
                surface.remove_properties_with_prefix("--color-primary-");
                surface.remove_properties_with_prefix("--ui-color-primary-");
                surface.remove_property("--ui-primary");
            }
        }
    }
}

impl ThemePreference for Neutral {
    const KIND: PreferenceKind = PreferenceKind::Neutral;

    fn project(&self, surface: &RootSurface) {
        surface.set_attribute("data-neutral", self.as_str());

        for (stop, color) in self.palette().entries() {
            surface.set_property(&format!("--color-gray-{stop}"), color);
        }
    }
}

impl ThemePreference for Radius {
    const KIND: PreferenceKind = PreferenceKind::Radius;

    fn project(&self, surface: &RootSurface) {
        surface.set_attribute("data-radius", self.as_str());
        surface.set_property("--ui-radius", self.px());
    }
}

impl ThemePreference for FontFamily {
    const KIND: PreferenceKind = PreferenceKind::Font;

    fn project(&self, surface: &RootSurface) {
        // The font classes are mutually exclusive on the root element.
        for family in FontFamily::ALL {
            surface.remove_class(family.class_name());
        }
        surface.add_class(self.class_name());
    }
}

struct StoreInner<P> {
    cell: RwLock<P>,
    surface: RwLock<Option<Arc<RootSurface>>>,
    bridge: Arc<dyn PreferenceBridge>,
    initialized: AtomicBool,
    events: broadcast::Sender<ThemeEvent>,
}

/// A shared, persisted store for one preference kind
///
/// Clones share state; the engine hands the same store to every consumer.
pub struct PreferenceStore<P: ThemePreference> {
    inner: Arc<StoreInner<P>>,
}

impl<P: ThemePreference> Clone for PreferenceStore<P> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<P: ThemePreference> PreferenceStore<P> {
    /// Create a store over `bridge`, optionally attached to a surface
    ///
    /// The store starts at the kind's default and uninitialized; call
    /// [`ensure_initialized`](Self::ensure_initialized) to load the persisted
    /// value and start observing external changes.
    pub fn new(
        bridge: Arc<dyn PreferenceBridge>,
        surface: Option<Arc<RootSurface>>,
        events: broadcast::Sender<ThemeEvent>,
    ) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                cell: RwLock::new(P::default()),
                surface: RwLock::new(surface),
                bridge,
                initialized: AtomicBool::new(false),
                events,
            }),
        }
    }

    /// The current in-memory value
    pub fn value(&self) -> P {
        *self.inner.cell.read()
    }

    /// Whether [`ensure_initialized`](Self::ensure_initialized) has run
    pub fn is_initialized(&self) -> bool {
        self.inner.initialized.load(Ordering::SeqCst)
    }

    /// Load the persisted value, apply it, and start listening for external
    /// changes
    ///
    /// Idempotent: only the first call does anything, so initialization may
    /// be triggered from more than one lifecycle hook without registering
    /// duplicate listeners. Must be called inside a Tokio runtime.
    pub fn ensure_initialized(&self) {
        if self
            .inner
            .initialized
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return;
        }

        let key = P::KIND.storage_key();
        let value = match self.inner.bridge.load(key) {
            Some(raw) => parse_or_default::<P>(&raw),
            None => P::default(),
        };
        self.apply(value);

        // The listener holds only a weak reference so that dropping the last
        // store ends the task instead of keeping the bridge alive forever.
        let mut rx = self.inner.bridge.changes();
        let weak = Arc::downgrade(&self.inner);
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(change) => {
                        if change.key != key || change.new_value.is_empty() {
                            continue;
                        }
                        let Some(inner) = weak.upgrade() else {
                            break;
                        };
                        PreferenceStore { inner }.apply_external(&change.new_value);
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::debug!(kind = %P::KIND, skipped, "Change listener lagged");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });
    }

    /// Apply a preference value
    ///
    /// In order: update the in-memory cell, project onto the surface (when
    /// one is attached), persist best-effort. A persistence failure never
    /// undoes the first two steps.
    pub fn apply(&self, value: P) {
        *self.inner.cell.write() = value;

        if let Some(surface) = self.inner.surface.read().as_ref() {
            value.project(surface);
        }

        let raw = value.to_string();
        if let Err(err) = self.inner.bridge.save(P::KIND.storage_key(), &raw) {
            tracing::warn!(kind = %P::KIND, value = %raw, %err, "Failed to persist preference");
        }

        tracing::debug!(kind = %P::KIND, value = %raw, "Applied preference");
        let _ = self.inner.events.send(ThemeEvent { kind: P::KIND, value: raw });
    }

    /// Apply a raw string value, substituting the default when invalid
    pub fn apply_raw(&self, raw: &str) {
        self.apply(parse_or_default::<P>(raw));
    }

    /// React to an externally observed change
    ///
    /// Values equal to the current cell are skipped; this absorbs the echo of
    /// this store's own writes coming back through the shared subscription.
    pub fn apply_external(&self, raw: &str) {
        let value = parse_or_default::<P>(raw);
        if value == self.value() {
            return;
        }
        self.apply(value);
    }

    /// Attach (or replace) the presentation surface and re-project the
    /// current value onto it
    pub fn attach_surface(&self, surface: Arc<RootSurface>) {
        self.value().project(&surface);
        *self.inner.surface.write() = Some(surface);
    }
}

fn parse_or_default<P: ThemePreference>(raw: &str) -> P {
    match raw.parse::<P>() {
        Ok(value) => value,
        Err(_) => {
            tracing::debug!(kind = %P::KIND, raw, "Invalid preference value, using default");
            P::default()
        }
    }
}
