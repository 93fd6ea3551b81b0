//! Root presentation surface
//!
//! `RootSurface` models the root element of the presentation layer: a set of
//! marker attributes, CSS custom properties, and a class list that renderers
//! and stylesheets consume. The theming stores write to it; nothing in this
//! crate reads it back except tests and snapshot consumers.

use parking_lot::RwLock;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Immutable view of the surface state at a point in time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceSnapshot {
    /// Marker attributes on the root element (e.g. `data-brand`)
    pub attributes: BTreeMap<String, String>,
    /// CSS custom properties, keyed by full name including the `--` prefix
    pub properties: BTreeMap<String, String>,
    /// Root element class list
    pub classes: BTreeSet<String>,
}

#[derive(Debug, Default)]
struct SurfaceState {
    attributes: BTreeMap<String, String>,
    properties: BTreeMap<String, String>,
    classes: BTreeSet<String>,
}

/// Shared, mutable root-element state
///
/// Cloning an `Arc<RootSurface>` is the supported sharing mechanism; all
/// writers observe the same state.
#[derive(Debug, Default)]
pub struct RootSurface {
    state: RwLock<SurfaceState>,
}

impl RootSurface {
    /// Create an empty surface
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Set a marker attribute
    pub fn set_attribute(&self, name: &str, value: &str) {
        self.state.write().attributes.insert(name.to_string(), value.to_string());
    }

    /// Remove a marker attribute
    pub fn remove_attribute(&self, name: &str) {
        self.state.write().attributes.remove(name);
    }

    /// Read a marker attribute
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.state.read().attributes.get(name).cloned()
    }

    /// Set a CSS custom property (full name, including `--`)
    pub fn set_property(&self, name: &str, value: &str) {
        self.state.write().properties.insert(name.to_string(), value.to_string());
    }

    /// Remove a CSS custom property
    pub fn remove_property(&self, name: &str) {
        self.state.write().properties.remove(name);
    }

    /// Remove every CSS custom property whose name starts with `prefix`
    pub fn remove_properties_with_prefix(&self, prefix: &str) {
        self.state.write().properties.retain(|name, _| !name.starts_with(prefix));
    }

    /// Read a CSS custom property
    pub fn property(&self, name: &str) -> Option<String> {
        self.state.read().properties.get(name).cloned()
    }

    /// Add a class to the root class list
    pub fn add_class(&self, name: &str) {
        self.state.write().classes.insert(name.to_string());
    }

    /// Remove a class from the root class list
    pub fn remove_class(&self, name: &str) {
        self.state.write().classes.remove(name);
    }

    /// Check whether a class is present
    pub fn has_class(&self, name: &str) -> bool {
        self.state.read().classes.contains(name)
    }

    /// Current class list
    pub fn classes(&self) -> BTreeSet<String> {
        self.state.read().classes.clone()
    }

    /// Copy the full surface state
    pub fn snapshot(&self) -> SurfaceSnapshot {
        let state = self.state.read();
        SurfaceSnapshot {
            attributes: state.attributes.clone(),
            properties: state.properties.clone(),
            classes: state.classes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes() {
        let surface = RootSurface::new();

        assert_eq!(surface.attribute("data-brand"), None);

        surface.set_attribute("data-brand", "emerald");
        assert_eq!(surface.attribute("data-brand"), Some("emerald".to_string()));

        surface.set_attribute("data-brand", "teal");
        assert_eq!(surface.attribute("data-brand"), Some("teal".to_string()));

        surface.remove_attribute("data-brand");
        assert_eq!(surface.attribute("data-brand"), None);
    }

    #[test]
    fn test_properties() {
        let surface = RootSurface::new();

        surface.set_property("--ui-radius", "4px");
        assert_eq!(surface.property("--ui-radius"), Some("4px".to_string()));

        surface.remove_property("--ui-radius");
        assert_eq!(surface.property("--ui-radius"), None);
    }

    #[test]
    fn test_remove_properties_with_prefix() {
        let surface = RootSurface::new();

        surface.set_property("--color-primary-500", "#10b981");
        surface.set_property("--color-primary-600", "#059669");
        surface.set_property("--color-gray-500", "#64748b");

        surface.remove_properties_with_prefix("--color-primary-");

        assert_eq!(surface.property("--color-primary-500"), None);
        assert_eq!(surface.property("--color-primary-600"), None);
        assert_eq!(surface.property("--color-gray-500"), Some("#64748b".to_string()));
    }

    #[test]
    fn test_classes() {
        let surface = RootSurface::new();

        surface.add_class("font-sans");
        assert!(surface.has_class("font-sans"));

        // Adding twice keeps a single entry
        surface.add_class("font-sans");
        assert_eq!(surface.classes().len(), 1);

        surface.remove_class("font-sans");
        assert!(!surface.has_class("font-sans"));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let surface = RootSurface::new();
        surface.set_attribute("data-neutral", "slate");

        let snapshot = surface.snapshot();
        surface.set_attribute("data-neutral", "zinc");

        assert_eq!(snapshot.attributes.get("data-neutral"), Some(&"slate".to_string()));
        assert_eq!(surface.attribute("data-neutral"), Some("zinc".to_string()));
    }

    #[test]
    fn test_shared_across_clones() {
        let surface = RootSurface::new();
        let other = Arc::clone(&surface);

        surface.set_property("--ui-primary", "#10b981");
        assert_eq!(other.property("--ui-primary"), Some("#10b981".to_string()));
    }
}
