//! Cross-instance convergence
//!
//! Two theming engines sharing one key-value store stand in for two open
//! tabs: a write in one instance must be observed and re-applied by the
//! other, with no coordination beyond the storage change signal.

use std::sync::Arc;
use std::time::{Duration, Instant};

use storage::KvStore;
use theming::{Brand, FontFamily, KvBridge, Neutral, RootSurface, ThemeEngine};

fn two_instances() -> (ThemeEngine, ThemeEngine, Arc<RootSurface>, Arc<RootSurface>) {
    let kv = KvStore::in_memory().unwrap();

    let surface_a = RootSurface::new();
    let engine_a = ThemeEngine::new(KvBridge::new(kv.clone()), Some(Arc::clone(&surface_a)));
    engine_a.ensure_initialized();

    let surface_b = RootSurface::new();
    let engine_b = ThemeEngine::new(KvBridge::new(kv), Some(Arc::clone(&surface_b)));
    engine_b.ensure_initialized();

    (engine_a, engine_b, surface_a, surface_b)
}

async fn wait_until(mut condition: impl FnMut() -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !condition() {
        assert!(Instant::now() < deadline, "instances did not converge in time");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

#[tokio::test]
async fn brand_change_converges() {
    let (engine_a, engine_b, _surface_a, surface_b) = two_instances();

    engine_a.set_brand(Brand::Emerald);
    wait_until(|| engine_b.brand() == Brand::Emerald).await;

    // The observing instance projected the change too
    assert_eq!(surface_b.attribute("data-brand"), Some("emerald".to_string()));
    assert_eq!(surface_b.property("--color-primary-500"), Some("#10b981".to_string()));
    assert_eq!(surface_b.property("--ui-primary"), Some("#10b981".to_string()));
}

#[tokio::test]
async fn convergence_works_in_both_directions() {
    let (engine_a, engine_b, surface_a, _surface_b) = two_instances();

    engine_b.set_neutral(Neutral::Stone);
    wait_until(|| engine_a.neutral() == Neutral::Stone).await;

    assert_eq!(surface_a.attribute("data-neutral"), Some("stone".to_string()));
    assert_eq!(surface_a.property("--color-gray-500"), Some("#78716c".to_string()));
}

#[tokio::test]
async fn last_write_wins_across_instances() {
    let (engine_a, engine_b, _surface_a, _surface_b) = two_instances();

    engine_a.set_brand(Brand::Teal);
    wait_until(|| engine_b.brand() == Brand::Teal).await;

    engine_b.set_brand(Brand::Rose);
    wait_until(|| engine_a.brand() == Brand::Rose).await;

    assert_eq!(engine_a.brand(), Brand::Rose);
    assert_eq!(engine_b.brand(), Brand::Rose);
}

#[tokio::test]
async fn font_classes_stay_exclusive_on_the_observing_instance() {
    let (engine_a, engine_b, _surface_a, surface_b) = two_instances();

    engine_a.set_font(FontFamily::DmSans);
    wait_until(|| engine_b.font() == FontFamily::DmSans).await;

    engine_a.set_font(FontFamily::Roboto);
    wait_until(|| engine_b.font() == FontFamily::Roboto).await;

    assert!(surface_b.has_class("font-roboto"));
    assert_eq!(surface_b.classes().len(), 1);
}

#[tokio::test]
async fn unrelated_keys_do_not_disturb_other_kinds() {
    let (engine_a, engine_b, _surface_a, _surface_b) = two_instances();

    engine_b.set_font(FontFamily::Outfit);
    wait_until(|| engine_a.font() == FontFamily::Outfit).await;

    engine_a.set_brand(Brand::Indigo);
    wait_until(|| engine_b.brand() == Brand::Indigo).await;

    // The font observed earlier is untouched by the brand traffic
    assert_eq!(engine_a.font(), FontFamily::Outfit);
    assert_eq!(engine_b.font(), FontFamily::Outfit);
}
