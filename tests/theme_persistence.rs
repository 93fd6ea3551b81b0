//! Theme persistence across shell restarts
//!
//! The preference stores write through to the key-value store; a fresh shell
//! over the same store must come up with the persisted values applied, and
//! unreadable values must degrade to defaults.

use lumo::App;
use storage::{KvConfig, KvStore};
use tempfile::TempDir;
use theming::{Brand, FontFamily, Neutral, Radius};

fn kv_config(dir: &TempDir) -> KvConfig {
    KvConfig::new(dir.path().join("lumo_kv.db").to_string_lossy().to_string())
}

#[tokio::test]
async fn preferences_survive_restart() {
    let dir = TempDir::new().unwrap();

    {
        let app = App::bootstrap_with(kv_config(&dir)).unwrap();
        app.theme().set_brand(Brand::Emerald);
        app.theme().set_neutral(Neutral::Zinc);
        app.theme().set_radius(Radius::Half);
        app.theme().set_font(FontFamily::Outfit);
        app.flush().unwrap();
    }

    let app = App::bootstrap_with(kv_config(&dir)).unwrap();

    assert_eq!(app.theme().brand(), Brand::Emerald);
    assert_eq!(app.theme().neutral(), Neutral::Zinc);
    assert_eq!(app.theme().radius(), Radius::Half);
    assert_eq!(app.theme().font(), FontFamily::Outfit);

    // The restored values are fully projected
    let surface = app.surface();
    assert_eq!(surface.attribute("data-brand"), Some("emerald".to_string()));
    assert_eq!(surface.property("--color-primary-500"), Some("#10b981".to_string()));
    assert_eq!(surface.property("--ui-color-primary-500"), Some("#10b981".to_string()));
    assert_eq!(surface.property("--ui-primary"), Some("#10b981".to_string()));
    assert_eq!(surface.attribute("data-radius"), Some("0.5".to_string()));
    assert_eq!(surface.property("--ui-radius"), Some("8px".to_string()));
    assert!(surface.has_class("font-outfit"));
    assert!(!surface.has_class("font-sans"));
}

#[tokio::test]
async fn seeded_store_is_loaded_on_first_start() {
    let dir = TempDir::new().unwrap();

    {
        let kv = KvStore::new(kv_config(&dir)).unwrap();
        kv.set("brand", &"emerald".to_string()).unwrap();
        kv.set("radius", &"0.5".to_string()).unwrap();
        kv.flush().unwrap();
    }

    let app = App::bootstrap_with(kv_config(&dir)).unwrap();

    assert_eq!(app.theme().brand(), Brand::Emerald);
    assert_eq!(app.theme().radius(), Radius::Half);
    // Nothing was persisted for neutral, so it defaults to slate
    assert_eq!(app.theme().neutral(), Neutral::Slate);
    assert_eq!(app.surface().attribute("data-neutral"), Some("slate".to_string()));
}

#[tokio::test]
async fn invalid_persisted_values_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();

    {
        let kv = KvStore::new(kv_config(&dir)).unwrap();
        kv.set("brand", &"ultraviolet".to_string()).unwrap();
        kv.set("radius", &"2.5".to_string()).unwrap();
        kv.set("lumo-font", &"comic-sans".to_string()).unwrap();
        kv.flush().unwrap();
    }

    let app = App::bootstrap_with(kv_config(&dir)).unwrap();

    assert_eq!(app.theme().brand(), Brand::Default);
    assert_eq!(app.theme().radius(), Radius::Quarter);
    assert_eq!(app.theme().font(), FontFamily::Inter);

    // The default brand projects no attribute and no palette
    assert_eq!(app.surface().attribute("data-brand"), None);
    assert_eq!(app.surface().property("--ui-primary"), None);
}

#[tokio::test]
async fn switching_back_to_default_clears_brand_projection() {
    let app = App::in_memory().unwrap();

    app.theme().set_brand(Brand::Rose);
    assert_eq!(app.surface().property("--color-primary-500"), Some("#f43f5e".to_string()));

    app.theme().set_brand(Brand::Default);

    assert_eq!(app.surface().attribute("data-brand"), None);
    assert_eq!(app.surface().property("--color-primary-500"), None);
    assert_eq!(app.surface().property("--ui-color-primary-950"), None);
    assert_eq!(app.surface().property("--ui-primary"), None);
}
