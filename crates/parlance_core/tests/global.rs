//! The process-wide instance. Kept to a single test because the instance can
//! only be created once per process.

use std::sync::Arc;

use parlance_core::{
    LocaleCoordinator, LocaleStore, MemoryLocaleStore, ParlanceConfig, ParlanceError,
    PreferenceLocaleStore,
};
use parlance_platform::{default_locale, Configuration, Locale, UiContext};
use parlance_platform_headless::{HeadlessApplication, WindowConfig};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[test]
fn test_global_instance_lifecycle() {
    assert!(matches!(
        LocaleCoordinator::instance(),
        Err(ParlanceError::NotInitialized)
    ));
    assert!(LocaleCoordinator::try_get().is_none());

    let dir = tempdir().expect("failed to create temp dir");
    let app = HeadlessApplication::new(Configuration::from_locale(Locale::with_region("en", "US")));
    let config = ParlanceConfig {
        default_locale: Locale::with_region("de", "DE"),
        storage_dir: Some(dir.path().to_path_buf()),
        ..ParlanceConfig::default()
    };

    let coordinator = LocaleCoordinator::init_with_config(&app, &config).unwrap();
    assert!(Arc::ptr_eq(&coordinator, &LocaleCoordinator::get()));
    assert!(Arc::ptr_eq(&coordinator, &LocaleCoordinator::instance().unwrap()));
    assert_eq!(
        app.configuration().primary_locale(),
        Some(&Locale::with_region("de", "DE"))
    );
    assert_eq!(default_locale(), Locale::with_region("de", "DE"));

    assert!(matches!(
        LocaleCoordinator::init(&app, MemoryLocaleStore::new(Locale::from_language("fr"))),
        Err(ParlanceError::AlreadyInitialized)
    ));
    assert!(matches!(
        LocaleCoordinator::init_with_language(&app, "fr"),
        Err(ParlanceError::AlreadyInitialized)
    ));
    assert_eq!(LocaleCoordinator::get().locale(), Locale::with_region("de", "DE"));

    let window = app.create_window(WindowConfig::new());
    LocaleCoordinator::get().set_language(window.as_ref(), "iw");
    assert_eq!(LocaleCoordinator::get().language(), "he");
    assert_eq!(default_locale(), Locale::from_language("iw"));

    let stored = PreferenceLocaleStore::open(dir.path(), Locale::from_language("en")).unwrap();
    assert_eq!(stored.locale(), Locale::from_language("iw"));
    assert!(!stored.is_following_system_locale());
}
