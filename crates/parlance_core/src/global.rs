//! Process-wide coordinator instance.
//!
//! One application process has one active locale, because applying it writes
//! the process default locale. The instance is created by exactly one of the
//! `init*` entry points and looked up afterwards; tests that need isolation
//! construct [`LocaleCoordinator`] directly instead.

use std::sync::{Arc, OnceLock};

use parlance_locale::Locale;
use parlance_platform::HostApplication;
use tracing::info;

use crate::config::ParlanceConfig;
use crate::coordinator::LocaleCoordinator;
use crate::delegate::{ResourceUpdateDelegate, UpdateDelegate};
use crate::error::ParlanceError;
use crate::store::LocaleStore;

/// Global coordinator instance
static INSTANCE: OnceLock<Arc<LocaleCoordinator>> = OnceLock::new();

impl LocaleCoordinator {
    /// Create and set up the global instance with a custom store.
    ///
    /// Must run before the host creates any UI context and may only run once.
    pub fn init<A: HostApplication + 'static>(
        application: &Arc<A>,
        store: impl LocaleStore + 'static,
    ) -> Result<Arc<LocaleCoordinator>, ParlanceError> {
        Self::init_with_delegate(application, store, ResourceUpdateDelegate)
    }

    /// Create and set up the global instance with a custom store and delegate.
    ///
    /// The instance becomes visible to [`get`](Self::get) only after the host
    /// application has been set up; lookups made from inside the startup apply
    /// see no instance.
    pub fn init_with_delegate<A: HostApplication + 'static>(
        application: &Arc<A>,
        store: impl LocaleStore + 'static,
        delegate: impl UpdateDelegate + 'static,
    ) -> Result<Arc<LocaleCoordinator>, ParlanceError> {
        if INSTANCE.get().is_some() {
            return Err(ParlanceError::AlreadyInitialized);
        }

        // Published only once the startup locale has been applied.
        let mut created = false;
        let coordinator = INSTANCE.get_or_init(|| {
            created = true;
            let coordinator = Arc::new(LocaleCoordinator::new(store, delegate));
            coordinator.initialize(application);
            coordinator
        });
        if !created {
            return Err(ParlanceError::AlreadyInitialized);
        }

        info!("Locale coordinator initialized with {}", coordinator.locale());
        Ok(Arc::clone(coordinator))
    }

    /// Create and set up the global instance from a configuration file's settings.
    pub fn init_with_config<A: HostApplication + 'static>(
        application: &Arc<A>,
        config: &ParlanceConfig,
    ) -> Result<Arc<LocaleCoordinator>, ParlanceError> {
        if INSTANCE.get().is_some() {
            return Err(ParlanceError::AlreadyInitialized);
        }
        let store = config.open_store()?;
        Self::init(application, store)
    }

    /// Create and set up the global instance with the default preference store.
    pub fn init_with_locale<A: HostApplication + 'static>(
        application: &Arc<A>,
        default_locale: Locale,
    ) -> Result<Arc<LocaleCoordinator>, ParlanceError> {
        let config = ParlanceConfig {
            default_locale,
            ..ParlanceConfig::default()
        };
        Self::init_with_config(application, &config)
    }

    /// Create and set up the global instance with a default language.
    pub fn init_with_language<A: HostApplication + 'static>(
        application: &Arc<A>,
        default_language: &str,
    ) -> Result<Arc<LocaleCoordinator>, ParlanceError> {
        Self::init_with_locale(application, Locale::from_language(default_language))
    }

    /// The global instance.
    pub fn instance() -> Result<Arc<LocaleCoordinator>, ParlanceError> {
        Self::try_get().ok_or(ParlanceError::NotInitialized)
    }

    /// The global instance.
    ///
    /// # Panics
    ///
    /// Panics if no `init*` entry point has run.
    pub fn get() -> Arc<LocaleCoordinator> {
        Self::try_get().expect(
            "LocaleCoordinator not initialized. Call LocaleCoordinator::init() at app startup.",
        )
    }

    /// Try to get the global instance (returns None if not initialized)
    pub fn try_get() -> Option<Arc<LocaleCoordinator>> {
        INSTANCE.get().cloned()
    }
}
