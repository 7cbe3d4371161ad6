//! Headless application context.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, Weak};

use parlance_platform::{
    set_default_locale, Configuration, ConfigurationCallbacks, ContextId,
    ContextLifecycleCallbacks, HostApplication, Result, UiContext,
};

use crate::window::{HeadlessWindow, WindowConfig};

/// Context id of the application itself; windows count up from 1.
pub const APPLICATION_CONTEXT_ID: ContextId = ContextId(0);

/// Top-level context of a headless host.
///
/// Mirrors how a mobile platform treats the application: new windows start
/// from the application configuration, and a system configuration change
/// overwrites the application configuration and the process default locale
/// before any callback runs.
pub struct HeadlessApplication {
    weak_self: Weak<HeadlessApplication>,
    configuration: RwLock<Configuration>,
    system_configuration: RwLock<Configuration>,
    next_window_id: AtomicU64,
    context_callbacks: RwLock<Vec<Arc<dyn ContextLifecycleCallbacks>>>,
    configuration_callbacks: RwLock<Vec<Arc<dyn ConfigurationCallbacks>>>,
}

impl HeadlessApplication {
    /// Create an application whose configuration starts as `system_configuration`.
    pub fn new(system_configuration: Configuration) -> Arc<Self> {
        Arc::new_cyclic(|weak_self| Self {
            weak_self: weak_self.clone(),
            configuration: RwLock::new(system_configuration.clone()),
            system_configuration: RwLock::new(system_configuration),
            next_window_id: AtomicU64::new(1),
            context_callbacks: RwLock::default(),
            configuration_callbacks: RwLock::default(),
        })
    }

    /// Create a window and fire the context-created callbacks for it.
    pub fn create_window(&self, config: WindowConfig) -> Arc<HeadlessWindow> {
        let id = ContextId(self.next_window_id.fetch_add(1, Ordering::SeqCst));
        let window = Arc::new(HeadlessWindow::new(
            id,
            self.weak_self.clone(),
            self.configuration(),
            config,
        ));
        tracing::debug!("Created window {:?}", id);

        let callbacks = self
            .context_callbacks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for callback in callbacks {
            callback.on_context_created(window.as_ref());
        }
        window
    }

    /// Simulate the OS reporting a new system configuration.
    pub fn dispatch_configuration_change(&self, configuration: Configuration) {
        tracing::debug!(
            "System configuration changed: {:?}",
            configuration.primary_locale().map(|l| l.to_tag())
        );
        *self
            .system_configuration
            .write()
            .unwrap_or_else(PoisonError::into_inner) = configuration.clone();
        self.reset_to_system();

        let callbacks = self
            .configuration_callbacks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for callback in callbacks {
            callback.on_configuration_changed(&configuration);
        }
    }

    /// Last system configuration reported to this application.
    pub fn system_configuration(&self) -> Configuration {
        self.system_configuration
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Overwrite application locale state with the system's, as platforms do
    /// on configuration changes and some WebView constructions.
    pub(crate) fn reset_to_system(&self) {
        let system = self.system_configuration();
        if let Some(locale) = system.primary_locale() {
            set_default_locale(locale.clone());
        }
        *self
            .configuration
            .write()
            .unwrap_or_else(PoisonError::into_inner) = system;
    }
}

impl UiContext for HeadlessApplication {
    fn id(&self) -> ContextId {
        APPLICATION_CONTEXT_ID
    }

    fn configuration(&self) -> Configuration {
        self.configuration
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn update_configuration(&self, configuration: Configuration) {
        *self
            .configuration
            .write()
            .unwrap_or_else(PoisonError::into_inner) = configuration;
    }

    fn application_context(&self) -> Option<Arc<dyn UiContext>> {
        None
    }

    fn declared_title(&self) -> Result<Option<String>> {
        Ok(None)
    }

    fn set_title(&self, key: &str) {
        tracing::trace!("Application has no title to set ({})", key);
    }
}

impl HostApplication for HeadlessApplication {
    fn register_context_callbacks(&self, callbacks: Arc<dyn ContextLifecycleCallbacks>) {
        self.context_callbacks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(callbacks);
    }

    fn register_configuration_callbacks(&self, callbacks: Arc<dyn ConfigurationCallbacks>) {
        self.configuration_callbacks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(callbacks);
    }
}
