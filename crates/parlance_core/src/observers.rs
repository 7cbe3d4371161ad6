//! Adapters from host lifecycle callbacks to coordinator calls.

use std::sync::{Arc, Weak};

use parlance_platform::{
    Configuration, ConfigurationCallbacks, ContextLifecycleCallbacks, UiContext,
};
use tracing::{debug, warn};

use crate::coordinator::LocaleCoordinator;

/// Forwards UI context creation to [`LocaleCoordinator::on_context_created`].
pub struct ContextLifecycleObserver {
    coordinator: Arc<LocaleCoordinator>,
}

impl ContextLifecycleObserver {
    pub fn new(coordinator: Arc<LocaleCoordinator>) -> Self {
        Self { coordinator }
    }
}

impl ContextLifecycleCallbacks for ContextLifecycleObserver {
    fn on_context_created(&self, context: &dyn UiContext) {
        self.coordinator.on_context_created(context);
    }
}

/// Forwards system configuration changes to
/// [`LocaleCoordinator::on_system_locale_changed`] for the application context.
///
/// Holds the application weakly; the application owns this observer.
pub struct SystemConfigurationObserver {
    application: Weak<dyn UiContext>,
    coordinator: Arc<LocaleCoordinator>,
}

impl SystemConfigurationObserver {
    pub fn new(application: Weak<dyn UiContext>, coordinator: Arc<LocaleCoordinator>) -> Self {
        Self {
            application,
            coordinator,
        }
    }
}

impl ConfigurationCallbacks for SystemConfigurationObserver {
    fn on_configuration_changed(&self, configuration: &Configuration) {
        let Some(system_locale) = configuration.primary_locale().cloned() else {
            warn!("Configuration change without locales, ignoring");
            return;
        };
        let Some(application) = self.application.upgrade() else {
            debug!("Application gone, ignoring system locale {}", system_locale);
            return;
        };
        self.coordinator
            .on_system_locale_changed(application.as_ref(), system_locale);
    }
}
