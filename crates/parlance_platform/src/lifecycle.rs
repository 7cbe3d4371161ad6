//! Lifecycle hooks a host application exposes to locale management.

use std::sync::Arc;

use crate::context::{Configuration, UiContext};

/// Callbacks for UI context creation.
pub trait ContextLifecycleCallbacks: Send + Sync {
    /// A new UI context was created and is about to render.
    fn on_context_created(&self, context: &dyn UiContext);
}

/// Callbacks for system configuration changes.
pub trait ConfigurationCallbacks: Send + Sync {
    /// The system configuration changed; `configuration` is the new system state.
    fn on_configuration_changed(&self, configuration: &Configuration);
}

/// The top-level application context of a host.
///
/// Callbacks must be registered before the first non-application context is
/// created, otherwise early contexts never see them.
pub trait HostApplication: UiContext {
    /// Register callbacks fired whenever a UI context is created.
    fn register_context_callbacks(&self, callbacks: Arc<dyn ContextLifecycleCallbacks>);

    /// Register callbacks fired whenever the system configuration changes.
    fn register_configuration_callbacks(&self, callbacks: Arc<dyn ConfigurationCallbacks>);
}
