//! Applying a resolved locale to UI contexts.

use parlance_locale::Locale;
use parlance_platform::{set_default_locale, UiContext};
use tracing::{debug, trace};

/// Applies a resolved locale to a UI context.
///
/// Implementations must set the process default locale, update `context`, and
/// update the context's application context too when it is a different one.
/// Applying the locale a context already uses must skip reconfiguration.
pub trait UpdateDelegate: Send + Sync {
    fn apply_locale(&self, context: &dyn UiContext, locale: &Locale);
}

/// Default [`UpdateDelegate`] that rewrites each context's [`Configuration`].
///
/// The target locale moves to the front of the preferred locales; the others
/// stay behind it as resource fallbacks.
///
/// [`Configuration`]: parlance_platform::Configuration
#[derive(Clone, Copy, Debug, Default)]
pub struct ResourceUpdateDelegate;

impl UpdateDelegate for ResourceUpdateDelegate {
    fn apply_locale(&self, context: &dyn UiContext, locale: &Locale) {
        update_resources(context, locale);
        if let Some(application) = context.application_context() {
            if application.id() != context.id() {
                update_resources(application.as_ref(), locale);
            }
        }
    }
}

fn update_resources(context: &dyn UiContext, locale: &Locale) {
    set_default_locale(locale.clone());

    let current = context.configuration();
    if current.primary_locale() == Some(locale) {
        trace!("Context {:?} already uses {}", context.id(), locale);
        return;
    }

    debug!(
        "Reconfiguring context {:?}: {:?} -> {}",
        context.id(),
        current.primary_locale().map(Locale::to_tag),
        locale
    );
    context.update_configuration(current.with_primary_locale(locale.clone()));
}
