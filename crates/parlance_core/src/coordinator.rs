//! The locale override coordinator.
//!
//! [`LocaleCoordinator`] decides which locale is active and applies it to every
//! UI context. It runs a two-state machine over the persisted follow flag:
//!
//! | event                       | `Fixed(l)`            | `Following(s)`           |
//! |-----------------------------|-----------------------|--------------------------|
//! | `set_locale(x)`             | `Fixed(x)`            | `Fixed(x)`               |
//! | `set_follow_system_locale`  | `Following(snapshot)` | `Following(snapshot)`    |
//! | system locale becomes `n`   | `Fixed(l)`, re-apply  | `Following(n)`, persist  |
//!
//! Within every operation the store is written before anything is applied, so
//! the persisted locale is never behind what a context renders.

use std::sync::{Arc, PoisonError, RwLock};

use parlance_locale::{canonical_language, Locale};
use parlance_platform::{HostApplication, UiContext};
use tracing::{debug, warn};

use crate::delegate::UpdateDelegate;
use crate::observers::{ContextLifecycleObserver, SystemConfigurationObserver};
use crate::store::LocaleStore;

/// The coordinator's state as derived from the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocaleState {
    /// A user-chosen locale that ignores system changes.
    Fixed(Locale),
    /// Tracks the system locale; holds the last one adopted.
    Following(Locale),
}

impl LocaleState {
    pub fn locale(&self) -> &Locale {
        match self {
            LocaleState::Fixed(locale) | LocaleState::Following(locale) => locale,
        }
    }
}

/// Single source of truth for the active locale of an application.
pub struct LocaleCoordinator {
    store: Box<dyn LocaleStore>,
    delegate: Box<dyn UpdateDelegate>,
    /// Last observed system locale. Never persisted.
    system_locale: RwLock<Locale>,
}

impl LocaleCoordinator {
    /// Create a coordinator, capturing the current system locale as the snapshot.
    pub fn new(
        store: impl LocaleStore + 'static,
        delegate: impl UpdateDelegate + 'static,
    ) -> Self {
        Self::with_system_locale(store, delegate, parlance_platform::system_locale())
    }

    /// Create a coordinator with an explicit system locale snapshot.
    pub fn with_system_locale(
        store: impl LocaleStore + 'static,
        delegate: impl UpdateDelegate + 'static,
        system_locale: Locale,
    ) -> Self {
        Self {
            store: Box::new(store),
            delegate: Box::new(delegate),
            system_locale: RwLock::new(system_locale),
        }
    }

    /// Register lifecycle observers on `application` and apply the startup locale.
    ///
    /// Must run before the host creates its first UI context. When following the
    /// system, the snapshot taken at construction is persisted since the system
    /// locale may have changed since the last run. A fixed locale is applied as
    /// stored.
    pub fn initialize<A: HostApplication + 'static>(self: &Arc<Self>, application: &Arc<A>) {
        application.register_context_callbacks(Arc::new(ContextLifecycleObserver::new(
            Arc::clone(self),
        )));
        let app_context: Arc<dyn UiContext> = application.clone();
        application.register_configuration_callbacks(Arc::new(
            SystemConfigurationObserver::new(Arc::downgrade(&app_context), Arc::clone(self)),
        ));

        if self.store.is_following_system_locale() {
            let system = self.system_locale();
            debug!("Startup following system locale {}", system);
            self.store.persist_locale(&system);
        }

        let locale = self.store.locale();
        debug!("Startup locale {} applied to application", locale);
        self.delegate.apply_locale(application.as_ref(), &locale);
    }

    /// Fix the active locale to `locale` and apply it to `context`.
    ///
    /// Also turns follow-system mode off; later system changes no longer
    /// replace the active locale.
    pub fn set_locale(&self, context: &dyn UiContext, locale: Locale) {
        debug!("Set locale {} on context {:?}", locale, context.id());
        self.store.set_follow_system_locale(false);
        self.persist_and_apply(context, locale);
    }

    /// [`set_locale`](Self::set_locale) with a language-only locale.
    pub fn set_language(&self, context: &dyn UiContext, language: &str) {
        self.set_locale(context, Locale::from_language(language));
    }

    /// [`set_locale`](Self::set_locale) with a locale built from its parts.
    pub fn set_locale_parts(
        &self,
        context: &dyn UiContext,
        language: &str,
        region: &str,
        variant: &str,
    ) {
        self.set_locale(context, Locale::new(language, region, variant));
    }

    /// The active locale.
    pub fn locale(&self) -> Locale {
        self.store.locale()
    }

    /// Language of the active locale, with deprecated codes replaced
    /// (`iw` -> `he`, `ji` -> `yi`, `in` -> `id`).
    pub fn language(&self) -> String {
        canonical_language(self.locale().language()).to_string()
    }

    /// Track the system locale from now on, starting with the current snapshot.
    pub fn set_follow_system_locale(&self, context: &dyn UiContext) {
        let system = self.system_locale();
        debug!("Follow system locale {} on context {:?}", system, context.id());
        self.store.set_follow_system_locale(true);
        self.persist_and_apply(context, system);
    }

    pub fn is_following_system_locale(&self) -> bool {
        self.store.is_following_system_locale()
    }

    /// Last observed system locale.
    pub fn system_locale(&self) -> Locale {
        self.system_locale
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn state(&self) -> LocaleState {
        let locale = self.store.locale();
        if self.store.is_following_system_locale() {
            LocaleState::Following(locale)
        } else {
            LocaleState::Fixed(locale)
        }
    }

    /// Re-apply the active locale to `context` without persisting anything.
    ///
    /// Use after anything that may have reset locale state behind the
    /// coordinator's back.
    pub fn apply_locale(&self, context: &dyn UiContext) {
        self.delegate.apply_locale(context, &self.store.locale());
    }

    /// A UI context was created: apply the active locale and reload its title.
    pub fn on_context_created(&self, context: &dyn UiContext) {
        self.apply_locale(context);
        reset_title(context);
    }

    /// The system locale changed to `system_locale`.
    ///
    /// The snapshot is always updated. When following, the new locale is
    /// persisted even if it equals the active one, then applied. When fixed,
    /// nothing is persisted and the fixed locale is re-applied, since the
    /// configuration change may have reset the process default.
    pub fn on_system_locale_changed(&self, context: &dyn UiContext, system_locale: Locale) {
        debug!("System locale changed to {}", system_locale);
        *self
            .system_locale
            .write()
            .unwrap_or_else(PoisonError::into_inner) = system_locale.clone();

        if self.store.is_following_system_locale() {
            self.store.persist_locale(&system_locale);
        }
        self.apply_locale(context);
    }

    fn persist_and_apply(&self, context: &dyn UiContext, locale: Locale) {
        self.store.persist_locale(&locale);
        self.delegate.apply_locale(context, &locale);
    }
}

/// Re-read the declared title so it renders in the now-active locale.
///
/// Titles resolved before the override keep the old language otherwise.
fn reset_title(context: &dyn UiContext) {
    match context.declared_title() {
        Ok(Some(key)) => context.set_title(&key),
        Ok(None) => {}
        Err(e) => warn!("Could not reset title of context {:?}: {}", context.id(), e),
    }
}
