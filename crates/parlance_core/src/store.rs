//! Locale persistence contract.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use parlance_locale::Locale;

/// Durable storage for the active locale and the follow-system flag.
///
/// Calls are synchronous and infallible from the coordinator's side; an
/// implementation deals with its own I/O failures.
pub trait LocaleStore: Send + Sync {
    /// The persisted locale, or the store's default when nothing was persisted.
    fn locale(&self) -> Locale;

    /// Persist `locale` as the active locale.
    fn persist_locale(&self, locale: &Locale);

    /// Persist whether the active locale tracks the system locale.
    fn set_follow_system_locale(&self, follow: bool);

    /// Whether the active locale tracks the system locale. `false` when unset.
    fn is_following_system_locale(&self) -> bool;
}

/// Store that keeps everything in memory for the life of the process.
pub struct MemoryLocaleStore {
    default_locale: Locale,
    locale: RwLock<Option<Locale>>,
    follow_system: AtomicBool,
}

impl MemoryLocaleStore {
    pub fn new(default_locale: Locale) -> Self {
        Self {
            default_locale,
            locale: RwLock::new(None),
            follow_system: AtomicBool::new(false),
        }
    }
}

impl LocaleStore for MemoryLocaleStore {
    fn locale(&self) -> Locale {
        self.locale
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .unwrap_or_else(|| self.default_locale.clone())
    }

    fn persist_locale(&self, locale: &Locale) {
        *self.locale.write().unwrap_or_else(PoisonError::into_inner) = Some(locale.clone());
    }

    fn set_follow_system_locale(&self, follow: bool) {
        self.follow_system.store(follow, Ordering::SeqCst);
    }

    fn is_following_system_locale(&self) -> bool {
        self.follow_system.load(Ordering::SeqCst)
    }
}
