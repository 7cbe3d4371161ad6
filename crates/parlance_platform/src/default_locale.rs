//! Process-wide default locale.
//!
//! Formatting code that has no UI context at hand reads this value. Every
//! locale application writes it, and hosts may reset it as a side effect of
//! their own work, so readers should not cache it.

use std::sync::{PoisonError, RwLock};

use parlance_locale::Locale;

use crate::system::system_locale;

static DEFAULT_LOCALE: RwLock<Option<Locale>> = RwLock::new(None);

/// Current process default locale.
///
/// Falls back to the system locale until one has been set.
pub fn default_locale() -> Locale {
    let current = DEFAULT_LOCALE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    current.unwrap_or_else(system_locale)
}

/// Replace the process default locale.
pub fn set_default_locale(locale: Locale) {
    *DEFAULT_LOCALE.write().unwrap_or_else(PoisonError::into_inner) = Some(locale);
}

