//! UI contexts and their resource configuration.
//!
//! A UI context is anything that resolves localized resources on its own: the
//! application itself, a window, a screen. Each one carries a [`Configuration`]
//! whose first locale decides which resources it renders with.

use std::sync::Arc;

use parlance_locale::Locale;

use crate::error::Result;

/// Stable identifier for a UI context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ContextId(pub u64);

/// Resource-resolution configuration of a UI context.
///
/// Holds the preferred locales in priority order. The first entry is the
/// effective locale of the context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Configuration {
    locales: Vec<Locale>,
}

impl Configuration {
    /// Create a configuration from preferred locales, highest priority first.
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    pub fn new(locales: impl IntoIterator<Item = Locale>) -> Self {
        let mut out: Vec<Locale> = Vec::new();
        for locale in locales {
            if !out.contains(&locale) {
                out.push(locale);
            }
        }
        Self { locales: out }
    }

    /// Configuration with a single preferred locale.
    pub fn from_locale(locale: Locale) -> Self {
        Self {
            locales: vec![locale],
        }
    }

    /// Preferred locales, highest priority first.
    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    /// The effective locale, if any locale is configured.
    pub fn primary_locale(&self) -> Option<&Locale> {
        self.locales.first()
    }

    /// Copy of this configuration with `locale` brought to the front.
    ///
    /// The remaining locales keep their relative order so resource lookups can
    /// still fall back to the other languages the user understands.
    pub fn with_primary_locale(&self, locale: Locale) -> Self {
        Self::new(std::iter::once(locale).chain(self.locales.iter().cloned()))
    }
}

/// A renderable surface that resolves localized resources independently.
pub trait UiContext: Send + Sync {
    /// Get the stable context identifier.
    fn id(&self) -> ContextId;

    /// Current resource configuration.
    fn configuration(&self) -> Configuration;

    /// Replace the resource configuration.
    fn update_configuration(&self, configuration: Configuration);

    /// The top-level application context this context belongs to.
    ///
    /// Returns `None` for the application context itself, or when the
    /// application is already gone.
    fn application_context(&self) -> Option<Arc<dyn UiContext>>;

    /// Title key declared in this context's metadata.
    ///
    /// `Ok(None)` means no title was declared. An error means the metadata
    /// itself could not be read.
    fn declared_title(&self) -> Result<Option<String>>;

    /// Resolve `key` against the current configuration and show it as the title.
    fn set_title(&self, key: &str);
}
