//! Parlance
//!
//! App-wide locale override for UI hosts.
//!
//! - [`LocaleCoordinator`]: the active locale, follow-system mode, and how
//!   both react to system changes and new UI contexts
//! - [`LocaleStore`]: persistence, with [`MemoryLocaleStore`] and the
//!   file-backed [`PreferenceLocaleStore`]
//! - [`UpdateDelegate`]: applying a locale to a UI context, with
//!   [`ResourceUpdateDelegate`] as the default
//! - [`WebViewLocaleHelper`]: one-shot fix for WebView backends that reset
//!   the process locale
//!
//! # Usage
//!
//! ```ignore
//! let app = HeadlessApplication::new(system_configuration());
//! let store = PreferenceLocaleStore::open(data_dir, Locale::from_language("en"))?;
//! LocaleCoordinator::init(&app, store)?;
//!
//! // later, from a settings screen
//! LocaleCoordinator::get().set_locale(window.as_ref(), Locale::with_region("uk", "UA"));
//! ```

pub mod config;
pub mod coordinator;
pub mod delegate;
pub mod error;
mod global;
pub mod observers;
pub mod preference;
pub mod store;
pub mod webview;

#[cfg(test)]
mod test_support;

pub use config::ParlanceConfig;
pub use coordinator::{LocaleCoordinator, LocaleState};
pub use delegate::{ResourceUpdateDelegate, UpdateDelegate};
pub use error::{ParlanceError, StoreError};
pub use observers::{ContextLifecycleObserver, SystemConfigurationObserver};
pub use preference::{PreferenceLocaleStore, DEFAULT_PREFERENCE_NAME};
pub use store::{LocaleStore, MemoryLocaleStore};
pub use webview::WebViewLocaleHelper;

pub use parlance_locale::Locale;
