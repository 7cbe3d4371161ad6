//! Parlance Platform
//!
//! The seams between locale management and a host UI toolkit:
//! - [`UiContext`]: a surface with its own resource [`Configuration`]
//! - [`HostApplication`]: the top-level context plus lifecycle callback registration
//! - Process default locale and system locale detection
//! - [`WebView`] / [`WebViewHost`] for embedded web content

pub mod context;
pub mod default_locale;
pub mod error;
pub mod lifecycle;
pub mod system;
pub mod webview;

pub use context::{Configuration, ContextId, UiContext};
pub use default_locale::{default_locale, set_default_locale};
pub use error::{PlatformError, Result};
pub use lifecycle::{ConfigurationCallbacks, ContextLifecycleCallbacks, HostApplication};
pub use system::{parse_system_tag, system_configuration, system_locale, system_locales};
pub use webview::{WebView, WebViewConfig, WebViewHost, WebViewId};

pub use parlance_locale::Locale;
