//! Locale workaround for hosts whose first WebView resets the process locale.
//!
//! On some backends the very first WebView constructed in a process (created
//! directly or inflated from a layout) resets the process default locale to
//! the system one. [`WebViewLocaleHelper`] triggers that reset on purpose with
//! a throwaway WebView, then re-applies the active locale, so the screen that
//! hosts real web content renders in the right language.

use std::sync::atomic::{AtomicBool, Ordering};

use parlance_platform::{UiContext, WebView, WebViewConfig, WebViewHost};
use tracing::{debug, warn};

use crate::coordinator::LocaleCoordinator;

/// One-shot shim; call [`implement_workaround`](Self::implement_workaround)
/// before opening the first screen with web content.
pub struct WebViewLocaleHelper<H: WebViewHost> {
    host: H,
    requires_workaround: AtomicBool,
}

impl<H: WebViewHost> WebViewLocaleHelper<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            requires_workaround: AtomicBool::new(true),
        }
    }

    /// Whether the next call to `implement_workaround` will do anything.
    pub fn requires_workaround(&self) -> bool {
        self.requires_workaround.load(Ordering::SeqCst)
    }

    /// Create and destroy a throwaway WebView once, then re-apply the active locale.
    ///
    /// WebView failures are logged; the locale is re-applied regardless.
    pub fn implement_workaround(&self, context: &dyn UiContext, coordinator: &LocaleCoordinator) {
        if !self.requires_workaround.swap(false, Ordering::SeqCst) {
            return;
        }

        match self.host.create_webview(WebViewConfig::new()) {
            Ok(mut webview) => {
                debug!("Created throwaway WebView {:?}", webview.id());
                if let Err(e) = webview.destroy() {
                    warn!("Failed to destroy throwaway WebView: {}", e);
                }
            }
            Err(e) => warn!("Failed to create throwaway WebView: {}", e),
        }

        coordinator.apply_locale(context);
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}
