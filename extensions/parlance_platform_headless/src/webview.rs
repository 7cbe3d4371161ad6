//! Headless WebViews.
//!
//! No web content is rendered. The host reproduces the platform quirk that the
//! first WebView constructed in a process resets application locale state to
//! the system's.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parlance_platform::{PlatformError, Result, WebView, WebViewConfig, WebViewHost, WebViewId};

use crate::app::HeadlessApplication;

struct HeadlessWebViewHostState {
    created: AtomicU64,
    fail_creation: AtomicBool,
}

/// Host for creating headless WebViews.
#[derive(Clone)]
pub struct HeadlessWebViewHost {
    application: Weak<HeadlessApplication>,
    state: Arc<HeadlessWebViewHostState>,
}

impl HeadlessWebViewHost {
    pub fn new(application: &Arc<HeadlessApplication>) -> Self {
        Self {
            application: Arc::downgrade(application),
            state: Arc::new(HeadlessWebViewHostState {
                created: AtomicU64::new(0),
                fail_creation: AtomicBool::new(false),
            }),
        }
    }

    /// Number of WebViews successfully created.
    pub fn created_count(&self) -> u64 {
        self.state.created.load(Ordering::SeqCst)
    }

    /// Make subsequent creations fail.
    pub fn set_fail_creation(&self, fail: bool) {
        self.state.fail_creation.store(fail, Ordering::SeqCst);
    }
}

impl WebViewHost for HeadlessWebViewHost {
    type WebView = HeadlessWebView;

    fn create_webview(&self, config: WebViewConfig) -> Result<Self::WebView> {
        if self.state.fail_creation.load(Ordering::SeqCst) {
            return Err(PlatformError::WebViewCreation(
                "headless webview creation disabled".to_string(),
            ));
        }

        let index = self.state.created.fetch_add(1, Ordering::SeqCst);
        if index == 0 {
            if let Some(app) = self.application.upgrade() {
                tracing::debug!("First WebView in process, resetting locale state to system");
                app.reset_to_system();
            }
        }

        let id = WebViewId(index + 1);
        tracing::trace!(
            "Created headless WebView {:?} (Accept-Language: {})",
            id,
            config.accept_language_header()
        );
        Ok(HeadlessWebView {
            id,
            url: config.initial_url,
            destroyed: false,
        })
    }
}

/// A WebView with no backing renderer.
pub struct HeadlessWebView {
    id: WebViewId,
    url: Option<String>,
    destroyed: bool,
}

impl HeadlessWebView {
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

impl WebView for HeadlessWebView {
    fn id(&self) -> WebViewId {
        self.id
    }

    fn destroy(&mut self) -> Result<()> {
        if self.destroyed {
            return Err(PlatformError::WebViewOperation(format!(
                "webview {:?} already destroyed",
                self.id
            )));
        }
        self.destroyed = true;
        Ok(())
    }

    fn navigate(&self, url: &str) -> Result<()> {
        if self.destroyed {
            return Err(PlatformError::WebViewOperation(format!(
                "cannot navigate destroyed webview {:?} to {url}",
                self.id
            )));
        }
        Ok(())
    }
}
