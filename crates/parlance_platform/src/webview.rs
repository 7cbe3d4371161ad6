//! WebView abstraction for embedded web content.
//!
//! Web content resolves its language from the `Accept-Language` the host sends
//! and from the process default locale, not from a UI context configuration.
//! Some backends also reset the process default locale the first time a
//! WebView is constructed.

use parlance_locale::Locale;

use crate::error::Result;

/// Stable identifier for a WebView instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WebViewId(pub u64);

/// WebView creation configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WebViewConfig {
    /// Initial navigation target.
    pub initial_url: Option<String>,
    /// Locale advertised to web content; `None` uses the process default.
    pub accept_language: Option<Locale>,
    /// Whether local file access is permitted.
    pub allow_file_access: bool,
}

impl WebViewConfig {
    /// Create a new WebView configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial URL to navigate after creation.
    pub fn initial_url(mut self, initial_url: impl Into<String>) -> Self {
        self.initial_url = Some(initial_url.into());
        self
    }

    /// Advertise `locale` to web content.
    pub fn accept_language(mut self, locale: Locale) -> Self {
        self.accept_language = Some(locale);
        self
    }

    /// Set file-access capability.
    pub fn allow_file_access(mut self, allow_file_access: bool) -> Self {
        self.allow_file_access = allow_file_access;
        self
    }

    /// The `Accept-Language` header value for this configuration.
    pub fn accept_language_header(&self) -> String {
        let locale = self
            .accept_language
            .clone()
            .unwrap_or_else(crate::default_locale::default_locale);
        if locale.has_region() {
            format!("{}-{},{};q=0.9", locale.language(), locale.region(), locale.language())
        } else {
            locale.language().to_string()
        }
    }
}

/// WebView abstraction used by platform backends.
pub trait WebView: Send {
    /// Get the stable WebView identifier.
    fn id(&self) -> WebViewId;

    /// Destroy this WebView and release platform resources.
    fn destroy(&mut self) -> Result<()>;

    /// Navigate WebView to the provided URL.
    fn navigate(&self, url: &str) -> Result<()>;
}

/// Host capability for creating WebViews.
pub trait WebViewHost: Send + Sync {
    /// Concrete WebView type used by this host.
    type WebView: WebView;

    /// Create a new WebView instance.
    fn create_webview(&self, config: WebViewConfig) -> Result<Self::WebView>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_webview_config_builder() {
        let config = WebViewConfig::new()
            .initial_url("https://example.com")
            .accept_language(Locale::with_region("uk", "UA"))
            .allow_file_access(true);

        assert_eq!(config.initial_url.as_deref(), Some("https://example.com"));
        assert_eq!(config.accept_language, Some(Locale::with_region("uk", "UA")));
        assert!(config.allow_file_access);
    }

    #[test]
    fn test_accept_language_header() {
        let regional = WebViewConfig::new().accept_language(Locale::with_region("uk", "UA"));
        assert_eq!(regional.accept_language_header(), "uk-UA,uk;q=0.9");

        let bare = WebViewConfig::new().accept_language(Locale::from_language("fr"));
        assert_eq!(bare.accept_language_header(), "fr");
    }
}
