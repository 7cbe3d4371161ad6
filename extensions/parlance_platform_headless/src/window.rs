//! Headless windows.

use std::sync::{Arc, PoisonError, RwLock, Weak};

use parlance_platform::{Configuration, ContextId, Locale, PlatformError, Result, UiContext};

use crate::app::HeadlessApplication;

/// Window creation options.
#[derive(Clone, Debug)]
pub struct WindowConfig {
    /// Resource key of the declared title.
    pub title: Option<String>,
    /// Whether the window carries descriptive metadata at all.
    pub has_metadata: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: None,
            has_metadata: true,
        }
    }
}

impl WindowConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, key: impl Into<String>) -> Self {
        self.title = Some(key.into());
        self
    }

    /// Make title lookups fail, like a window registered without metadata.
    pub fn without_metadata(mut self) -> Self {
        self.has_metadata = false;
        self
    }
}

/// A headless window. Its title is rendered from the declared title key and
/// the locale the window's configuration had when the title was last set.
pub struct HeadlessWindow {
    id: ContextId,
    application: Weak<HeadlessApplication>,
    configuration: RwLock<Configuration>,
    config: WindowConfig,
    title: RwLock<Option<String>>,
}

impl HeadlessWindow {
    pub(crate) fn new(
        id: ContextId,
        application: Weak<HeadlessApplication>,
        configuration: Configuration,
        config: WindowConfig,
    ) -> Self {
        let title = config
            .title
            .as_deref()
            .map(|key| render_title(key, configuration.primary_locale()));
        Self {
            id,
            application,
            configuration: RwLock::new(configuration),
            config,
            title: RwLock::new(title),
        }
    }

    /// Currently displayed title, if any.
    pub fn title(&self) -> Option<String> {
        self.title
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Primary locale of this window's configuration.
    pub fn locale(&self) -> Option<Locale> {
        self.configuration().primary_locale().cloned()
    }
}

fn render_title(key: &str, locale: Option<&Locale>) -> String {
    match locale {
        Some(locale) => format!("{key} [{}]", locale.to_tag()),
        None => key.to_string(),
    }
}

impl UiContext for HeadlessWindow {
    fn id(&self) -> ContextId {
        self.id
    }

    fn configuration(&self) -> Configuration {
        self.configuration
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn update_configuration(&self, configuration: Configuration) {
        *self
            .configuration
            .write()
            .unwrap_or_else(PoisonError::into_inner) = configuration;
    }

    fn application_context(&self) -> Option<Arc<dyn UiContext>> {
        self.application
            .upgrade()
            .map(|app| app as Arc<dyn UiContext>)
    }

    fn declared_title(&self) -> Result<Option<String>> {
        if !self.config.has_metadata {
            return Err(PlatformError::MetadataUnavailable(format!(
                "window {:?} has no metadata",
                self.id
            )));
        }
        Ok(self.config.title.clone())
    }

    fn set_title(&self, key: &str) {
        let rendered = render_title(key, self.configuration().primary_locale());
        tracing::trace!("Window {:?} title: {}", self.id, rendered);
        *self.title.write().unwrap_or_else(PoisonError::into_inner) = Some(rendered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn window(config: WindowConfig) -> HeadlessWindow {
        HeadlessWindow::new(
            ContextId(7),
            Weak::new(),
            Configuration::from_locale(Locale::with_region("en", "US")),
            config,
        )
    }

    #[test]
    fn test_title_follows_configuration_when_reset() {
        let window = window(WindowConfig::new().title("main_title"));
        assert_eq!(window.title().as_deref(), Some("main_title [en-US]"));

        window.update_configuration(Configuration::from_locale(Locale::with_region("uk", "UA")));
        assert_eq!(window.title().as_deref(), Some("main_title [en-US]"));

        window.set_title("main_title");
        assert_eq!(window.title().as_deref(), Some("main_title [uk-UA]"));
    }

    #[test]
    fn test_declared_title() {
        assert_eq!(
            window(WindowConfig::new().title("about")).declared_title().unwrap(),
            Some("about".to_string())
        );
        assert_eq!(window(WindowConfig::new()).declared_title().unwrap(), None);
        assert!(matches!(
            window(WindowConfig::new().without_metadata()).declared_title(),
            Err(PlatformError::MetadataUnavailable(_))
        ));
    }

    #[test]
    fn test_detached_window_has_no_application() {
        assert!(window(WindowConfig::new()).application_context().is_none());
    }
}
