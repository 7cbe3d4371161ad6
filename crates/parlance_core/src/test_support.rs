//! Recording fakes for coordinator tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use parlance_locale::Locale;
use parlance_platform::{
    Configuration, ConfigurationCallbacks, ContextId, ContextLifecycleCallbacks, HostApplication,
    PlatformError, Result, UiContext,
};

use crate::delegate::UpdateDelegate;
use crate::store::LocaleStore;

/// One observable side effect, in the order it happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    PersistLocale(Locale),
    SetFollow(bool),
    Apply(ContextId, Locale),
}

/// Shared, ordered log of store and delegate calls.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    pub fn push(&self, call: Call) {
        self.0.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }

    pub fn persisted(&self) -> Vec<Locale> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::PersistLocale(l) => Some(l),
                _ => None,
            })
            .collect()
    }

    pub fn applied(&self) -> Vec<(ContextId, Locale)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Apply(id, l) => Some((id, l)),
                _ => None,
            })
            .collect()
    }
}

#[derive(Default)]
struct StoreState {
    locale: Option<Locale>,
    follow: bool,
}

/// In-memory store that records writes.
#[derive(Clone)]
pub struct RecordingStore {
    default_locale: Locale,
    state: Arc<Mutex<StoreState>>,
    log: CallLog,
}

impl RecordingStore {
    pub fn new(default_locale: Locale, log: &CallLog) -> Self {
        Self {
            default_locale,
            state: Arc::default(),
            log: log.clone(),
        }
    }

    /// Seed stored values without recording a call.
    pub fn seed(&self, locale: Option<Locale>, follow: bool) {
        let mut state = self.state.lock().unwrap();
        state.locale = locale;
        state.follow = follow;
    }
}

impl LocaleStore for RecordingStore {
    fn locale(&self) -> Locale {
        self.state
            .lock()
            .unwrap()
            .locale
            .clone()
            .unwrap_or_else(|| self.default_locale.clone())
    }

    fn persist_locale(&self, locale: &Locale) {
        self.state.lock().unwrap().locale = Some(locale.clone());
        self.log.push(Call::PersistLocale(locale.clone()));
    }

    fn set_follow_system_locale(&self, follow: bool) {
        self.state.lock().unwrap().follow = follow;
        self.log.push(Call::SetFollow(follow));
    }

    fn is_following_system_locale(&self) -> bool {
        self.state.lock().unwrap().follow
    }
}

/// Delegate that only records what it was asked to apply.
#[derive(Clone)]
pub struct RecordingDelegate {
    log: CallLog,
}

impl RecordingDelegate {
    pub fn new(log: &CallLog) -> Self {
        Self { log: log.clone() }
    }
}

impl UpdateDelegate for RecordingDelegate {
    fn apply_locale(&self, context: &dyn UiContext, locale: &Locale) {
        self.log.push(Call::Apply(context.id(), locale.clone()));
    }
}

/// What a fake context reports as its declared title.
#[derive(Clone, Debug)]
pub enum TitleMetadata {
    Declared(String),
    Missing,
    Broken,
}

/// A UI context that doubles as a host application.
pub struct FakeContext {
    id: ContextId,
    application: Option<Arc<FakeContext>>,
    configuration: Mutex<Configuration>,
    title_metadata: TitleMetadata,
    titles: Mutex<Vec<String>>,
    updates: AtomicUsize,
    title_lookups: AtomicUsize,
    context_callbacks: Mutex<Vec<Arc<dyn ContextLifecycleCallbacks>>>,
    configuration_callbacks: Mutex<Vec<Arc<dyn ConfigurationCallbacks>>>,
}

impl FakeContext {
    fn build(
        id: u64,
        application: Option<Arc<FakeContext>>,
        locale: Locale,
        title_metadata: TitleMetadata,
    ) -> Arc<Self> {
        Arc::new(Self {
            id: ContextId(id),
            application,
            configuration: Mutex::new(Configuration::from_locale(locale)),
            title_metadata,
            titles: Mutex::default(),
            updates: AtomicUsize::new(0),
            title_lookups: AtomicUsize::new(0),
            context_callbacks: Mutex::default(),
            configuration_callbacks: Mutex::default(),
        })
    }

    pub fn application(id: u64, locale: Locale) -> Arc<Self> {
        Self::build(id, None, locale, TitleMetadata::Missing)
    }

    pub fn window(id: u64, application: &Arc<FakeContext>, locale: Locale) -> Arc<Self> {
        Self::build(
            id,
            Some(Arc::clone(application)),
            locale,
            TitleMetadata::Declared("main_title".to_string()),
        )
    }

    pub fn window_with_title(
        id: u64,
        application: &Arc<FakeContext>,
        locale: Locale,
        title_metadata: TitleMetadata,
    ) -> Arc<Self> {
        Self::build(id, Some(Arc::clone(application)), locale, title_metadata)
    }

    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    pub fn title_lookups(&self) -> usize {
        self.title_lookups.load(Ordering::SeqCst)
    }

    pub fn titles(&self) -> Vec<String> {
        self.titles.lock().unwrap().clone()
    }

    pub fn context_callbacks(&self) -> Vec<Arc<dyn ContextLifecycleCallbacks>> {
        self.context_callbacks.lock().unwrap().clone()
    }

    pub fn configuration_callbacks(&self) -> Vec<Arc<dyn ConfigurationCallbacks>> {
        self.configuration_callbacks.lock().unwrap().clone()
    }
}

impl UiContext for FakeContext {
    fn id(&self) -> ContextId {
        self.id
    }

    fn configuration(&self) -> Configuration {
        self.configuration.lock().unwrap().clone()
    }

    fn update_configuration(&self, configuration: Configuration) {
        self.updates.fetch_add(1, Ordering::SeqCst);
        *self.configuration.lock().unwrap() = configuration;
    }

    fn application_context(&self) -> Option<Arc<dyn UiContext>> {
        self.application
            .clone()
            .map(|app| app as Arc<dyn UiContext>)
    }

    fn declared_title(&self) -> Result<Option<String>> {
        self.title_lookups.fetch_add(1, Ordering::SeqCst);
        match &self.title_metadata {
            TitleMetadata::Declared(key) => Ok(Some(key.clone())),
            TitleMetadata::Missing => Ok(None),
            TitleMetadata::Broken => Err(PlatformError::MetadataUnavailable(format!(
                "no metadata for {:?}",
                self.id
            ))),
        }
    }

    fn set_title(&self, key: &str) {
        self.titles.lock().unwrap().push(key.to_string());
    }
}

impl HostApplication for FakeContext {
    fn register_context_callbacks(&self, callbacks: Arc<dyn ContextLifecycleCallbacks>) {
        self.context_callbacks.lock().unwrap().push(callbacks);
    }

    fn register_configuration_callbacks(&self, callbacks: Arc<dyn ConfigurationCallbacks>) {
        self.configuration_callbacks.lock().unwrap().push(callbacks);
    }
}
