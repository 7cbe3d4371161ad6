//! System locale watcher.
//!
//! Polls the OS locale on a background thread and reports changes to a
//! [`HeadlessApplication`] as configuration changes. Callbacks run on the
//! watcher thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use parlance_platform::{system_configuration, Configuration};

use crate::app::HeadlessApplication;

/// Watcher settings.
#[derive(Clone, Debug)]
pub struct WatcherConfig {
    /// Time between two polls.
    pub poll_interval: Duration,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(2),
        }
    }
}

impl WatcherConfig {
    pub fn with_poll_interval(poll_interval: Duration) -> Self {
        Self { poll_interval }
    }
}

/// Handle to a running watcher thread. Stops the thread on drop.
pub struct SystemLocaleWatcher {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl SystemLocaleWatcher {
    /// Watch the OS locale for `app`.
    pub fn spawn(app: &Arc<HeadlessApplication>, config: WatcherConfig) -> Self {
        Self::spawn_with(app, config, system_configuration)
    }

    /// Watch with a custom detector instead of the OS.
    ///
    /// The detector's first result is the baseline; only later results whose
    /// primary locale differs from the previous poll are dispatched.
    pub fn spawn_with<F>(app: &Arc<HeadlessApplication>, config: WatcherConfig, detect: F) -> Self
    where
        F: Fn() -> Configuration + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let app = Arc::downgrade(app);
        let handle = thread::Builder::new()
            .name("parlance-locale-watcher".to_string())
            .spawn({
                let stop = Arc::clone(&stop);
                move || watch(app, config, detect, stop)
            });

        let handle = match handle {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::warn!("Failed to start system locale watcher: {}", e);
                None
            }
        };
        Self { stop, handle }
    }

    /// Whether the watcher thread is still running.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the watcher and wait for its thread to exit.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            handle.thread().unpark();
            if handle.join().is_err() {
                tracing::warn!("System locale watcher thread panicked");
            }
        }
    }
}

impl Drop for SystemLocaleWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

fn watch<F>(app: Weak<HeadlessApplication>, config: WatcherConfig, detect: F, stop: Arc<AtomicBool>)
where
    F: Fn() -> Configuration,
{
    let mut last = detect();
    tracing::debug!(
        "Watching system locale every {:?}, starting at {:?}",
        config.poll_interval,
        last.primary_locale().map(|l| l.to_tag())
    );

    loop {
        thread::park_timeout(config.poll_interval);
        if stop.load(Ordering::SeqCst) {
            break;
        }

        let current = detect();
        if current.primary_locale() == last.primary_locale() {
            continue;
        }

        let Some(app) = app.upgrade() else {
            break;
        };
        tracing::info!(
            "System locale changed: {:?} -> {:?}",
            last.primary_locale().map(|l| l.to_tag()),
            current.primary_locale().map(|l| l.to_tag())
        );
        app.dispatch_configuration_change(current.clone());
        last = current;
    }
    tracing::debug!("System locale watcher stopped");
}
