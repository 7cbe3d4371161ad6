//! Parlance Headless Platform
//!
//! An in-process host with no windowing backend. Windows, configuration
//! changes and WebViews are driven directly by code, which makes it the host
//! for tests, tools and the demo.

pub mod app;
pub mod watcher;
pub mod webview;
pub mod window;

pub use app::HeadlessApplication;
pub use watcher::{SystemLocaleWatcher, WatcherConfig};
pub use webview::{HeadlessWebView, HeadlessWebViewHost};
pub use window::{HeadlessWindow, WindowConfig};
