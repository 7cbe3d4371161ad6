//! Parlance demo
//!
//! Starts a headless application with the persistent coordinator, opens a main
//! window and applies the requested locale operations, reporting what the
//! window actually renders after each step.
//!
//! Run with:
//! `cargo run -p parlance_demo -- --set uk-UA --simulate-system en-GB --webview`

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use parlance_core::{LocaleCoordinator, ParlanceConfig, WebViewLocaleHelper};
use parlance_platform::{system_configuration, Configuration, Locale, UiContext};
use parlance_platform_headless::{
    HeadlessApplication, HeadlessWebViewHost, HeadlessWindow, SystemLocaleWatcher, WatcherConfig,
    WindowConfig,
};
use tracing_subscriber::EnvFilter;

/// Drive the Parlance locale coordinator on a headless host
#[derive(Parser)]
#[command(name = "parlance-demo")]
#[command(version)]
struct Cli {
    /// Configuration file (parlance.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for the preference file, overriding the configuration
    #[arg(long)]
    storage_dir: Option<PathBuf>,

    /// Fix the active locale to this tag (e.g. uk-UA)
    #[arg(long, value_name = "TAG", conflicts_with = "follow_system")]
    set: Option<String>,

    /// Follow the system locale
    #[arg(long)]
    follow_system: bool,

    /// Pretend the system locale changed to this tag
    #[arg(long, value_name = "TAG")]
    simulate_system: Option<String>,

    /// Apply the WebView locale workaround
    #[arg(long)]
    webview: bool,

    /// Watch the OS locale for this many seconds before exiting
    #[arg(long, value_name = "N")]
    watch_secs: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("parlance_core=debug,parlance_platform_headless=debug,info")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut config = match &cli.config {
        Some(path) => ParlanceConfig::load(path)?,
        None => ParlanceConfig::default(),
    };
    if let Some(dir) = &cli.storage_dir {
        config.storage_dir = Some(dir.clone());
    }

    let app = HeadlessApplication::new(system_configuration());
    let coordinator = LocaleCoordinator::init_with_config(&app, &config)
        .context("Failed to initialize locale coordinator")?;
    tracing::info!("Preferences at {}", config.storage_dir()?.display());

    let window = app.create_window(WindowConfig::new().title("main_title"));
    report("startup", &coordinator, &window);

    if let Some(tag) = &cli.set {
        coordinator.set_locale(window.as_ref(), parse_tag(tag)?);
        report("set", &coordinator, &window);
    }

    if cli.follow_system {
        coordinator.set_follow_system_locale(window.as_ref());
        report("follow system", &coordinator, &window);
    }

    if let Some(tag) = &cli.simulate_system {
        app.dispatch_configuration_change(Configuration::from_locale(parse_tag(tag)?));
        // Open windows are recreated on a configuration change.
        let window = app.create_window(WindowConfig::new().title("main_title"));
        report("system change", &coordinator, &window);
    }

    if cli.webview {
        let helper = WebViewLocaleHelper::new(HeadlessWebViewHost::new(&app));
        let web_window = app.create_window(WindowConfig::new().title("web_title"));
        helper.implement_workaround(web_window.as_ref(), &coordinator);
        report("webview workaround", &coordinator, &web_window);
    }

    if let Some(secs) = cli.watch_secs {
        watch(&app, &coordinator, Duration::from_secs(secs));
    }

    Ok(())
}

fn parse_tag(tag: &str) -> Result<Locale> {
    tag.parse::<Locale>()
        .with_context(|| format!("Invalid locale tag {tag:?}"))
}

fn report(step: &str, coordinator: &LocaleCoordinator, window: &HeadlessWindow) {
    tracing::info!(
        "[{}] language: {}, following system: {}, window locale: {}, title: {}",
        step,
        coordinator.language(),
        coordinator.is_following_system_locale(),
        window
            .locale()
            .map(|l| l.to_tag())
            .unwrap_or_else(|| "-".to_string()),
        window.title().unwrap_or_default()
    );
}

fn watch(app: &Arc<HeadlessApplication>, coordinator: &LocaleCoordinator, duration: Duration) {
    tracing::info!("Watching system locale for {:?}", duration);
    let watcher = SystemLocaleWatcher::spawn(
        app,
        WatcherConfig::with_poll_interval(Duration::from_millis(500)),
    );
    std::thread::sleep(duration);
    drop(watcher);

    tracing::info!(
        "[watch] language: {}, application locale: {:?}",
        coordinator.language(),
        app.configuration().primary_locale().map(Locale::to_tag)
    );
}
