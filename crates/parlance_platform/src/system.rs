//! System locale detection.

use parlance_locale::Locale;

use crate::context::Configuration;

/// Locale reported when the platform gives nothing usable.
pub const FALLBACK_LOCALE_TAG: &str = "en-US";

/// Detect the current system locale.
///
/// POSIX `C`/`POSIX` locales and unparsable tags resolve to
/// [`FALLBACK_LOCALE_TAG`].
pub fn system_locale() -> Locale {
    sys_locale::get_locale()
        .and_then(|tag| parse_system_tag(&tag))
        .unwrap_or_else(fallback_locale)
}

/// Detect the user's preferred locales, highest priority first.
pub fn system_locales() -> Vec<Locale> {
    let locales: Vec<Locale> = sys_locale::get_locales()
        .filter_map(|tag| parse_system_tag(&tag))
        .collect();
    if locales.is_empty() {
        vec![fallback_locale()]
    } else {
        locales
    }
}

/// Current system configuration built from the preferred locales.
pub fn system_configuration() -> Configuration {
    Configuration::new(system_locales())
}

/// Parse a tag as reported by the OS.
pub fn parse_system_tag(tag: &str) -> Option<Locale> {
    let trimmed = tag.trim();
    if trimmed.eq_ignore_ascii_case("c") || trimmed.eq_ignore_ascii_case("posix") {
        return None;
    }
    match Locale::parse(trimmed) {
        Ok(locale) => Some(locale),
        Err(e) => {
            tracing::debug!("Ignoring system locale {:?}: {}", tag, e);
            None
        }
    }
}

fn fallback_locale() -> Locale {
    Locale::with_region("en", "US")
}
