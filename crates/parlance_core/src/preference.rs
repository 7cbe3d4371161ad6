//! File-backed [`LocaleStore`].
//!
//! Preferences live in a flat JSON object at `<dir>/<name>.json`:
//!
//! ```json
//! {
//!   "follow_system_locale_key": false,
//!   "language_key": "{\"language\":\"uk\",\"country\":\"UA\",\"variant\":\"\"}"
//! }
//! ```
//!
//! The locale record is itself a compact JSON string so the layout stays a flat
//! key-value map. Both keys are part of the on-disk format and must not change.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use parlance_locale::Locale;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::store::LocaleStore;

/// Preference file name used when none is given.
pub const DEFAULT_PREFERENCE_NAME: &str = "parlance_preference";

const LANGUAGE_KEY: &str = "language_key";
const FOLLOW_SYSTEM_LOCALE_KEY: &str = "follow_system_locale_key";

#[derive(Debug, Serialize, Deserialize)]
struct LocaleRecord {
    language: String,
    country: String,
    variant: String,
}

impl From<&Locale> for LocaleRecord {
    fn from(locale: &Locale) -> Self {
        Self {
            language: locale.language().to_string(),
            country: locale.region().to_string(),
            variant: locale.variant().to_string(),
        }
    }
}

impl From<LocaleRecord> for Locale {
    fn from(record: LocaleRecord) -> Self {
        Locale::new(record.language, record.country, record.variant)
    }
}

/// [`LocaleStore`] persisted to a preference file.
///
/// Reads are served from an in-memory copy loaded at open. Every write updates
/// that copy and then rewrites the file.
pub struct PreferenceLocaleStore {
    path: PathBuf,
    default_locale: Locale,
    prefs: RwLock<Map<String, Value>>,
}

impl PreferenceLocaleStore {
    /// Open `<dir>/parlance_preference.json`.
    pub fn open(dir: impl AsRef<Path>, default_locale: Locale) -> Result<Self, StoreError> {
        Self::open_named(dir, default_locale, DEFAULT_PREFERENCE_NAME)
    }

    /// Open `<dir>/<preference_name>.json`.
    ///
    /// A missing file counts as empty. A file that is not a JSON object is
    /// logged and also treated as empty; it is overwritten on the next write.
    pub fn open_named(
        dir: impl AsRef<Path>,
        default_locale: Locale,
        preference_name: &str,
    ) -> Result<Self, StoreError> {
        let path = dir.as_ref().join(format!("{preference_name}.json"));
        let prefs = read_prefs(&path)?;
        debug!("Opened locale preferences at {}", path.display());
        Ok(Self {
            path,
            default_locale,
            prefs: RwLock::new(prefs),
        })
    }

    /// Open the preference file in the user config directory, under `app_name`.
    pub fn open_default(app_name: &str, default_locale: Locale) -> Result<Self, StoreError> {
        let dir = dirs::config_dir().ok_or(StoreError::NoConfigDir)?.join(app_name);
        Self::open(dir, default_locale)
    }

    /// Location of the preference file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn put(&self, key: &str, value: Value) {
        let snapshot = {
            let mut prefs = self.prefs.write().unwrap_or_else(PoisonError::into_inner);
            prefs.insert(key.to_string(), value);
            prefs.clone()
        };
        if let Err(e) = write_prefs(&self.path, &snapshot) {
            warn!("Failed to write locale preferences to {}: {}", self.path.display(), e);
        }
    }
}

fn read_prefs(path: &Path) -> Result<Map<String, Value>, StoreError> {
    if !path.exists() {
        return Ok(Map::new());
    }
    let content = fs::read_to_string(path)?;
    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => {
            warn!("Locale preferences at {} are not an object, ignoring", path.display());
            Ok(Map::new())
        }
        Err(e) => {
            warn!("Locale preferences at {} are unreadable, ignoring: {}", path.display(), e);
            Ok(Map::new())
        }
    }
}

fn write_prefs(path: &Path, prefs: &Map<String, Value>) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(prefs)?;
    // Replace atomically.
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

impl LocaleStore for PreferenceLocaleStore {
    fn locale(&self) -> Locale {
        let prefs = self.prefs.read().unwrap_or_else(PoisonError::into_inner);
        let raw = match prefs.get(LANGUAGE_KEY).and_then(Value::as_str) {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return self.default_locale.clone(),
        };
        match serde_json::from_str::<LocaleRecord>(raw) {
            Ok(record) => record.into(),
            Err(e) => {
                warn!("Stored locale {:?} is unreadable, using default: {}", raw, e);
                self.default_locale.clone()
            }
        }
    }

    fn persist_locale(&self, locale: &Locale) {
        match serde_json::to_string(&LocaleRecord::from(locale)) {
            Ok(record) => self.put(LANGUAGE_KEY, Value::String(record)),
            Err(e) => warn!("Failed to encode locale {}: {}", locale, e),
        }
    }

    fn set_follow_system_locale(&self, follow: bool) {
        self.put(FOLLOW_SYSTEM_LOCALE_KEY, Value::Bool(follow));
    }

    fn is_following_system_locale(&self) -> bool {
        self.prefs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(FOLLOW_SYSTEM_LOCALE_KEY)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_empty_store_returns_default() {
        let dir = tempdir().expect("failed to create temp dir");
        let store = PreferenceLocaleStore::open(dir.path(), Locale::from_language("en"))
            .expect("open should succeed");

        assert_eq!(store.locale(), Locale::from_language("en"));
        assert!(!store.is_following_system_locale());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().expect("failed to create temp dir");
        let nested = dir.path().join("nested").join("prefs");
        {
            let store = PreferenceLocaleStore::open(&nested, Locale::from_language("en"))
                .expect("open should succeed");
            store.persist_locale(&Locale::new("ca", "ES", "valencia"));
            store.set_follow_system_locale(true);
        }

        let reopened = PreferenceLocaleStore::open(&nested, Locale::from_language("en"))
            .expect("reopen should succeed");
        assert_eq!(reopened.locale(), Locale::new("ca", "ES", "valencia"));
        assert!(reopened.is_following_system_locale());
    }

    #[test]
    fn test_on_disk_layout_uses_stable_keys() {
        let dir = tempdir().expect("failed to create temp dir");
        let store = PreferenceLocaleStore::open_named(dir.path(), Locale::from_language("en"), "prefs")
            .expect("open should succeed");
        store.persist_locale(&Locale::with_region("uk", "UA"));
        store.set_follow_system_locale(false);

        let raw = fs::read_to_string(dir.path().join("prefs.json")).expect("file written");
        let value: Value = serde_json::from_str(&raw).expect("valid json");

        assert_eq!(value[FOLLOW_SYSTEM_LOCALE_KEY], Value::Bool(false));
        let record: Value =
            serde_json::from_str(value[LANGUAGE_KEY].as_str().expect("string record"))
                .expect("record is json");
        assert_eq!(record["language"], "uk");
        assert_eq!(record["country"], "UA");
        assert_eq!(record["variant"], "");
    }

    #[test]
    fn test_reads_records_written_by_earlier_versions() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(
            dir.path().join("parlance_preference.json"),
            r#"{"language_key":"{\"language\":\"iw\",\"country\":\"IL\",\"variant\":\"\"}","follow_system_locale_key":true}"#,
        )
        .expect("write fixture");

        let store = PreferenceLocaleStore::open(dir.path(), Locale::from_language("en"))
            .expect("open should succeed");

        // Stored deprecated codes are returned untouched.
        assert_eq!(store.locale(), Locale::with_region("iw", "IL"));
        assert!(store.is_following_system_locale());
    }

    #[test]
    fn test_blank_or_corrupt_record_falls_back_to_default() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("parlance_preference.json");

        fs::write(&path, r#"{"language_key":"  "}"#).expect("write fixture");
        let store = PreferenceLocaleStore::open(dir.path(), Locale::from_language("en")).unwrap();
        assert_eq!(store.locale(), Locale::from_language("en"));

        fs::write(&path, r#"{"language_key":"{not json"}"#).expect("write fixture");
        let store = PreferenceLocaleStore::open(dir.path(), Locale::from_language("en")).unwrap();
        assert_eq!(store.locale(), Locale::from_language("en"));
    }

    #[test]
    fn test_corrupt_file_is_treated_as_empty_and_replaced() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("parlance_preference.json");
        fs::write(&path, "not = json").expect("write fixture");

        let store = PreferenceLocaleStore::open(dir.path(), Locale::from_language("en"))
            .expect("corrupt file should not fail open");
        assert_eq!(store.locale(), Locale::from_language("en"));

        store.persist_locale(&Locale::with_region("ru", "RU"));
        let reopened = PreferenceLocaleStore::open(dir.path(), Locale::from_language("en")).unwrap();
        assert_eq!(reopened.locale(), Locale::with_region("ru", "RU"));
    }

    #[test]
    fn test_unreadable_file_fails_open() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::create_dir(dir.path().join("parlance_preference.json")).expect("create dir");

        let result = PreferenceLocaleStore::open(dir.path(), Locale::from_language("en"));

        assert!(matches!(result, Err(StoreError::Io(_))));
    }
}
