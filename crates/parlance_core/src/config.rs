//! Parlance configuration (`parlance.toml`)
//!
//! ```toml
//! default_locale = "en-US"
//! preference_name = "parlance_preference"
//! storage_dir = "/var/lib/myapp"   # optional
//! app_name = "myapp"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use parlance_locale::Locale;
use serde::{Deserialize, Serialize};

use crate::error::{ParlanceError, StoreError};
use crate::preference::{PreferenceLocaleStore, DEFAULT_PREFERENCE_NAME};

/// Settings for the default persistent setup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ParlanceConfig {
    /// Locale used until one has been persisted.
    #[serde(default = "default_locale")]
    pub default_locale: Locale,
    /// Preference file name, without extension.
    #[serde(default = "default_preference_name")]
    pub preference_name: String,
    /// Directory for the preference file. Defaults to `<config dir>/<app_name>`.
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,
    #[serde(default = "default_app_name")]
    pub app_name: String,
}

fn default_locale() -> Locale {
    Locale::from_language("en")
}

fn default_preference_name() -> String {
    DEFAULT_PREFERENCE_NAME.to_string()
}

fn default_app_name() -> String {
    "parlance".to_string()
}

impl Default for ParlanceConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            preference_name: default_preference_name(),
            storage_dir: None,
            app_name: default_app_name(),
        }
    }
}

impl ParlanceConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, ParlanceError> {
        toml::from_str(src).map_err(|e| ParlanceError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ParlanceError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ParlanceError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Directory holding the preference file.
    pub fn storage_dir(&self) -> Result<PathBuf, ParlanceError> {
        match &self.storage_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(dirs::config_dir()
                .ok_or(StoreError::NoConfigDir)?
                .join(&self.app_name)),
        }
    }

    pub fn open_store(&self) -> Result<PreferenceLocaleStore, ParlanceError> {
        let dir = self.storage_dir()?;
        Ok(PreferenceLocaleStore::open_named(
            dir,
            self.default_locale.clone(),
            &self.preference_name,
        )?)
    }
}
