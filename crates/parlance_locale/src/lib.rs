//! Parlance locale values
//!
//! The [`Locale`] type shared by every Parlance crate:
//! - Canonical casing on construction (`en`, `US`)
//! - Tag parsing for BCP 47 and POSIX spellings (`en-US`, `en_US.UTF-8`)
//! - Read-time replacement of deprecated language codes (`iw`, `ji`, `in`)

mod deprecated;
mod error;
mod locale;

pub use deprecated::{canonical_language, DEPRECATED_LANGUAGE_CODES};
pub use error::LocaleError;
pub use locale::{normalize_locale, Locale};
