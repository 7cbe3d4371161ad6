use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use crate::deprecated::canonical_language;
use crate::LocaleError;

/// Normalize locale identifiers to a canonical-ish form before parsing.
///
/// - Trims whitespace.
/// - Drops a POSIX encoding (`.UTF-8`) or modifier (`@euro`) suffix.
/// - Converts `_` to `-` (POSIX environments and Android report `en_US`).
pub fn normalize_locale(s: &str) -> String {
    let s = s.trim();
    let end = s.find(['.', '@']).unwrap_or(s.len());
    s[..end].replace('_', "-")
}

/// A language, an optional region and an optional variant.
///
/// Construction canonicalizes case: the language is lowercased and the region uppercased.
/// The variant is kept as given. Equality compares all three fields as canonicalized.
///
/// Deprecated language codes are stored as-is; use [`Locale::canonical_language`] to
/// read the modern code.
///
/// Serializes as a `{language, region, variant}` record so every value survives
/// exactly. Deserialization also accepts a tag string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LocaleRepr")]
pub struct Locale {
    language: String,
    region: String,
    variant: String,
}

impl Locale {
    /// Create a locale from its parts. An empty `region` or `variant` means "absent".
    ///
    /// No validation happens here; use [`Locale::parse`] for untrusted input.
    pub fn new(
        language: impl AsRef<str>,
        region: impl AsRef<str>,
        variant: impl AsRef<str>,
    ) -> Self {
        Self {
            language: language.as_ref().trim().to_ascii_lowercase(),
            region: region.as_ref().trim().to_ascii_uppercase(),
            variant: variant.as_ref().trim().to_string(),
        }
    }

    /// Create a language-only locale.
    pub fn from_language(language: impl AsRef<str>) -> Self {
        Self::new(language, "", "")
    }

    /// Create a locale with a language and a region.
    pub fn with_region(language: impl AsRef<str>, region: impl AsRef<str>) -> Self {
        Self::new(language, region, "")
    }

    /// Parse a tag such as `en`, `en-US`, `en_US.UTF-8` or `de-DE-POSIX`.
    ///
    /// The tag is validated as a BCP 47 language identifier. A script subtag
    /// (`zh-Hans-CN`) is dropped since a locale here carries no script. Variants
    /// come back lowercased and joined with `-`.
    pub fn parse(tag: &str) -> Result<Self, LocaleError> {
        let normalized = normalize_locale(tag);
        if normalized.is_empty() {
            return Err(LocaleError::Empty);
        }

        let langid: LanguageIdentifier =
            normalized.parse().map_err(|e| LocaleError::Invalid {
                tag: tag.to_string(),
                reason: format!("{e}"),
            })?;

        let region = langid.region.as_ref().map(|r| r.as_str()).unwrap_or("");
        let variant = langid
            .variants()
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join("-");
        Ok(Self::new(langid.language.as_str(), region, variant))
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn variant(&self) -> &str {
        &self.variant
    }

    pub fn has_region(&self) -> bool {
        !self.region.is_empty()
    }

    /// Language code with deprecated ISO codes replaced (`iw` -> `he`, `ji` -> `yi`,
    /// `in` -> `id`). The stored value is untouched.
    pub fn canonical_language(&self) -> &str {
        canonical_language(&self.language)
    }

    /// Render as `language[-REGION][-variant]`.
    pub fn to_tag(&self) -> String {
        [&self.language, &self.region, &self.variant]
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// Accepted serialized forms: a tag string, as written in configuration files,
/// or the `{language, region, variant}` record that serialization produces.
#[derive(Deserialize)]
#[serde(untagged)]
enum LocaleRepr {
    Tag(String),
    Parts {
        language: String,
        #[serde(default)]
        region: String,
        #[serde(default)]
        variant: String,
    },
}

impl TryFrom<LocaleRepr> for Locale {
    type Error = LocaleError;

    fn try_from(repr: LocaleRepr) -> Result<Self, Self::Error> {
        match repr {
            LocaleRepr::Tag(tag) => Self::parse(&tag),
            LocaleRepr::Parts {
                language,
                region,
                variant,
            } => Ok(Self::new(language, region, variant)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_tag())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
