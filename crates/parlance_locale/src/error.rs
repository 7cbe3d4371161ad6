use thiserror::Error;

/// Errors produced while parsing a locale tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("locale tag is empty")]
    Empty,

    /// Not a valid BCP 47 language identifier once normalized.
    #[error("invalid locale tag {tag:?}: {reason}")]
    Invalid { tag: String, reason: String },
}
