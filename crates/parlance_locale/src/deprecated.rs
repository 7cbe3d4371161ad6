/// Deprecated ISO 639 codes still reported by older platforms, paired with their
/// modern replacement.
pub const DEPRECATED_LANGUAGE_CODES: &[(&str, &str)] = &[("iw", "he"), ("ji", "yi"), ("in", "id")];

/// Replace a deprecated language code with its modern equivalent.
///
/// Any other code passes through unchanged. Lookup is exact, so pass an already
/// lowercased code.
pub fn canonical_language(language: &str) -> &str {
    DEPRECATED_LANGUAGE_CODES
        .iter()
        .find(|(old, _)| *old == language)
        .map(|(_, new)| *new)
        .unwrap_or(language)
}
