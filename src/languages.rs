//! Supported translation languages
//!
//! The language picker the reading app exposes. Translation providers accept
//! more codes than these; this table is the curated UI-facing set.

/// Supported target languages: (code, English name)
pub const SUPPORTED_LANGUAGES: [(&str, &str); 16] = [
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese (Simplified)"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("nl", "Dutch"),
    ("pl", "Polish"),
    ("tr", "Turkish"),
    ("vi", "Vietnamese"),
];

/// All supported languages as (code, name) pairs
pub fn supported_languages() -> &'static [(&'static str, &'static str)] {
    &SUPPORTED_LANGUAGES
}

/// English name for a supported language code
pub fn language_name(code: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Whether `code` is in the supported set
pub fn is_supported(code: &str) -> bool {
    language_name(code).is_some()
}
