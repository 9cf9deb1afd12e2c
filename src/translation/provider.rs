//! Translation provider trait and language-code utilities
//!
//! The chunking and session logic never sees a provider's wire format: each
//! backend (Google, MyMemory, mock) sits behind [`TranslationProvider`] and
//! maps its own response shape onto a plain translated string.

use crate::translation::error::{TranslationError, TranslationResult};
use async_trait::async_trait;

/// Sentinel source-language code meaning "let the service detect the language"
pub const AUTO_SOURCE: &str = "auto";

/// Generic trait for translation providers
///
/// Implementations handle one chunk at a time; batching across chunks is the
/// session's job so output ordering stays with the caller.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate a single chunk of text.
    ///
    /// # Arguments
    ///
    /// * `text` - The chunk to translate
    /// * `target_lang` - Target language code (e.g., "es", "fr")
    /// * `source_lang` - Source language code, or [`AUTO_SOURCE`] for
    ///   detection; providers without an auto sentinel substitute their
    ///   configured fallback
    async fn translate_chunk(
        &self,
        text: &str,
        target_lang: &str,
        source_lang: &str,
    ) -> TranslationResult<String>;

    /// Name of this provider, for logging and CLI output
    fn provider_name(&self) -> &str;
}

/// Validate that a language code is in acceptable format
///
/// Accepts ISO 639 style codes plus region/script subtags: only alphanumeric
/// characters, hyphens, and underscores.
///
/// # Example
///
/// ```
/// use polyread::translation::provider::validate_lang;
///
/// assert!(validate_lang("en").is_ok());
/// assert!(validate_lang("zh-Hans").is_ok());
/// assert!(validate_lang("bad@code").is_err());
/// ```
pub fn validate_lang(lang: &str) -> TranslationResult<()> {
    if lang.is_empty() {
        return Err(TranslationError::Config(
            "Language code is empty".to_string(),
        ));
    }

    if !lang
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(TranslationError::Config(format!(
            "Invalid characters in language code: {}",
            lang
        )));
    }

    Ok(())
}
