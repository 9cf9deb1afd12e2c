//! Google Translate provider
//!
//! Talks to the unofficial `translate_a/single` endpoint (the one the gtx
//! web client uses), which needs no API key. For production workloads the
//! official Cloud Translation API is the better choice; this endpoint is
//! rate-limited and its response format is undocumented.
//!
//! The response body is a nested array whose first element holds translation
//! segments; each segment is itself an array whose first element is the
//! translated string. Segments are joined in order with no separator.

use crate::translation::error::{TranslationError, TranslationResult};
use crate::translation::provider::{TranslationProvider, validate_lang};
use async_trait::async_trait;

const DEFAULT_BASE_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// Provider backed by the unofficial Google Translate endpoint
///
/// Supports `source_lang = "auto"` natively: the endpoint detects the source
/// language when `sl=auto` is passed.
#[derive(Clone)]
pub struct GoogleTranslateProvider {
    /// HTTP client for async requests
    client: reqwest::Client,
    /// Base URL for the translation endpoint
    base_url: String,
}

impl GoogleTranslateProvider {
    /// Create a new provider with a 30 second request timeout
    pub fn new() -> TranslationResult<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a provider pointed at a custom endpoint (used in tests)
    pub fn with_base_url(base_url: &str) -> TranslationResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| {
                TranslationError::Network(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Extract the translated text from the endpoint's nested-array body
    ///
    /// The expected shape is `[[["<translated>", "<original>", ...], ...], ...]`.
    /// Entries whose first element is not a string (nulls show up in practice)
    /// are skipped.
    fn parse_segments(body: &serde_json::Value) -> TranslationResult<String> {
        let segments = body
            .as_array()
            .and_then(|outer| outer.first())
            .and_then(|first| first.as_array())
            .ok_or(TranslationError::InvalidResponse)?;

        let translated: String = segments
            .iter()
            .filter_map(|segment| {
                segment
                    .as_array()
                    .and_then(|parts| parts.first())
                    .and_then(|part| part.as_str())
            })
            .collect();

        Ok(translated)
    }
}

impl std::fmt::Debug for GoogleTranslateProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleTranslateProvider")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslateProvider {
    async fn translate_chunk(
        &self,
        text: &str,
        target_lang: &str,
        source_lang: &str,
    ) -> TranslationResult<String> {
        validate_lang(target_lang)?;
        validate_lang(source_lang)?;

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("client", "gtx"),
                ("sl", source_lang),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| TranslationError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TranslationError::HttpStatus(response.status().as_u16()));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|_| TranslationError::InvalidResponse)?;

        Self::parse_segments(&body)
    }

    fn provider_name(&self) -> &str {
        "Google Translate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ========== Response Parsing Tests ==========

    #[test]
    fn test_parse_single_segment() {
        let body = json!([[["Hola mundo", "Hello world", null, null]]]);
        let result = GoogleTranslateProvider::parse_segments(&body).unwrap();
        assert_eq!(result, "Hola mundo");
    }

    #[test]
    fn test_parse_concatenates_segments_in_order() {
        let body = json!([[
            ["Hello ", "Hola ", null, null],
            ["world", "mundo", null, null]
        ]]);
        let result = GoogleTranslateProvider::parse_segments(&body).unwrap();
        assert_eq!(result, "Hello world");
    }

    #[test]
    fn test_parse_skips_null_segments() {
        let body = json!([[
            ["Hello", "Hola", null, null],
            [null, null, null, null],
            ["world", "mundo", null, null]
        ]]);
        let result = GoogleTranslateProvider::parse_segments(&body).unwrap();
        assert_eq!(result, "Helloworld");
    }

    #[test]
    fn test_parse_rejects_non_array_body() {
        let body = json!({ "invalid": "format" });
        let result = GoogleTranslateProvider::parse_segments(&body);
        assert_eq!(result, Err(TranslationError::InvalidResponse));
    }

    #[test]
    fn test_parse_rejects_non_array_first_element() {
        let body = json!(["not-an-array"]);
        let result = GoogleTranslateProvider::parse_segments(&body);
        assert_eq!(result, Err(TranslationError::InvalidResponse));
    }

    #[test]
    fn test_parse_empty_segment_list() {
        let body = json!([[]]);
        let result = GoogleTranslateProvider::parse_segments(&body).unwrap();
        assert_eq!(result, "");
    }

    // ========== Validation Tests ==========

    #[tokio::test]
    async fn test_invalid_target_lang_fails_before_request() {
        let provider = GoogleTranslateProvider::new().unwrap();
        let result = provider.translate_chunk("hello", "bad@code", "en").await;
        assert!(matches!(result, Err(TranslationError::Config(_))));
    }

    #[tokio::test]
    async fn test_invalid_source_lang_fails_before_request() {
        let provider = GoogleTranslateProvider::new().unwrap();
        let result = provider.translate_chunk("hello", "es", "bad#code").await;
        assert!(matches!(result, Err(TranslationError::Config(_))));
    }

    // ========== Provider Metadata Tests ==========

    #[test]
    fn test_provider_name() {
        let provider = GoogleTranslateProvider::new().unwrap();
        assert_eq!(provider.provider_name(), "Google Translate");
    }

    #[test]
    fn test_debug_output_shows_endpoint() {
        let provider = GoogleTranslateProvider::new().unwrap();
        let debug_str = format!("{:?}", provider);
        assert!(debug_str.contains("translate.googleapis.com"));
    }

    // ========== Live Endpoint Tests (network access required) ==========

    #[tokio::test]
    #[ignore] // Run with: cargo test -- --ignored
    async fn test_live_single_translation() {
        let provider = GoogleTranslateProvider::new().unwrap();
        let result = provider
            .translate_chunk("Hello world", "es", "auto")
            .await
            .unwrap();
        println!("Translation: Hello world → {}", result);
        assert!(!result.is_empty());
    }
}
