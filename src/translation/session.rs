//! Translation session: chunking, sequential dispatch, ordered reassembly
//!
//! A [`TranslationSession`] owns the small mutable record a UI binds to
//! (`translated_text` / `is_translating` / `error`) and updates it only
//! through its own methods. The result of [`TranslationSession::translate`]
//! is observed through that state, not a return value, matching the
//! reactive-update style of the surrounding application.

use crate::translation::chunk::split_into_chunks;
use crate::translation::error::{TranslationError, TranslationResult};
use crate::translation::provider::{AUTO_SOURCE, TranslationProvider};
use std::sync::Arc;
use tracing::debug;

/// Snapshot of a session's observable state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationState {
    pub translated_text: String,
    pub is_translating: bool,
    pub error: Option<String>,
}

impl Default for TranslationState {
    fn default() -> Self {
        Self {
            translated_text: String::new(),
            is_translating: false,
            error: None,
        }
    }
}

type ChangeHook = Box<dyn Fn(&TranslationState) + Send + Sync>;

/// Chunked translator bound to one provider
///
/// Long inputs are split on sentence boundaries, translated one chunk at a
/// time in input order, and reassembled by plain concatenation (the retained
/// delimiters already carry the whitespace between chunks).
pub struct TranslationSession {
    provider: Arc<dyn TranslationProvider>,
    state: TranslationState,
    on_change: Option<ChangeHook>,
}

impl TranslationSession {
    pub fn new(provider: Arc<dyn TranslationProvider>) -> Self {
        Self {
            provider,
            state: TranslationState::default(),
            on_change: None,
        }
    }

    /// Register a hook invoked after every state change
    pub fn set_on_change(&mut self, hook: impl Fn(&TranslationState) + Send + Sync + 'static) {
        self.on_change = Some(Box::new(hook));
    }

    pub fn translated_text(&self) -> &str {
        &self.state.translated_text
    }

    pub fn is_translating(&self) -> bool {
        self.state.is_translating
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn state(&self) -> &TranslationState {
        &self.state
    }

    /// Translate `text` into `target_lang`; outcome lands in the session state.
    ///
    /// `source_lang` defaults to `"auto"` when `None`. Empty or
    /// whitespace-only text sets the error without touching `is_translating`
    /// or making any external call. Each new call clears the previous result
    /// and error before the first request goes out.
    pub async fn translate(&mut self, text: &str, target_lang: &str, source_lang: Option<&str>) {
        if text.trim().is_empty() {
            self.state.error = Some(TranslationError::EmptyInput.to_string());
            self.notify();
            return;
        }

        let source_lang = source_lang.unwrap_or(AUTO_SOURCE);

        self.state.is_translating = true;
        self.state.error = None;
        self.state.translated_text.clear();
        self.notify();

        match self.translate_chunks(text, target_lang, source_lang).await {
            Ok(translated) => {
                self.state.translated_text = translated;
                self.state.error = None;
            }
            Err(e) => {
                self.state.translated_text.clear();
                self.state.error = Some(e.to_string());
            }
        }

        // Single exit point: is_translating never stays stuck on any path.
        self.state.is_translating = false;
        self.notify();
    }

    /// Return the session to its initial state unconditionally
    pub fn reset(&mut self) {
        self.state = TranslationState::default();
        self.notify();
    }

    async fn translate_chunks(
        &self,
        text: &str,
        target_lang: &str,
        source_lang: &str,
    ) -> TranslationResult<String> {
        let chunks = split_into_chunks(text);
        debug!(
            provider = self.provider.provider_name(),
            chunks = chunks.len(),
            target = target_lang,
            "translating"
        );

        let mut translated = String::new();
        for chunk in &chunks {
            // Sequential on purpose: chunk n+1 is not dispatched until chunk
            // n completes, so concatenation order matches input order and a
            // failure stops the remaining chunks.
            let piece = self
                .provider
                .translate_chunk(chunk, target_lang, source_lang)
                .await?;
            translated.push_str(&piece);
        }

        Ok(translated)
    }

    fn notify(&self) {
        if let Some(hook) = &self.on_change {
            hook(&self.state);
        }
    }
}

impl std::fmt::Debug for TranslationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationSession")
            .field("provider", &self.provider.provider_name())
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translation::chunk::MAX_CHUNK_CHARS;
    use crate::translation::mock::{MockMode, MockTranslator};
    use std::collections::HashMap;
    use std::sync::Mutex;

    fn session_with(mock: &MockTranslator) -> TranslationSession {
        TranslationSession::new(Arc::new(mock.clone()))
    }

    fn long_text() -> String {
        (0..40)
            .map(|i| format!("This is sentence number {}. ", i))
            .collect()
    }

    // ========== Initial State Tests ==========

    #[test]
    fn test_initial_state_is_empty() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let session = session_with(&mock);

        assert_eq!(session.translated_text(), "");
        assert!(!session.is_translating());
        assert_eq!(session.error(), None);
    }

    // ========== Success Path Tests ==========

    #[tokio::test]
    async fn test_translate_hello_world() {
        let mut map = HashMap::new();
        map.insert(
            ("Hello world".to_string(), "es".to_string()),
            "Hola mundo".to_string(),
        );
        let mock = MockTranslator::new(MockMode::Mappings(map));
        let mut session = session_with(&mock);

        session.translate("Hello world", "es", None).await;

        assert_eq!(session.translated_text(), "Hola mundo");
        assert_eq!(session.error(), None);
        assert!(!session.is_translating());
    }

    #[tokio::test]
    async fn test_short_text_makes_exactly_one_call() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let mut session = session_with(&mock);

        session.translate("Hello world", "es", None).await;

        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_long_text_chunk_inputs_reproduce_original() {
        let text = long_text();
        assert!(text.chars().count() > MAX_CHUNK_CHARS);

        let mock = MockTranslator::new(MockMode::NoOp);
        let mut session = session_with(&mock);

        session.translate(&text, "es", None).await;

        let calls = mock.calls();
        assert!(calls.len() > 1);
        assert_eq!(calls.concat(), text);
        // NoOp provider: reassembled output equals the input.
        assert_eq!(session.translated_text(), text);
    }

    #[tokio::test]
    async fn test_multi_chunk_output_concatenates_in_order() {
        let text = long_text();
        let mock = MockTranslator::new(MockMode::Suffix);
        let mut session = session_with(&mock);

        session.translate(&text, "es", None).await;

        let expected: String = mock.calls().iter().map(|c| format!("{}_es", c)).collect();
        assert_eq!(session.translated_text(), expected);
        assert_eq!(session.error(), None);
    }

    // ========== Validation Tests ==========

    #[tokio::test]
    async fn test_empty_text_makes_no_calls() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let mut session = session_with(&mock);

        session.translate("", "es", None).await;

        assert_eq!(mock.call_count(), 0);
        assert_eq!(session.error(), Some("Text cannot be empty"));
        assert!(!session.is_translating());
    }

    #[tokio::test]
    async fn test_whitespace_only_text_is_empty() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let mut session = session_with(&mock);

        session.translate("   ", "es", None).await;

        assert_eq!(mock.call_count(), 0);
        assert_eq!(session.error(), Some("Text cannot be empty"));
    }

    // ========== Error Path Tests ==========

    #[tokio::test]
    async fn test_http_error_sets_status_message() {
        let mock = MockTranslator::new(MockMode::Error(TranslationError::HttpStatus(500)));
        let mut session = session_with(&mock);

        session.translate("Hello", "es", None).await;

        assert_eq!(session.error(), Some("Translation failed with status: 500"));
        assert_eq!(session.translated_text(), "");
        assert!(!session.is_translating());
    }

    #[tokio::test]
    async fn test_network_error_surfaced_verbatim() {
        let mock = MockTranslator::new(MockMode::Error(TranslationError::Network(
            "Network error".to_string(),
        )));
        let mut session = session_with(&mock);

        session.translate("Hello", "es", None).await;

        assert_eq!(session.error(), Some("Network error"));
        assert_eq!(session.translated_text(), "");
    }

    #[tokio::test]
    async fn test_invalid_response_message() {
        let mock = MockTranslator::new(MockMode::Error(TranslationError::InvalidResponse));
        let mut session = session_with(&mock);

        session.translate("Hello", "es", None).await;

        assert_eq!(
            session.error(),
            Some("Invalid response format from translation service")
        );
    }

    #[tokio::test]
    async fn test_chunk_failure_aborts_remaining_chunks() {
        let text = long_text();
        let mock = MockTranslator::new(MockMode::ErrorAt {
            call: 1,
            error: TranslationError::HttpStatus(500),
        });
        let mut session = session_with(&mock);

        session.translate(&text, "es", None).await;

        // The failing call is the last one issued; chunks after it are never
        // dispatched, and any partial result is discarded.
        assert_eq!(mock.call_count(), 2);
        assert_eq!(session.translated_text(), "");
        assert_eq!(session.error(), Some("Translation failed with status: 500"));
        assert!(!session.is_translating());
    }

    // ========== Reset & Replacement Tests ==========

    #[tokio::test]
    async fn test_reset_restores_initial_state() {
        let mock = MockTranslator::new(MockMode::Error(TranslationError::HttpStatus(500)));
        let mut session = session_with(&mock);

        session.translate("Hello", "es", None).await;
        assert!(session.error().is_some());

        session.reset();

        assert_eq!(session.translated_text(), "");
        assert!(!session.is_translating());
        assert_eq!(session.error(), None);
    }

    #[tokio::test]
    async fn test_new_request_replaces_previous_result() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let mut session = session_with(&mock);

        session.translate("Hello", "es", None).await;
        assert_eq!(session.translated_text(), "Hello_es");

        session.translate("Hello", "fr", None).await;
        assert_eq!(session.translated_text(), "Hello_fr");
    }

    #[tokio::test]
    async fn test_success_after_failure_clears_error() {
        let mock_fail = MockTranslator::new(MockMode::Error(TranslationError::HttpStatus(500)));
        let mut session = session_with(&mock_fail);
        session.translate("Hello", "es", None).await;
        assert!(session.error().is_some());

        // Same state record, now with a working provider.
        let mock_ok = MockTranslator::new(MockMode::Suffix);
        session.provider = Arc::new(mock_ok);
        session.translate("Hello", "es", None).await;

        assert_eq!(session.error(), None);
        assert_eq!(session.translated_text(), "Hello_es");
    }

    // ========== Observer Hook Tests ==========

    #[tokio::test]
    async fn test_on_change_sees_in_flight_state() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let mut session = session_with(&mock);

        let observed: Arc<Mutex<Vec<bool>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&observed);
        session.set_on_change(move |state| {
            sink.lock().unwrap().push(state.is_translating);
        });

        session.translate("Hello", "es", None).await;

        let flags = observed.lock().unwrap();
        // First notification with the flag raised, last with it cleared.
        assert_eq!(flags.first(), Some(&true));
        assert_eq!(flags.last(), Some(&false));
    }

    #[tokio::test]
    async fn test_on_change_fires_on_reset() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let mut session = session_with(&mock);

        let count = Arc::new(Mutex::new(0usize));
        let sink = Arc::clone(&count);
        session.set_on_change(move |_| {
            *sink.lock().unwrap() += 1;
        });

        session.reset();
        assert_eq!(*count.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_default_source_language_is_auto() {
        // The mock ignores the source language, so assert through a session
        // built directly against a provider that records it.
        use crate::translation::provider::TranslationProvider;
        use async_trait::async_trait;

        struct SourceRecorder(Mutex<Vec<String>>);

        #[async_trait]
        impl TranslationProvider for SourceRecorder {
            async fn translate_chunk(
                &self,
                text: &str,
                _target_lang: &str,
                source_lang: &str,
            ) -> TranslationResult<String> {
                self.0.lock().unwrap().push(source_lang.to_string());
                Ok(text.to_string())
            }

            fn provider_name(&self) -> &str {
                "Source Recorder"
            }
        }

        let recorder = Arc::new(SourceRecorder(Mutex::new(Vec::new())));
        let mut session =
            TranslationSession::new(Arc::clone(&recorder) as Arc<dyn TranslationProvider>);

        session.translate("Hello", "es", None).await;
        session.translate("Hola", "en", Some("es")).await;

        let seen = recorder.0.lock().unwrap();
        assert_eq!(seen.as_slice(), ["auto".to_string(), "es".to_string()]);
    }
}
