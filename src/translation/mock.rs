//! Mock translation provider for testing
//!
//! Deterministic, network-free provider used by session and chunking tests.
//! Every call is recorded in a shared log so tests can assert how many
//! external calls were made and with which texts.

use crate::translation::error::{TranslationError, TranslationResult};
use crate::translation::provider::TranslationProvider;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock translation modes for different test scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append the target language as a suffix: "hello" → "hello_fr"
    Suffix,

    /// Predefined mappings: (text, target_lang) → translation, with suffix
    /// fallback for unknown pairs
    Mappings(HashMap<(String, String), String>),

    /// Fail every call with the given error
    Error(TranslationError),

    /// Succeed (suffix mode) until the zero-based `call` index, then fail.
    /// Used to test abort-on-chunk-failure behavior.
    ErrorAt {
        call: usize,
        error: TranslationError,
    },

    /// Return the input unchanged
    NoOp,
}

/// Mock translator with a shared call log
#[derive(Debug, Clone)]
pub struct MockTranslator {
    mode: MockMode,
    /// Optional simulated network delay (in milliseconds)
    delay_ms: u64,
    /// Texts passed to `translate_chunk`, in call order
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockTranslator {
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            delay_ms: 0,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock with simulated per-call latency
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self {
            mode,
            delay_ms,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Snapshot of the chunk texts received so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("call log poisoned").clone()
    }

    /// Number of calls received so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("call log poisoned").len()
    }

    async fn apply_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }

    fn apply_translation(
        &self,
        text: &str,
        target: &str,
        call_index: usize,
    ) -> TranslationResult<String> {
        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, target)),
            MockMode::Mappings(map) => {
                let key = (text.to_string(), target.to_string());
                Ok(map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| format!("{}_{}", text, target)))
            }
            MockMode::Error(err) => Err(err.clone()),
            MockMode::ErrorAt { call, error } => {
                if call_index >= *call {
                    Err(error.clone())
                } else {
                    Ok(format!("{}_{}", text, target))
                }
            }
            MockMode::NoOp => Ok(text.to_string()),
        }
    }
}

#[async_trait]
impl TranslationProvider for MockTranslator {
    async fn translate_chunk(
        &self,
        text: &str,
        target_lang: &str,
        _source_lang: &str,
    ) -> TranslationResult<String> {
        self.apply_delay().await;

        let call_index = {
            let mut calls = self.calls.lock().expect("call log poisoned");
            calls.push(text.to_string());
            calls.len() - 1
        };

        self.apply_translation(text, target_lang, call_index)
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}
