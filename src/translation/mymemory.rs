//! MyMemory translation provider
//!
//! Alternative backend with a different wire shape: a JSON object carrying
//! `responseData.translatedText` and a `responseStatus` code. MyMemory has no
//! auto-detect sentinel, so a configured fallback source language stands in
//! whenever the caller passes `"auto"`.

use crate::translation::error::{TranslationError, TranslationResult};
use crate::translation::provider::{AUTO_SOURCE, TranslationProvider, validate_lang};
use async_trait::async_trait;
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://api.mymemory.translated.net/get";

/// Default source language substituted for the "auto" sentinel
pub const DEFAULT_AUTO_SOURCE_FALLBACK: &str = "en";

#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: Option<MyMemoryData>,
    #[serde(rename = "responseStatus")]
    response_status: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct MyMemoryData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

/// Provider backed by the MyMemory public translation API
#[derive(Debug, Clone)]
pub struct MyMemoryProvider {
    client: reqwest::Client,
    base_url: String,
    /// Source language used when the caller asks for auto-detection
    auto_source_fallback: String,
}

impl MyMemoryProvider {
    /// Create a new provider with the default auto-source fallback ("en")
    pub fn new() -> TranslationResult<Self> {
        Self::with_auto_source_fallback(DEFAULT_AUTO_SOURCE_FALLBACK)
    }

    /// Create a provider substituting `fallback` for the "auto" sentinel
    pub fn with_auto_source_fallback(fallback: &str) -> TranslationResult<Self> {
        validate_lang(fallback)?;

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| {
                TranslationError::Network(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            auto_source_fallback: fallback.to_string(),
        })
    }

    /// Resolve the effective source language for a request
    fn effective_source<'a>(&'a self, source_lang: &'a str) -> &'a str {
        if source_lang == AUTO_SOURCE {
            &self.auto_source_fallback
        } else {
            source_lang
        }
    }

    fn parse_body(body: &MyMemoryResponse) -> TranslationResult<String> {
        // MyMemory reports errors in-band: a non-200 responseStatus with a
        // 200 HTTP status. The field is a number on success and sometimes a
        // string on error, so both are tolerated.
        if let Some(status) = &body.response_status {
            let code = match status {
                serde_json::Value::Number(n) => n.as_u64(),
                serde_json::Value::String(s) => s.parse::<u64>().ok(),
                _ => None,
            };
            match code {
                Some(200) => {}
                Some(code) => return Err(TranslationError::HttpStatus(code as u16)),
                None => return Err(TranslationError::InvalidResponse),
            }
        }

        body.response_data
            .as_ref()
            .and_then(|data| data.translated_text.clone())
            .ok_or(TranslationError::InvalidResponse)
    }
}

#[async_trait]
impl TranslationProvider for MyMemoryProvider {
    async fn translate_chunk(
        &self,
        text: &str,
        target_lang: &str,
        source_lang: &str,
    ) -> TranslationResult<String> {
        validate_lang(target_lang)?;
        validate_lang(source_lang)?;

        let langpair = format!("{}|{}", self.effective_source(source_lang), target_lang);
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", text), ("langpair", &langpair)])
            .send()
            .await
            .map_err(|e| TranslationError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TranslationError::HttpStatus(response.status().as_u16()));
        }

        let body: MyMemoryResponse = response
            .json()
            .await
            .map_err(|_| TranslationError::InvalidResponse)?;

        Self::parse_body(&body)
    }

    fn provider_name(&self) -> &str {
        "MyMemory"
    }
}
