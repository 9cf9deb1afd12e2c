/// Error types for the translation module
///
/// The `Display` output of each variant is the user-facing message stored in
/// the session's `error` field, so the wording here is part of the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// Input text was empty or whitespace-only
    EmptyInput,
    /// The translation endpoint answered with a non-success status
    HttpStatus(u16),
    /// Transport-level failure; the underlying message is surfaced verbatim
    Network(String),
    /// The endpoint answered success but the body was not in the expected shape
    InvalidResponse,
    /// Provider misconfiguration (bad language code, client construction, ...)
    Config(String),
}

impl std::fmt::Display for TranslationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslationError::EmptyInput => write!(f, "Text cannot be empty"),
            TranslationError::HttpStatus(code) => {
                write!(f, "Translation failed with status: {}", code)
            }
            TranslationError::Network(msg) => write!(f, "{}", msg),
            TranslationError::InvalidResponse => {
                write!(f, "Invalid response format from translation service")
            }
            TranslationError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for TranslationError {}

/// Result type for translation operations
pub type TranslationResult<T> = Result<T, TranslationError>;
