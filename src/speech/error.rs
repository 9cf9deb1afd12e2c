/// Error types for the speech module
///
/// As with translation errors, the `Display` output is the user-facing
/// message stored in the controller's `error` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechError {
    /// Input text was empty or whitespace-only
    EmptyInput,
    /// The host environment has no speech capability
    Unsupported,
    /// The engine reported a non-benign playback failure
    Engine(String),
}

impl std::fmt::Display for SpeechError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpeechError::EmptyInput => write!(f, "Text cannot be empty"),
            SpeechError::Unsupported => {
                write!(f, "Text-to-Speech is not supported in this browser")
            }
            SpeechError::Engine(cause) => write!(f, "Speech error: {}", cause),
        }
    }
}

impl std::error::Error for SpeechError {}
