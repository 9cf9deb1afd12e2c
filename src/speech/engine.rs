//! Speech engine capability interface
//!
//! The host environment supplies the actual speech synthesis; the controller
//! only ever talks to it through [`SpeechEngine`]. Engine callbacks come back
//! to the controller as [`PlaybackEvent`]s - delivery only, the controller's
//! transition table stays authoritative.

/// Default language for an utterance when none is specified
pub const DEFAULT_LANG: &str = "en-US";

/// One discrete speech-playback request. At most one is active at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub lang: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Utterance {
    /// Build an utterance with default playback parameters
    /// (`en-US`, rate 1, pitch 1, volume 1)
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            lang: DEFAULT_LANG.to_string(),
            rate: 1.0,
            pitch: 1.0,
            volume: 1.0,
        }
    }

    pub fn with_lang(mut self, lang: &str) -> Self {
        self.lang = lang.to_string();
        self
    }
}

/// Events delivered by the engine for the current utterance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// Playback of the current utterance has begun
    Started,
    /// Playback ended naturally
    Ended,
    /// The engine honored a pause request
    Paused,
    /// The engine honored a resume request
    Resumed,
    /// Playback stopped with an error cause (e.g. "network", "interrupted")
    Failed(String),
}

/// Causes that mean playback stopped because of the controller's own action
/// (explicit stop, or a new utterance replacing the old one). These are never
/// surfaced as user-visible errors.
const BENIGN_CAUSES: [&str; 2] = ["canceled", "interrupted"];

/// Whether a playback failure cause is a benign interruption
pub fn is_benign_interruption(cause: &str) -> bool {
    BENIGN_CAUSES.contains(&cause)
}

/// Interface to the host environment's speech synthesis capability
///
/// Implementations serialize the actual audio output themselves; the
/// controller guarantees at most one logical utterance is active by always
/// cancelling before starting a new one.
pub trait SpeechEngine: Send {
    /// Start speaking `utterance`, replacing nothing - the controller cancels
    /// any previous utterance before calling this
    fn speak(&mut self, utterance: &Utterance);

    /// Pause the current utterance
    fn pause(&mut self);

    /// Resume a paused utterance
    fn resume(&mut self);

    /// Cancel the current utterance, if any (idempotent)
    fn cancel(&mut self);

    /// Engine-reported speaking flag, available for defensive checks; the
    /// controller tracks its own state from events
    fn speaking(&self) -> bool {
        false
    }

    /// Engine-reported paused flag, available for defensive checks
    fn paused(&self) -> bool {
        false
    }
}
