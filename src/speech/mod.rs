//! Speech playback control
//!
//! [`SpeechController`] wraps a host-supplied [`SpeechEngine`] capability and
//! maintains the `Idle / Speaking / Paused` state machine, guaranteeing at
//! most one active utterance at any time. Engine callbacks are delivered as
//! [`PlaybackEvent`]s; benign interruptions (playback stopped by the
//! controller's own cancel) are swallowed rather than surfaced as errors.

pub mod controller;
pub mod engine;
pub mod error;
pub mod mock;

pub use controller::{PlaybackState, SpeechController};
pub use engine::{DEFAULT_LANG, PlaybackEvent, SpeechEngine, Utterance, is_benign_interruption};
pub use error::SpeechError;
pub use mock::{EngineLog, MockEngine};
