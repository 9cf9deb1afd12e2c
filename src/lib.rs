//! polyread - service cores for a multilingual reading app
//!
//! Three independent components, each consuming its external collaborator
//! through a narrow interface:
//!
//! - [`translation`]: chunked text translation. Long inputs are split on
//!   sentence boundaries into bounded chunks, translated sequentially through
//!   a [`translation::TranslationProvider`], and reassembled in order.
//! - [`speech`]: playback control over an injected
//!   [`speech::SpeechEngine`] capability, with an
//!   `Idle / Speaking / Paused` state machine and at most one active
//!   utterance at a time.
//! - [`weather`]: current-weather lookup via Open-Meteo geocoding and
//!   forecast endpoints.
//!
//! Neither core component depends on the other; both expose their results
//! through small owned state records with optional on-change hooks rather
//! than return values, mirroring the reactive style of the host application.

pub mod config;
pub mod languages;
pub mod speech;
pub mod translation;
pub mod weather;

pub use config::Config;
pub use languages::{is_supported, language_name, supported_languages};
pub use speech::{PlaybackEvent, PlaybackState, SpeechController, SpeechEngine, Utterance};
pub use translation::{
    GoogleTranslateProvider, MyMemoryProvider, TranslationProvider, TranslationSession,
};
pub use weather::{WeatherClient, WeatherData};
