//! Speech playback controller
//!
//! Small state machine over an injected [`SpeechEngine`]:
//! `Idle -> Speaking -> Paused -> Speaking -> Idle`, with error transitions.
//! The controller enforces exclusive use of the single playback channel by
//! always cancelling the current utterance before starting a new one.

use crate::speech::engine::{PlaybackEvent, SpeechEngine, Utterance, is_benign_interruption};
use crate::speech::error::SpeechError;
use tracing::debug;

/// Playback states. `Paused` implies an utterance is loaded, so the
/// "paused implies speaking" invariant holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Speaking,
    Paused,
}

type ChangeHook = Box<dyn Fn(PlaybackState) + Send + Sync>;

/// Playback controller owning at most one current utterance
///
/// Constructed with `None` when the host environment has no speech
/// capability, in which case every operation sets the unsupported error and
/// does nothing else.
pub struct SpeechController {
    engine: Option<Box<dyn SpeechEngine>>,
    state: PlaybackState,
    current: Option<Utterance>,
    error: Option<String>,
    on_change: Option<ChangeHook>,
}

impl SpeechController {
    pub fn new(engine: Option<Box<dyn SpeechEngine>>) -> Self {
        Self {
            engine,
            state: PlaybackState::Idle,
            current: None,
            error: None,
            on_change: None,
        }
    }

    /// Register a hook invoked after every state transition
    pub fn set_on_change(&mut self, hook: impl Fn(PlaybackState) + Send + Sync + 'static) {
        self.on_change = Some(Box::new(hook));
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// True while an utterance is loaded, including while paused
    pub fn is_speaking(&self) -> bool {
        self.state != PlaybackState::Idle
    }

    pub fn is_paused(&self) -> bool {
        self.state == PlaybackState::Paused
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Text of the current utterance, if one is loaded
    pub fn current_text(&self) -> Option<&str> {
        self.current.as_ref().map(|u| u.text.as_str())
    }

    /// Start speaking `text`, replacing any current utterance.
    ///
    /// `lang` defaults to `en-US`. The capability check runs before all other
    /// validation; empty text sets the error and leaves playback untouched.
    pub fn speak(&mut self, text: &str, lang: Option<&str>) {
        if !self.check_engine() {
            return;
        }

        if text.trim().is_empty() {
            self.error = Some(SpeechError::EmptyInput.to_string());
            return;
        }

        // Exactly one cancel when an utterance is active, none otherwise.
        self.stop();
        self.error = None;

        let mut utterance = Utterance::new(text);
        if let Some(lang) = lang {
            utterance = utterance.with_lang(lang);
        }

        debug!(text_len = utterance.text.len(), lang = %utterance.lang, "speaking");
        if let Some(engine) = self.engine.as_mut() {
            engine.speak(&utterance);
        }
        self.current = Some(utterance);
        self.transition(PlaybackState::Speaking);
    }

    /// Pause the current utterance; no-op unless speaking
    pub fn pause(&mut self) {
        if !self.check_engine() {
            return;
        }

        if self.state == PlaybackState::Speaking {
            if let Some(engine) = self.engine.as_mut() {
                engine.pause();
            }
            self.transition(PlaybackState::Paused);
        }
    }

    /// Resume a paused utterance; no-op unless paused
    pub fn resume(&mut self) {
        if !self.check_engine() {
            return;
        }

        if self.state == PlaybackState::Paused {
            if let Some(engine) = self.engine.as_mut() {
                engine.resume();
            }
            self.transition(PlaybackState::Speaking);
        }
    }

    /// Cancel the current utterance; no-op when idle
    pub fn stop(&mut self) {
        if !self.check_engine() {
            return;
        }

        if self.state != PlaybackState::Idle {
            if let Some(engine) = self.engine.as_mut() {
                engine.cancel();
            }
            self.current = None;
            self.transition(PlaybackState::Idle);
        }
    }

    /// Apply an engine-delivered event to the state machine.
    ///
    /// Events for an utterance that is no longer current (arriving after the
    /// controller already returned to idle) are ignored.
    pub fn handle_event(&mut self, event: PlaybackEvent) {
        match event {
            PlaybackEvent::Started => {
                if self.current.is_some() {
                    self.transition(PlaybackState::Speaking);
                }
            }
            PlaybackEvent::Ended => {
                if self.state != PlaybackState::Idle {
                    self.current = None;
                    self.transition(PlaybackState::Idle);
                }
            }
            PlaybackEvent::Paused => {
                if self.state == PlaybackState::Speaking {
                    self.transition(PlaybackState::Paused);
                }
            }
            PlaybackEvent::Resumed => {
                if self.state == PlaybackState::Paused {
                    self.transition(PlaybackState::Speaking);
                }
            }
            PlaybackEvent::Failed(cause) => {
                if self.state == PlaybackState::Idle {
                    return;
                }
                self.current = None;
                if !is_benign_interruption(&cause) {
                    self.error = Some(SpeechError::Engine(cause).to_string());
                }
                self.transition(PlaybackState::Idle);
            }
        }
    }

    /// Capability check preceding all other validation in every method
    fn check_engine(&mut self) -> bool {
        if self.engine.is_none() {
            self.error = Some(SpeechError::Unsupported.to_string());
            return false;
        }
        true
    }

    fn transition(&mut self, state: PlaybackState) {
        self.state = state;
        if let Some(hook) = &self.on_change {
            hook(self.state);
        }
    }
}

impl Drop for SpeechController {
    fn drop(&mut self) {
        // Scoped-resource discipline: active or paused playback does not
        // outlive its controller.
        if self.state != PlaybackState::Idle {
            self.stop();
        }
    }
}

impl std::fmt::Debug for SpeechController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechController")
            .field("state", &self.state)
            .field("current", &self.current)
            .field("error", &self.error)
            .field("engine", &self.engine.is_some())
            .finish()
    }
}
