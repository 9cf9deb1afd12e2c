//! Mock speech engine for testing
//!
//! Records every invocation so controller tests can assert exactly which
//! engine calls were made (e.g. that replacing an utterance cancels the
//! previous one exactly once).

use crate::speech::engine::{SpeechEngine, Utterance};
use std::sync::{Arc, Mutex};

/// Invocation log shared between a [`MockEngine`] and the test that owns it
#[derive(Debug, Default, Clone)]
pub struct EngineLog {
    /// Utterances passed to `speak`, in call order
    pub spoken: Vec<Utterance>,
    pub pause_calls: usize,
    pub resume_calls: usize,
    pub cancel_calls: usize,
}

/// Recording engine with engine-side speaking/paused flags
#[derive(Debug, Default)]
pub struct MockEngine {
    log: Arc<Mutex<EngineLog>>,
    speaking: bool,
    paused: bool,
}

impl MockEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the invocation log; clone before boxing the engine
    /// into a controller
    pub fn log(&self) -> Arc<Mutex<EngineLog>> {
        Arc::clone(&self.log)
    }
}

impl SpeechEngine for MockEngine {
    fn speak(&mut self, utterance: &Utterance) {
        self.log
            .lock()
            .expect("engine log poisoned")
            .spoken
            .push(utterance.clone());
        self.speaking = true;
        self.paused = false;
    }

    fn pause(&mut self) {
        self.log.lock().expect("engine log poisoned").pause_calls += 1;
        self.paused = true;
    }

    fn resume(&mut self) {
        self.log.lock().expect("engine log poisoned").resume_calls += 1;
        self.paused = false;
    }

    fn cancel(&mut self) {
        self.log.lock().expect("engine log poisoned").cancel_calls += 1;
        self.speaking = false;
        self.paused = false;
    }

    fn speaking(&self) -> bool {
        self.speaking
    }

    fn paused(&self) -> bool {
        self.paused
    }
}
