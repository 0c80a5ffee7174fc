//! Stub registration and answer lookup.
//!
//! Answers are kept per method name in registration order. Lookup always
//! returns the most recently registered answer for the exact method name;
//! earlier registrations are kept as history but never consulted.

mod answers;

pub use answers::{
    Answer, AnswerError, AnswerResult, CallbackAnswer, Invocation, StaticAnswer, ThrowAnswer,
};

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct StubMapper {
    stubs: Mutex<HashMap<String, Vec<Arc<dyn Answer>>>>,
    bound: AtomicBool,
}

impl StubMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Mark the stub map as owned by a mock. Fails if it already is.
    pub(crate) fn claim(&self) -> bool {
        !self.bound.swap(true, Ordering::AcqRel)
    }

    /// Register `answer` for `method`. It replaces any earlier answer as the
    /// effective one.
    pub fn map_stub_to_method(&self, answer: Arc<dyn Answer>, method: &str) {
        let mut stubs = self.stubs.lock();
        let answers = stubs.entry(method.to_string()).or_default();
        crate::logging::log_answer_mapped(method, answers.len());
        answers.push(answer);
    }

    /// The effective answer for `method`, if one was registered.
    pub fn get_stub_by_method(&self, method: &str) -> Option<Arc<dyn Answer>> {
        self.stubs
            .lock()
            .get(method)
            .and_then(|answers| answers.last())
            .cloned()
    }

    pub fn has_stub(&self, method: &str) -> bool {
        self.stubs
            .lock()
            .get(method)
            .is_some_and(|answers| !answers.is_empty())
    }

    /// Every answer registered for `method`, oldest first.
    pub fn answers_for(&self, method: &str) -> Vec<Arc<dyn Answer>> {
        self.stubs.lock().get(method).cloned().unwrap_or_default()
    }

    /// Number of stubbed methods
    pub fn len(&self) -> usize {
        self.stubs.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.stubs.lock().is_empty()
    }
}
