//! Call recording for mock instances.
//!
//! Each mock instance owns exactly one [`CallRecorder`]. The recorder is an
//! append-only log; nothing is ever removed from it while the mock lives.

mod call;

pub use call::Call;

use crate::value::ObjectId;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Append-only log of intercepted calls, in the order they happened.
#[derive(Debug, Default)]
pub struct CallRecorder {
    calls: Mutex<Vec<Call>>,
    bound: AtomicBool,
}

impl CallRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh recorder ready to hand to `MockClassGenerator::instantiate`.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Mark the recorder as owned by a mock. Fails if it already is.
    pub(crate) fn claim(&self) -> bool {
        !self.bound.swap(true, Ordering::AcqRel)
    }

    pub(crate) fn release(&self) {
        self.bound.store(false, Ordering::Release);
    }

    /// Append a call to the log.
    pub fn record_call(&self, call: Call) {
        crate::logging::log_call_recorded(&call);
        self.calls.lock().push(call);
    }

    /// Calls made on `receiver` to `method`, oldest first.
    ///
    /// The query reads the log as it advances, so calls recorded after it was
    /// created are still seen. Clone it or call [`CallQuery::restart`] to walk
    /// the matches again.
    pub fn calls_to(&self, method: &str, receiver: ObjectId) -> CallQuery<'_> {
        CallQuery {
            recorder: self,
            method: method.to_string(),
            receiver,
            cursor: 0,
        }
    }

    pub fn count_calls_to(&self, method: &str, receiver: ObjectId) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| call.matches(method, receiver))
            .count()
    }

    /// Snapshot of every recorded call.
    pub fn all_calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }
}

/// Lazy, restartable sequence of recorded calls for one receiver and method.
#[derive(Debug, Clone)]
pub struct CallQuery<'a> {
    recorder: &'a CallRecorder,
    method: String,
    receiver: ObjectId,
    cursor: usize,
}

impl CallQuery<'_> {
    /// Rewind to the first recorded call.
    pub fn restart(&mut self) {
        self.cursor = 0;
    }
}

impl Iterator for CallQuery<'_> {
    type Item = Call;

    fn next(&mut self) -> Option<Call> {
        let calls = self.recorder.calls.lock();
        while let Some(call) = calls.get(self.cursor) {
            self.cursor += 1;
            if call.matches(&self.method, self.receiver) {
                return Some(call.clone());
            }
        }
        None
    }
}
