use crate::value::{ObjectId, Value};
use miette::Diagnostic;
use std::fmt;

/// Result type for answer resolution
pub type AnswerResult = Result<Value, AnswerError>;

/// Failures raised by an answer while producing a value.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Diagnostic)]
pub enum AnswerError {
    #[error("{message}")]
    #[diagnostic(code(mockforge::answer_thrown))]
    Thrown { message: String },

    #[error("Answer failed: {0}")]
    #[diagnostic(code(mockforge::answer_failed))]
    Failed(String),
}

/// What an answer gets to see about the call it is answering.
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    pub receiver: ObjectId,
    pub method: &'a str,
    pub arguments: &'a [Value],
}

/// Strategy producing the value of a stubbed call.
pub trait Answer: Send + Sync + fmt::Debug {
    fn get_answer(&self, invocation: &Invocation<'_>) -> AnswerResult;
}

/// Always returns the same value.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticAnswer {
    value: Value,
}

impl StaticAnswer {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl Answer for StaticAnswer {
    fn get_answer(&self, _invocation: &Invocation<'_>) -> AnswerResult {
        Ok(self.value.clone())
    }
}

type Callback = dyn Fn(&Invocation<'_>) -> AnswerResult + Send + Sync;

/// Delegates to a closure that sees the full invocation.
pub struct CallbackAnswer {
    callback: Box<Callback>,
}

impl CallbackAnswer {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&Invocation<'_>) -> AnswerResult + Send + Sync + 'static,
    {
        Self {
            callback: Box::new(callback),
        }
    }
}

impl fmt::Debug for CallbackAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackAnswer").finish_non_exhaustive()
    }
}

impl Answer for CallbackAnswer {
    fn get_answer(&self, invocation: &Invocation<'_>) -> AnswerResult {
        (self.callback)(invocation)
    }
}

/// Fails every call with the configured message.
#[derive(Debug, Clone, PartialEq)]
pub struct ThrowAnswer {
    message: String,
}

impl ThrowAnswer {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Answer for ThrowAnswer {
    fn get_answer(&self, _invocation: &Invocation<'_>) -> AnswerResult {
        Err(AnswerError::Thrown {
            message: self.message.clone(),
        })
    }
}
