use crate::value::{ObjectId, Value};
use itertools::Itertools;
use serde::Serialize;
use std::fmt;

/// A single intercepted invocation.
///
/// Fields are private so a recorded call cannot be altered after the fact.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Call {
    receiver: ObjectId,
    method: String,
    arguments: Vec<Value>,
}

impl Call {
    /// A call with no arguments.
    pub fn new(receiver: ObjectId, method: impl Into<String>) -> Self {
        Self {
            receiver,
            method: method.into(),
            arguments: Vec::new(),
        }
    }

    pub fn with_arguments(receiver: ObjectId, method: impl Into<String>, arguments: Vec<Value>) -> Self {
        Self {
            receiver,
            method: method.into(),
            arguments,
        }
    }

    pub fn receiver(&self) -> ObjectId {
        self.receiver
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }

    /// Whether this call was made on `receiver` to `method`.
    pub fn matches(&self, method: &str, receiver: ObjectId) -> bool {
        self.receiver == receiver && self.method == method
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}->{}({})",
            self.receiver,
            self.method,
            self.arguments.iter().join(", ")
        )
    }
}
