use crate::recorder::Call;
use crate::value::Value;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CommandOutput<T>
where
    T: Serialize,
{
    pub status: String,
    pub result: Option<T>,
    pub errors: Option<Vec<String>>,
}

impl<T: Serialize> CommandOutput<T> {
    pub fn new(result: T, errors: Vec<String>) -> Self {
        let status = if errors.is_empty() { "success" } else { "error" };
        Self {
            status: status.to_string(),
            result: Some(result),
            errors: if errors.is_empty() { None } else { Some(errors) },
        }
    }
}

/// Outcome of one scripted call in `run`.
#[derive(Debug, Serialize)]
pub struct CallOutcome {
    pub method: String,
    pub arguments: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returned: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub mock: String,
    pub target: String,
    pub calls: Vec<CallOutcome>,
    pub recorded: Vec<Call>,
}
