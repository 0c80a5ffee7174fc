//! Parsing of `--stub`, `--throw` and `--call` values.

use crate::value::Value;
use miette::Diagnostic;

#[derive(Debug, Clone, PartialEq, thiserror::Error, Diagnostic)]
pub enum SpecError {
    #[error("Invalid {kind} '{spec}': {reason}")]
    #[diagnostic(
        code(mockforge::invalid_spec),
        help("Stubs are METHOD=JSON, throws are METHOD=MESSAGE and calls are METHOD or METHOD=[JSON, ...].")
    )]
    Invalid {
        kind: &'static str,
        spec: String,
        reason: String,
    },
}

fn invalid(kind: &'static str, spec: &str, reason: impl Into<String>) -> SpecError {
    SpecError::Invalid {
        kind,
        spec: spec.to_string(),
        reason: reason.into(),
    }
}

fn split_method<'a>(kind: &'static str, spec: &'a str) -> Result<(&'a str, Option<&'a str>), SpecError> {
    let (method, rest) = match spec.split_once('=') {
        Some((method, rest)) => (method.trim(), Some(rest.trim())),
        None => (spec.trim(), None),
    };
    if method.is_empty() {
        return Err(invalid(kind, spec, "method name is required"));
    }
    Ok((method, rest))
}

fn parse_json(kind: &'static str, spec: &str, raw: &str) -> Result<Value, SpecError> {
    serde_json::from_str::<serde_json::Value>(raw)
        .map(Value::from)
        .map_err(|e| invalid(kind, spec, format!("not valid JSON ({})", e)))
}

/// `METHOD=JSON`
#[derive(Debug, Clone, PartialEq)]
pub struct StubSpec {
    pub method: String,
    pub value: Value,
}

impl StubSpec {
    pub fn parse(spec: &str) -> Result<Self, SpecError> {
        let (method, raw) = split_method("stub", spec)?;
        let raw = raw
            .filter(|r| !r.is_empty())
            .ok_or_else(|| invalid("stub", spec, "expected METHOD=JSON"))?;
        Ok(Self {
            method: method.to_string(),
            value: parse_json("stub", spec, raw)?,
        })
    }
}

/// `METHOD=MESSAGE`
#[derive(Debug, Clone, PartialEq)]
pub struct ThrowSpec {
    pub method: String,
    pub message: String,
}

impl ThrowSpec {
    pub fn parse(spec: &str) -> Result<Self, SpecError> {
        let (method, message) = split_method("throw", spec)?;
        Ok(Self {
            method: method.to_string(),
            message: message
                .filter(|m| !m.is_empty())
                .unwrap_or("thrown by stub")
                .to_string(),
        })
    }
}

/// `METHOD` or `METHOD=JSON`. A JSON array is the argument list; any other
/// JSON value is passed as the only argument.
#[derive(Debug, Clone, PartialEq)]
pub struct CallSpec {
    pub method: String,
    pub arguments: Vec<Value>,
}

impl CallSpec {
    pub fn parse(spec: &str) -> Result<Self, SpecError> {
        let (method, raw) = split_method("call", spec)?;
        let arguments = match raw.filter(|r| !r.is_empty()) {
            None => Vec::new(),
            Some(raw) => match parse_json("call", spec, raw)? {
                Value::List(items) => items,
                single => vec![single],
            },
        };
        Ok(Self {
            method: method.to_string(),
            arguments,
        })
    }
}
