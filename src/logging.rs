//! Structured logging helpers for mock generation and dispatch.
//!
//! Keeps event names and field keys consistent across the crate. Everything
//! goes through the `tracing` crate; the binary decides where it ends up.

use crate::recorder::Call;
use std::fmt;

/// Helper function to format and log multi-line output without structured fields.
pub fn log_display<D: fmt::Display>(message: D, level: LogLevel) {
    let msg = message.to_string();
    match level {
        LogLevel::Info => tracing::info!("{}", msg),
        LogLevel::Warn => tracing::warn!("{}", msg),
        LogLevel::Error => tracing::error!("{}", msg),
        LogLevel::Debug => tracing::debug!("{}", msg),
    }
}

/// Log levels matching tracing crate levels.
#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

/// Log catalog loading.
pub fn log_catalog_loaded(path: &str, classes: usize) {
    tracing::info!(catalog = path, classes, "Class catalog loaded");
}

/// Log a newly generated mock type.
pub fn log_mock_generated(name: &str, target: &str, methods: usize) {
    tracing::info!(mock = name, target, methods, "Mock class generated");
}

/// Log a rejected generation request.
pub fn log_generation_rejected(name: &str, reason: &str) {
    tracing::debug!(mock = name, reason, "Mock generation rejected");
}

/// Log instantiation of a generated type.
pub fn log_mock_instantiated(name: &str, id: u64) {
    tracing::debug!(mock = name, id, "Mock instantiated");
}

/// Log a recorded call.
pub fn log_call_recorded(call: &Call) {
    tracing::trace!(
        receiver = call.receiver().as_u64(),
        method = call.method(),
        arguments = call.arguments().len(),
        "Call recorded"
    );
}

/// Log an answer registration. `previous` is how many answers were already
/// mapped to the method.
pub fn log_answer_mapped(method: &str, previous: usize) {
    if previous > 0 {
        tracing::debug!(method, previous, "Answer replaces earlier stub");
    } else {
        tracing::debug!(method, "Answer mapped");
    }
}

/// Log a dispatch that found no stub.
pub fn log_unstubbed_call(mock: &str, method: &str) {
    tracing::trace!(mock, method, "No answer registered, returning default");
}

/// Log a failing answer.
pub fn log_answer_failed(mock: &str, method: &str, error: &str) {
    tracing::debug!(mock, method, error, "Answer raised an error");
}
