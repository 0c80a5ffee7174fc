use crate::generator::{InterceptedMethod, MockType};
use crate::recorder::Call;
use crate::value::Value;
use crossterm::style::Stylize;
use itertools::Itertools;
use std::sync::atomic::{AtomicBool, Ordering};

/// Pretty printing utilities for CLI output
pub struct Formatter;

impl Formatter {
    /// Format a method invocation with its arguments.
    pub fn format_invocation(method: &str, arguments: &[Value]) -> String {
        format!("{}({})", method, arguments.iter().join(", "))
    }

    /// Format the outcome of one call.
    pub fn format_call_result(method: &str, arguments: &[Value], result: &Value) -> String {
        format!("{} => {}", Self::format_invocation(method, arguments), result)
    }

    /// Format a recorded call with its position in the log.
    pub fn format_recorded_call(index: usize, call: &Call) -> String {
        format!("{:>4}: {}", index, call)
    }

    /// Format a method signature as `name(a, b, ...)`.
    pub fn format_signature(method: &InterceptedMethod) -> String {
        let mut params: Vec<String> = (1..=method.required_parameters())
            .map(|i| format!("${}", i))
            .collect();
        if method.is_variadic() {
            params.push("...".to_string());
        }
        let returns = if method.returns_void() { ": void" } else { "" };
        format!("{}({}){}", method.name(), params.join(", "), returns)
    }

    /// Format the surface of a generated type.
    pub fn format_mock_type(mock_type: &MockType) -> String {
        let mut lines = vec![
            format!("Mock type: {}", mock_type.name()),
            format!("  extends: {}", mock_type.ancestry().join(" -> ")),
        ];
        if !mock_type.interfaces().is_empty() {
            lines.push(format!("  implements: {}", mock_type.interfaces().join(", ")));
        }
        lines.push(format!("  intercepted methods ({}):", mock_type.methods().len()));
        lines.extend(mock_type.methods().iter().map(|m| {
            format!(
                "    {}  [{}]",
                Self::format_signature(m),
                m.declared_in()
            )
        }));
        lines.join("\n")
    }

    /// Format an informational message in blue.
    pub fn info(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Info)
    }

    /// Format a success message in green.
    pub fn success(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Success)
    }

    /// Format a warning message in yellow.
    pub fn warning(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Warning)
    }

    /// Format an error message in red.
    pub fn error(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Error)
    }

    /// Configure whether ANSI colors are enabled.
    pub fn configure_colors(enable: bool) {
        COLOR_ENABLED.store(enable, Ordering::Relaxed);
    }

    /// Auto-configure color output based on environment.
    pub fn configure_colors_from_env() {
        let no_color = std::env::var_os("NO_COLOR").is_some();
        Self::configure_colors(!no_color);
    }

    fn apply_color(message: &str, kind: ColorKind) -> String {
        if !COLOR_ENABLED.load(Ordering::Relaxed) {
            return message.to_string();
        }

        match kind {
            ColorKind::Info => format!("{}", message.blue()),
            ColorKind::Success => format!("{}", message.green()),
            ColorKind::Warning => format!("{}", message.yellow()),
            ColorKind::Error => format!("{}", message.red()),
        }
    }
}

#[derive(Copy, Clone)]
enum ColorKind {
    Info,
    Success,
    Warning,
    Error,
}

static COLOR_ENABLED: AtomicBool = AtomicBool::new(true);
