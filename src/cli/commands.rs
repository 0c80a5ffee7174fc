use crate::cli::args::{InspectArgs, RunArgs};
use crate::cli::output::{CallOutcome, CommandOutput, RunReport};
use crate::cli::specs::{CallSpec, StubSpec, ThrowSpec};
use crate::config::Config;
use crate::descriptor::ClassCatalog;
use crate::generator::{Invoke, MockClassGenerator, MockControl, MockObject, MockTypeRegistry};
use crate::logging;
use crate::recorder::CallRecorder;
use crate::stubber::{StaticAnswer, StubMapper, ThrowAnswer};
use crate::ui::formatter::Formatter;
use miette::{Diagnostic, IntoDiagnostic, Result};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum CliError {
    #[error("No class catalog given")]
    #[diagnostic(
        code(mockforge::no_catalog),
        help("Pass --catalog <FILE> or list catalog files under [catalog] paths in .mockforge.toml.")
    )]
    NoCatalog,

    #[error("{0} of {1} calls failed")]
    #[diagnostic(code(mockforge::calls_failed))]
    CallsFailed(usize, usize),
}

fn print_info(message: impl AsRef<str>) {
    println!("{}", Formatter::info(message));
}

fn print_success(message: impl AsRef<str>) {
    println!("{}", Formatter::success(message));
}

fn print_warning(message: impl AsRef<str>) {
    println!("{}", Formatter::warning(message));
}

fn print_error(message: impl AsRef<str>) {
    println!("{}", Formatter::error(message));
}

fn load_catalog(paths: &[PathBuf], config: &Config) -> Result<ClassCatalog> {
    let paths = if paths.is_empty() {
        &config.catalog.paths
    } else {
        paths
    };
    if paths.is_empty() {
        return Err(CliError::NoCatalog.into());
    }
    Ok(ClassCatalog::load_all(paths)?)
}

fn default_inspect_name(target: &str) -> String {
    format!("{}Mock", target.replace('\\', "_"))
}

/// Execute the inspect command
pub fn inspect(args: InspectArgs, config: &Config) -> Result<()> {
    let catalog = load_catalog(&args.catalog, config)?;

    // Inspection must not reserve names in the process registry.
    let generator =
        MockClassGenerator::with_registry(Arc::new(catalog), Arc::new(MockTypeRegistry::new()));
    let name = args
        .name
        .unwrap_or_else(|| default_inspect_name(&args.target));
    let mock_type = generator.generate(&name, &args.target)?;

    if args.json || config.prefers_json() {
        let output = CommandOutput::new(mock_type.as_ref(), Vec::new());
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{}", Formatter::format_mock_type(&mock_type));
    }
    Ok(())
}

fn build_mock(generator: &MockClassGenerator, args: &RunArgs) -> Result<MockObject> {
    let mock = match &args.name {
        Some(name) => {
            generator.generate(name, &args.target)?;
            generator.instantiate(name, CallRecorder::shared(), StubMapper::shared())?
        }
        None => generator.mock(&args.target)?,
    };

    for raw in &args.stubs {
        let spec = StubSpec::parse(raw)?;
        mock.add_answer(Arc::new(StaticAnswer::new(spec.value)), &spec.method);
    }
    for raw in &args.throws {
        let spec = ThrowSpec::parse(raw)?;
        mock.add_answer(Arc::new(ThrowAnswer::new(spec.message)), &spec.method);
    }
    Ok(mock)
}

/// Execute the run command
pub fn run(args: RunArgs, config: &Config) -> Result<()> {
    let catalog = load_catalog(&args.catalog, config)?;
    let calls = args
        .calls
        .iter()
        .map(|raw| CallSpec::parse(raw))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let generator = MockClassGenerator::new(catalog);
    let mock = build_mock(&generator, &args)?;
    let json = args.json || config.prefers_json();

    if !json {
        print_info(format!(
            "Generated {} extending {}",
            mock.class_name(),
            mock.mock_type().target()
        ));
    }

    let mut outcomes = Vec::with_capacity(calls.len());
    let mut errors = Vec::new();
    for call in calls {
        let outcome = match mock.invoke(&call.method, call.arguments.clone()) {
            Ok(value) => {
                if !json {
                    print_success(Formatter::format_call_result(
                        &call.method,
                        &call.arguments,
                        &value,
                    ));
                }
                CallOutcome {
                    method: call.method,
                    arguments: call.arguments,
                    returned: Some(value),
                    error: None,
                }
            }
            Err(e) => {
                let message = e.to_string();
                if !json {
                    print_error(format!(
                        "{} failed: {}",
                        Formatter::format_invocation(&call.method, &call.arguments),
                        message
                    ));
                }
                errors.push(format!("{}: {}", call.method, message));
                CallOutcome {
                    method: call.method,
                    arguments: call.arguments,
                    returned: None,
                    error: Some(message),
                }
            }
        };
        outcomes.push(outcome);
    }

    let recorded = mock.call_recorder().all_calls();
    let total = outcomes.len();
    let failed = errors.len();

    if json {
        let report = RunReport {
            mock: mock.class_name().to_string(),
            target: mock.mock_type().target().to_string(),
            calls: outcomes,
            recorded,
        };
        let output = CommandOutput::new(report, errors);
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else if recorded.is_empty() {
        print_warning("\nNo calls recorded.");
    } else {
        print_info(format!("\nRecorded calls ({}):", recorded.len()));
        for (i, call) in recorded.iter().enumerate() {
            println!("{}", Formatter::format_recorded_call(i, call));
        }
    }
    logging::log_display(
        format!("{} call(s) made against {}", total, mock.class_name()),
        logging::LogLevel::Debug,
    );

    if failed > 0 {
        return Err(CliError::CallsFailed(failed, total).into());
    }
    Ok(())
}
