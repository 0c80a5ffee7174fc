use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mockforge")]
#[command(about = "Generate mock classes from class catalogs and exercise them", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            return Verbosity::Quiet;
        }
        Verbosity::from_level(self.verbose)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the method surface a mock of a class would intercept
    Inspect(InspectArgs),

    /// Generate a mock, stub it, call it, and print the recorded calls
    Run(RunArgs),
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Class catalog file (.toml or .json); repeatable
    #[arg(short, long)]
    pub catalog: Vec<PathBuf>,

    /// Class to mock
    #[arg(short, long)]
    pub target: String,

    /// Name for the generated type (default: <TARGET>Mock)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Class catalog file (.toml or .json); repeatable
    #[arg(short, long)]
    pub catalog: Vec<PathBuf>,

    /// Class to mock
    #[arg(short, long)]
    pub target: String,

    /// Name for the generated type (default: a fresh unique name)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Stub a method with a JSON return value, e.g. --stub 'find={"id": 1}'
    #[arg(long = "stub", value_name = "METHOD=JSON")]
    pub stubs: Vec<String>,

    /// Make a method fail with a message; registered after --stub answers
    #[arg(long = "throw", value_name = "METHOD=MESSAGE")]
    pub throws: Vec<String>,

    /// Call a method, optionally with a JSON argument array, e.g. --call 'find=[1]'
    #[arg(long = "call", value_name = "METHOD[=JSON]")]
    pub calls: Vec<String>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Trace,
}

impl Verbosity {
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Trace,
        }
    }

    pub fn to_log_level(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Trace => "trace",
        }
    }
}
