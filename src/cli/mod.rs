pub mod args;
pub mod commands;
pub mod output;
pub mod specs;

pub use args::{Cli, Commands, InspectArgs, RunArgs, Verbosity};
pub use specs::{CallSpec, SpecError, StubSpec, ThrowSpec};
