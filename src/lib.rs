pub mod cli;
pub mod config;
pub mod descriptor;
pub mod generator;
pub mod logging;
pub mod recorder;
pub mod stubber;
pub mod ui;
pub mod value;

use miette::Diagnostic;

pub use descriptor::{ClassCatalog, ClassDescriptor, ClassSource, MethodDescriptor};
pub use generator::{
    Invoke, InvocationError, MockClassGenerator, MockControl, MockObject, MockType,
    MockTypeRegistry,
};
pub use recorder::{Call, CallRecorder};
pub use stubber::{Answer, CallbackAnswer, StaticAnswer, StubMapper, ThrowAnswer};
pub use value::{ObjectId, Value};

/// Result type alias for mock generation
pub type Result<T> = std::result::Result<T, MockError>;

/// Errors raised while generating or instantiating mock types
#[derive(Debug, Clone, PartialEq, thiserror::Error, Diagnostic)]
pub enum MockError {
    #[error("Cannot mock '{target}': {reason}")]
    #[diagnostic(
        code(mockforge::non_extendable_target),
        help("Final classes and classes with final methods cannot be subclassed. Mock an interface or a non-final base class instead.")
    )]
    NonExtendableTarget { target: String, reason: String },

    #[error("A type named '{0}' already exists")]
    #[diagnostic(
        code(mockforge::duplicate_mock_name),
        help("Mock type names are unique for the lifetime of the process. Pick a different name.")
    )]
    DuplicateMockName(String),

    #[error("No mock type named '{0}' has been generated")]
    #[diagnostic(
        code(mockforge::unknown_mock_type),
        help("Call `generate` with this name before instantiating it.")
    )]
    UnknownMockType(String),

    #[error("The {0} is already bound to another mock instance")]
    #[diagnostic(
        code(mockforge::already_bound),
        help("Every mock instance needs its own CallRecorder and StubMapper.")
    )]
    AlreadyBound(&'static str),

    #[error("Unknown target class: {0}")]
    #[diagnostic(
        code(mockforge::unknown_target),
        help("The class, or one of its parents, is not present in the class catalog.")
    )]
    UnknownTargetClass(String),

    #[error("Invalid mock type name: '{0}'")]
    #[diagnostic(
        code(mockforge::invalid_mock_name),
        help("Names must start with a letter or underscore and contain only letters, digits, underscores and '\\' separators.")
    )]
    InvalidMockName(String),

    #[error("Invalid class descriptor: {0}")]
    #[diagnostic(code(mockforge::invalid_descriptor))]
    InvalidDescriptor(String),
}
