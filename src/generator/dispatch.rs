use super::mock_type::{InterceptedMethod, MockType};
use crate::logging;
use crate::recorder::{Call, CallRecorder};
use crate::stubber::{Answer, AnswerError, Invocation, StubMapper};
use crate::value::{ObjectId, Value};
use miette::Diagnostic;
use std::sync::Arc;

/// Errors raised when calling a method on a mock.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Diagnostic)]
pub enum InvocationError {
    #[error("Call to undefined method {class}::{method}()")]
    #[diagnostic(
        code(mockforge::undefined_method),
        help("Only interceptable methods of the mocked class and its parents can be called.")
    )]
    UndefinedMethod { class: String, method: String },

    #[error("Too few arguments to {class}::{method}(): {given} passed, at least {required} expected")]
    #[diagnostic(code(mockforge::missing_arguments))]
    MissingArguments {
        class: String,
        method: String,
        required: usize,
        given: usize,
    },

    /// Raised by the stubbed answer itself, passed through untouched
    #[error(transparent)]
    #[diagnostic(transparent)]
    Answer(#[from] AnswerError),
}

/// The ordinary method surface of a mock, as a caller sees it.
pub trait Invoke {
    fn invoke(&self, method: &str, arguments: Vec<Value>) -> Result<Value, InvocationError>;

    /// Name of the concrete (generated) type
    fn class_name(&self) -> &str;

    fn is_instance_of(&self, type_name: &str) -> bool;
}

/// Side channel into a mock's bound state.
///
/// Kept apart from [`Invoke`] so that no mocked method name can shadow it.
pub trait MockControl {
    fn call_recorder(&self) -> Arc<CallRecorder>;

    /// Register `answer` for `method` on the bound stub map.
    fn add_answer(&self, answer: Arc<dyn Answer>, method: &str);
}

/// Instance of a generated mock type.
///
/// Only obtainable through `MockClassGenerator::instantiate`. Clones are
/// handles to the same instance and share its identity.
#[derive(Debug, Clone)]
pub struct MockObject {
    id: ObjectId,
    class: Arc<MockType>,
    recorder: Arc<CallRecorder>,
    stubs: Arc<StubMapper>,
}

impl MockObject {
    pub(crate) fn bind(class: Arc<MockType>, recorder: Arc<CallRecorder>, stubs: Arc<StubMapper>) -> Self {
        let id = ObjectId::next();
        logging::log_mock_instantiated(class.name(), id.as_u64());
        Self {
            id,
            class,
            recorder,
            stubs,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn mock_type(&self) -> &Arc<MockType> {
        &self.class
    }

    /// This instance as a value, for passing it as an argument.
    pub fn as_value(&self) -> Value {
        Value::Object(self.id)
    }

    /// Calls recorded against this instance for `method`.
    pub fn recorded_calls(&self, method: &str) -> Vec<Call> {
        self.recorder.calls_to(method, self.id).collect()
    }
}

impl Invoke for MockObject {
    fn invoke(&self, method: &str, arguments: Vec<Value>) -> Result<Value, InvocationError> {
        let intercepted =
            self.class
                .method(method)
                .ok_or_else(|| InvocationError::UndefinedMethod {
                    class: self.class.name().to_string(),
                    method: method.to_string(),
                })?;

        if arguments.len() < intercepted.required_parameters() {
            return Err(InvocationError::MissingArguments {
                class: self.class.name().to_string(),
                method: method.to_string(),
                required: intercepted.required_parameters(),
                given: arguments.len(),
            });
        }

        intercepted.call(self, arguments)
    }

    fn class_name(&self) -> &str {
        self.class.name()
    }

    fn is_instance_of(&self, type_name: &str) -> bool {
        self.class.is_subclass_of(type_name)
    }
}

impl MockControl for MockObject {
    fn call_recorder(&self) -> Arc<CallRecorder> {
        Arc::clone(&self.recorder)
    }

    fn add_answer(&self, answer: Arc<dyn Answer>, method: &str) {
        self.stubs.map_stub_to_method(answer, method);
    }
}

/// Body shared by every generated method: record, look up, answer.
///
/// The call is recorded before the answer runs, so a failing answer still
/// leaves a trace of the call.
pub(crate) fn intercept(
    receiver: &MockObject,
    method: &InterceptedMethod,
    arguments: Vec<Value>,
) -> Result<Value, InvocationError> {
    let call = Call::with_arguments(receiver.id, method.name(), arguments);
    receiver.recorder.record_call(call.clone());

    let Some(answer) = receiver.stubs.get_stub_by_method(method.name()) else {
        logging::log_unstubbed_call(receiver.class.name(), method.name());
        return Ok(Value::Null);
    };

    let invocation = Invocation {
        receiver: receiver.id,
        method: call.method(),
        arguments: call.arguments(),
    };
    answer.get_answer(&invocation).map_err(|e| {
        logging::log_answer_failed(receiver.class.name(), method.name(), &e.to_string());
        InvocationError::from(e)
    })
}
