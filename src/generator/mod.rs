//! Runtime mock class generation.
//!
//! [`MockClassGenerator::generate`] turns a target class descriptor into a
//! [`MockType`]: a new type whose method table mirrors every interceptable
//! method of the target, each entry pointing at the same dispatch body.
//! [`MockClassGenerator::instantiate`] binds a generated type to one
//! [`CallRecorder`] and one [`StubMapper`].
//!
//! ```rust,ignore
//! let generator = MockClassGenerator::new(catalog);
//! generator.generate("MailerMock", "Mailer")?;
//! let mock = generator.instantiate("MailerMock", CallRecorder::shared(), StubMapper::shared())?;
//!
//! mock.add_answer(Arc::new(StaticAnswer::new(true)), "send");
//! assert_eq!(mock.invoke("send", vec!["hi".into()])?, Value::Bool(true));
//! ```

mod dispatch;
mod mock_type;
mod registry;

pub use dispatch::{InvocationError, Invoke, MockControl, MockObject};
pub use mock_type::{InterceptedMethod, MockType};
pub use registry::MockTypeRegistry;

use crate::descriptor::{resolve_target, ClassSource};
use crate::logging;
use crate::recorder::CallRecorder;
use crate::stubber::StubMapper;
use crate::{MockError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

static TYPE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\\[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("type name pattern is valid")
});

/// Suffix counter for names picked by [`MockClassGenerator::mock`]
static NEXT_MOCK_SUFFIX: AtomicUsize = AtomicUsize::new(1);

pub struct MockClassGenerator {
    source: Arc<dyn ClassSource>,
    registry: Arc<MockTypeRegistry>,
}

impl MockClassGenerator {
    /// Generator backed by the process-wide type registry.
    pub fn new<S: ClassSource + 'static>(source: S) -> Self {
        Self::with_registry(Arc::new(source), MockTypeRegistry::global())
    }

    /// Generator with its own registry. Names it generates are only unique
    /// within `registry`.
    pub fn with_registry(source: Arc<dyn ClassSource>, registry: Arc<MockTypeRegistry>) -> Self {
        Self { source, registry }
    }

    pub fn registry(&self) -> &Arc<MockTypeRegistry> {
        &self.registry
    }

    /// Generate `new_type_name` as a mock subtype of `target`.
    ///
    /// The name check, target resolution and registration happen under the
    /// registry's write lock, so two concurrent requests for one name produce
    /// exactly one type.
    pub fn generate(&self, new_type_name: &str, target: &str) -> Result<Arc<MockType>> {
        if !TYPE_NAME.is_match(new_type_name) {
            return Err(MockError::InvalidMockName(new_type_name.to_string()));
        }

        let result = self.registry.register_with(new_type_name, || {
            if self.source.contains(new_type_name) {
                return Err(MockError::DuplicateMockName(new_type_name.to_string()));
            }
            let resolved = resolve_target(self.source.as_ref(), target)?;
            Ok(MockType::synthesize(new_type_name, resolved))
        });

        match &result {
            Ok(mock_type) => {
                logging::log_mock_generated(new_type_name, target, mock_type.methods().len());
            }
            Err(e) => logging::log_generation_rejected(new_type_name, &e.to_string()),
        }
        result
    }

    /// Create an instance of a previously generated type.
    ///
    /// No constructor of the target runs; the instance only carries the bound
    /// recorder and stub map. Each recorder and stub map can be bound to one
    /// instance only; handing either to a second instance is
    /// [`MockError::AlreadyBound`].
    pub fn instantiate(
        &self,
        type_name: &str,
        recorder: Arc<CallRecorder>,
        stubs: Arc<StubMapper>,
    ) -> Result<MockObject> {
        let mock_type = self
            .registry
            .get(type_name)
            .ok_or_else(|| MockError::UnknownMockType(type_name.to_string()))?;

        if !recorder.claim() {
            return Err(MockError::AlreadyBound("call recorder"));
        }
        if !stubs.claim() {
            recorder.release();
            return Err(MockError::AlreadyBound("stub map"));
        }
        Ok(MockObject::bind(mock_type, recorder, stubs))
    }

    /// Generate a mock of `target` under a fresh name and instantiate it with
    /// a new recorder and stub map.
    pub fn mock(&self, target: &str) -> Result<MockObject> {
        if !self.source.contains(target) {
            return Err(MockError::UnknownTargetClass(target.to_string()));
        }
        let base = target.replace('\\', "_");
        loop {
            let suffix = NEXT_MOCK_SUFFIX.fetch_add(1, Ordering::Relaxed);
            let name = format!("{}__Mock{}", base, suffix);
            match self.generate(&name, target) {
                Ok(_) => {
                    return self.instantiate(&name, CallRecorder::shared(), StubMapper::shared())
                }
                Err(MockError::DuplicateMockName(_)) => continue,
                Err(e) => return Err(e),
            }
        }
    }
}
