use super::dispatch::{intercept, InvocationError, MockObject};
use crate::descriptor::{MethodDescriptor, ResolvedTarget};
use crate::value::Value;
use serde::Serialize;
use std::collections::HashMap;

/// Shared body every generated method points at.
pub(crate) type DispatchFn =
    fn(&MockObject, &InterceptedMethod, Vec<Value>) -> Result<Value, InvocationError>;

/// One overridden method of a generated type.
#[derive(Debug, Clone, Serialize)]
pub struct InterceptedMethod {
    #[serde(flatten)]
    signature: MethodDescriptor,
    declared_in: String,
    #[serde(skip)]
    body: DispatchFn,
}

impl InterceptedMethod {
    pub fn name(&self) -> &str {
        &self.signature.name
    }

    pub fn signature(&self) -> &MethodDescriptor {
        &self.signature
    }

    /// Class that declares the overridden version
    pub fn declared_in(&self) -> &str {
        &self.declared_in
    }

    pub fn required_parameters(&self) -> usize {
        self.signature.parameters
    }

    pub fn is_variadic(&self) -> bool {
        self.signature.variadic
    }

    pub fn returns_void(&self) -> bool {
        self.signature.returns_void
    }

    /// Pack the call into the generic shape and run the shared body.
    pub(crate) fn call(
        &self,
        receiver: &MockObject,
        arguments: Vec<Value>,
    ) -> Result<Value, InvocationError> {
        let result = (self.body)(receiver, self, arguments)?;
        if self.returns_void() {
            return Ok(Value::Null);
        }
        Ok(result)
    }
}

/// A mock class generated at runtime.
#[derive(Debug, Serialize)]
pub struct MockType {
    name: String,
    target: String,
    /// Target first, then its parents
    ancestry: Vec<String>,
    interfaces: Vec<String>,
    methods: Vec<InterceptedMethod>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl MockType {
    /// Build the method table for a new subtype of `target`. Every entry gets
    /// the same dispatch body regardless of its signature.
    pub(crate) fn synthesize(name: &str, target: ResolvedTarget) -> Self {
        let methods: Vec<InterceptedMethod> = target
            .methods
            .into_iter()
            .map(|(signature, declared_in)| InterceptedMethod {
                signature,
                declared_in,
                body: intercept,
            })
            .collect();
        let index = methods
            .iter()
            .enumerate()
            .map(|(i, m)| (m.name().to_string(), i))
            .collect();

        Self {
            name: name.to_string(),
            target: target.name,
            ancestry: target.ancestry,
            interfaces: target.interfaces,
            methods,
            index,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The mocked class
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn ancestry(&self) -> &[String] {
        &self.ancestry
    }

    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    pub fn methods(&self) -> &[InterceptedMethod] {
        &self.methods
    }

    pub fn method(&self, name: &str) -> Option<&InterceptedMethod> {
        self.index.get(name).map(|&i| &self.methods[i])
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Whether values of this type can stand in for `type_name`.
    pub fn is_subclass_of(&self, type_name: &str) -> bool {
        self.name == type_name
            || self.ancestry.iter().any(|c| c == type_name)
            || self.interfaces.iter().any(|i| i == type_name)
    }
}
