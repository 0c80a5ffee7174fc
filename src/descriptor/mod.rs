//! Target class descriptors.
//!
//! The generator never discovers classes on its own; it asks a [`ClassSource`]
//! to describe them. [`ClassCatalog`] is the in-memory source used by the CLI
//! and by tests.

mod catalog;
mod resolve;

pub use catalog::{CatalogError, ClassCatalog};
pub use resolve::{resolve_target, ResolvedTarget};

use serde::{Deserialize, Serialize};

/// Supplies class descriptors by name.
pub trait ClassSource: Send + Sync {
    fn describe(&self, name: &str) -> Option<ClassDescriptor>;

    fn contains(&self, name: &str) -> bool {
        self.describe(name).is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    #[default]
    Instance,
    Static,
    Constructor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

/// Declared signature of one method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    /// Number of required parameters
    #[serde(default, alias = "params")]
    pub parameters: usize,
    #[serde(default)]
    pub variadic: bool,
    #[serde(default)]
    pub kind: MethodKind,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default, rename = "final")]
    pub is_final: bool,
    #[serde(default, rename = "void")]
    pub returns_void: bool,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: 0,
            variadic: false,
            kind: MethodKind::Instance,
            visibility: Visibility::Public,
            is_final: false,
            returns_void: false,
        }
    }

    pub fn params(mut self, count: usize) -> Self {
        self.parameters = count;
        self
    }

    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    pub fn as_static(mut self) -> Self {
        self.kind = MethodKind::Static;
        self
    }

    pub fn as_constructor(mut self) -> Self {
        self.kind = MethodKind::Constructor;
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn final_method(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn void(mut self) -> Self {
        self.returns_void = true;
        self
    }

    /// Whether a generated subclass can override this method.
    pub fn is_interceptable(&self) -> bool {
        self.kind == MethodKind::Instance && self.visibility != Visibility::Private
    }
}

/// Description of one class as seen by the reflection collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    pub name: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default, rename = "final")]
    pub is_final: bool,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default, rename = "method")]
    pub methods: Vec<MethodDescriptor>,
}

impl ClassDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            is_final: false,
            interfaces: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    pub fn final_class(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    pub fn find_method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.iter().find(|m| m.name == name)
    }
}
