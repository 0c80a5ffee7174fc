use super::MockType;
use crate::{MockError, Result};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

static GLOBAL_REGISTRY: Lazy<Arc<MockTypeRegistry>> =
    Lazy::new(|| Arc::new(MockTypeRegistry::new()));

/// Names of every generated mock type.
///
/// The process-wide instance lives for the whole process; entries are never
/// removed. All mutation goes through [`MockTypeRegistry::register_with`],
/// which holds the write lock across the name check and the insertion.
#[derive(Debug, Default)]
pub struct MockTypeRegistry {
    types: RwLock<HashMap<String, Arc<MockType>>>,
}

impl MockTypeRegistry {
    /// Create an empty registry, independent from the global one
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry shared by every generator in the process.
    pub fn global() -> Arc<MockTypeRegistry> {
        Arc::clone(&GLOBAL_REGISTRY)
    }

    /// Reserve `name` and register the type produced by `build`.
    ///
    /// `build` runs under the write lock, after the name was found free. If it
    /// fails nothing is registered.
    pub fn register_with<F>(&self, name: &str, build: F) -> Result<Arc<MockType>>
    where
        F: FnOnce() -> Result<MockType>,
    {
        let mut types = self.types.write();
        if types.contains_key(name) {
            return Err(MockError::DuplicateMockName(name.to_string()));
        }
        let mock_type = Arc::new(build()?);
        types.insert(name.to_string(), Arc::clone(&mock_type));
        Ok(mock_type)
    }

    pub fn get(&self, name: &str) -> Option<Arc<MockType>> {
        self.types.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.read().contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.types.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.types.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.read().is_empty()
    }
}
