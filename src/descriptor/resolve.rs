use super::{ClassDescriptor, ClassSource, MethodDescriptor};
use crate::MockError;
use std::collections::HashSet;

/// A target class flattened over its inheritance chain.
#[derive(Debug, Clone)]
pub struct ResolvedTarget {
    pub name: String,
    /// The target followed by its parents, nearest first
    pub ancestry: Vec<String>,
    /// Every interface implemented anywhere in the chain
    pub interfaces: Vec<String>,
    /// Interceptable methods with the class that declares the effective version
    pub methods: Vec<(MethodDescriptor, String)>,
}

/// Resolve `name` through `source` into the set of methods a mock must
/// override: those of the class chain, then those of every interface it
/// implements that the chain does not declare.
///
/// Fails if the target or one of its parents is unknown, if the target is
/// final, or if any method that would need overriding is final.
pub fn resolve_target(source: &dyn ClassSource, name: &str) -> Result<ResolvedTarget, MockError> {
    let chain = load_chain(source, name)?;

    let target = &chain[0];
    if target.is_final {
        return Err(MockError::NonExtendableTarget {
            target: name.to_string(),
            reason: "class is declared final".to_string(),
        });
    }

    // Walk root first so that subclass declarations replace inherited ones.
    let mut methods: Vec<(MethodDescriptor, String)> = Vec::new();
    for class in chain.iter().rev() {
        for method in class.methods.iter().filter(|m| m.is_interceptable()) {
            let position = methods.iter().position(|(m, _)| m.name == method.name);
            match position {
                Some(index) => {
                    let (existing, declared_in) = &mut methods[index];
                    if existing.is_final {
                        return Err(MockError::InvalidDescriptor(format!(
                            "{}::{} overrides final method declared in {}",
                            class.name, method.name, declared_in
                        )));
                    }
                    *existing = method.clone();
                    *declared_in = class.name.clone();
                }
                None => methods.push((method.clone(), class.name.clone())),
            }
        }
    }

    let interfaces = collect_interfaces(source, &chain);

    // Interface methods the class chain leaves undeclared still belong to the
    // surface; class declarations win on a name clash.
    for interface in interfaces.iter().filter_map(|i| source.describe(i)) {
        for method in interface.methods.iter().filter(|m| m.is_interceptable()) {
            if !methods.iter().any(|(m, _)| m.name == method.name) {
                methods.push((method.clone(), interface.name.clone()));
            }
        }
    }

    if let Some((method, declared_in)) = methods.iter().find(|(m, _)| m.is_final) {
        return Err(MockError::NonExtendableTarget {
            target: name.to_string(),
            reason: format!("method {}::{} is final", declared_in, method.name),
        });
    }

    Ok(ResolvedTarget {
        name: name.to_string(),
        ancestry: chain.iter().map(|c| c.name.clone()).collect(),
        interfaces,
        methods,
    })
}

fn load_chain(source: &dyn ClassSource, name: &str) -> Result<Vec<ClassDescriptor>, MockError> {
    let mut chain = Vec::new();
    let mut seen = HashSet::new();
    let mut next = Some(name.to_string());

    while let Some(current) = next {
        if !seen.insert(current.clone()) {
            return Err(MockError::InvalidDescriptor(format!(
                "inheritance cycle through {}",
                current
            )));
        }
        let class = source
            .describe(&current)
            .ok_or_else(|| MockError::UnknownTargetClass(current.clone()))?;
        next = class.parent.clone();
        chain.push(class);
    }

    Ok(chain)
}

/// Interfaces declared in the chain plus whatever they extend, in discovery
/// order. Interfaces unknown to the source are kept by name only.
fn collect_interfaces(source: &dyn ClassSource, chain: &[ClassDescriptor]) -> Vec<String> {
    let mut found = Vec::new();
    let mut seen = HashSet::new();
    let mut pending: Vec<String> = chain
        .iter()
        .flat_map(|c| c.interfaces.iter().cloned())
        .rev()
        .collect();

    while let Some(interface) = pending.pop() {
        if !seen.insert(interface.clone()) {
            continue;
        }
        if let Some(descriptor) = source.describe(&interface) {
            pending.extend(descriptor.interfaces.iter().rev().cloned());
            if let Some(parent) = descriptor.parent {
                pending.push(parent);
            }
        }
        found.push(interface);
    }

    found
}
