use super::{ClassDescriptor, ClassSource};
use miette::Diagnostic;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Errors raised while loading a class catalog
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum CatalogError {
    #[error("Failed to read catalog {path:?}: {source}")]
    #[diagnostic(
        code(mockforge::catalog_io),
        help("Check that the catalog file exists and is readable.")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML catalog: {0}")]
    #[diagnostic(
        code(mockforge::catalog_toml),
        help("Classes are declared as [[class]] tables with nested [[class.method]] entries.")
    )]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON catalog at {path}: {message}")]
    #[diagnostic(
        code(mockforge::catalog_json),
        help("Expected an object of the form {{\"class\": [{{\"name\": ..., \"method\": [...]}}]}}.")
    )]
    Json { path: String, message: String },

    #[error("Class '{0}' is declared more than once")]
    #[diagnostic(code(mockforge::duplicate_class))]
    DuplicateClass(String),

    #[error("Unsupported catalog format: {0:?}")]
    #[diagnostic(
        code(mockforge::catalog_format),
        help("Use a .toml or .json file.")
    )]
    UnsupportedFormat(PathBuf),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "class", alias = "classes")]
    classes: Vec<ClassDescriptor>,
}

/// In-memory set of class descriptors.
#[derive(Debug, Clone, Default)]
pub struct ClassCatalog {
    classes: HashMap<String, ClassDescriptor>,
}

impl ClassCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a class.
    pub fn insert(&mut self, class: ClassDescriptor) -> Option<ClassDescriptor> {
        self.classes.insert(class.name.clone(), class)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::from_classes(file.classes)
    }

    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let deserializer = &mut serde_json::Deserializer::from_str(content);
        let file: CatalogFile =
            serde_path_to_error::deserialize(deserializer).map_err(|e| CatalogError::Json {
                path: e.path().to_string(),
                message: e.inner().to_string(),
            })?;
        Self::from_classes(file.classes)
    }

    /// Load a catalog file, picking the format from its extension.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("json") => Self::from_json_str(&content)?,
            _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        };
        crate::logging::log_catalog_loaded(&path.to_string_lossy(), catalog.len());
        Ok(catalog)
    }

    /// Load several catalog files into one. A class declared in two files is
    /// an error.
    pub fn load_all<P: AsRef<Path>>(paths: &[P]) -> Result<Self, CatalogError> {
        let mut merged = Self::new();
        for path in paths {
            let catalog = Self::load(path.as_ref())?;
            for class in catalog.classes.into_values() {
                if merged.classes.contains_key(&class.name) {
                    return Err(CatalogError::DuplicateClass(class.name));
                }
                merged.insert(class);
            }
        }
        Ok(merged)
    }

    fn from_classes(classes: Vec<ClassDescriptor>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for class in classes {
            debug!(class = %class.name, methods = class.methods.len(), "Catalog class");
            if catalog.insert(class.clone()).is_some() {
                return Err(CatalogError::DuplicateClass(class.name));
            }
        }
        Ok(catalog)
    }

    pub fn get(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes.get(name)
    }

    /// Class names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.classes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl ClassSource for ClassCatalog {
    fn describe(&self, name: &str) -> Option<ClassDescriptor> {
        self.classes.get(name).cloned()
    }

    fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }
}
