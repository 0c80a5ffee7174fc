//! Loading class catalogs from disk.

use crate::fixtures;
use mockforge::descriptor::CatalogError;
use mockforge::{ClassCatalog, ClassSource, MockClassGenerator, MockTypeRegistry};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_load_fixture_from_disk() {
    let catalog = ClassCatalog::load(&fixtures::catalog_path()).unwrap();
    assert_eq!(
        catalog.names(),
        vec!["Repository", "Session", "SystemClock", "UserRepository"]
    );
    assert!(catalog.contains("UserRepository"));
}

#[test]
fn test_load_json_catalog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clock.json");
    fs::write(
        &path,
        r#"{"class": [{"name": "Clock", "method": [{"name": "now"}, {"name": "sleep", "params": 1, "void": true}]}]}"#,
    )
    .unwrap();

    let catalog = ClassCatalog::load(&path).unwrap();
    let generator =
        MockClassGenerator::with_registry(Arc::new(catalog), Arc::new(MockTypeRegistry::new()));
    let mock_type = generator.generate("ClockMock", "Clock").unwrap();
    assert!(mock_type.method("sleep").unwrap().returns_void());
}

#[test]
fn test_json_errors_carry_a_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{"class": [{"name": "Clock", "method": [{"name": 5}]}]}"#).unwrap();

    match ClassCatalog::load(&path).unwrap_err() {
        CatalogError::Json { path, .. } => assert!(path.contains("method"), "path was {path}"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("classes.yaml");
    fs::write(&path, "class: []").unwrap();

    assert!(matches!(
        ClassCatalog::load(&path),
        Err(CatalogError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        ClassCatalog::load(&dir.path().join("absent.toml")),
        Err(CatalogError::Io { .. })
    ));
}

#[test]
fn test_load_all_merges_and_rejects_duplicates() {
    let dir = TempDir::new().unwrap();
    let extra = dir.path().join("extra.toml");
    fs::write(&extra, "[[class]]\nname = \"Mailer\"\n").unwrap();
    let clash = dir.path().join("clash.toml");
    fs::write(&clash, "[[class]]\nname = \"Session\"\n").unwrap();

    let merged = ClassCatalog::load_all(&[fixtures::catalog_path(), extra.clone()]).unwrap();
    assert_eq!(merged.len(), 5);
    assert!(merged.contains("Mailer"));

    assert!(matches!(
        ClassCatalog::load_all(&[fixtures::catalog_path(), clash]),
        Err(CatalogError::DuplicateClass(name)) if name == "Session"
    ));
}
