// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use std::io::Write;

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const DIV_TOML: &str = r#"
[[cases]]
name = "HTMLDivElement"

[cases.expected]
default = "align,constructor()"
ie = ["align", "noWrap"]

[cases.nyi]
ff = "align"

[[cases]]
name = "HTMLSpanElement"

[cases.expected]
default = ["constructor()"]
"#;

fn write_fixture(dir: &Path, file: &str, content: &str) -> PathBuf {
    let path = dir.join(file);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn test_load_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "div.toml", DIV_TOML);

    let registry = Registry::load(&path).unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.cases()[0].name, "HTMLDivElement");
    assert!(registry.get("HTMLSpanElement").is_some());
}

#[test]
fn test_resolve_case_per_browser() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "div.toml", DIV_TOML);
    let registry = Registry::load(&path).unwrap();
    let div = registry.get("HTMLDivElement").unwrap();

    let ie = div.resolve(BrowserIdentity::Ie);
    assert_eq!(ie.real.names, names(&["align", "noWrap"]));
    assert_eq!(ie.nyi.names, names(&["align", "noWrap"]));

    let ff = div.resolve(BrowserIdentity::Ff);
    assert_eq!(ff.real.names, names(&["align", "constructor()"]));
    assert_eq!(ff.nyi.names, names(&["align"]));
}

#[test]
fn test_resolve_all_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "div.toml", DIV_TOML);
    let registry = Registry::load(&path).unwrap();

    let resolved = registry.resolve(BrowserIdentity::Chrome);
    let order: Vec<&str> = resolved.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(order, ["HTMLDivElement", "HTMLSpanElement"]);
}

#[test]
fn test_load_json_and_json5() {
    let dir = tempfile::tempdir().unwrap();
    let json = write_fixture(
        dir.path(),
        "a.json",
        r#"{ "cases": [ { "name": "HTMLBRElement", "expected": { "default": ["clear"] } } ] }"#,
    );
    let json5 = write_fixture(
        dir.path(),
        "b.json5",
        r#"{
            // trailing commas and comments are fine here
            cases: [
                { name: "HTMLHRElement", expected: { default: "align,noShade", }, },
            ],
        }"#,
    );

    assert_eq!(Registry::load(&json).unwrap().len(), 1);
    let hr = Registry::load(&json5).unwrap();
    assert_eq!(
        hr.get("HTMLHRElement").unwrap().resolve(BrowserIdentity::Edge).real.names,
        names(&["align", "noShade"])
    );
}

#[test]
fn test_load_directory_sorted() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("nested")).unwrap();
    write_fixture(
        dir.path(),
        "b.toml",
        "[[cases]]\nname = \"B\"\n[cases.expected]\ndefault = [\"b\"]\n",
    );
    write_fixture(
        &dir.path().join("nested"),
        "c.json",
        r#"{ "cases": [ { "name": "C" } ] }"#,
    );
    write_fixture(
        dir.path(),
        "a.toml",
        "[[cases]]\nname = \"A\"\n[cases.expected]\ndefault = [\"a\"]\n",
    );
    write_fixture(dir.path(), "notes.txt", "ignored");

    let registry = Registry::load(dir.path()).unwrap();
    let order: Vec<&str> = registry.cases().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(order, ["A", "B", "C"]);
}

#[test]
fn test_load_directory_with_glob_characters() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("run[1]");
    std::fs::create_dir(&dir).unwrap();
    write_fixture(&dir, "div.toml", DIV_TOML);

    let registry = Registry::load(&dir).unwrap();
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_directory_without_fixtures_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "notes.txt", "ignored");

    let err = Registry::load(dir.path()).unwrap_err();
    assert!(matches!(err, FixtureError::Validation(_)));
    assert!(err.to_string().contains("No fixture files found"));
}

#[test]
fn test_duplicate_case_rejected() {
    let mut registry = Registry::new();
    registry
        .register(CaseDescriptor::new(
            "HTMLDivElement",
            ExpectationSet::new(),
            NyiExpectationSet::new(),
        ))
        .unwrap();
    let err = registry
        .register(CaseDescriptor::new(
            "HTMLDivElement",
            ExpectationSet::new(),
            NyiExpectationSet::new(),
        ))
        .unwrap_err();
    assert!(err.to_string().contains("Duplicate case 'HTMLDivElement'"));
}

#[test]
fn test_invalid_property_name_rejected() {
    let mut registry = Registry::new();
    let err = registry
        .register(CaseDescriptor::new(
            "HTMLDivElement",
            ExpectationSet::new().with_default(["no wrap"]),
            NyiExpectationSet::new(),
        ))
        .unwrap_err();
    assert!(matches!(err, FixtureError::Validation(_)));
    assert!(err.to_string().contains("no wrap"));
}

#[test]
fn test_empty_case_name_rejected() {
    let mut registry = Registry::new();
    let err = registry
        .register(CaseDescriptor::new(
            "  ",
            ExpectationSet::new(),
            NyiExpectationSet::new(),
        ))
        .unwrap_err();
    assert!(matches!(err, FixtureError::Validation(_)));
}

#[test]
fn test_errors_name_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "broken.toml", "[[cases]]\nnom = 1\n");

    let err = Registry::load(&path).unwrap_err();
    assert!(matches!(err, FixtureError::InFile { .. }));
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = Registry::load(Path::new("/nonexistent/fixtures.toml")).unwrap_err();
    match err {
        FixtureError::InFile { source, .. } => assert!(matches!(*source, FixtureError::Io(_))),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_exception_sentinel_accepted() {
    let mut registry = Registry::new();
    registry
        .register(CaseDescriptor::new(
            "HTMLUnknownElement",
            ExpectationSet::new().with(BrowserIdentity::Ie, ["exception"]),
            NyiExpectationSet::new(),
        ))
        .unwrap();
    let resolved = registry.resolve(BrowserIdentity::Ie);
    assert_eq!(resolved[0].real.names, names(&["exception"]));
}
