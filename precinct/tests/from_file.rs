use precinct::{Dialect, Error, ExtractOptions, FileOptions, SyntaxTree, extract_file, from_file};
use std::{fs, path::PathBuf};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn with_type(dialect: Dialect) -> FileOptions {
    FileOptions {
        extract: ExtractOptions::with_dialect(dialect),
        ..FileOptions::default()
    }
}

#[test]
fn include_core_filter() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "index.js",
        "var fs = require('fs');\nvar local = require('./local');\n",
    );

    assert_eq!(
        from_file(&path, &FileOptions::default()).unwrap(),
        vec!["fs", "./local"]
    );

    let no_core = FileOptions {
        include_core: false,
        ..FileOptions::default()
    };
    assert_eq!(from_file(&path, &no_core).unwrap(), vec!["./local"]);
}

#[test]
fn scss_extension_wins_over_caller_type() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "style.scss", "@import 'reset';\n@import 'vars';\n");

    let deps = from_file(&path, &with_type(Dialect::Es6)).unwrap();
    assert_eq!(deps, vec!["reset", "vars"]);

    let out = extract_file(&path, &FileOptions::default()).unwrap();
    assert!(matches!(out.tree, Some(SyntaxTree::Stylesheet(_))));
}

#[test]
fn sass_extension_reads_indented_syntax() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "theme.sass", "@import base, mixins\n.btn\n  color: red\n");
    assert_eq!(
        from_file(&path, &FileOptions::default()).unwrap(),
        vec!["base", "mixins"]
    );
}

#[test]
fn stylus_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "app.styl", "@import 'nib'\n@require 'theme'\n");
    assert_eq!(
        from_file(&path, &FileOptions::default()).unwrap(),
        vec!["nib", "theme"]
    );
}

#[test]
fn less_has_no_extractor() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "site.less", "@import 'variables.less';\n");
    assert!(from_file(&path, &FileOptions::default()).unwrap().is_empty());
}

#[test]
fn js_extension_clears_caller_type() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "main.js", "import a from 'a';\n");
    // A caller-supplied `amd` is dropped; detection finds ES6.
    assert_eq!(from_file(&path, &with_type(Dialect::Amd)).unwrap(), vec!["a"]);
}

#[test]
fn malformed_js_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "broken.js", "function () { require('a');");
    let out = extract_file(&path, &FileOptions::default()).unwrap();
    assert!(out.dependencies.is_empty());
    assert!(out.tree.is_none());
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = from_file(dir.path().join("nope.js"), &FileOptions::default()).unwrap_err();
    match err {
        Error::Io { path, source } => {
            assert!(path.ends_with("nope.js"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
