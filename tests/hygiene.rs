//! Hygiene — enforces coding standards at test time
//!
//! Scans the crate's production sources for patterns that crash the editor or
//! silently drop errors. Each pattern has a budget of zero; the host is an
//! interactive page and must never see a panic from the core.

use std::fs;
use std::path::{Path, PathBuf};

/// (pattern, what it means, allowed count)
const BUDGETS: &[(&str, &str, usize)] = &[
    (".unwrap()", "panics on None/Err", 0),
    (".expect(", "panics on None/Err", 0),
    ("panic!(", "explicit panic", 0),
    ("unreachable!(", "explicit panic", 0),
    ("todo!(", "unfinished stub", 0),
    ("unimplemented!(", "unfinished stub", 0),
    ("let _ =", "discarded result", 0),
    (".ok()", "discarded error", 0),
    ("#[allow(dead_code)]", "hidden dead code", 0),
];

/// Modules without a sibling `_test.rs` file.
const UNTESTED_MODULES: &[&str] = &["lib.rs", "main.rs", "consts.rs"];

struct SourceFile {
    path: PathBuf,
    content: String,
}

fn src_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src")
}

/// Production `.rs` files under `src/`, test files excluded.
fn source_files() -> Vec<SourceFile> {
    let Ok(entries) = fs::read_dir(src_dir()) else {
        return Vec::new();
    };
    let mut files: Vec<SourceFile> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|e| e == "rs"))
        .filter(|path| !path.to_string_lossy().ends_with("_test.rs"))
        .filter_map(|path| fs::read_to_string(&path).map(|content| SourceFile { path, content }).ok())
        .collect();
    files.sort_by(|a, b| a.path.cmp(&b.path));
    files
}

fn file_name(path: &Path) -> String {
    path.file_name().unwrap_or_default().to_string_lossy().to_string()
}

#[test]
fn sources_are_found() {
    let names: Vec<String> = source_files().iter().map(|f| file_name(&f.path)).collect();
    for expected in ["lib.rs", "history.rs", "drag.rs", "editor.rs"] {
        assert!(names.iter().any(|n| n == expected), "missing {expected} in {names:?}");
    }
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut report = Vec::new();
    for (pattern, meaning, max) in BUDGETS {
        let hits: Vec<(String, usize)> = files
            .iter()
            .map(|f| (file_name(&f.path), f.content.lines().filter(|l| l.contains(pattern)).count()))
            .filter(|(_, count)| *count > 0)
            .collect();
        let total: usize = hits.iter().map(|(_, c)| c).sum();
        if total > *max {
            report.push(format!("`{pattern}` ({meaning}): found {total}, max {max} in {hits:?}"));
        }
    }
    assert!(report.is_empty(), "hygiene budgets exceeded:\n{}", report.join("\n"));
}

#[test]
fn every_module_has_a_test_file() {
    let dir = src_dir();
    let missing: Vec<String> = source_files()
        .iter()
        .map(|f| file_name(&f.path))
        .filter(|name| !UNTESTED_MODULES.contains(&name.as_str()))
        .filter(|name| !dir.join(name.replace(".rs", "_test.rs")).exists())
        .collect();
    assert!(missing.is_empty(), "modules without a _test.rs file: {missing:?}");
}
