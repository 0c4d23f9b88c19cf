//! Build-graph layering and tree-search locks.
//!
//! Proves:
//! 1. `kernel/` never references the search or harness crates
//! 2. `search/` never references the harness crate
//! 3. `search/` keeps no visited set: no hashed or ordered set/map types
//!    appear in its non-comment source

use std::fmt::Write;
use std::fs;
use std::path::Path;

type Violation = (String, usize, String);

fn scan_rs_files(dir: &Path, forbidden: &[&str]) -> Vec<Violation> {
    let mut violations = Vec::new();
    walk(dir, forbidden, &mut violations);
    violations
}

fn walk(dir: &Path, forbidden: &[&str], violations: &mut Vec<Violation>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, forbidden, violations);
        } else if path.extension().is_some_and(|e| e == "rs") {
            check_file(&path, forbidden, violations);
        }
    }
}

fn check_file(path: &Path, forbidden: &[&str], violations: &mut Vec<Violation>) {
    let Ok(content) = fs::read_to_string(path) else {
        return;
    };
    for (line_no, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*') {
            continue;
        }
        for pattern in forbidden {
            if trimmed.contains(pattern) {
                violations.push((path.display().to_string(), line_no + 1, line.to_string()));
            }
        }
    }
}

fn workspace_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
}

fn assert_clean(what: &str, violations: &[Violation]) {
    if !violations.is_empty() {
        let mut msg = format!("{what}:\n");
        for (file, line, content) in violations {
            let _ = writeln!(msg, "  {file}:{line}: {content}");
        }
        panic!("{msg}");
    }
}

#[test]
fn kernel_source_is_a_leaf() {
    let violations = scan_rs_files(
        &workspace_root().join("kernel").join("src"),
        &["ferry_search", "ferry_harness"],
    );
    assert_clean("kernel references upper layers", &violations);
}

#[test]
fn search_source_does_not_reach_into_harness() {
    let violations = scan_rs_files(
        &workspace_root().join("search").join("src"),
        &["ferry_harness"],
    );
    assert_clean("search references the harness", &violations);
}

#[test]
fn search_source_has_no_visited_set() {
    let violations = scan_rs_files(
        &workspace_root().join("search").join("src"),
        &["HashSet", "HashMap", "BTreeSet", "BTreeMap"],
    );
    assert_clean("search source carries a set or map", &violations);
}

#[test]
fn kernel_cargo_toml_has_no_workspace_dependencies() {
    let cargo_toml = fs::read_to_string(workspace_root().join("kernel").join("Cargo.toml"))
        .expect("kernel/Cargo.toml is readable");
    for name in ["ferry-search", "ferry-harness"] {
        assert!(
            !cargo_toml.contains(name),
            "kernel/Cargo.toml depends on {name}"
        );
    }
}
