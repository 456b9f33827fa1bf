//! Hygiene: scans this crate's production sources for patterns that crash
//! the page or swallow errors. Every budget is zero and never grows;
//! `_test.rs` files are exempt.

use std::fs;
use std::path::{Path, PathBuf};

const BUDGETS: [(&str, usize); 9] = [
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    ("let _ =", 0),
    (".ok()", 0),
    ("#[allow(dead_code)]", 0),
];

fn production_sources() -> Vec<(PathBuf, String)> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|ext| ext == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rs && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

#[test]
fn scan_finds_crate_root() {
    let files = production_sources();
    assert!(
        files.iter().any(|(path, _)| path.ends_with("lib.rs")),
        "src/lib.rs not found; hygiene scan would be vacuous"
    );
}

#[test]
fn pattern_budgets_hold() {
    let files = production_sources();
    let mut failures = Vec::new();
    for (pattern, budget) in BUDGETS {
        let hits = files
            .iter()
            .flat_map(|(path, content)| {
                content
                    .lines()
                    .enumerate()
                    .filter(|(_, line)| line.contains(pattern))
                    .map(move |(n, _)| format!("  {}:{}", path.display(), n + 1))
            })
            .collect::<Vec<_>>();
        if hits.len() > budget {
            failures.push(format!("{pattern} budget {budget}, found {}:\n{}", hits.len(), hits.join("\n")));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
