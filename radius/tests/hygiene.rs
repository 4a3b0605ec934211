//! Hygiene: coding standards enforced at test time.
//!
//! Scans the production sources under `src/` (sibling `_test.rs` files are
//! skipped) for constructs the radius core does not allow. Every budget is
//! zero. Raising one needs a matching reduction somewhere else.

use std::fs;
use std::path::{Path, PathBuf};

struct Budget {
    name: &'static str,
    patterns: &'static [&'static str],
    max: usize,
}

// A panic inside an event callback kills the wasm instance and freezes the
// editor mid-drag.
const PANICS: &[Budget] = &[
    Budget { name: "unwrap", patterns: &[".unwrap()"], max: 0 },
    Budget { name: "expect", patterns: &[".expect("], max: 0 },
    Budget { name: "panic", patterns: &["panic!("], max: 0 },
    Budget { name: "unreachable", patterns: &["unreachable!("], max: 0 },
    Budget { name: "stubs", patterns: &["todo!(", "unimplemented!("], max: 0 },
];

// Errors must be logged or returned.
const DISCARDS: &[Budget] = &[
    Budget { name: "let-underscore", patterns: &["let _ ="], max: 0 },
    Budget { name: "dot-ok", patterns: &[".ok()"], max: 0 },
];

// Listener closures are owned by a drop guard; `forget` would leak them past
// the drag session.
const LEAKS: &[Budget] = &[Budget { name: "closure-forget", patterns: &[".forget()", "into_js_value()"], max: 0 }];

const STYLE: &[Budget] = &[
    Budget { name: "allow-dead-code", patterns: &["#[allow(dead_code)]"], max: 0 },
    // There is no stdout in the browser; output goes through `tracing`.
    Budget { name: "print", patterns: &["println!(", "eprintln!(", "dbg!("], max: 0 },
];

fn production_sources() -> Vec<(PathBuf, String)> {
    let mut out = Vec::new();
    walk(Path::new("src"), &mut out);
    out
}

fn walk(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rs && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

/// Lines matching any of `budget`'s patterns, as `path:line: text`.
fn violations(sources: &[(PathBuf, String)], budget: &Budget) -> Vec<String> {
    sources
        .iter()
        .flat_map(|(path, content)| {
            content.lines().enumerate().filter_map(move |(i, line)| {
                let hit = budget.patterns.iter().any(|p| line.contains(p));
                hit.then(|| format!("  {}:{}: {}", path.display(), i + 1, line.trim()))
            })
        })
        .collect()
}

fn check(budgets: &[Budget]) {
    let sources = production_sources();
    assert!(!sources.is_empty(), "no sources found; run from the crate root");
    for budget in budgets {
        let hits = violations(&sources, budget);
        assert!(
            hits.len() <= budget.max,
            "{} budget exceeded: found {}, max {}.\n{}",
            budget.name,
            hits.len(),
            budget.max,
            hits.join("\n")
        );
    }
}

#[test]
fn panic_budget() {
    check(PANICS);
}

#[test]
fn discard_budget() {
    check(DISCARDS);
}

#[test]
fn leak_budget() {
    check(LEAKS);
}

#[test]
fn style_budget() {
    check(STYLE);
}

#[test]
fn every_module_has_docs() {
    let missing: Vec<String> = production_sources()
        .into_iter()
        .filter(|(_, content)| !content.trim_start().starts_with("//!"))
        .map(|(path, _)| path.display().to_string())
        .collect();
    assert!(missing.is_empty(), "modules without a `//!` header:\n{}", missing.join("\n"));
}
