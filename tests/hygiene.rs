//! Source hygiene checks run at test time.
//!
//! These tests scan the landing crate's production sources for antipatterns.
//! Each has a budget (ideally zero). If you must add one, fix an existing one
//! first. The budget never grows.

use std::fs;
use std::path::Path;

// Panics. A panic in WASM kills every behavior on the page.
const MAX_UNWRAP: usize = 0;
// The one expect compiles the literal email pattern; a unit test covers it.
const MAX_EXPECT: usize = 1;
const MAX_PANIC: usize = 0;
const MAX_UNREACHABLE: usize = 0;
const MAX_TODO: usize = 0;
const MAX_UNIMPLEMENTED: usize = 0;

// Silent loss: errors discarded without inspection.
const MAX_SILENT_DISCARD: usize = 0;
const MAX_DOT_OK: usize = 0;

// Visitor-facing text goes through `set_text_content`, never markup.
const MAX_INNER_HTML: usize = 0;

// Logging goes through the `log` facade; the one direct console call reports
// a failed logger install.
const MAX_RAW_CONSOLE: usize = 1;

// Style / structure.
const MAX_ALLOW_DEAD_CODE: usize = 0;

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding test files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn count_in_source(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| !line.trim_start().starts_with("//"))
                .filter(|line| line.contains(pattern))
                .count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn assert_budget(pattern: &str, max: usize, hint: &str) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    let hits = count_in_source(&files, pattern);
    let count: usize = hits.iter().map(|(_, c)| c).sum();
    let listing = hits
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= max, "{pattern} budget exceeded: found {count}, max {max}. {hint}\n{listing}");
}

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", MAX_UNWRAP, "Propagate or log instead.");
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", MAX_EXPECT, "Propagate or log instead.");
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", MAX_PANIC, "");
}

#[test]
fn unreachable_budget() {
    assert_budget("unreachable!(", MAX_UNREACHABLE, "");
}

#[test]
fn todo_budget() {
    assert_budget("todo!(", MAX_TODO, "");
}

#[test]
fn unimplemented_budget() {
    assert_budget("unimplemented!(", MAX_UNIMPLEMENTED, "");
}

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", MAX_SILENT_DISCARD, "Log the error instead.");
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", MAX_DOT_OK, "Match on the Result and log the error.");
}

#[test]
fn inner_html_budget() {
    assert_budget("set_inner_html", MAX_INNER_HTML, "Use set_text_content.");
}

#[test]
fn raw_console_budget() {
    assert_budget("web_sys::console::", MAX_RAW_CONSOLE, "Use the log macros.");
}

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", MAX_ALLOW_DEAD_CODE, "");
}
