//! Integration Test: Core UI Isolation
//!
//! **Policy**: tally-core MUST NOT depend on any UI framework or async
//! runtime. The ledger is pure domain logic that any surface can drive.
//! **Required**: ratatui, crossterm, and tokio stay in the surface crates.

use std::fs;
use std::path::{Path, PathBuf};

/// Crates that must never appear in the core source tree
const FORBIDDEN: &[&str] = &["ratatui", "crossterm", "tokio"];

#[test]
fn test_core_has_no_ui_framework_imports() {
    let core_src = core_src_dir();
    assert!(
        core_src.exists(),
        "core source tree not found at {}",
        core_src.display()
    );

    let mut violations = Vec::new();
    for entry in walkdir::WalkDir::new(&core_src)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.path().extension().and_then(|s| s.to_str()) == Some("rs") {
            let content = match fs::read_to_string(entry.path()) {
                Ok(c) => c,
                Err(_) => continue,
            };
            scan_source(entry.path(), &content, &mut violations);
        }
    }

    if !violations.is_empty() {
        eprintln!("\n❌ CRITICAL: UI-framework imports found in the ledger core!");
        eprintln!("The core crate must stay headless; rendering belongs to surfaces.\n");

        for violation in &violations {
            eprintln!("  ❌ {violation}");
        }

        panic!(
            "\nFound {} UI-framework import(s) in tally-core.\nFix these before merging!",
            violations.len()
        );
    }
}

fn core_src_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../tally/core/src")
}

/// Record every line of `content` that mentions a forbidden crate
fn scan_source(path: &Path, content: &str, violations: &mut Vec<String>) {
    for (idx, line) in content.lines().enumerate() {
        // Skip comments
        let code_part = line.split("//").next().unwrap_or(line);

        for name in FORBIDDEN {
            if code_part.contains(&format!("use {name}")) || code_part.contains(&format!("{name}::"))
            {
                violations.push(format!(
                    "{}:{} - {}: {}",
                    path.display(),
                    idx + 1,
                    name,
                    line.trim()
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detector_flags_ui_imports() {
        let mut violations = Vec::new();
        scan_source(
            Path::new("fake.rs"),
            "use ratatui::style::Color;\nlet x = crossterm::terminal::size();",
            &mut violations,
        );
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_detector_ignores_comments() {
        let mut violations = Vec::new();
        scan_source(
            Path::new("fake.rs"),
            "// zero dependencies on ratatui, crossterm, or tokio\nuse serde::Serialize;",
            &mut violations,
        );
        assert!(violations.is_empty());
    }
}
