//! End-to-end tests for the windowed removal mode.

use std::path::Path;
use tempfile::tempdir;

/// Helper to run dedupdecl and capture output.
fn run_dedupdecl(args: Vec<&str>) -> (i32, String) {
    let mut output = Vec::new();
    let args_owned: Vec<String> = args.iter().map(|s| (*s).to_owned()).collect();
    let exit_code = dedupdecl::entry_point::run_with_args_to(args_owned, &mut output).unwrap_or(1);
    let output_str = String::from_utf8_lossy(&output).to_string();
    (exit_code, output_str)
}

/// A file of filler statements with one `async bar()` block at 0-based
/// index 95 (1-based line 96).
fn write_fixture(path: &Path) {
    let mut lines: Vec<String> = (0..120).map(|i| format!("stmt{i}();")).collect();
    lines[95] = "async bar() {".to_owned();
    lines[96] = "  y();".to_owned();
    lines[97] = "}".to_owned();
    std::fs::write(path, lines.join("\n")).unwrap();
}

#[test]
fn test_window_hit_within_radius() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("storage.ts");
    write_fixture(&file);
    let path = file.to_string_lossy().to_string();

    // Hint at 1-based line 100; the signature at line 96 is within +/-10.
    let (code, output) = run_dedupdecl(vec!["window", &path, "--target", "bar:100"]);
    assert_eq!(code, 0, "Output:\n{output}");

    let content = std::fs::read_to_string(&file).unwrap();
    assert!(!content.contains("async bar()"));
    assert!(!content.contains("y();"));
    assert!(content.contains("stmt94();"));
    assert!(content.contains("stmt98();"));
}

#[test]
fn test_window_miss_outside_radius_leaves_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("storage.ts");
    write_fixture(&file);
    let before = std::fs::read_to_string(&file).unwrap();
    let path = file.to_string_lossy().to_string();

    // Hint at 1-based line 81; line 96 is outside +/-10. Skipped silently.
    let (code, output) = run_dedupdecl(vec!["window", &path, "--target", "bar:81"]);
    assert_eq!(code, 0);
    assert!(output.contains("signature not found"), "Output:\n{output}");
    assert_eq!(std::fs::read_to_string(&file).unwrap(), before);
}

#[test]
fn test_window_wider_radius_flag() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("storage.ts");
    write_fixture(&file);
    let path = file.to_string_lossy().to_string();

    // Same far-off hint, but --window 30 widens the search enough to hit.
    let (code, _) = run_dedupdecl(vec![
        "window", &path, "--target", "bar:81", "--window", "30",
    ]);
    assert_eq!(code, 0);
    assert!(!std::fs::read_to_string(&file).unwrap().contains("async bar()"));
}

#[test]
fn test_window_reads_hints_from_config() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("storage.ts");
    write_fixture(&file);
    std::fs::write(
        dir.path().join(".dedupdecl.toml"),
        "[dedupdecl]\nwindow = 10\n\n[[dedupdecl.hints]]\nname = \"bar\"\nline = 96\n",
    )
    .unwrap();
    let path = file.to_string_lossy().to_string();

    let (code, _) = run_dedupdecl(vec!["window", &path]);
    assert_eq!(code, 0);
    assert!(!std::fs::read_to_string(&file).unwrap().contains("async bar()"));
}

#[test]
fn test_window_dry_run() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("storage.ts");
    write_fixture(&file);
    let before = std::fs::read_to_string(&file).unwrap();
    let path = file.to_string_lossy().to_string();

    let (code, output) = run_dedupdecl(vec![
        "window", &path, "--target", "bar:96", "--dry-run",
    ]);
    assert_eq!(code, 0);
    assert!(output.contains("Would remove 'bar'"), "Output:\n{output}");
    assert_eq!(std::fs::read_to_string(&file).unwrap(), before);
}

#[test]
fn test_window_json_reports_skip_reason() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("storage.ts");
    write_fixture(&file);
    let path = file.to_string_lossy().to_string();

    let (code, output) = run_dedupdecl(vec![
        "window", &path, "--target", "bar:10", "--json",
    ]);
    assert_eq!(code, 0);

    let report: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(report["mode"], "window");
    assert!(report["removals"].as_array().unwrap().is_empty());
    assert_eq!(report["skipped"][0]["name"], "bar");
    assert_eq!(report["skipped"][0]["reason"], "not_found");
}
