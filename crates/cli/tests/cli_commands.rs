use std::fs;

use predicates::prelude::*;
use tempfile::tempdir;

const SOURCE: &str = "function readConfig() {\n  return {};\n}\n\nconst helper = (x) => {\n  return x;\n}\n";

fn write(dir: &std::path::Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, body).expect("write fixture");
    path.to_string_lossy().to_string()
}

/// Running the CLI with no subcommand prints usage and fails.
#[test]
fn missing_subcommand_fails() {
    assert_cmd::cargo::cargo_bin_cmd!("module-carver").assert().failure();
}

#[test]
fn extract_lists_sorted_function_names() {
    let dir = tempdir().expect("tempdir");
    let source = write(dir.path(), "agent.js", SOURCE);

    assert_cmd::cargo::cargo_bin_cmd!("module-carver")
        .arg("extract")
        .arg("--source")
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 functions"))
        .stdout(predicate::str::contains("  - helper [line 5, arrow"))
        .stdout(predicate::str::contains("  - readConfig [line 1, function"));
}

#[test]
fn extract_json_is_parseable() {
    let dir = tempdir().expect("tempdir");
    let source = write(dir.path(), "agent.js", SOURCE);

    let output = assert_cmd::cargo::cargo_bin_cmd!("module-carver")
        .args(["extract", "--json", "--mode", "balanced", "--source"])
        .arg(&source)
        .output()
        .expect("run extract");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    assert_eq!(value["count"], 2);
    assert_eq!(value["boundary"], "balanced");
    assert_eq!(value["functions"][0]["name"], "helper");
}

#[test]
fn reconcile_reports_found_missing_and_uncategorized() {
    let dir = tempdir().expect("tempdir");
    let source = write(dir.path(), "agent.js", SOURCE);

    assert_cmd::cargo::cargo_bin_cmd!("module-carver")
        .arg("reconcile")
        .arg("--source")
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains("Category table: built-in default"))
        .stdout(predicate::str::contains("core/config.js:\n  ✓ readConfig\n"))
        .stdout(predicate::str::contains("  ✗ writeConfig (not found)"))
        .stdout(predicate::str::contains("Uncategorized functions:\n  - helper\n"));
}

#[test]
fn reconcile_with_yaml_table_emits_json() {
    let dir = tempdir().expect("tempdir");
    let source = write(
        dir.path(),
        "agent.js",
        "const foo = () => { return 1; }\nconst bar = (x) => { return x; }",
    );
    let table = write(
        dir.path(),
        "layout.yaml",
        "categories:\n  - module: mod/a.js\n    functions: [foo, baz]\n",
    );

    let output = assert_cmd::cargo::cargo_bin_cmd!("module-carver")
        .args(["reconcile", "--json", "--source", source.as_str(), "--table", table.as_str()])
        .output()
        .expect("run reconcile");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    let category = &value["report"]["categories"][0];
    assert_eq!(category["module"], "mod/a.js");
    assert_eq!(category["found"], serde_json::json!(["foo"]));
    assert_eq!(category["missing"], serde_json::json!(["baz"]));
    assert_eq!(value["report"]["uncategorized"], serde_json::json!(["bar"]));
    assert_eq!(value["source_sha256"].as_str().map(str::len), Some(64));
}

#[test]
fn reconcile_reads_table_from_config() {
    let dir = tempdir().expect("tempdir");
    let source = write(dir.path(), "agent.js", SOURCE);
    write(
        dir.path(),
        "layout.json",
        r#"{"categories": [{"module": "lib/helpers.js", "functions": ["helper"]}]}"#,
    );
    let config = write(dir.path(), "carve.json", r#"{"table": "layout.json"}"#);

    assert_cmd::cargo::cargo_bin_cmd!("module-carver")
        .args(["reconcile", "--source", source.as_str(), "--config", config.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("lib/helpers.js:\n  ✓ helper\n"))
        .stdout(predicate::str::contains("Uncategorized functions:\n  - readConfig\n"));
}

#[test]
fn reconcile_fails_when_source_missing() {
    let dir = tempdir().expect("tempdir");

    assert_cmd::cargo::cargo_bin_cmd!("module-carver")
        .arg("reconcile")
        .arg("--source")
        .arg(dir.path().join("missing.js"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Source file not found"));
}

#[test]
fn unknown_mode_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let source = write(dir.path(), "agent.js", SOURCE);

    assert_cmd::cargo::cargo_bin_cmd!("module-carver")
        .args(["extract", "--mode", "greedy", "--source", source.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid boundary mode 'greedy'"));
}

#[test]
fn table_prints_default_layout() {
    assert_cmd::cargo::cargo_bin_cmd!("module-carver")
        .arg("table")
        .assert()
        .success()
        .stdout(predicate::str::contains("Category table: built-in default (22 modules"))
        .stdout(predicate::str::contains("skills/executor.js (0):\n  (none)"));
}

#[test]
fn table_json_round_trips_through_reconcile() {
    let dir = tempdir().expect("tempdir");
    let output = assert_cmd::cargo::cargo_bin_cmd!("module-carver")
        .args(["table", "--json"])
        .output()
        .expect("run table");
    assert!(output.status.success());
    let table = write(dir.path(), "dumped.json", &String::from_utf8_lossy(&output.stdout));
    let source = write(dir.path(), "agent.js", SOURCE);

    assert_cmd::cargo::cargo_bin_cmd!("module-carver")
        .args(["reconcile", "--source", source.as_str(), "--table", table.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("  ✓ readConfig"));
}

#[test]
fn table_rejects_unsupported_format() {
    let dir = tempdir().expect("tempdir");
    let table = write(dir.path(), "layout.toml", "");

    assert_cmd::cargo::cargo_bin_cmd!("module-carver")
        .args(["table", "--table", table.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported category table format"));
}

#[test]
fn show_prints_one_function_body() {
    let dir = tempdir().expect("tempdir");
    let source = write(dir.path(), "agent.js", SOURCE);

    assert_cmd::cargo::cargo_bin_cmd!("module-carver")
        .args(["show", "--source", source.as_str(), "--name", "readConfig"])
        .assert()
        .success()
        .stdout("function readConfig() {\n  return {};\n}\n");

    assert_cmd::cargo::cargo_bin_cmd!("module-carver")
        .args(["show", "--source", source.as_str(), "--name", "absent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Function 'absent' not found"));
}
