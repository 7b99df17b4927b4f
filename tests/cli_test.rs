//! CLI contract tests
//!
//! Runs the gapscan binary against fixture files in a tempdir and
//! verifies output formats, export files, and --fail-on exit codes.

use std::path::{Path, PathBuf};
use std::process::Command;

fn gapscan_bin() -> String {
    env!("CARGO_BIN_EXE_gapscan").to_string()
}

const CATALOG_JSON: &str = r#"{
    "families": [
        {
            "id": "AC",
            "name": "Access Control",
            "controls": [
                {
                    "id": "3.1.1",
                    "name": "Limit system access to authorized users",
                    "pointValue": 5,
                    "poamEligibility": { "selfAssessment": { "canBeOnPoam": false } },
                    "objectives": [
                        { "id": "3.1.1[a]", "description": "Authorized users identified" },
                        { "id": "3.1.1[b]", "description": "Processes identified" }
                    ]
                },
                {
                    "id": "3.1.2",
                    "name": "Limit access to permitted transactions",
                    "pointValue": 1,
                    "objectives": [
                        { "id": "3.1.2[a]", "description": "Transactions defined" }
                    ]
                }
            ]
        }
    ]
}"#;

const STATE_JSON: &str = r#"{
    "3.1.1[a]": { "status": "not-met" },
    "3.1.1[b]": { "status": "met" },
    "3.1.2[a]": { "status": "partial" }
}"#;

const CLEAN_STATE_JSON: &str = r#"{
    "3.1.1[a]": { "status": "met" },
    "3.1.1[b]": { "status": "met" },
    "3.1.2[a]": { "status": "met" }
}"#;

fn setup_fixtures(state: &str) -> (tempfile::TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("catalog.json");
    let state_path = dir.path().join("state.json");
    std::fs::write(&catalog, CATALOG_JSON).unwrap();
    std::fs::write(&state_path, state).unwrap();
    (dir, catalog, state_path)
}

fn run_gapscan(cwd: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(gapscan_bin())
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to run gapscan");
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

#[test]
fn test_analyze_json_has_export_fields() {
    let (dir, catalog, state) = setup_fixtures(STATE_JSON);
    let (code, stdout, _) = run_gapscan(
        dir.path(),
        &[
            "analyze",
            catalog.to_str().unwrap(),
            "--state",
            state.to_str().unwrap(),
            "--format",
            "json",
        ],
    );
    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    for field in [
        "generatedAt",
        "summary",
        "complianceScore",
        "riskScore",
        "gaps",
        "recommendations",
        "prioritizedActions",
        "estimatedEffort",
    ] {
        assert!(!v[field].is_null(), "missing field {field}");
    }
    assert_eq!(v["summary"]["totalObjectives"], 3);
    assert_eq!(v["gaps"].as_array().unwrap().len(), 2);
    assert_eq!(v["gaps"][0]["severity"], "critical");
}

#[test]
fn test_analyze_text_output() {
    let (dir, catalog, state) = setup_fixtures(STATE_JSON);
    let (code, stdout, _) = run_gapscan(
        dir.path(),
        &[
            "analyze",
            catalog.to_str().unwrap(),
            "--state",
            state.to_str().unwrap(),
        ],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("Gap Analysis"));
    assert!(stdout.contains("GAPS"));
    assert!(stdout.contains("(2 total)"));
}

#[test]
fn test_analyze_writes_output_file() {
    let (dir, catalog, state) = setup_fixtures(STATE_JSON);
    let out = dir.path().join("report.md");
    let (code, _, _) = run_gapscan(
        dir.path(),
        &[
            "analyze",
            catalog.to_str().unwrap(),
            "--state",
            state.to_str().unwrap(),
            "--format",
            "markdown",
            "--output",
            out.to_str().unwrap(),
        ],
    );
    assert_eq!(code, 0);
    let md = std::fs::read_to_string(&out).unwrap();
    assert!(md.starts_with("# Gap Analysis Report"));
}

#[test]
fn test_fail_on_critical_exits_one() {
    let (dir, catalog, state) = setup_fixtures(STATE_JSON);
    let (code, _, _) = run_gapscan(
        dir.path(),
        &[
            "analyze",
            catalog.to_str().unwrap(),
            "--state",
            state.to_str().unwrap(),
            "--fail-on",
            "critical",
        ],
    );
    assert_eq!(code, 1, "--fail-on critical should exit 1 with a critical gap");
}

#[test]
fn test_fail_on_clean_state_exits_zero() {
    let (dir, catalog, state) = setup_fixtures(CLEAN_STATE_JSON);
    let (code, _, _) = run_gapscan(
        dir.path(),
        &[
            "analyze",
            catalog.to_str().unwrap(),
            "--state",
            state.to_str().unwrap(),
            "--fail-on",
            "low",
        ],
    );
    assert_eq!(code, 0, "no gaps should pass any --fail-on threshold");
}

#[test]
fn test_fail_on_invalid_severity_errors() {
    let (dir, catalog, state) = setup_fixtures(STATE_JSON);
    let (code, _, stderr) = run_gapscan(
        dir.path(),
        &[
            "analyze",
            catalog.to_str().unwrap(),
            "--state",
            state.to_str().unwrap(),
            "--fail-on",
            "severe",
        ],
    );
    assert_ne!(code, 0);
    assert!(stderr.contains("severity") || stderr.contains("fail-on"));
}

#[test]
fn test_export_writes_json_document() {
    let (dir, catalog, state) = setup_fixtures(STATE_JSON);
    let out = dir.path().join("export.json");
    let (code, stdout, _) = run_gapscan(
        dir.path(),
        &[
            "export",
            catalog.to_str().unwrap(),
            "--state",
            state.to_str().unwrap(),
            "--output",
            out.to_str().unwrap(),
        ],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("Exported"));
    let v: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(v["complianceScore"]["grade"], "F");
}

#[test]
fn test_summary_shows_counters() {
    let (dir, catalog, state) = setup_fixtures(STATE_JSON);
    let (code, stdout, _) = run_gapscan(
        dir.path(),
        &[
            "summary",
            catalog.to_str().unwrap(),
            "--state",
            state.to_str().unwrap(),
        ],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("Assessment Summary"));
    assert!(stdout.contains("3 total"));
}

#[test]
fn test_config_file_sets_default_format() {
    let (dir, catalog, state) = setup_fixtures(STATE_JSON);
    std::fs::write(dir.path().join("gapscan.toml"), "[output]\nformat = \"json\"\n").unwrap();
    let (code, stdout, _) = run_gapscan(
        dir.path(),
        &[
            "analyze",
            catalog.to_str().unwrap(),
            "--state",
            state.to_str().unwrap(),
        ],
    );
    assert_eq!(code, 0);
    assert!(serde_json::from_str::<serde_json::Value>(&stdout).is_ok());
}

#[test]
fn test_malformed_catalog_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("catalog.json");
    let state = dir.path().join("state.json");
    // Control missing its objectives array.
    std::fs::write(
        &catalog,
        r#"{ "families": [{ "id": "AC", "name": "Access Control",
            "controls": [{ "id": "3.1.1", "name": "x", "pointValue": 5 }] }] }"#,
    )
    .unwrap();
    std::fs::write(&state, "{}").unwrap();
    let (code, _, stderr) = run_gapscan(
        dir.path(),
        &[
            "analyze",
            catalog.to_str().unwrap(),
            "--state",
            state.to_str().unwrap(),
        ],
    );
    assert_ne!(code, 0);
    assert!(stderr.contains("catalog"));
}

#[test]
fn test_duplicate_objective_ids_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("catalog.json");
    let state = dir.path().join("state.json");
    std::fs::write(
        &catalog,
        r#"{ "families": [{ "id": "AC", "name": "Access Control",
            "controls": [{ "id": "3.1.1", "name": "x", "pointValue": 5,
                "objectives": [
                    { "id": "3.1.1[a]", "description": "one" },
                    { "id": "3.1.1[a]", "description": "two" }
                ] }] }] }"#,
    )
    .unwrap();
    std::fs::write(&state, "{}").unwrap();
    let (code, _, stderr) = run_gapscan(
        dir.path(),
        &[
            "analyze",
            catalog.to_str().unwrap(),
            "--state",
            state.to_str().unwrap(),
        ],
    );
    assert_ne!(code, 0);
    assert!(stderr.contains("duplicate objective id"));
}

#[test]
fn test_history_feeds_trends() {
    let (dir, catalog, state) = setup_fixtures(STATE_JSON);
    let history = dir.path().join("history.json");
    let recent = chrono::Utc::now() - chrono::Duration::days(2);
    std::fs::write(
        &history,
        format!(
            r#"{{ "3.1.1_3.1.1[b]": [ {{
                "timestamp": "{}",
                "action": "status-change",
                "oldValue": "not-met",
                "newValue": "met"
            }} ] }}"#,
            recent.to_rfc3339()
        ),
    )
    .unwrap();
    let (code, stdout, _) = run_gapscan(
        dir.path(),
        &[
            "analyze",
            catalog.to_str().unwrap(),
            "--state",
            state.to_str().unwrap(),
            "--history",
            history.to_str().unwrap(),
            "--format",
            "json",
        ],
    );
    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(v["trends"]["recentActivity"], 1);
    assert_eq!(v["trends"]["improvements"], 1);
    assert_eq!(v["trends"]["momentum"], "positive");
}
