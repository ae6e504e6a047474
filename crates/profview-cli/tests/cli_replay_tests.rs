//! CLI integration tests
//!
//! Run the built binary against recorded event files and check the
//! dispatches and navigations it prints.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::{json, Value};
use tempfile::TempDir;

fn write_events(temp_dir: &TempDir, lines: &[&str]) -> PathBuf {
    let path = temp_dir.path().join("events.jsonl");
    fs::write(&path, lines.join("\n")).unwrap();
    path
}

fn run_cli(args: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_profview-cli");
    Command::new(cli_bin)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout_json_lines(output: &Output) -> Vec<Value> {
    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_replay_coalesces_one_frame_into_one_dispatch() {
    let temp_dir = TempDir::new().unwrap();
    let events = write_events(
        &temp_dir,
        &[
            r#"{"event":"mergeFunctions","threadIndex":0,"oldFuncToNewFuncMap":{"7":3}}"#,
            r#"{"event":"assignFunctionNames","threadIndex":0,"funcIndices":[3],"funcNames":["main"]}"#,
            r#"{"event":"mergeFunctions","threadIndex":1,"oldFuncToNewFuncMap":{"2":1}}"#,
        ],
    );

    let output = run_cli(&["replay", events.to_str().unwrap()]);
    let effects = stdout_json_lines(&output);

    assert_eq!(effects.len(), 1, "one frame must yield one dispatch");
    assert_eq!(
        effects[0],
        json!({
            "dispatch": {
                "type": "COALESCED_FUNCTIONS_UPDATE",
                "functionsUpdatePerThread": {
                    "0": {"oldFuncToNewFuncMap": {"7": 3}, "funcIndices": [3], "funcNames": ["main"]},
                    "1": {"oldFuncToNewFuncMap": {"2": 1}, "funcIndices": [], "funcNames": []}
                }
            }
        })
    );
}

#[test]
fn test_replay_frame_events_split_windows() {
    let temp_dir = TempDir::new().unwrap();
    let events = write_events(
        &temp_dir,
        &[
            r#"{"event":"mergeFunctions","threadIndex":0,"oldFuncToNewFuncMap":{"1":0}}"#,
            r#"{"event":"frame"}"#,
            r#"{"event":"mergeFunctions","threadIndex":0,"oldFuncToNewFuncMap":{"2":0}}"#,
        ],
    );

    let output = run_cli(&["replay", events.to_str().unwrap()]);
    let effects = stdout_json_lines(&output);

    assert_eq!(effects.len(), 2);
    assert_eq!(
        effects[0]["dispatch"]["functionsUpdatePerThread"]["0"]["oldFuncToNewFuncMap"],
        json!({"1": 0})
    );
    assert_eq!(
        effects[1]["dispatch"]["functionsUpdatePerThread"]["0"]["oldFuncToNewFuncMap"],
        json!({"2": 0})
    );
}

#[test]
fn test_replay_frame_every_flag() {
    let temp_dir = TempDir::new().unwrap();
    let events = write_events(
        &temp_dir,
        &[
            r#"{"event":"mergeFunctions","threadIndex":0,"oldFuncToNewFuncMap":{"1":0}}"#,
            r#"{"event":"mergeFunctions","threadIndex":0,"oldFuncToNewFuncMap":{"2":0}}"#,
        ],
    );

    let output = run_cli(&["replay", events.to_str().unwrap(), "--frame-every", "1"]);
    let effects = stdout_json_lines(&output);
    assert_eq!(effects.len(), 2);
}

#[test]
fn test_replay_range_filter_navigates_then_clears_selection() {
    let temp_dir = TempDir::new().unwrap();
    let events = write_events(
        &temp_dir,
        &[
            r#"{"event":"changeJsOnly","jsOnly":true}"#,
            r#"{"event":"addRangeFilterAndUnsetSelection","start":12,"end":14}"#,
        ],
    );

    let output = run_cli(&[
        "replay",
        events.to_str().unwrap(),
        "--query",
        r#"{"rangeFilters":"0_100"}"#,
    ]);
    let effects = stdout_json_lines(&output);

    assert_eq!(effects.len(), 3);
    assert_eq!(
        effects[0],
        json!({"navigate": {"pathname": "/", "query": {"jsOnly": null, "rangeFilters": "0_100"}}})
    );
    assert_eq!(
        effects[1],
        json!({"navigate": {"pathname": "/", "query": {"jsOnly": null, "rangeFilters": "0_100~12_14"}}})
    );
    assert_eq!(
        effects[2],
        json!({
            "dispatch": {
                "type": "UPDATE_PROFILE_SELECTION",
                "selection": {"hasSelection": false, "isModifying": false}
            }
        })
    );
}

#[test]
fn test_replay_navigations_carry_pathname() {
    let temp_dir = TempDir::new().unwrap();
    let events = write_events(&temp_dir, &[r#"{"event":"changeJsOnly","jsOnly":true}"#]);

    let calltree = stdout_json_lines(&run_cli(&[
        "replay",
        events.to_str().unwrap(),
        "--pathname",
        "/calltree/",
    ]));
    let flamegraph = stdout_json_lines(&run_cli(&[
        "replay",
        events.to_str().unwrap(),
        "--pathname",
        "/flamegraph/",
    ]));

    assert_eq!(
        calltree,
        vec![json!({"navigate": {"pathname": "/calltree/", "query": {"jsOnly": null}}})]
    );
    assert_eq!(
        flamegraph,
        vec![json!({"navigate": {"pathname": "/flamegraph/", "query": {"jsOnly": null}}})]
    );
}

#[test]
fn test_replay_passes_plain_actions_through() {
    let temp_dir = TempDir::new().unwrap();
    let events = write_events(
        &temp_dir,
        &[
            r#"{"event":"dispatch","action":{"type":"START_SYMBOLICATING"}}"#,
            r#"{"event":"dispatch","action":{"type":"CHANGE_SELECTED_THREAD","selectedThread":2}}"#,
        ],
    );

    let output = run_cli(&["replay", events.to_str().unwrap()]);
    let effects = stdout_json_lines(&output);

    assert_eq!(
        effects,
        vec![
            json!({"dispatch": {"type": "START_SYMBOLICATING"}}),
            json!({"dispatch": {"type": "CHANGE_SELECTED_THREAD", "selectedThread": 2}}),
        ]
    );
}

#[test]
fn test_replay_reports_bad_line() {
    let temp_dir = TempDir::new().unwrap();
    let events = write_events(
        &temp_dir,
        &[
            r#"{"event":"frame"}"#,
            r#"{"event":"assignFunctionNames","threadIndex":0,"funcIndices":[1,2],"funcNames":["a"]}"#,
        ],
    );

    let output = run_cli(&["replay", events.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2"), "stderr was: {}", stderr);
    assert!(stderr.contains("ERR_MISMATCHED_LENGTHS"), "stderr was: {}", stderr);
}

#[test]
fn test_replay_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.jsonl");

    let output = run_cli(&["replay", missing.to_str().unwrap()]);
    assert!(!output.status.success());
}

#[test]
fn test_query_set_flag_reports_change() {
    let output = run_cli(&["query", "set-flag", "js-only", "true"]);
    let lines = stdout_json_lines(&output);
    assert_eq!(lines, vec![json!({"query": {"jsOnly": null}, "changed": true})]);
}

#[test]
fn test_query_set_flag_noop_keeps_query() {
    let output = run_cli(&[
        "query",
        "set-flag",
        "invert-callstack",
        "false",
        "--query",
        r#"{"jsOnly":null}"#,
    ]);
    let lines = stdout_json_lines(&output);
    assert_eq!(lines, vec![json!({"query": {"jsOnly": null}, "changed": false})]);
}

#[test]
fn test_query_add_range_filter_appends() {
    let output = run_cli(&[
        "query",
        "add-range-filter",
        "--start",
        "0.5",
        "--end",
        "1.25",
        "--query",
        r#"{"rangeFilters":"0_10"}"#,
    ]);
    let lines = stdout_json_lines(&output);
    assert_eq!(
        lines,
        vec![json!({"query": {"rangeFilters": "0_10~0.5_1.25"}, "changed": true})]
    );
}

#[test]
fn test_query_add_range_filter_rejects_malformed_query() {
    let output = run_cli(&[
        "query",
        "add-range-filter",
        "--start",
        "1",
        "--end",
        "2",
        "--query",
        r#"{"rangeFilters":"garbage"}"#,
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_INVALID_RANGE_FILTER"), "stderr was: {}", stderr);
}
