//! CLI E2E tests.
//!
//! Each test runs the `ilp` binary against its own data directory.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    run_cli_with_log(data_dir, args, None)
}

fn run_cli_with_log(data_dir: &Path, args: &[&str], rust_log: Option<&str>) -> (String, String, i32) {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ilp"));
    cmd.args(args).env("ILP_DATA_DIR", data_dir);
    match rust_log {
        Some(filter) => cmd.env("RUST_LOG", filter),
        None => cmd.env_remove("RUST_LOG"),
    };
    let output = cmd.output().expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_json(data_dir: &Path, args: &[&str]) -> serde_json::Value {
    let mut full = args.to_vec();
    full.push("--json");
    let (stdout, stderr, code) = run_cli(data_dir, &full);
    assert_eq!(code, 0, "{args:?} failed: {stderr}");
    serde_json::from_str(&stdout).expect("valid JSON output")
}

#[test]
fn practice_list_shows_module() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["practice", "list", "--module", "body"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("sleep"));
    assert!(!stdout.contains("gratitude"));
}

#[test]
fn practice_list_all_json_has_every_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let list = run_json(dir.path(), &["practice", "list", "--all"]);
    assert_eq!(list.as_array().unwrap().len(), 23);
}

#[test]
fn done_then_streak_over_several_days() {
    let dir = tempfile::tempdir().unwrap();
    let d = dir.path();
    assert_eq!(run_cli(d, &["stack", "add", "gratitude"]).2, 0);

    for date in ["2024-02-27", "2024-02-28", "2024-02-29"] {
        let (_, stderr, code) = run_cli(d, &["done", "gratitude", "--date", date]);
        assert_eq!(code, 0, "{stderr}");
    }

    let summaries = run_json(d, &["streak", "--date", "2024-03-01"]);
    let s = &summaries[0];
    assert_eq!(s["item_id"], "gratitude");
    assert_eq!(s["current_streak"], 3);
    assert_eq!(s["longest_streak"], 3);
    assert_eq!(s["total_days"], 3);
    assert_eq!(s["last_completed"], "2024-02-29");

    let summaries = run_json(d, &["streak", "gratitude", "--date", "2024-03-02"]);
    assert_eq!(summaries[0]["current_streak"], 0);
}

#[test]
fn done_twice_on_same_day_undoes() {
    let dir = tempfile::tempdir().unwrap();
    let d = dir.path();
    run_cli(d, &["stack", "add", "sleep"]);

    let first = run_json(d, &["done", "sleep", "--date", "2024-05-01"]);
    assert_eq!(first["done_today"], true);
    assert_eq!(first["streak"], 1);

    let second = run_json(d, &["done", "sleep", "--date", "2024-05-01"]);
    assert_eq!(second["done_today"], false);
    assert_eq!(second["streak"], 0);
}

#[test]
fn today_resets_on_a_new_day() {
    let dir = tempfile::tempdir().unwrap();
    let d = dir.path();
    run_cli(d, &["stack", "add", "sleep"]);
    run_cli(d, &["done", "sleep", "--date", "2024-05-01"]);

    let rows = run_json(d, &["today", "--date", "2024-05-01"]);
    assert_eq!(rows[0]["done_today"], true);

    let rows = run_json(d, &["today", "--date", "2024-05-02"]);
    assert_eq!(rows[0]["done_today"], false);
    assert_eq!(rows[0]["streak"], 1);
}

#[test]
fn unknown_practice_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["done", "levitation"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn malformed_date_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["today", "--date", "2024-2-1"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("2024-2-1"));
}

#[test]
fn starter_stack_then_recommend() {
    let dir = tempfile::tempdir().unwrap();
    let d = dir.path();
    let added = run_json(d, &["stack", "starter", "spark"]);
    assert!(!added.as_array().unwrap().is_empty());

    let recs = run_json(d, &["recommend"]);
    assert!(!recs.as_array().unwrap().is_empty());
}

#[test]
fn custom_practice_can_be_stacked() {
    let dir = tempfile::tempdir().unwrap();
    let d = dir.path();
    let (stdout, stderr, code) = run_cli(
        d,
        &[
            "practice",
            "add-custom",
            "--module",
            "mind",
            "--name",
            "Chess puzzles",
            "--description",
            "Ten puzzles a day",
        ],
    );
    assert_eq!(code, 0, "{stderr}");
    let id = stdout.trim().to_string();
    assert!(id.starts_with("custom-"));

    assert_eq!(run_cli(d, &["stack", "add", &id]).2, 0);
    let stack = run_json(d, &["stack", "list"]);
    assert_eq!(stack["practices"][0]["id"], id.as_str());
}

#[test]
fn export_reset_import_restores_history() {
    let dir = tempfile::tempdir().unwrap();
    let d = dir.path();
    let backup = d.join("backup.json");
    run_cli(d, &["stack", "add", "sleep"]);
    run_cli(d, &["done", "sleep", "--date", "2024-05-01"]);

    assert_eq!(run_cli(d, &["export", backup.to_str().unwrap()]).2, 0);
    assert_eq!(run_cli(d, &["reset"]).2, 1);
    assert_eq!(run_cli(d, &["reset", "--yes"]).2, 0);
    assert_eq!(run_json(d, &["streak", "sleep", "--date", "2024-05-01"])[0]["total_days"], 0);

    assert_eq!(run_cli(d, &["import", backup.to_str().unwrap(), "--date", "2024-05-01"]).2, 0);
    let rows = run_json(d, &["today", "--date", "2024-05-01"]);
    assert_eq!(rows[0]["done_today"], true);
}

#[test]
fn config_get_set() {
    let dir = tempfile::tempdir().unwrap();
    let d = dir.path();
    let (stdout, _, code) = run_cli(d, &["config", "get", "tracker.time_alert_hours"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "10.0");

    assert_eq!(run_cli(d, &["config", "set", "tracker.time_alert_hours", "4"]).2, 0);
    let (stdout, _, _) = run_cli(d, &["config", "get", "tracker.time_alert_hours"]);
    assert_eq!(stdout.trim(), "4.0");

    assert_eq!(run_cli(d, &["config", "set", "display.nope", "1"]).2, 1);
}

#[test]
fn done_after_working_on_another_day_still_undoes() {
    let dir = tempfile::tempdir().unwrap();
    let d = dir.path();
    run_cli(d, &["stack", "add", "sleep"]);
    run_cli(d, &["stack", "add", "gratitude"]);

    run_json(d, &["done", "sleep", "--date", "2024-06-10"]);
    run_json(d, &["done", "gratitude", "--date", "2024-06-09"]);

    let rows = run_json(d, &["today", "--date", "2024-06-10"]);
    assert_eq!(rows[0]["done_today"], true);

    let undo = run_json(d, &["done", "sleep", "--date", "2024-06-10"]);
    assert_eq!(undo["done_today"], false);
    let summary = run_json(d, &["streak", "sleep", "--date", "2024-06-10"]);
    assert_eq!(summary[0]["total_days"], 0);
}

#[test]
fn browser_backup_with_generated_practice_is_tracked() {
    let dir = tempfile::tempdir().unwrap();
    let d = dir.path();
    let backup = d.join("ilp-backup.json");
    std::fs::write(
        &backup,
        r#"{
            "practiceStack": [
                {
                    "id": "generated-practice",
                    "name": "AI-Generated Practice",
                    "description": "A custom practice generated by the AI coach.",
                    "why": "To provide targeted support for your current state.",
                    "evidence": "AI-assisted mindfulness.",
                    "timePerWeek": 0.1,
                    "roi": "HIGH",
                    "difficulty": "Low",
                    "affectsSystem": ["awareness", "nervous-system"],
                    "how": ["Followed AI-generated audio guidance."],
                    "isCustom": true
                },
                {"id": "sleep"}
            ],
            "selectedModule": "body"
        }"#,
    )
    .unwrap();

    assert_eq!(run_cli(d, &["import", backup.to_str().unwrap()]).2, 0);

    let rows = run_json(d, &["today", "--date", "2024-06-10"]);
    assert_eq!(rows[0]["id"], "generated-practice");
    assert_eq!(rows[1]["id"], "sleep");

    let done = run_json(d, &["done", "generated-practice", "--date", "2024-06-10"]);
    assert_eq!(done["done_today"], true);

    let (stdout, _, code) = run_cli(d, &["practice", "show", "generated-practice"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Followed AI-generated audio guidance."));
}

#[test]
fn practice_show_prints_steps_and_evidence() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["practice", "show", "sleep"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Aim for 7-9 hours nightly"));
    assert!(stdout.contains("Evidence:"));
}

#[test]
fn practice_list_remembers_selected_module() {
    let dir = tempfile::tempdir().unwrap();
    let d = dir.path();
    let (stdout, _, _) = run_cli(d, &["practice", "list"]);
    assert!(stdout.contains("gratitude"));

    run_cli(d, &["practice", "list", "--module", "shadow"]);
    let (stdout, _, code) = run_cli(d, &["practice", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("three-two-one"));
    assert!(!stdout.contains("gratitude"));
}

#[test]
fn rust_log_enables_debug_output() {
    let dir = tempfile::tempdir().unwrap();
    let d = dir.path();
    let (_, stderr, code) =
        run_cli_with_log(d, &["done", "sleep", "--date", "2024-06-10"], Some("debug"));
    assert_eq!(code, 0);
    assert!(stderr.contains("toggled completion"), "{stderr}");

    let (_, stderr, _) = run_cli(d, &["done", "sleep", "--date", "2024-06-10"]);
    assert!(!stderr.contains("toggled completion"));
}
