use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{EDITS_YAML, RECORDS_CSV, STAFF_CSV, fixture, rsg, temp_out};

/// Common args: a config path that does not exist (defaults apply) and
/// the shared staff/records fixtures.
fn base_args(name: &str) -> Vec<String> {
    let staff = fixture(&format!("{name}_staff"), "csv", STAFF_CSV);
    let records = fixture(&format!("{name}_records"), "csv", RECORDS_CSV);
    let config = temp_out(&format!("{name}_config"), "conf");

    vec![
        "--config".into(),
        config,
        "--staff".into(),
        staff,
        "--records".into(),
        records,
    ]
}

#[test]
fn test_grid_shows_roles_and_dates() {
    rsg()
        .args(base_args("grid"))
        .args(["grid", "--period", "2025-01-15"])
        .assert()
        .success()
        .stdout(contains("closer avail"))
        .stdout(contains("girl unassigned"))
        .stdout(contains("2025-01-15"));
}

#[test]
fn test_staff_totals_after_edits() {
    let edits = fixture("staff_edits", "yaml", EDITS_YAML);

    rsg()
        .args(base_args("staff"))
        .args(["--edits", &edits, "staff", "--period", "2025-01"])
        .assert()
        .success()
        .stdout(contains("Replayed 3 edit(s), 2 applied, 1 ignored"))
        .stdout(contains("Alice"))
        .stdout(contains("Total earnings:"))
        .stdout(contains("27,000"));
}

#[test]
fn test_history_lists_status_changes() {
    let edits = fixture("history_edits", "yaml", EDITS_YAML);

    rsg()
        .args(base_args("history"))
        .args(["--edits", &edits, "history", "A@2025-01-15"])
        .assert()
        .success()
        .stdout(contains("undecided -> confirmed"))
        .stdout(contains("by manager"))
        .stdout(contains("10,000"));
}

#[test]
fn test_history_rejects_bad_cell() {
    rsg()
        .args(base_args("history_bad"))
        .args(["history", "A-2025-01-15"])
        .assert()
        .failure()
        .stderr(contains("Invalid cell key"));
}

#[test]
fn test_next_cycles_unassigned_cells() {
    let edits = fixture(
        "next_edits",
        "yaml",
        "- event: status_changed\n  staff_id: A\n  date: 2025-01-15\n  status: confirmed\n",
    );

    // B is confirmed but already placed in Shibuya, so only A is unassigned
    rsg()
        .args(base_args("next"))
        .args(["--edits", &edits, "next", "2025-01-15", "closer", "-n", "2"])
        .assert()
        .success()
        .stdout(contains("1. A@2025-01-15"))
        .stdout(contains("2. A@2025-01-15"))
        .stdout(contains("B@2025-01-15").not());
}

#[test]
fn test_next_without_candidates_warns() {
    rsg()
        .args(base_args("next_empty"))
        .args(["next", "2025-01-16", "closer"])
        .assert()
        .success()
        .stdout(contains("No unassigned closer on 2025-01-16"));
}

#[test]
fn test_export_json_snapshot() {
    let out = temp_out("export_json", "json");

    rsg()
        .args(base_args("export_json"))
        .args([
            "export",
            "--format",
            "json",
            "--file",
            &out,
            "--period",
            "2025-01-15",
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read export");
    let json: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    let days = json["days"].as_array().expect("days");
    assert_eq!(days.len(), 2);
    let girl = days
        .iter()
        .find(|r| r["role"] == "girl")
        .expect("girl row");
    assert_eq!(girl["available"], 1);
    assert_eq!(girl["unassigned"], 1);
    assert_eq!(json["role_earnings"]["closer"], 9000);
    assert_eq!(json["total_earnings"], 17000);
}

#[test]
fn test_export_csv_refuses_overwrite_without_force() {
    let out = temp_out("export_csv", "csv");
    let staff_out = out.replace("_out.csv", "_out_staff.csv");
    fs::remove_file(&staff_out).ok();

    let run = |force: bool| {
        let mut cmd = rsg();
        cmd.args(base_args("export_csv"))
            .args(["export", "--file", &out, "--period", "2025-01"]);
        if force {
            cmd.arg("--force");
        }
        cmd.assert()
    };

    run(false).success();
    assert!(fs::read_to_string(&out).expect("day rows").starts_with("date,weekday,role"));
    assert!(fs::read_to_string(&staff_out).expect("staff rows").contains("A,Alice,closer,Acme"));

    run(false).failure().stderr(contains("already exists"));
    run(true).success();
}

#[test]
fn test_init_and_config_check() {
    let config = temp_out("init_config", "conf");

    rsg()
        .args(["--config", &config, "init"])
        .assert()
        .success()
        .stdout(contains("Config file"));

    rsg()
        .args(["--config", &config, "init"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    rsg()
        .args(["--config", &config, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration file is complete"));

    fs::write(&config, "default_actor: desk\n").expect("rewrite config");
    rsg()
        .args(["--config", &config, "config", "--check", "--print"])
        .assert()
        .success()
        .stdout(contains("Missing field: weekend_days"))
        .stdout(contains("default_actor: desk"));
}
