//! End-to-end CLI tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn arena() -> Command {
    Command::cargo_bin("arena").expect("arena binary")
}

#[test]
fn test_help_lists_subcommands() {
    arena()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("agents"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_init_scaffolds_agent_arena_directory() {
    let dir = tempfile::tempdir().expect("tempdir");

    arena()
        .args(["--project-root"])
        .arg(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains(".agent-arena"));

    assert!(dir.path().join(".agent-arena/config.toml").exists());
    assert!(dir.path().join(".agent-arena/agents/echo.md").exists());
}

#[test]
fn test_init_refuses_second_run_without_force() {
    let dir = tempfile::tempdir().expect("tempdir");

    arena()
        .args(["--project-root"])
        .arg(dir.path())
        .arg("init")
        .assert()
        .success();

    arena()
        .args(["--project-root"])
        .arg(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_agents_lists_scaffolded_echo_agent() {
    let dir = tempfile::tempdir().expect("tempdir");

    arena()
        .args(["--project-root"])
        .arg(dir.path())
        .args(["init", "--minimal"])
        .assert()
        .success();

    arena()
        .args(["--project-root"])
        .arg(dir.path())
        .arg("agents")
        .assert()
        .success()
        .stdout(predicate::str::contains("echo"));
}

#[test]
fn test_agents_json_output_is_config_shaped() {
    let dir = tempfile::tempdir().expect("tempdir");

    arena()
        .args(["--project-root"])
        .arg(dir.path())
        .args(["init", "--minimal"])
        .assert()
        .success();

    let output = arena()
        .args(["--project-root"])
        .arg(dir.path())
        .args(["agents", "--json"])
        .output()
        .expect("run agents --json");
    assert!(output.status.success());

    let listing: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(listing["frameworks"][0]["name"], "echo");
    assert_eq!(listing["frameworks"][0]["agents"][0]["name"], "echo");
    assert!(listing["models"].is_array());
}

#[test]
fn test_agents_without_project_reports_empty() {
    let dir = tempfile::tempdir().expect("tempdir");

    arena()
        .args(["--project-root"])
        .arg(dir.path())
        .arg("agents")
        .assert()
        .success()
        .stdout(predicate::str::contains("No agents discovered"));
}
