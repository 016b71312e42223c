//! End-to-end checks of the binary surface: help output, the configuration
//! guard of `clear-failed-actions` and the git-repository guard of the git
//! workflows. Anything interactive or mutating is covered by the mock-based
//! unit tests instead.

use assert_cmd::Command;
use tempfile::TempDir;

fn gitkit() -> Command {
    Command::cargo_bin("gitkit").unwrap()
}

#[test]
fn help_lists_all_workflows() {
    let output = gitkit().arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for subcommand in [
        "fast-push",
        "hard-clear",
        "update-submodule",
        "clear-failed-actions",
        "set-model",
        "completions",
    ] {
        assert!(stdout.contains(subcommand), "missing {subcommand} in help");
    }
}

#[test]
fn clear_failed_actions_requires_configuration() {
    let output = gitkit()
        .arg("clear-failed-actions")
        .env_remove("GITHUB_ACTIONS_OWNER")
        .env_remove("GITHUB_ACTIONS_REPO")
        .env_remove("GITHUB_TOKEN")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Missing environment variable"));
}

#[test]
fn git_workflows_refuse_to_run_outside_a_repository() {
    let temp_dir = TempDir::new().unwrap();

    let output = gitkit()
        .arg("hard-clear")
        .current_dir(temp_dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Not in a git repository"));
}

#[test]
fn completions_are_generated() {
    let output = gitkit().args(["completions", "bash"]).output().unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("gitkit"));
}
