//! Command Executor
//!
//! Runs a single external command and normalizes its outcome into a plain
//! `Result`, so callers branch on the error slot instead of catching panics
//! or inspecting `Output` by hand.

use std::process::Command;

/// Outcome of one external command: captured stdout on success, or a
/// human-readable reason string on failure. The reason is always prefixed
/// with the caller-supplied context label.
pub type ExecResult = std::result::Result<String, String>;

/// Executes a prepared command and captures its result.
///
/// On success (exit code zero) the command's standard output is returned as
/// text. On any failure - non-zero exit, spawn error, termination by signal -
/// the error slot holds `"<context>: <detail>"` where the detail is the
/// trimmed standard error, the exit status when stderr is empty, or the
/// spawn error.
///
/// This function never panics and never returns both or neither slot; the
/// `Result` type guarantees exactly one is populated.
///
/// # Examples
///
/// ```no_run
/// use std::process::Command;
/// use gitkit::exec::try_exec;
///
/// match try_exec(
///     Command::new("git").args(["status", "--porcelain"]),
///     "Failed to check git status",
/// ) {
///     Ok(stdout) => println!("{stdout}"),
///     Err(reason) => eprintln!("{reason}"),
/// }
/// ```
pub fn try_exec(command: &mut Command, context: &str) -> ExecResult {
    match command.output() {
        Ok(output) if output.status.success() => {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = if stderr.trim().is_empty() {
                output.status.to_string()
            } else {
                stderr.trim().to_string()
            };

            Err(format!("{context}: {detail}"))
        }
        Err(err) => Err(format!("{context}: {err}")),
    }
}

/// Builds an owned argument vector from literals.
pub fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(ToString::to_string).collect()
}

/// Seam between the workflows and the operating system.
///
/// Workflows run every external command through this trait so tests can
/// assert the exact command sequence with a mock instead of a real
/// repository.
#[cfg_attr(test, mockall::automock)]
pub trait Runner {
    /// Runs `program` with `args`, labelling any failure with `context`.
    fn run(&self, program: &str, args: &[String], context: &str) -> ExecResult;
}

/// Production runner spawning real processes.
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&self, program: &str, args: &[String], context: &str) -> ExecResult {
        try_exec(Command::new(program).args(args), context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_returns_captured_stdout() {
        let result = try_exec(Command::new("echo").arg("hello"), "Failed to echo");

        assert_eq!(result, Ok("hello\n".to_string()));
    }

    #[test]
    fn nonzero_exit_returns_labelled_reason() {
        let result = try_exec(
            Command::new("sh").args(["-c", "echo boom >&2; exit 3"]),
            "Failed to run step",
        );

        let reason = result.unwrap_err();
        assert!(reason.starts_with("Failed to run step: "));
        assert!(reason.contains("boom"));
    }

    #[test]
    fn nonzero_exit_without_stderr_reports_status() {
        let result = try_exec(Command::new("sh").args(["-c", "exit 2"]), "Failed to run step");

        let reason = result.unwrap_err();
        assert!(reason.starts_with("Failed to run step: "));
        assert!(reason.contains("exit status"));
    }

    #[test]
    fn spawn_failure_returns_labelled_reason() {
        let result = try_exec(
            &mut Command::new("definitely-not-a-real-binary-gitkit"),
            "Failed to spawn",
        );

        assert!(result.unwrap_err().starts_with("Failed to spawn: "));
    }

    #[test]
    fn system_runner_delegates_to_try_exec() {
        let result = SystemRunner.run("echo", &argv(&["-n", "ok"]), "Failed to echo");

        assert_eq!(result, Ok("ok".to_string()));
    }

    #[test]
    fn argv_builds_owned_arguments() {
        assert_eq!(argv(&["a", "b"]), vec!["a".to_string(), "b".to_string()]);
        assert!(argv(&[]).is_empty());
    }
}
