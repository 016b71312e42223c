//! Hard Clear Workflow
//!
//! Drops every local change: untracked files are deleted and tracked files
//! reset to HEAD. The untracked files about to disappear are listed before
//! the (irreversible) action is confirmed.

use crate::{
    errors::{GitkitError, Result},
    exec::{Runner, argv},
    prompt::{Confirmer, YES_NO, is_affirmative},
    utils::{format_list, print_info, print_success},
};

/// Runs the clean-and-reset sequence.
///
/// A clean working tree ends the run before any prompt. Otherwise the
/// untracked files are listed, the user confirms, and `git clean -fd`
/// followed by `git reset --hard` is executed; a failure of either step
/// ends the run immediately.
///
/// # Errors
/// * If any inspect or mutating command fails
/// * If the prompt cannot be read
pub fn hard_clear(runner: &dyn Runner, prompt: &mut dyn Confirmer) -> Result<()> {
    let status = runner
        .run(
            "git",
            &argv(&["status", "--porcelain"]),
            "Failed to check git status",
        )
        .map_err(GitkitError::command)?;

    if status.is_empty() {
        print_info("No changes to clear", "");
        return Ok(());
    }

    let untracked = runner
        .run(
            "git",
            &argv(&["ls-files", "--others", "--exclude-standard"]),
            "Failed to list files",
        )
        .map_err(GitkitError::command)?;
    let untracked = untracked.trim();

    if untracked.is_empty() {
        println!("No untracked files to clear");
    } else {
        println!("The following untracked files will be cleared:");
        println!("{}", format_list(&untracked.lines().collect::<Vec<_>>()));
    }

    let answer = prompt.ask(
        "Are you sure you want to clear all changes and untracked files? This action is irreversible.",
        &YES_NO,
    )?;

    if !is_affirmative(&answer) {
        println!("Action cancelled.");
        return Ok(());
    }

    runner
        .run(
            "git",
            &argv(&["clean", "-fd"]),
            "Failed to clean untracked files",
        )
        .map_err(GitkitError::command)?;

    runner
        .run(
            "git",
            &argv(&["reset", "--hard"]),
            "Failed to reset changes",
        )
        .map_err(GitkitError::command)?;

    print_success("Successfully cleared all changes and untracked files!", "");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{exec::MockRunner, prompt::MockConfirmer};
    use mockall::Sequence;

    fn expect_read(runner: &mut MockRunner, expected: &'static [&'static str], out: &str) {
        let want = argv(expected);
        let out = out.to_string();
        runner
            .expect_run()
            .withf(move |program, args, _| program == "git" && args == want.as_slice())
            .times(1)
            .returning(move |_, _, _| Ok(out.clone()));
    }

    #[test]
    fn test_clean_tree_exits_before_prompt() {
        let mut runner = MockRunner::new();
        expect_read(&mut runner, &["status", "--porcelain"], "");

        let mut prompt = MockConfirmer::new();
        prompt.expect_ask().times(0);

        assert!(hard_clear(&runner, &mut prompt).is_ok());
    }

    #[test]
    fn test_decline_runs_no_mutating_command() {
        let mut runner = MockRunner::new();
        expect_read(&mut runner, &["status", "--porcelain"], " M file.txt\n");
        expect_read(
            &mut runner,
            &["ls-files", "--others", "--exclude-standard"],
            "scratch.txt\n",
        );

        let mut prompt = MockConfirmer::new();
        prompt
            .expect_ask()
            .withf(|message, options| message.contains("irreversible") && options == YES_NO)
            .times(1)
            .returning(|_, _| Ok("nope".to_string()));

        assert!(hard_clear(&runner, &mut prompt).is_ok());
    }

    #[test]
    fn test_clean_runs_before_reset() {
        let mut runner = MockRunner::new();
        let mut seq = Sequence::new();

        let steps: [&'static [&'static str]; 4] = [
            &["status", "--porcelain"],
            &["ls-files", "--others", "--exclude-standard"],
            &["clean", "-fd"],
            &["reset", "--hard"],
        ];
        for (index, expected) in steps.into_iter().enumerate() {
            let want = argv(expected);
            let out = if index == 0 { " M file.txt\n" } else { "" };
            runner
                .expect_run()
                .withf(move |program, args, _| program == "git" && args == want.as_slice())
                .times(1)
                .in_sequence(&mut seq)
                .returning(move |_, _, _| Ok(out.to_string()));
        }

        let mut prompt = MockConfirmer::new();
        prompt
            .expect_ask()
            .times(1)
            .returning(|_, _| Ok("yes".to_string()));

        assert!(hard_clear(&runner, &mut prompt).is_ok());
    }

    #[test]
    fn test_clean_failure_stops_before_reset() {
        let mut runner = MockRunner::new();
        expect_read(&mut runner, &["status", "--porcelain"], " M file.txt\n");
        expect_read(
            &mut runner,
            &["ls-files", "--others", "--exclude-standard"],
            "",
        );
        runner
            .expect_run()
            .withf(|_, args, _| args == argv(&["clean", "-fd"]).as_slice())
            .times(1)
            .returning(|_, _, context| Err(format!("{context}: permission denied")));

        let mut prompt = MockConfirmer::new();
        prompt
            .expect_ask()
            .times(1)
            .returning(|_, _| Ok("yes".to_string()));

        let err = hard_clear(&runner, &mut prompt).unwrap_err();
        assert!(
            err.to_string()
                .starts_with("Failed to clean untracked files")
        );
    }
}
