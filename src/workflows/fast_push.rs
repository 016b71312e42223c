//! Fast Push Workflow
//!
//! Commits and pushes every pending change with an AI-generated commit
//! message. One configurable workflow covers both the plain and the
//! submodule-aware variant: with submodules enabled, each submodule is
//! added, committed and pushed before the main repository.

use crate::{
    ai::CommitMessageGenerator,
    errors::{GitkitError, Result},
    exec::{Runner, argv},
    prompt::{Confirmer, YES_NO, is_affirmative},
    utils::{print_info, print_success},
};

/// Runs the commit-and-push sequence.
///
/// Phases, terminal on first failure:
/// 1. Inspect: porcelain status (plus submodule statuses when enabled) and
///    the diff. Nothing pending, or a non-empty status with an empty diff,
///    ends the run before any prompt.
/// 2. Generate the commit message from the diff; a generation failure aborts
///    before the user is ever asked anything.
/// 3. Present the message and the `--name-status` file list.
/// 4. Confirm; anything but "yes" cancels with zero mutating commands run.
/// 5. Act: submodule foreach add/commit/push (each tolerating clean
///    submodules), then add, commit, push in the main repository.
///
/// # Errors
/// * If any inspect or mutating command fails
/// * If the commit message cannot be generated
/// * If the prompt cannot be read
pub fn fast_push(
    runner: &dyn Runner,
    prompt: &mut dyn Confirmer,
    generator: &dyn CommitMessageGenerator,
    include_submodules: bool,
) -> Result<()> {
    let status = runner
        .run(
            "git",
            &argv(&["status", "--porcelain"]),
            "Failed to check git status",
        )
        .map_err(GitkitError::command)?;

    let submodule_status = if include_submodules {
        runner
            .run(
                "git",
                &argv(&["submodule", "foreach", "--quiet", "git status --porcelain"]),
                "Failed to check submodules status",
            )
            .map_err(GitkitError::command)?
    } else {
        String::new()
    };

    if status.is_empty() && submodule_status.trim().is_empty() {
        print_info("No changes to commit", "");
        return Ok(());
    }

    let diff = runner
        .run("git", &argv(&["diff"]), "Failed to get git diff")
        .map_err(GitkitError::command)?;

    if diff.is_empty() {
        print_info("No changes detected in git diff", "");
        return Ok(());
    }

    let commit_message = generator.generate(&diff)?;

    let files = runner
        .run(
            "git",
            &argv(&["diff", "--name-status"]),
            "Failed to list files",
        )
        .map_err(GitkitError::command)?;

    println!("Commit message: \"{commit_message}\"");
    println!(
        "The following changes will be committed in the main repo:\n{}",
        files.trim()
    );
    if !submodule_status.trim().is_empty() {
        println!("Submodule changes detected; they will also be processed.");
    }

    let question = if include_submodules {
        "Are you sure you want to commit and push these changes (in main repo and submodules)?"
    } else {
        "Are you sure you want to commit and push these changes?"
    };
    let answer = prompt.ask(question, &YES_NO)?;

    if !is_affirmative(&answer) {
        println!("Action cancelled.");
        return Ok(());
    }

    if include_submodules {
        // `|| true` keeps submodules with nothing to commit from failing
        // the whole foreach invocation.
        println!("Processing submodules...");

        runner
            .run(
                "git",
                &argv(&["submodule", "foreach", "--recursive", "git add . || true"]),
                "Failed to add files in submodules",
            )
            .map_err(GitkitError::command)?;

        let submodule_commit = format!("git commit -m {} || true", shell_quote(&commit_message));
        runner
            .run(
                "git",
                &[
                    "submodule".to_string(),
                    "foreach".to_string(),
                    "--recursive".to_string(),
                    submodule_commit,
                ],
                "Failed to commit changes in submodules",
            )
            .map_err(GitkitError::command)?;

        runner
            .run(
                "git",
                &argv(&["submodule", "foreach", "--recursive", "git push || true"]),
                "Failed to push changes in submodules",
            )
            .map_err(GitkitError::command)?;
    }

    runner
        .run(
            "git",
            &argv(&["add", "."]),
            "Failed to add files in main repository",
        )
        .map_err(GitkitError::command)?;

    runner
        .run(
            "git",
            &[
                "commit".to_string(),
                "-m".to_string(),
                commit_message.clone(),
            ],
            "Failed to commit main repository changes",
        )
        .map_err(GitkitError::command)?;

    runner
        .run(
            "git",
            &argv(&["push"]),
            "Failed to push changes in main repository",
        )
        .map_err(GitkitError::command)?;

    if include_submodules {
        print_success(
            "Successfully added, committed, and pushed changes in main repository and all submodules!",
            "",
        );
    } else {
        print_success("Successfully added, committed, and pushed changes!", "");
    }

    Ok(())
}

/// Quotes a string for use inside a `submodule foreach` shell command line.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
