//! Update Submodule Workflow
//!
//! Shows the current submodule status and, after confirmation, runs
//! `git submodule update --init --recursive`.

use crate::{
    errors::{GitkitError, Result},
    exec::{Runner, argv},
    prompt::{Confirmer, YES_NO, is_affirmative},
    utils::{print_info, print_success},
};

/// Runs the submodule update sequence.
///
/// A repository without submodules ends the run before any prompt.
///
/// # Errors
/// * If the status check or the update command fails
/// * If the prompt cannot be read
pub fn update_submodule(runner: &dyn Runner, prompt: &mut dyn Confirmer) -> Result<()> {
    let status = runner
        .run(
            "git",
            &argv(&["submodule", "status"]),
            "Failed to check submodule status",
        )
        .map_err(GitkitError::command)?;

    if status.trim().is_empty() {
        print_info("No submodules found", "");
        return Ok(());
    }

    println!("Current submodule status:\n{}", status.trim());

    let answer = prompt.ask("Are you sure you want to update the submodule?", &YES_NO)?;

    if !is_affirmative(&answer) {
        println!("Action cancelled.");
        return Ok(());
    }

    runner
        .run(
            "git",
            &argv(&["submodule", "update", "--init", "--recursive"]),
            "Failed to update submodule",
        )
        .map_err(GitkitError::command)?;

    print_success("Successfully updated the submodule!", "");

    Ok(())
}
