//! Clear Failed Actions Workflow
//!
//! Deletes failed GitHub Actions workflow runs. Unlike the all-or-nothing
//! git workflows, the delete loop keeps going when a single run cannot be
//! deleted: each item is independent and partial success is acceptable.

use crate::{
    errors::Result,
    github::ActionsClient,
    prompt::{Confirmer, YES_NO, is_affirmative},
    utils::{print_info, print_success, print_warning},
};

/// Runs the failed-run cleanup sequence against `slug` (`owner/repo`,
/// display only).
///
/// Fetches completed runs with a failure conclusion, lists them, confirms,
/// then deletes them one by one. A failed deletion is logged and the loop
/// continues; the final message is printed as long as the loop completes.
///
/// # Errors
/// * If listing the runs fails
/// * If the prompt cannot be read
pub fn clear_failed_actions(
    client: &dyn ActionsClient,
    prompt: &mut dyn Confirmer,
    slug: &str,
) -> Result<()> {
    println!("Fetching completed workflow runs for {slug}...");

    let failed_runs = client.list_failed_runs()?;

    if failed_runs.is_empty() {
        print_info("No failed workflow runs found", "");
        return Ok(());
    }

    println!("Found {} failed workflow run(s):", failed_runs.len());
    for run in &failed_runs {
        println!("- Workflow: {} (ID: {})", run.display_name(), run.id);
        println!("  Started: {}", run.created_at.format("%Y-%m-%d %H:%M:%S UTC"));
        println!("  Branch: {}", run.display_branch());
        println!("  ----------------");
    }

    let answer = prompt.ask(
        "Are you sure you want to delete these failed workflow runs?",
        &YES_NO,
    )?;

    if !is_affirmative(&answer) {
        println!("Action cancelled.");
        return Ok(());
    }

    for run in &failed_runs {
        println!("Attempting to delete workflow run ID: {}...", run.id);

        match client.delete_run(run.id) {
            Ok(()) => println!("Successfully deleted workflow run ID: {}", run.id),
            Err(err) => print_warning(
                &format!("Error deleting workflow run ID: {}", run.id),
                &err.to_string(),
            ),
        }
    }

    print_success("Finished deleting the selected failed workflow runs!", "");

    Ok(())
}
