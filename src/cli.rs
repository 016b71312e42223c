use std::io;

use clap::{CommandFactory, Parser, Subcommand, command};
use clap_complete::Shell;

use crate::{
    ai::OpenAiGenerator,
    config::Config,
    errors::Result,
    exec::SystemRunner,
    git::{find_git_root, get_top_level_path},
    github::{ActionsConfig, GithubClient},
    prompt::ConfirmPrompt,
    utils::print_success,
    workflows::{clear_failed_actions, fast_push, hard_clear, update_submodule},
};

#[derive(Subcommand)]
enum Commands {
    /// Fast push subcommand
    /// Commit and push all pending changes with an AI-generated commit message.
    #[command(short_flag = 'f', name = "fast-push")]
    FastPush {
        /// Do not commit and push inside submodules
        #[arg(long = "skip-submodules", default_value_t = false)]
        skip_submodules: bool,
    },

    /// Hard clear subcommand
    /// Delete untracked files and hard-reset the working tree.
    #[command(short_flag = 'x', name = "hard-clear")]
    HardClear,

    /// Update submodule subcommand
    /// Run `git submodule update --init --recursive` after confirmation.
    #[command(short_flag = 'u', name = "update-submodule")]
    UpdateSubmodule,

    /// Clear failed actions subcommand
    /// Delete failed GitHub Actions workflow runs for the configured repository.
    #[command(short_flag = 'r', name = "clear-failed-actions")]
    ClearFailedActions,

    /// Set the language model used to generate commit messages
    #[command(name = "set-model")]
    SetModel {
        /// Model name (e.g. "gpt-4o-mini")
        #[arg(value_name = "MODEL")]
        model: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

#[derive(Parser)]
#[command(about = "Interactive helpers for everyday git workflows:\n\
\t- Commit and push everything with an AI-generated commit message.\n\
\t- Hard-reset the working tree.\n\
\t- Update git submodules.\n\
\t- Clear failed GitHub Actions workflow runs.")]
#[command(author = "Tom Planche <tomplanche@proton.me>")]
#[command(help_template = "{about}\nMade by: {author}\n\nUSAGE:\n{usage}\n\n{all-args}\n")]
#[command(name = "gitkit")]
pub struct Cli {
    /// Commands
    #[command(subcommand)]
    command: Commands,

    /// Verbose
    /// Optional 'verbose' argument. Only works if a subcommand is passed.
    /// If passed, it will print more information about the operation.
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

/// # `run`
/// Runs the program.
///
/// ## Errors
/// Returns an error if the selected workflow fails; nothing-to-do states
/// and a declined confirmation are not errors.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::FastPush { skip_submodules } => {
            enter_repository(cli.verbose)?;

            let config = Config::new()?;
            let generator = OpenAiGenerator::from_config(&config)?;
            let mut prompt = ConfirmPrompt::stdio();

            fast_push(&SystemRunner, &mut prompt, &generator, !skip_submodules)
        }
        Commands::HardClear => {
            enter_repository(cli.verbose)?;

            let mut prompt = ConfirmPrompt::stdio();

            hard_clear(&SystemRunner, &mut prompt)
        }
        Commands::UpdateSubmodule => {
            enter_repository(cli.verbose)?;

            let mut prompt = ConfirmPrompt::stdio();

            update_submodule(&SystemRunner, &mut prompt)
        }
        Commands::ClearFailedActions => {
            let config = ActionsConfig::from_env()?;
            let slug = config.slug();
            let client = GithubClient::new(config)?;
            let mut prompt = ConfirmPrompt::stdio();

            clear_failed_actions(&client, &mut prompt, &slug)
        }
        Commands::SetModel { model } => {
            Config::new()?.set_model(&model)?;

            print_success(&format!("Commit message model set to '{model}'"), "");

            Ok(())
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "gitkit", &mut io::stdout());

            Ok(())
        }
    }
}

/// Verifies we are inside a git repository and moves to its top level, so
/// commands like `git add .` cover the whole working tree no matter where
/// the tool was invoked.
fn enter_repository(verbose: bool) -> Result<()> {
    find_git_root()?;

    let top_level = get_top_level_path()?;
    std::env::set_current_dir(&top_level)?;

    if verbose {
        println!("Running in {}", top_level.display());
    }

    Ok(())
}
