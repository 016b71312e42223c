use thiserror::Error;

/// Main error type for the gitkit application
#[derive(Error, Debug)]
pub enum GitkitError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Git error: {0}")]
    Git(#[from] GitError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// An external command failed. The reason already carries the
    /// caller-supplied context label, so it is displayed verbatim.
    #[error("{0}")]
    Command(String),

    #[error("Failed to generate commit message: {0}")]
    CommitMessage(String),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error while accessing config: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid configuration format - please check your config.toml syntax: {0}")]
    InvalidConfig(#[from] toml::de::Error),

    #[error("Failed to write configuration: {0}")]
    SerializeConfig(#[from] toml::ser::Error),

    #[error("Missing environment variable: {name}")]
    MissingEnv { name: &'static str },

    #[error("Could not determine home directory - please set HOME environment variable")]
    HomeDirNotFound,
}

/// Git-related errors
#[derive(Error, Debug)]
pub enum GitError {
    #[error("IO error during git operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Not in a git repository - please run this command from within a git repository")]
    RepositoryNotFound,

    #[error("Git command failed: {command}\nOutput: {output}")]
    CommandFailed { command: String, output: String },
}

/// Type alias for Result using `GitkitError`
pub type Result<T> = std::result::Result<T, GitkitError>;

impl GitkitError {
    /// Wraps an already-labelled executor failure reason.
    pub fn command(reason: String) -> Self {
        GitkitError::Command(reason)
    }
}
